use crate::card::Card;
use crate::error::RoundError;
use crate::hand::DealOutcome;

use super::{Game, RoundPhase};

impl Game {
    fn ensure_acting(&self, player_id: u8) -> Result<usize, RoundError> {
        if self.phase != RoundPhase::Acting {
            return Err(RoundError::InvalidState);
        }

        self.players
            .iter()
            .position(|p| p.id() == player_id)
            .ok_or(RoundError::PlayerNotFound)
    }

    /// Player command: Hit (draw one card).
    ///
    /// Returns the drawn card, or `None` if the player is already standing
    /// (hitting a standing player is a safe no-op). A card that busts the
    /// hand or brings it to exactly 21 forces the player to stand; when that
    /// leaves every player standing, the dealer plays and the round resolves
    /// before this call returns.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] outside the acting phase,
    /// [`RoundError::PlayerNotFound`] for an unknown ID,
    /// [`RoundError::Draw`] if the deck is exhausted, or
    /// [`RoundError::Score`] if a stacked deck contains an invalid card.
    pub fn hit(&mut self, player_id: u8) -> Result<Option<Card>, RoundError> {
        let index = self.ensure_acting(player_id)?;

        if self.is_standing(player_id) {
            return Ok(None);
        }

        let card = self.draw_card()?;
        let outcome = self.players[index].hand.deal(card)?;

        match outcome {
            DealOutcome::Bust => self.record_bust(player_id),
            DealOutcome::TwentyOne => self.record_auto_win(player_id),
            DealOutcome::Normal => {}
        }

        if self.all_standing() {
            self.play_dealer()?;
        }

        Ok(Some(card))
    }

    /// Player command: Stand (stop acting for this round).
    ///
    /// Idempotent; standing twice is a safe no-op. When every player is
    /// standing, the dealer plays and the round resolves before this call
    /// returns.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] outside the acting phase,
    /// [`RoundError::PlayerNotFound`] for an unknown ID, or a draw/score
    /// error surfaced by the dealer's turn.
    pub fn stand(&mut self, player_id: u8) -> Result<(), RoundError> {
        self.ensure_acting(player_id)?;

        self.mark_standing(player_id);

        if self.all_standing() {
            self.play_dealer()?;
        }

        Ok(())
    }

    /// Adds the player to the standing set, without duplicates.
    pub(super) fn mark_standing(&mut self, player_id: u8) {
        if !self.standing.contains(&player_id) {
            self.standing.push(player_id);
        }
    }

    /// Busting forces the player out of the acting rotation.
    pub(super) fn record_bust(&mut self, player_id: u8) {
        self.mark_standing(player_id);
        if !self.busted.contains(&player_id) {
            self.busted.push(player_id);
        }
    }

    /// An exact 21 wins outright, pre-empting the dealer comparison, and
    /// forces the player out of the acting rotation.
    pub(super) fn record_auto_win(&mut self, player_id: u8) {
        self.mark_standing(player_id);
        if !self.winners.contains(&player_id) {
            self.winners.push(player_id);
        }
    }
}
