use alloc::vec::Vec;

use crate::error::RoundError;
use crate::hand::TARGET_SCORE;
use crate::result::{PlayerOutcome, PlayerResult, RoundResult};

use super::{Game, RoundPhase};

/// The house draws until reaching this score. A fixed table rule; note this
/// is 18, not the casino-standard 17, and there is no soft-17 exception.
const DEALER_STAND_SCORE: u8 = 18;

impl Game {
    /// Plays out the dealer's hand and resolves the round.
    ///
    /// Reveals the dealer's hand, draws while the dealer's score is below 18,
    /// then determines the winners: every non-busted player if the dealer
    /// busts, otherwise every player whose score is in
    /// `[dealer_score, 21]`. Players who already won with an exact 21 keep
    /// their win; the winner set never holds a player twice, and each
    /// winner's win count goes up by exactly one.
    ///
    /// If the deck runs out while the dealer must draw, the round is
    /// abandoned: the error propagates and the table returns to
    /// [`RoundPhase::Resolved`] so it can be reshuffled and redealt.
    pub(super) fn play_dealer(&mut self) -> Result<(), RoundError> {
        self.phase = RoundPhase::DealerTurn;

        let outcome = self.finish_dealer_hand();
        if outcome.is_err() {
            // Abort the round instead of wedging the phase: after a failed
            // dealer draw the table must still accept reshuffle and new_round.
            self.phase = RoundPhase::Resolved;
        }
        outcome
    }

    fn finish_dealer_hand(&mut self) -> Result<(), RoundError> {
        self.dealer.reveal();

        while self.dealer.score()? < DEALER_STAND_SCORE {
            let card = self.draw_card()?;
            let _ = self.dealer.deal(card)?;
        }

        let dealer_score = self.dealer.score()?;
        let dealer_bust = dealer_score > TARGET_SCORE;

        let mut round_winners: Vec<u8> = Vec::new();
        for player in &self.players {
            let score = player.hand.score()?;
            let beats_dealer = if dealer_bust {
                score <= TARGET_SCORE
            } else {
                (dealer_score..=TARGET_SCORE).contains(&score)
            };
            if beats_dealer {
                round_winners.push(player.id());
            }
        }

        // Natural-21 winners are already present; never hold a player twice.
        for player_id in round_winners {
            if !self.winners.contains(&player_id) {
                self.winners.push(player_id);
            }
        }

        let winner_ids = self.winners.clone();
        for player in &mut self.players {
            if winner_ids.contains(&player.id()) {
                player.record_win();
            }
        }

        let mut player_results = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let outcome = if self.winners.contains(&player.id()) {
                PlayerOutcome::Won
            } else if self.busted.contains(&player.id()) {
                PlayerOutcome::Busted
            } else {
                PlayerOutcome::Lost
            };

            player_results.push(PlayerResult {
                player_id: player.id(),
                score: player.hand.score()?,
                outcome,
                wins: player.wins(),
            });
        }

        self.result = Some(RoundResult {
            players: player_results,
            dealer_score,
            dealer_bust,
        });
        self.phase = RoundPhase::Resolved;

        Ok(())
    }
}
