//! Round state machine and table management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DrawError, RoundError};
use crate::hand::{DealOutcome, Hand};
use crate::options::GameOptions;
use crate::result::RoundResult;

mod actions;
mod dealer;
pub mod state;

pub use state::RoundPhase;

/// A seated player: an ID, a hand, and a running win count.
///
/// Players persist for the lifetime of the game; only the hand is cleared
/// between rounds.
#[derive(Debug, Clone)]
pub struct Player {
    /// Table-scoped ID, assigned monotonically and never reused.
    id: u8,
    /// The player's hand, always visible.
    pub hand: Hand,
    /// Rounds won so far.
    wins: u32,
}

impl Player {
    const fn new(id: u8) -> Self {
        Self {
            id,
            hand: Hand::new(),
            wins: 0,
        }
    }

    /// Returns the player's ID.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the number of rounds this player has won.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Records a round win. Called exactly once per round won.
    pub(crate) const fn record_win(&mut self) {
        self.wins += 1;
    }
}

/// A blackjack table: players, dealer, deck, and the round state machine.
///
/// All state transitions happen inside discrete commands ([`Game::new_round`],
/// [`Game::hit`], [`Game::stand`]) on a single owner; there is no interior
/// mutability. Each command leaves the machine in a deterministic next state,
/// and collaborators observe it through the accessors afterwards.
#[derive(Debug)]
pub struct Game {
    /// The deck cards are drawn from. Public so tests and demos can stack it.
    pub deck: Deck,
    /// Seated players, in seat order.
    players: Vec<Player>,
    /// The dealer's hand, concealed until the dealer's turn.
    dealer: Hand,
    /// Current round phase.
    phase: RoundPhase,
    /// Players who have stopped acting this round.
    standing: Vec<u8>,
    /// Players whose hands exceeded 21 this round.
    busted: Vec<u8>,
    /// Players who won this round. Set semantics; no duplicates.
    winners: Vec<u8>,
    /// Next player ID to assign, scoped to this table.
    next_id: u8,
    /// Result of the most recently resolved round.
    result: Option<RoundResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new table with the given options and RNG seed.
    ///
    /// At least one seat is always created, and the deck is shuffled once.
    /// The game starts in the [`RoundPhase::Resolved`] phase, so
    /// [`Game::new_round`] is immediately legal.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// game.new_round().unwrap();
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new(options.decks as usize);
        deck.shuffle(&mut rng);

        let seat_count = options.players.max(1);
        let mut players = Vec::with_capacity(seat_count as usize);
        for id in 0..seat_count {
            players.push(Player::new(id));
        }

        Self {
            deck,
            players,
            dealer: Hand::hidden(),
            phase: RoundPhase::Resolved,
            standing: Vec::new(),
            busted: Vec::new(),
            winners: Vec::new(),
            next_id: seat_count,
            result: None,
            rng,
        }
    }

    /// Seats a new player between rounds and returns their ID.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] while a round is in progress, or
    /// [`RoundError::TableFull`] once the ID counter is spent. IDs are never
    /// reused, so a full table stays full.
    pub fn add_player(&mut self) -> Result<u8, RoundError> {
        if self.phase != RoundPhase::Resolved {
            return Err(RoundError::InvalidState);
        }

        let id = self.next_id;
        self.next_id = self.next_id.checked_add(1).ok_or(RoundError::TableFull)?;
        self.players.push(Player::new(id));
        Ok(id)
    }

    /// Reshuffles the discard pile back into the draw pile between rounds.
    ///
    /// This is the explicit recovery path for a deck running low; drawing
    /// from an exhausted deck mid-round fails instead of reshuffling
    /// implicitly.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] while a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), RoundError> {
        if self.phase != RoundPhase::Resolved {
            return Err(RoundError::InvalidState);
        }

        self.deck.shuffle(&mut self.rng);
        Ok(())
    }

    /// Starts a new round: clears per-round state, deals two cards to every
    /// player and the dealer, and opens the acting phase.
    ///
    /// A player dealt an exact 21 wins outright and stands immediately. If
    /// every player is dealt a natural, the dealer plays right away and the
    /// round resolves before this call returns.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] while a round is in progress,
    /// [`RoundError::Draw`] if the deck holds too few cards for the deal, or
    /// [`RoundError::Score`] if a stacked deck contains an invalid card.
    pub fn new_round(&mut self) -> Result<(), RoundError> {
        if self.phase != RoundPhase::Resolved {
            return Err(RoundError::InvalidState);
        }

        // Refuse up front rather than failing with a half-dealt table.
        let cards_needed = (self.players.len() + 1) * 2;
        if !self.deck.is_magic() && self.deck.cards_remaining() < cards_needed {
            return Err(DrawError::DeckExhausted.into());
        }

        self.standing.clear();
        self.busted.clear();
        self.winners.clear();
        self.result = None;
        self.dealer.clear();
        for player in &mut self.players {
            player.hand.clear();
        }

        self.phase = RoundPhase::Dealing;

        let dealt = self.deal_initial_cards();
        if dealt.is_err() {
            // Abandon the half-dealt round; the table stays recoverable.
            self.phase = RoundPhase::Resolved;
        }
        dealt
    }

    /// Two passes: one card per player in seat order, then the dealer.
    fn deal_initial_cards(&mut self) -> Result<(), RoundError> {
        for _ in 0..2 {
            for index in 0..self.players.len() {
                let card = self.deck.draw(&mut self.rng)?;
                let id = self.players[index].id;
                let outcome = self.players[index].hand.deal(card)?;
                if outcome == DealOutcome::TwentyOne {
                    self.record_auto_win(id);
                }
            }

            let card = self.deck.draw(&mut self.rng)?;
            let _ = self.dealer.deal(card)?;
        }

        self.phase = RoundPhase::Acting;

        if self.all_standing() {
            self.play_dealer()?;
        }

        Ok(())
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the seated players, in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given ID.
    #[must_use]
    pub fn player(&self, player_id: u8) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Returns the dealer's hand.
    ///
    /// Collaborators must render the hand and score as hidden while
    /// [`Hand::is_revealed`] is false.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the players who have stopped acting this round.
    #[must_use]
    pub fn standing(&self) -> &[u8] {
        &self.standing
    }

    /// Returns the players who busted this round.
    #[must_use]
    pub fn busted(&self) -> &[u8] {
        &self.busted
    }

    /// Returns the players who have won this round so far.
    #[must_use]
    pub fn winners(&self) -> &[u8] {
        &self.winners
    }

    /// Returns whether the given player has stopped acting this round.
    #[must_use]
    pub fn is_standing(&self, player_id: u8) -> bool {
        self.standing.contains(&player_id)
    }

    /// Returns whether every seated player has stopped acting.
    ///
    /// Input collaborators enable the new-round command on this condition.
    #[must_use]
    pub fn all_standing(&self) -> bool {
        self.players.iter().all(|p| self.standing.contains(&p.id))
    }

    /// Returns the result of the most recently resolved round.
    #[must_use]
    pub const fn round_result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    pub(crate) fn draw_card(&mut self) -> Result<Card, RoundError> {
        Ok(self.deck.draw(&mut self.rng)?)
    }
}
