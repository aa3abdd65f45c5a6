//! The hand holder shared by players and the dealer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ScoreError;

/// Target score for a blackjack hand.
pub const TARGET_SCORE: u8 = 21;

const ACE_RANK: u8 = 1;

/// Sums the cards with aces at 11, then demotes one soft ace at a time while
/// the total exceeds 21. Which ace is demoted first does not matter; all aces
/// are interchangeable. Returns the total and whether a soft ace remains.
fn evaluate_cards(cards: &[Card]) -> Result<(u8, bool), ScoreError> {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == ACE_RANK {
            aces += 1;
        }
        value = value.saturating_add(card.score()?);
    }

    while value > TARGET_SCORE && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= TARGET_SCORE;
    Ok((value, is_soft))
}

/// Outcome of dealing a single card into a hand.
///
/// Returned to the caller instead of invoking a callback on the game, so the
/// round state machine alone decides what a bust or an exact 21 means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealOutcome {
    /// The hand is still below 21.
    Normal,
    /// The hand reached exactly 21.
    TwentyOne,
    /// The hand exceeded 21.
    Bust,
}

/// An ordered hand of cards with a visibility policy.
///
/// Players and the dealer share this one type; the dealer's hand is
/// constructed with [`Hand::hidden`] and stays concealed each round until
/// [`Hand::reveal`] is called.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Whether this hand conceals itself at the start of each round.
    conceal: bool,
    /// Whether a concealed hand has been revealed this round.
    revealed: bool,
}

impl Hand {
    /// Creates an empty, always-visible hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            conceal: false,
            revealed: false,
        }
    }

    /// Creates an empty hand that stays hidden until [`Hand::reveal`] is
    /// called. Clearing the hand conceals it again.
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            cards: Vec::new(),
            conceal: true,
            revealed: false,
        }
    }

    /// Appends a card and reports where the new total landed.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidCardFace`] if any card in the hand has an
    /// unrecognized rank.
    pub fn deal(&mut self, card: Card) -> Result<DealOutcome, ScoreError> {
        self.cards.push(card);

        let (value, _) = evaluate_cards(&self.cards)?;
        let outcome = if value > TARGET_SCORE {
            DealOutcome::Bust
        } else if value == TARGET_SCORE {
            DealOutcome::TwentyOne
        } else {
            DealOutcome::Normal
        };
        Ok(outcome)
    }

    /// Calculates the blackjack value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidCardFace`] if any card in the hand has an
    /// unrecognized rank.
    pub fn score(&self) -> Result<u8, ScoreError> {
        Ok(evaluate_cards(&self.cards)?.0)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidCardFace`] if any card in the hand has an
    /// unrecognized rank.
    pub fn is_soft(&self) -> Result<bool, ScoreError> {
        Ok(evaluate_cards(&self.cards)?.1)
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether collaborators may show this hand and its score.
    ///
    /// Always true for hands created with [`Hand::new`].
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        !self.conceal || self.revealed
    }

    /// Reveals a concealed hand for the rest of the round.
    pub const fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Empties the hand for a new round and conceals it again if it carries
    /// the concealment policy.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.revealed = false;
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
