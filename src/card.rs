//! Card types and per-card scoring.

use core::fmt;

use rand::Rng;

use crate::error::ScoreError;
use crate::rng::{random_integer, random_integer_up_to};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
        };
        f.write_str(name)
    }
}

/// All four suits, in the order a fresh deck is built.
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

/// Number of recognized ranks.
pub const RANK_COUNT: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted; scoring such a card fails with
    /// [`ScoreError::InvalidCardFace`].
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the blackjack point value of this card.
    ///
    /// Aces score 11 here; demoting an ace to 1 is a hand-level concern, see
    /// [`Hand::score`](crate::hand::Hand::score).
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidCardFace`] if the rank is outside 1..=13.
    pub const fn score(&self) -> Result<u8, ScoreError> {
        match self.rank {
            1 => Ok(11),
            2..=10 => Ok(self.rank),
            11..=13 => Ok(10),
            rank => Err(ScoreError::InvalidCardFace(rank)),
        }
    }

    /// Returns the face name of this card, or `None` for an unrecognized rank.
    #[must_use]
    pub const fn face_name(&self) -> Option<&'static str> {
        let name = match self.rank {
            1 => "Ace",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "Jack",
            12 => "Queen",
            13 => "King",
            _ => return None,
        };
        Some(name)
    }

    /// Generates a random card with independently uniform suit and rank.
    ///
    /// Faces and suits carry no semantic weight, so this is uniform over the
    /// 52 combinations. Used by the magic deck to create cards on demand.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let suit = SUITS[random_integer_up_to(rng, SUITS.len())];
        let rank = random_integer(rng, 1, RANK_COUNT);
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face_name() {
            Some(name) => write!(f, "{} of {}", name, self.suit),
            None => write!(f, "rank {} of {}", self.rank, self.suit),
        }
    }
}
