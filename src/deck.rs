//! Draw/discard pile management, including the infinite "magic" deck.

extern crate alloc;

use alloc::vec::Vec;
use core::mem;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, RANK_COUNT, SUITS};
use crate::error::DrawError;
use crate::rng::random_integer_up_to;

/// A deck built from zero or more physical 52-card decks.
///
/// A deck constructed with zero physical decks is a *magic* deck: it never
/// holds any cards and instead generates a fresh random card on every draw.
/// The mode is fixed at construction.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards available to draw; the back of the pile is the next draw.
    draw_pile: Vec<Card>,
    /// Cards already drawn this shuffle.
    discard_pile: Vec<Card>,
    /// Whether this is a magic (infinite-supply) deck.
    magic: bool,
}

impl Deck {
    /// Creates a deck from `deck_count` physical decks, unshuffled.
    ///
    /// A `deck_count` of zero yields a magic deck.
    #[must_use]
    pub fn new(deck_count: usize) -> Self {
        let mut draw_pile = Vec::with_capacity(deck_count * DECK_SIZE);
        for _ in 0..deck_count {
            for suit in SUITS {
                for rank in 1..=RANK_COUNT {
                    draw_pile.push(Card::new(suit, rank));
                }
            }
        }

        Self {
            draw_pile,
            discard_pile: Vec::new(),
            magic: deck_count == 0,
        }
    }

    /// Creates a non-magic deck with a fixed draw pile.
    ///
    /// The back of `draw_pile` is the next card drawn. Intended for tests and
    /// demos that need a controlled card sequence.
    #[must_use]
    pub fn stacked(draw_pile: Vec<Card>) -> Self {
        Self {
            draw_pile,
            discard_pile: Vec::new(),
            magic: false,
        }
    }

    /// Returns whether this is a magic (infinite-supply) deck.
    #[must_use]
    pub const fn is_magic(&self) -> bool {
        self.magic
    }

    /// Shuffles the deck by merging the draw and discard piles and building a
    /// new draw pile one uniformly random card at a time.
    ///
    /// No-op for magic decks.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.magic {
            return;
        }

        let mut pool = mem::take(&mut self.draw_pile);
        pool.append(&mut self.discard_pile);

        let mut shuffled = Vec::with_capacity(pool.len());
        while !pool.is_empty() {
            let index = random_integer_up_to(rng, pool.len());
            shuffled.push(pool.swap_remove(index));
        }

        self.draw_pile = shuffled;
    }

    /// Draws the next card.
    ///
    /// A magic deck returns a freshly generated random card and tracks
    /// nothing. A non-magic deck pops the back of the draw pile onto the
    /// discard pile and returns the card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if a non-magic draw pile is
    /// empty. Exhaustion is not recovered implicitly; see
    /// [`Game::reshuffle`](crate::game::Game::reshuffle).
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, DrawError> {
        if self.magic {
            return Ok(Card::random(rng));
        }

        let card = self.draw_pile.pop().ok_or(DrawError::DeckExhausted)?;
        self.discard_pile.push(card);
        Ok(card)
    }

    /// Returns the number of cards left in the draw pile.
    ///
    /// Always zero for magic decks, whose supply is unlimited.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discard_pile.len()
    }

    /// Returns the total number of cards across both piles.
    #[must_use]
    pub fn size(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }
}
