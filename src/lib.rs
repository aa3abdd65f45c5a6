//! A single-table blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! dealing, player hit/stand commands, dealer auto-play, and win/bust
//! resolution. Rendering and input are left to the caller, which observes
//! the table through accessors and per-command return values.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let mut game = Game::new(options, 42);
//! game.new_round().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod rng;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{DrawError, RoundError, ScoreError};
pub use game::{Game, Player, RoundPhase};
pub use hand::{DealOutcome, Hand, TARGET_SCORE};
pub use options::GameOptions;
pub use result::{PlayerOutcome, PlayerResult, RoundResult};
