//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when scoring cards or hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The card's rank is outside the 13 recognized faces.
    #[error("rank {0} is not a recognized card face")]
    InvalidCardFace(u8),
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The draw pile of a non-magic deck is empty.
    #[error("the draw pile is exhausted")]
    DeckExhausted,
}

/// Errors that can occur when driving the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The command is not legal in the current round phase.
    #[error("invalid round phase for this command")]
    InvalidState,
    /// No player with the given ID is seated at this table.
    #[error("player not found")]
    PlayerNotFound,
    /// Every player ID has been handed out; no seat can be added.
    #[error("no player IDs left to assign")]
    TableFull,
    /// A card could not be drawn.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// A hand could not be scored.
    #[error(transparent)]
    Score(#[from] ScoreError),
}
