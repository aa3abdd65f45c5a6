//! Round result types produced when the dealer finishes playing.

extern crate alloc;

use alloc::vec::Vec;

/// How a player's round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOutcome {
    /// The player beat or tied the dealer, or reached 21 outright.
    Won,
    /// The player stayed at 21 or below but fell short of the dealer.
    Lost,
    /// The player's hand exceeded 21.
    Busted,
}

/// Result for a single player after the dealer has played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: u8,
    /// The player's final hand value.
    pub score: u8,
    /// The outcome of the player's round.
    pub outcome: PlayerOutcome,
    /// The player's total win count, including this round.
    pub wins: u32,
}

/// Result of the entire round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_score: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
