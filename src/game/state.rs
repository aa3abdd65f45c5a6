//! Round state types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting for player hit/stand commands.
    Acting,
    /// Dealer plays out their hand.
    DealerTurn,
    /// The round has been resolved; a new round may start.
    Resolved,
}
