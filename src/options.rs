//! Game configuration options.

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(3)
///     .with_decks(2);
/// ```
///
/// The dealer's stand threshold is a fixed house rule and is intentionally
/// not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of seats at the table. At least one seat is always created.
    pub players: u8,
    /// Number of physical 52-card decks. Zero selects the magic
    /// (infinite-supply) deck.
    pub decks: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 1,
            decks: 0,
        }
    }
}

impl GameOptions {
    /// Sets the number of seats.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the number of physical decks. Zero selects the magic deck.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }
}
