//! Game configuration options.

use core::time::Duration;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use std::time::Duration;
///
/// use bjshoe::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(8)
///     .with_dealer_draw_delay(Duration::from_millis(250));
/// assert_eq!(options.decks, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks requested for a fresh shoe.
    pub decks: u8,
    /// Pause before each card the dealer draws on their turn.
    pub dealer_draw_delay: Duration,
    /// Pause between the dealer standing and the round settling.
    pub settle_delay: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            dealer_draw_delay: Duration::from_millis(750),
            settle_delay: Duration::from_millis(400),
        }
    }
}

impl GameOptions {
    /// Returns the default options with every pacing delay removed.
    ///
    /// Delays only pace the presentation; outcomes are identical without them.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use bjshoe::GameOptions;
    ///
    /// let options = GameOptions::instant();
    /// assert_eq!(options.dealer_draw_delay, Duration::ZERO);
    /// assert_eq!(options.settle_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub fn instant() -> Self {
        Self::default()
            .with_dealer_draw_delay(Duration::ZERO)
            .with_settle_delay(Duration::ZERO)
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the pause before each dealer draw.
    #[must_use]
    pub const fn with_dealer_draw_delay(mut self, delay: Duration) -> Self {
        self.dealer_draw_delay = delay;
        self
    }

    /// Sets the pause before settlement.
    #[must_use]
    pub const fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
}
