//! Round phase types.

use serde::Serialize;

/// Where the round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No round is in progress.
    #[default]
    Idle,
    /// Acquiring a shoe and dealing the opening cards.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and its outcome is recorded.
    Settled,
}

impl Phase {
    /// Returns whether a new round may start from this phase.
    #[must_use]
    pub const fn can_start_round(self) -> bool {
        matches!(self, Self::Idle | Self::Settled)
    }
}
