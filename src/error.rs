//! Error types for deck service operations.

use thiserror::Error;

/// Errors raised by a [`DeckService`](crate::deck::DeckService).
///
/// Every failure to obtain, reshuffle, or draw from a shoe collapses into
/// [`DeckError::ServiceUnavailable`]. The game recovers from it by resetting
/// to idle, so the user retries by starting a new round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The service could not be reached or answered with a failure.
    #[error("deck service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl DeckError {
    /// Builds a [`DeckError::ServiceUnavailable`] from any displayable cause.
    pub fn unavailable(cause: impl ToString) -> Self {
        Self::ServiceUnavailable(cause.to_string())
    }
}
