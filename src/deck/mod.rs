//! The shuffled-deck service the game draws from.
//!
//! A [`DeckService`] hands out opaque [`DeckHandle`]s bound to a shuffled
//! multi-deck shoe. The game only ever holds one handle, reshuffles it between
//! rounds, and issues one request at a time.
//!
//! Two implementations ship with the crate: [`ShuffledShoe`] keeps the shoe
//! in process, and `HttpDeckService` (feature `http`) talks to a deck API
//! over HTTP.

use core::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::DeckError;

#[cfg(feature = "http")]
mod http;
mod shoe;
pub mod wire;

#[cfg(feature = "http")]
pub use http::{DEFAULT_BASE_URL, HttpDeckOptions, HttpDeckService};
pub use shoe::ShuffledShoe;

/// Opaque identifier of a shuffled shoe held by a deck service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckHandle(String);

impl DeckHandle {
    /// Wraps a service-issued identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as issued by the service.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A source of shuffled shoes.
///
/// Draws are treated as infinite: a service replenishes a shoe on its own, and
/// card uniqueness within a shoe is its responsibility.
#[async_trait]
pub trait DeckService: Send + Sync {
    /// Requests a fresh shoe of `deck_count` shuffled decks.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::ServiceUnavailable`] if the shoe cannot be created.
    async fn create_shuffled_deck(&self, deck_count: u8) -> Result<DeckHandle, DeckError>;

    /// Returns every card to the shoe and shuffles it. The handle stays valid
    /// only if this succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::ServiceUnavailable`] if the shoe cannot be reshuffled.
    async fn reshuffle(&self, handle: &DeckHandle) -> Result<(), DeckError>;

    /// Draws `count` cards from the top of the shoe, in order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::ServiceUnavailable`] if the draw fails.
    async fn draw(&self, handle: &DeckHandle, count: usize) -> Result<Vec<Card>, DeckError>;
}

#[async_trait]
impl<S: DeckService + ?Sized> DeckService for std::sync::Arc<S> {
    async fn create_shuffled_deck(&self, deck_count: u8) -> Result<DeckHandle, DeckError> {
        (**self).create_shuffled_deck(deck_count).await
    }

    async fn reshuffle(&self, handle: &DeckHandle) -> Result<(), DeckError> {
        (**self).reshuffle(handle).await
    }

    async fn draw(&self, handle: &DeckHandle, count: usize) -> Result<Vec<Card>, DeckError> {
        (**self).draw(handle, count).await
    }
}

#[async_trait]
impl<S: DeckService + ?Sized> DeckService for Box<S> {
    async fn create_shuffled_deck(&self, deck_count: u8) -> Result<DeckHandle, DeckError> {
        (**self).create_shuffled_deck(deck_count).await
    }

    async fn reshuffle(&self, handle: &DeckHandle) -> Result<(), DeckError> {
        (**self).reshuffle(handle).await
    }

    async fn draw(&self, handle: &DeckHandle, count: usize) -> Result<Vec<Card>, DeckError> {
        (**self).draw(handle, count).await
    }
}
