use core::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::wire::{DeckResponse, DrawResponse};
use super::{DeckHandle, DeckService};
use crate::card::Card;
use crate::error::DeckError;

/// Default location of the public deck API.
pub const DEFAULT_BASE_URL: &str = "https://deckofcardsapi.com/api/deck";

/// Connection settings for [`HttpDeckService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpDeckOptions {
    /// Base URL of the deck API, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl Default for HttpDeckOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl HttpDeckOptions {
    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// A deck service reached over HTTP.
pub struct HttpDeckService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDeckService {
    /// Builds a client for the API described by `options`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::ServiceUnavailable`] if the HTTP client cannot be built.
    pub fn new(options: HttpDeckOptions) -> Result<Self, DeckError> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(DeckError::unavailable)?;

        Ok(Self {
            client,
            base_url: options.base_url,
        })
    }

    async fn get<T: DeserializeOwned>(&self, url: String) -> Result<T, DeckError> {
        debug!(%url, "deck request");
        self.client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(DeckError::unavailable)?
            .json::<T>()
            .await
            .map_err(DeckError::unavailable)
    }
}

#[async_trait]
impl DeckService for HttpDeckService {
    async fn create_shuffled_deck(&self, deck_count: u8) -> Result<DeckHandle, DeckError> {
        let url = format!("{}/new/shuffle/?deck_count={deck_count}", self.base_url);
        self.get::<DeckResponse>(url).await?.into_handle()
    }

    async fn reshuffle(&self, handle: &DeckHandle) -> Result<(), DeckError> {
        let url = format!("{}/{handle}/shuffle/", self.base_url);
        self.get::<DeckResponse>(url).await?.into_handle().map(drop)
    }

    async fn draw(&self, handle: &DeckHandle, count: usize) -> Result<Vec<Card>, DeckError> {
        let url = format!("{}/{handle}/draw/?count={count}", self.base_url);
        self.get::<DrawResponse>(url).await?.into_cards(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slash() {
        let options = HttpDeckOptions::default().with_base_url("http://localhost:8000/api/deck/");
        assert_eq!(options.base_url, "http://localhost:8000/api/deck");
        assert!(HttpDeckService::new(options).is_ok());
    }
}
