//! A blackjack round engine played against a shuffled-deck service.
//!
//! The crate provides a [`Game`] type that runs one round at a time: it
//! acquires a shoe from a [`DeckService`](deck::DeckService), deals, takes the
//! player's hits and stands, plays the dealer out, and settles the round with
//! [`evaluate`]. Every transition is pushed to a [`Presenter`] as a
//! [`Snapshot`].
//!
//! # Example
//!
//! ```no_run
//! use bjshoe::deck::ShuffledShoe;
//! use bjshoe::{Game, GameOptions, Phase};
//!
//! # async fn play() -> Result<(), bjshoe::DeckError> {
//! let mut game = Game::new(ShuffledShoe::new(42), GameOptions::instant());
//! if game.start_round().await? == Phase::PlayerTurn {
//!     game.stand().await?;
//! }
//! println!("{:?}", game.outcome());
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::DeckError;
pub use game::{DEALER_STANDS_ON, Game, Phase, Presenter, Snapshot, Status};
pub use hand::{BLACKJACK, DealerHand, Hand, score};
pub use options::GameOptions;
pub use result::{Outcome, OutcomeKind, OutcomeReason, evaluate};
