//! What the game shows to whoever renders it.

use core::fmt;

use serde::Serialize;

use super::Phase;
use crate::card::Card;
use crate::result::Outcome;

/// Status line describing what the game is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Nothing has happened yet.
    #[default]
    Idle,
    /// Waiting for the service to prepare the shoe.
    Shuffling,
    /// Waiting for the opening cards.
    Dealing,
    /// The player may hit or stand.
    AwaitingAction,
    /// Waiting for the card the player asked for.
    DrawingCard,
    /// The dealer is playing.
    DealerTurn,
    /// The last request to the deck service failed.
    ConnectionError,
    /// The round is over; the outcome carries the result line.
    Settled,
}

impl Status {
    /// Returns the status line shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Idle | Self::Settled => "",
            Self::Shuffling => "Shuffling...",
            Self::Dealing => "Dealing...",
            Self::AwaitingAction => "Hit or stand",
            Self::DrawingCard => "Drawing card...",
            Self::DealerTurn => "Dealer's turn...",
            Self::ConnectionError => "Connection error, try again.",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Everything needed to draw the table, taken after a state transition.
///
/// Scores are precomputed so that a renderer never needs the rules. While the
/// dealer's first card is face down, `dealer_score` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Player cards in deal order.
    pub player: Vec<Card>,
    /// Dealer cards in deal order, `None` for the face-down one.
    pub dealer: Vec<Option<Card>>,
    /// Whether the dealer's first card is face down.
    pub dealer_hidden: bool,
    /// Current phase.
    pub phase: Phase,
    /// Current status line.
    pub status: Status,
    /// The result, once the round has settled.
    pub outcome: Option<Outcome>,
    /// The player's score.
    pub player_score: u8,
    /// The dealer's score, once it may be shown.
    pub dealer_score: Option<u8>,
}

/// Receives a [`Snapshot`] after every state transition.
pub trait Presenter {
    /// Renders the table.
    fn render(&mut self, snapshot: &Snapshot);
}

/// Renders nothing.
impl Presenter for () {
    fn render(&mut self, _snapshot: &Snapshot) {}
}

/// Records every snapshot in order.
impl Presenter for Vec<Snapshot> {
    fn render(&mut self, snapshot: &Snapshot) {
        self.push(snapshot.clone());
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn render(&mut self, snapshot: &Snapshot) {
        (**self).render(snapshot);
    }
}
