//! Game engine and round state management.

use tracing::warn;

use crate::deck::{DeckHandle, DeckService};
use crate::error::DeckError;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::Outcome;

mod actions;
mod dealer;
pub mod snapshot;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use snapshot::{Presenter, Snapshot, Status};
pub use state::Phase;

/// A blackjack table for one player against an automated dealer.
///
/// The game owns the deck service, the deck handle, both hands, and the
/// round phase. All mutation goes through its async actions, which take
/// `&mut self`, so only one request to the deck service is ever in flight
/// and no action can interleave with the dealer's turn. Every state
/// transition is pushed to the [`Presenter`].
pub struct Game<D, P = ()> {
    /// Deck service the cards come from.
    service: D,
    /// Receives a snapshot after every transition.
    presenter: P,
    /// Game options.
    options: GameOptions,
    /// Handle of the shoe in use, if one was acquired.
    deck: Option<DeckHandle>,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: DealerHand,
    /// Current phase.
    phase: Phase,
    /// Current status line.
    status: Status,
    /// Outcome of the settled round.
    outcome: Option<Outcome>,
}

impl<D: DeckService> Game<D> {
    /// Creates a game that renders nowhere.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::{Game, GameOptions, Phase};
    /// use bjshoe::deck::ShuffledShoe;
    ///
    /// let game = Game::new(ShuffledShoe::new(42), GameOptions::default());
    /// assert_eq!(game.phase(), Phase::Idle);
    /// ```
    #[must_use]
    pub const fn new(service: D, options: GameOptions) -> Self {
        Self::with_presenter(service, options, ())
    }
}

impl<D: DeckService, P: Presenter> Game<D, P> {
    /// Creates a game that pushes every transition to `presenter`.
    #[must_use]
    pub const fn with_presenter(service: D, options: GameOptions, presenter: P) -> Self {
        Self {
            service,
            presenter,
            options,
            deck: None,
            player: Hand::new(),
            dealer: DealerHand::new(),
            phase: Phase::Idle,
            status: Status::Idle,
            outcome: None,
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current status line.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns whether the player may hit or stand.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.phase, Phase::PlayerTurn)
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the outcome of the last settled round.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the handle of the shoe in use.
    #[must_use]
    pub const fn deck_handle(&self) -> Option<&DeckHandle> {
        self.deck.as_ref()
    }

    /// Returns the deck service.
    #[must_use]
    pub const fn service(&self) -> &D {
        &self.service
    }

    /// Returns the presenter.
    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the presenter mutably.
    #[must_use]
    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Takes a snapshot of the table as it stands.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player.cards().to_vec(),
            dealer: self.dealer.visible_cards(),
            dealer_hidden: self.dealer.is_hidden(),
            phase: self.phase,
            status: self.status,
            outcome: self.outcome,
            player_score: self.player.value(),
            dealer_score: self.dealer.visible_value(),
        }
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.presenter.render(&snapshot);
    }

    fn transition(&mut self, phase: Phase, status: Status) {
        self.phase = phase;
        self.status = status;
        self.publish();
    }

    /// Clears both hands and the outcome.
    fn clear_round(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.outcome = None;
    }

    /// Abandons the round after a deck failure.
    ///
    /// The handle is dropped so the next round asks for a fresh shoe.
    fn abort_round(&mut self, err: DeckError) -> DeckError {
        warn!(error = %err, phase = ?self.phase, "round aborted");
        self.deck = None;
        self.clear_round();
        self.transition(Phase::Idle, Status::ConnectionError);
        err
    }
}
