use tracing::{debug, info};

use crate::card::Card;
use crate::deck::{DeckHandle, DeckService};
use crate::error::DeckError;
use crate::hand::BLACKJACK;

use super::{Game, Phase, Presenter, Status};

/// Cards drawn to open a round.
const OPENING_DRAW: usize = 4;

impl<D: DeckService, P: Presenter> Game<D, P> {
    /// Starts a new round.
    ///
    /// Reshuffles the current shoe, or requests a fresh one if there is none,
    /// then draws four cards. The player receives the first and third, the
    /// dealer the second and fourth with the second face down. A player
    /// natural skips straight to the dealer's turn.
    ///
    /// Does nothing unless the game is idle or settled.
    ///
    /// # Errors
    ///
    /// Returns the deck service error if the shoe cannot be prepared or dealt
    /// from. The game is then back to [`Phase::Idle`] with no hands and no
    /// deck handle.
    pub async fn start_round(&mut self) -> Result<Phase, DeckError> {
        if !self.phase.can_start_round() {
            debug!(phase = ?self.phase, "start_round ignored");
            return Ok(self.phase);
        }

        self.clear_round();
        self.transition(Phase::Dealing, Status::Shuffling);

        let [p1, d1, p2, d2] = match self.deal_opening().await {
            Ok(cards) => cards,
            Err(err) => return Err(self.abort_round(err)),
        };

        self.player.add_card(p1);
        self.dealer.add_card(d1);
        self.player.add_card(p2);
        self.dealer.add_card(d2);
        info!(
            deck = ?self.deck,
            player = self.player.value(),
            "round started"
        );

        if self.player.value() == BLACKJACK {
            self.phase = Phase::PlayerTurn;
            self.dealer_turn().await?;
        } else {
            self.transition(Phase::PlayerTurn, Status::AwaitingAction);
        }

        Ok(self.phase)
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 settles the round at once with the dealer hand turned up
    /// as dealt. Reaching exactly 21 hands over to the dealer.
    ///
    /// Does nothing outside [`Phase::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns the deck service error if the draw fails; the round is then
    /// abandoned as in [`start_round`](Self::start_round).
    pub async fn hit(&mut self) -> Result<Phase, DeckError> {
        if self.phase != Phase::PlayerTurn {
            debug!(phase = ?self.phase, "hit ignored");
            return Ok(self.phase);
        }

        self.transition(Phase::PlayerTurn, Status::DrawingCard);
        let card = match self.draw_one().await {
            Ok(card) => card,
            Err(err) => return Err(self.abort_round(err)),
        };

        self.player.add_card(card);
        let value = self.player.value();
        debug!(%card, value, "player drew");

        if value > BLACKJACK {
            self.dealer.reveal();
            self.settle();
        } else if value == BLACKJACK {
            self.dealer_turn().await?;
        } else {
            self.transition(Phase::PlayerTurn, Status::AwaitingAction);
        }

        Ok(self.phase)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Plays the dealer's turn to completion and settles the round.
    ///
    /// Does nothing outside [`Phase::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns the deck service error if a dealer draw fails; the round is
    /// then abandoned as in [`start_round`](Self::start_round).
    pub async fn stand(&mut self) -> Result<Phase, DeckError> {
        if self.phase != Phase::PlayerTurn {
            debug!(phase = ?self.phase, "stand ignored");
            return Ok(self.phase);
        }

        debug!(value = self.player.value(), "player stands");
        self.dealer_turn().await?;

        Ok(self.phase)
    }

    async fn deal_opening(&mut self) -> Result<[Card; OPENING_DRAW], DeckError> {
        let handle = self.acquire_deck().await?;
        self.transition(Phase::Dealing, Status::Dealing);

        let cards = self.service.draw(&handle, OPENING_DRAW).await?;
        <[Card; OPENING_DRAW]>::try_from(cards)
            .map_err(|cards| short_draw(OPENING_DRAW, cards.len()))
    }

    /// Reshuffles the held shoe, or requests a new one.
    ///
    /// The handle is only kept once the service has accepted it.
    async fn acquire_deck(&mut self) -> Result<DeckHandle, DeckError> {
        let handle = match self.deck.take() {
            Some(handle) => {
                self.service.reshuffle(&handle).await?;
                debug!(deck = %handle, "reshuffled");
                handle
            }
            None => {
                let handle = self.service.create_shuffled_deck(self.options.decks).await?;
                debug!(deck = %handle, decks = self.options.decks, "new shoe");
                handle
            }
        };

        self.deck = Some(handle.clone());
        Ok(handle)
    }

    pub(super) async fn draw_one(&mut self) -> Result<Card, DeckError> {
        let handle = self
            .deck
            .as_ref()
            .ok_or_else(|| DeckError::unavailable("no deck in play"))?;

        let cards = self.service.draw(handle, 1).await?;
        let [card] =
            <[Card; 1]>::try_from(cards).map_err(|cards| short_draw(1, cards.len()))?;
        Ok(card)
    }
}

fn short_draw(expected: usize, got: usize) -> DeckError {
    DeckError::unavailable(format!("asked for {expected} cards, got {got}"))
}
