use core::time::Duration;

use tracing::{debug, info};

use crate::deck::DeckService;
use crate::error::DeckError;
use crate::result::evaluate;

use super::{Game, Phase, Presenter, Status};

/// The dealer draws below this score and stands on it or above, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

impl<D: DeckService, P: Presenter> Game<D, P> {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer turns up the hidden card and draws, pausing before each
    /// card, until reaching 17 or higher. Soft 17 stands. A bust simply ends
    /// the drawing; the round is decided afterwards.
    pub(super) async fn dealer_turn(&mut self) -> Result<(), DeckError> {
        self.dealer.reveal();
        self.transition(Phase::DealerTurn, Status::DealerTurn);

        while self.dealer.value() < DEALER_STANDS_ON {
            pause(self.options.dealer_draw_delay).await;

            let card = match self.draw_one().await {
                Ok(card) => card,
                Err(err) => return Err(self.abort_round(err)),
            };
            self.dealer.add_card(card);
            debug!(%card, value = self.dealer.value(), "dealer drew");
            self.publish();
        }

        pause(self.options.settle_delay).await;
        self.settle();

        Ok(())
    }

    /// Decides the round from the final hands.
    pub(super) fn settle(&mut self) {
        let outcome = evaluate(self.player.cards(), self.dealer.cards());
        info!(
            kind = ?outcome.kind,
            reason = ?outcome.reason,
            player = outcome.player_value,
            dealer = outcome.dealer_value,
            "round settled"
        );

        self.outcome = Some(outcome);
        self.transition(Phase::Settled, Status::Settled);
    }
}
