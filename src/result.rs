//! Round outcome types and the rules that decide them.

use core::fmt;

use serde::Serialize;

use crate::card::Card;
use crate::hand::{BLACKJACK, is_natural, score};

/// Who won the round, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Player wins.
    Win,
    /// Player loses.
    Lose,
    /// Nobody wins.
    Tie,
}

/// Why the round ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeReason {
    /// Player holds a natural the dealer does not match.
    Blackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player finished closer to 21.
    HigherScore,
    /// Dealer finished closer to 21.
    LowerScore,
    /// Equal scores.
    Push,
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// The winner.
    pub kind: OutcomeKind,
    /// The rule that decided it.
    pub reason: OutcomeReason,
    /// The player's final score.
    pub player_value: u8,
    /// The dealer's final score.
    pub dealer_value: u8,
}

impl Outcome {
    /// Returns the result line shown to the player.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self.reason {
            OutcomeReason::Blackjack => "Blackjack, you win",
            OutcomeReason::PlayerBust => "You bust",
            OutcomeReason::DealerBust => "Dealer busts, you win",
            OutcomeReason::HigherScore => "You win",
            OutcomeReason::LowerScore => "You lose",
            OutcomeReason::Push => "Push",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Decides a round from the final player and dealer hands.
///
/// Rules apply in order and the first match wins:
///
/// 1. A player natural beats any dealer hand that does not score 21.
/// 2. A bust player loses.
/// 3. A bust dealer loses.
/// 4. The higher score wins; equal scores push.
///
/// A dealer natural gets no special treatment: against a non-natural 21 it
/// pushes, and against a player natural rule 1 is skipped and it pushes too.
#[must_use]
pub fn evaluate(player: &[Card], dealer: &[Card]) -> Outcome {
    let player_value = score(player);
    let dealer_value = score(dealer);

    let (kind, reason) = if is_natural(player) && dealer_value != BLACKJACK {
        (OutcomeKind::Win, OutcomeReason::Blackjack)
    } else if player_value > BLACKJACK {
        (OutcomeKind::Lose, OutcomeReason::PlayerBust)
    } else if dealer_value > BLACKJACK {
        (OutcomeKind::Win, OutcomeReason::DealerBust)
    } else if player_value > dealer_value {
        (OutcomeKind::Win, OutcomeReason::HigherScore)
    } else if dealer_value > player_value {
        (OutcomeKind::Lose, OutcomeReason::LowerScore)
    } else {
        (OutcomeKind::Tie, OutcomeReason::Push)
    };

    Outcome {
        kind,
        reason,
        player_value,
        dealer_value,
    }
}
