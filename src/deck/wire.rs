//! JSON shapes spoken by the public deck API (deckofcardsapi.com).

use serde::Deserialize;

use super::DeckHandle;
use crate::card::{ACE, Card, JACK, KING, QUEEN, Suit};
use crate::error::DeckError;

/// Response to creating or reshuffling a deck.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeckResponse {
    /// Whether the request succeeded.
    pub success: bool,
    /// Identifier of the shoe.
    pub deck_id: String,
    /// Cards left in the shoe.
    #[serde(default)]
    pub remaining: usize,
    /// Whether the shoe is shuffled.
    #[serde(default)]
    pub shuffled: bool,
}

impl DeckResponse {
    /// Returns the deck handle, or an error if the service reported a failure.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::ServiceUnavailable`] when `success` is false.
    pub fn into_handle(self) -> Result<DeckHandle, DeckError> {
        if !self.success {
            return Err(DeckError::unavailable(format!(
                "deck service rejected request for deck {}",
                self.deck_id
            )));
        }
        Ok(DeckHandle::new(self.deck_id))
    }
}

/// A card as the deck API encodes it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireCard {
    /// Two-character code such as `"KH"` or `"0S"`.
    #[serde(default)]
    pub code: String,
    /// `"2"`..`"10"`, `"JACK"`, `"QUEEN"`, `"KING"` or `"ACE"`.
    pub value: String,
    /// `"SPADES"`, `"HEARTS"`, `"DIAMONDS"` or `"CLUBS"`.
    pub suit: String,
}

impl TryFrom<WireCard> for Card {
    type Error = DeckError;

    fn try_from(card: WireCard) -> Result<Self, Self::Error> {
        let rank = match card.value.as_str() {
            "ACE" => ACE,
            "JACK" => JACK,
            "QUEEN" => QUEEN,
            "KING" => KING,
            value => match value.parse::<u8>() {
                Ok(rank @ 2..=10) => rank,
                _ => return Err(DeckError::unavailable(format!("unknown card value {value:?}"))),
            },
        };

        let suit = match card.suit.as_str() {
            "SPADES" => Suit::Spades,
            "HEARTS" => Suit::Hearts,
            "DIAMONDS" => Suit::Diamonds,
            "CLUBS" => Suit::Clubs,
            suit => return Err(DeckError::unavailable(format!("unknown card suit {suit:?}"))),
        };

        Ok(Self::new(suit, rank))
    }
}

/// Response to a draw request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DrawResponse {
    /// Whether the request succeeded.
    pub success: bool,
    /// Identifier of the shoe drawn from.
    #[serde(default)]
    pub deck_id: String,
    /// Drawn cards, top of the shoe first.
    #[serde(default)]
    pub cards: Vec<WireCard>,
    /// Cards left in the shoe.
    #[serde(default)]
    pub remaining: usize,
}

impl DrawResponse {
    /// Converts the drawn cards, checking that exactly `expected` arrived.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::ServiceUnavailable`] when the service reported a
    /// failure, returned the wrong number of cards, or sent a card it cannot
    /// decode.
    pub fn into_cards(self, expected: usize) -> Result<Vec<Card>, DeckError> {
        if !self.success {
            return Err(DeckError::unavailable("deck service rejected draw"));
        }
        if self.cards.len() != expected {
            return Err(DeckError::unavailable(format!(
                "asked for {expected} cards, got {}",
                self.cards.len()
            )));
        }
        self.cards.into_iter().map(Card::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_new_deck_response() {
        let body = r#"{
            "success": true, "deck_id": "3p40paa87x90", "shuffled": true, "remaining": 312
        }"#;
        let response: DeckResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.remaining, 312);
        assert_eq!(response.into_handle().unwrap().as_str(), "3p40paa87x90");
    }

    #[test]
    fn failed_deck_response_is_unavailable() {
        let body = r#"{"success": false, "deck_id": "gone"}"#;
        let response: DeckResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_handle().is_err());
    }

    #[test]
    fn parses_draw_response() {
        let body = r#"{
            "success": true,
            "deck_id": "kxozasf3edqu",
            "cards": [
                {
                    "code": "KH",
                    "image": "https://deckofcardsapi.com/static/img/KH.png",
                    "value": "KING",
                    "suit": "HEARTS"
                },
                {"code": "0S", "value": "10", "suit": "SPADES"},
                {"code": "AD", "value": "ACE", "suit": "DIAMONDS"}
            ],
            "remaining": 49
        }"#;
        let response: DrawResponse = serde_json::from_str(body).unwrap();
        let cards = response.into_cards(3).unwrap();

        assert_eq!(
            cards,
            vec![
                Card::new(Suit::Hearts, KING),
                Card::new(Suit::Spades, 10),
                Card::new(Suit::Diamonds, ACE),
            ]
        );
    }

    #[test]
    fn short_draw_is_unavailable() {
        let body = r#"{
            "success": true, "cards": [{"value": "2", "suit": "CLUBS"}], "remaining": 0
        }"#;
        let response: DrawResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(
            response.into_cards(4),
            Err(DeckError::ServiceUnavailable(_))
        ));
    }

    #[test]
    fn unknown_values_are_rejected() {
        let card = WireCard {
            code: "XX".to_owned(),
            value: "JOKER".to_owned(),
            suit: "CLUBS".to_owned(),
        };
        assert!(Card::try_from(card).is_err());

        let card = WireCard {
            code: "1C".to_owned(),
            value: "1".to_owned(),
            suit: "CLUBS".to_owned(),
        };
        assert!(Card::try_from(card).is_err());
    }
}
