//! Hand scoring and the player and dealer hands.

use serde::Serialize;

use crate::card::{Card, JACK, KING};

/// Best score a hand can reach without busting.
pub const BLACKJACK: u8 = 21;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        JACK..=KING => 10,
        _ => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += u32::from(card_value(card.rank));
    }

    while value > u32::from(BLACKJACK) && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= u32::from(BLACKJACK);
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// Scores a sequence of cards.
///
/// Aces count as 11 and drop to 1, one at a time, while the total exceeds 21.
/// The result is the highest total not above 21, or the all-aces-low total
/// when the hand is bust, capped at 255. Card order never changes the result
/// and an empty hand scores 0.
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether at least one ace is still valued at 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether the cards form a natural (two cards scoring 21).
#[must_use]
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == BLACKJACK
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is a natural.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// The first card is dealt face down and stays hidden until [`reveal`] is
/// called. Scoring always covers every card; hiding only affects what
/// [`visible_value`] and [`visible_cards`] report.
///
/// [`reveal`]: DealerHand::reveal
/// [`visible_value`]: DealerHand::visible_value
/// [`visible_cards`]: DealerHand::visible_cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealerHand {
    cards: Vec<Card>,
    hidden: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand with its first card hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hidden: true,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand, including the hidden one.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards as presentation may show them: `None` for the face-down card.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<Option<Card>> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (!(self.hidden && i == 0)).then_some(*card))
            .collect()
    }

    /// Returns whether the first card is still face down.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Turns the first card face up.
    pub const fn reveal(&mut self) {
        self.hidden = false;
    }

    /// Calculates the value shown to the player, or `None` while a card is hidden.
    #[must_use]
    pub fn visible_value(&self) -> Option<u8> {
        (!self.hidden).then(|| self.value())
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is a natural.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round and hides the next first card.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hidden = true;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{ACE, QUEEN, Suit};

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(Suit::Spades, r)).collect()
    }

    #[test]
    fn empty_hand_scores_zero() {
        assert_eq!(score(&[]), 0);
        assert!(!is_soft(&[]));
    }

    #[test]
    fn court_cards_count_ten() {
        assert_eq!(score(&cards(&[JACK, QUEEN])), 20);
        assert_eq!(score(&cards(&[KING, 5, 3])), 18);
    }

    #[test]
    fn aces_drop_to_one_only_when_needed() {
        assert_eq!(score(&cards(&[ACE, 6])), 17);
        assert!(is_soft(&cards(&[ACE, 6])));

        assert_eq!(score(&cards(&[ACE, 6, 10])), 17);
        assert!(!is_soft(&cards(&[ACE, 6, 10])));

        assert_eq!(score(&cards(&[ACE, ACE])), 12);
        assert_eq!(score(&cards(&[ACE, ACE, ACE, ACE, 7])), 21);
        assert_eq!(score(&cards(&[KING, QUEEN, ACE, ACE])), 22);
    }

    #[test]
    fn long_hands_keep_their_true_total() {
        assert_eq!(score(&cards(&[ACE; 24])), 24);
        assert_eq!(score(&cards(&[ACE; 30])), 30);
        assert_eq!(score(&cards(&[KING; 30])), u8::MAX);
    }

    #[test]
    fn natural_needs_exactly_two_cards() {
        assert!(is_natural(&cards(&[ACE, KING])));
        assert!(!is_natural(&cards(&[7, 7, 7])));
        assert!(!is_natural(&cards(&[10, 9])));
    }

    #[test]
    fn dealer_hides_first_card_only() {
        let mut dealer = DealerHand::new();
        dealer.add_card(Card::new(Suit::Hearts, ACE));
        dealer.add_card(Card::new(Suit::Clubs, 6));

        assert!(dealer.is_hidden());
        assert_eq!(dealer.visible_value(), None);
        assert_eq!(
            dealer.visible_cards(),
            vec![None, Some(Card::new(Suit::Clubs, 6))]
        );
        assert_eq!(dealer.value(), 17);

        dealer.reveal();
        assert_eq!(dealer.visible_value(), Some(17));
        assert!(dealer.visible_cards().iter().all(Option::is_some));

        dealer.clear();
        assert!(dealer.is_empty());
        assert!(dealer.is_hidden());
    }
}
