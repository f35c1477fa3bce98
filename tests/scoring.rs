//! Property tests for hand scoring.

use bjshoe::{BLACKJACK, Card, Suit, score};
use proptest::prelude::*;

fn card_with_rank(ranks: core::ops::RangeInclusive<u8>) -> impl Strategy<Value = Card> {
    (prop::sample::select(Suit::ALL.to_vec()), ranks)
        .prop_map(|(suit, rank)| Card::new(suit, rank))
}

fn any_card() -> impl Strategy<Value = Card> {
    card_with_rank(1..=13)
}

fn base_value(card: &Card) -> u32 {
    match card.rank {
        1 => 11,
        rank @ 2..=10 => u32::from(rank),
        _ => 10,
    }
}

/// Best total over every way of counting each ace as 11 or 1.
fn brute_force(cards: &[Card]) -> u32 {
    let low: u32 = cards
        .iter()
        .map(|c| if c.is_ace() { 1 } else { base_value(c) })
        .sum();
    let aces = cards.iter().filter(|c| c.is_ace()).count() as u32;

    (0..=aces)
        .map(|high| low + high * 10)
        .filter(|&total| total <= u32::from(BLACKJACK))
        .max()
        .unwrap_or(low)
}

proptest! {
    #[test]
    fn matches_best_ace_assignment(cards in prop::collection::vec(any_card(), 0..12)) {
        prop_assert_eq!(u32::from(score(&cards)), brute_force(&cards));
    }

    #[test]
    fn long_hands_match_best_ace_assignment(cards in prop::collection::vec(any_card(), 20..40)) {
        let expected = brute_force(&cards).min(u32::from(u8::MAX));
        prop_assert_eq!(u32::from(score(&cards)), expected);
    }

    #[test]
    fn order_does_not_matter(cards in prop::collection::vec(any_card(), 0..12)) {
        let mut reversed = cards.clone();
        reversed.reverse();
        let mut sorted = cards.clone();
        sorted.sort_by_key(|c| c.rank);

        prop_assert_eq!(score(&cards), score(&reversed));
        prop_assert_eq!(score(&cards), score(&sorted));
    }

    #[test]
    fn scoring_is_idempotent(cards in prop::collection::vec(any_card(), 0..12)) {
        prop_assert_eq!(score(&cards), score(&cards));
    }

    #[test]
    fn hands_without_aces_sum_face_values(
        cards in prop::collection::vec(card_with_rank(2..=13), 0..12)
    ) {
        let total: u32 = cards.iter().map(base_value).sum();
        prop_assert_eq!(u32::from(score(&cards)), total);
    }
}
