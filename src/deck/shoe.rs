use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::{DeckHandle, DeckService};
use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

struct Shoe {
    decks: u8,
    cards: Vec<Card>,
}

struct ShoeTable {
    rng: ChaCha8Rng,
    shoes: HashMap<DeckHandle, Shoe>,
}

/// An in-process deck service backed by seeded, shuffled shoes.
///
/// Every handle owns its own shoe. When a draw asks for more cards than are
/// left, a freshly shuffled shoe is slipped underneath the remaining cards,
/// so draws never run dry.
///
/// # Example
///
/// ```
/// use bjshoe::deck::{DeckService, ShuffledShoe};
///
/// # tokio_test_block_on(async {
/// let service = ShuffledShoe::new(42);
/// let handle = service.create_shuffled_deck(6).await.unwrap();
/// let cards = service.draw(&handle, 4).await.unwrap();
/// assert_eq!(cards.len(), 4);
/// assert_eq!(service.remaining(&handle), Some(6 * 52 - 4));
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
pub struct ShuffledShoe {
    table: Mutex<ShoeTable>,
}

impl ShuffledShoe {
    /// Creates a service whose shuffles are reproducible from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            table: Mutex::new(ShoeTable {
                rng: ChaCha8Rng::seed_from_u64(seed),
                shoes: HashMap::new(),
            }),
        }
    }

    /// Returns the number of cards left in the shoe behind `handle`.
    pub fn remaining(&self, handle: &DeckHandle) -> Option<usize> {
        self.lock().shoes.get(handle).map(|shoe| shoe.cards.len())
    }

    fn lock(&self) -> MutexGuard<'_, ShoeTable> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates and shuffles a shoe with the specified number of decks.
    fn create_shoe(num_decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    fn unknown(handle: &DeckHandle) -> DeckError {
        DeckError::unavailable(format!("unknown deck {handle}"))
    }
}

#[async_trait]
impl DeckService for ShuffledShoe {
    async fn create_shuffled_deck(&self, deck_count: u8) -> Result<DeckHandle, DeckError> {
        if deck_count == 0 {
            return Err(DeckError::unavailable("deck count must be at least 1"));
        }

        let mut table = self.lock();
        let ShoeTable { rng, shoes } = &mut *table;

        let handle = loop {
            let candidate = DeckHandle::new(format!("{:012x}", rng.random::<u64>() >> 16));
            if !shoes.contains_key(&candidate) {
                break candidate;
            }
        };

        let cards = Self::create_shoe(deck_count, rng);
        debug!(deck = %handle, decks = deck_count, "created shoe");
        shoes.insert(
            handle.clone(),
            Shoe {
                decks: deck_count,
                cards,
            },
        );

        Ok(handle)
    }

    async fn reshuffle(&self, handle: &DeckHandle) -> Result<(), DeckError> {
        let mut table = self.lock();
        let ShoeTable { rng, shoes } = &mut *table;

        let shoe = shoes.get_mut(handle).ok_or_else(|| Self::unknown(handle))?;
        shoe.cards = Self::create_shoe(shoe.decks, rng);
        debug!(deck = %handle, "reshuffled shoe");

        Ok(())
    }

    async fn draw(&self, handle: &DeckHandle, count: usize) -> Result<Vec<Card>, DeckError> {
        let mut table = self.lock();
        let ShoeTable { rng, shoes } = &mut *table;

        let shoe = shoes.get_mut(handle).ok_or_else(|| Self::unknown(handle))?;
        while shoe.cards.len() < count {
            let mut refill = Self::create_shoe(shoe.decks, rng);
            refill.append(&mut shoe.cards);
            shoe.cards = refill;
            debug!(deck = %handle, "replenished shoe");
        }

        // The top of the shoe is the end of the vector.
        let split = shoe.cards.len() - count;
        let mut drawn = shoe.cards.split_off(split);
        drawn.reverse();

        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_on<F: core::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(future)
    }

    #[test]
    fn new_shoe_holds_every_card_of_every_deck() {
        let service = ShuffledShoe::new(7);
        let handle = block_on(service.create_shuffled_deck(2)).unwrap();
        assert_eq!(service.remaining(&handle), Some(2 * DECK_SIZE));

        let drawn = block_on(service.draw(&handle, 2 * DECK_SIZE)).unwrap();
        for suit in Suit::ALL {
            for rank in 1..=13 {
                let copies = drawn
                    .iter()
                    .filter(|card| **card == Card::new(suit, rank))
                    .count();
                assert_eq!(copies, 2);
            }
        }
    }

    #[test]
    fn same_seed_same_order() {
        let first = ShuffledShoe::new(11);
        let second = ShuffledShoe::new(11);

        let a = block_on(first.create_shuffled_deck(1)).unwrap();
        let b = block_on(second.create_shuffled_deck(1)).unwrap();

        assert_eq!(a, b);
        assert_eq!(
            block_on(first.draw(&a, 10)).unwrap(),
            block_on(second.draw(&b, 10)).unwrap()
        );
    }

    #[test]
    fn draws_replenish_past_the_end_of_the_shoe() {
        let service = ShuffledShoe::new(3);
        let handle = block_on(service.create_shuffled_deck(1)).unwrap();

        block_on(service.draw(&handle, DECK_SIZE - 1)).unwrap();
        let drawn = block_on(service.draw(&handle, 4)).unwrap();

        assert_eq!(drawn.len(), 4);
        assert_eq!(service.remaining(&handle), Some(DECK_SIZE - 3));
    }

    #[test]
    fn reshuffle_restores_a_full_shoe() {
        let service = ShuffledShoe::new(5);
        let handle = block_on(service.create_shuffled_deck(6)).unwrap();

        block_on(service.draw(&handle, 30)).unwrap();
        block_on(service.reshuffle(&handle)).unwrap();

        assert_eq!(service.remaining(&handle), Some(6 * DECK_SIZE));
    }

    #[test]
    fn unknown_handles_and_empty_shoes_are_unavailable() {
        let service = ShuffledShoe::new(1);
        let missing = DeckHandle::new("nope");

        assert!(matches!(
            block_on(service.draw(&missing, 1)),
            Err(DeckError::ServiceUnavailable(_))
        ));
        assert!(block_on(service.reshuffle(&missing)).is_err());
        assert!(block_on(service.create_shuffled_deck(0)).is_err());
    }
}
