use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::rank::Rank;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::array;

pub const DECK_SIZE: usize = 52;
pub const HAND_SIZE: usize = DECK_SIZE / Seat::COUNT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL.iter().copied() {
            for rank in Rank::ORDERED.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deals thirteen cards to each seat, round-robin starting with North.
    pub fn deal(&self) -> [Hand; 4] {
        array::from_fn(|seat| {
            Hand::with_cards(
                self.cards
                    .iter()
                    .skip(seat)
                    .step_by(Seat::COUNT)
                    .copied()
                    .collect(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Deck, HAND_SIZE};
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let deck = Deck::standard();
        let unique: HashSet<_> = deck.cards().iter().copied().collect();
        assert_eq!(deck.cards().len(), 52);
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn shuffle_with_seed_is_deterministic() {
        assert_eq!(Deck::shuffled_with_seed(42), Deck::shuffled_with_seed(42));
        assert_ne!(Deck::shuffled_with_seed(1), Deck::shuffled_with_seed(2));
    }

    #[test]
    fn deal_splits_the_deck_evenly() {
        let deck = Deck::shuffled_with_seed(7);
        let hands = deck.deal();
        let mut seen = HashSet::new();
        for hand in &hands {
            assert_eq!(hand.len(), HAND_SIZE);
            for card in hand.iter() {
                assert!(seen.insert(*card), "{card} dealt twice");
            }
        }
        assert_eq!(seen.len(), 52);
        assert!(hands[0].contains(deck.cards()[0]));
        assert!(hands[1].contains(deck.cards()[1]));
        assert!(hands[0].contains(deck.cards()[4]));
    }
}
