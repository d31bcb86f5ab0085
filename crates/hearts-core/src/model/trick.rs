use crate::model::card::Card;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};

/// Cards played to the table this trick, in play order.
///
/// The trick does not know who led it; seats are recovered from the
/// leader kept on `GameState` (`leader.offset(position)`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    suit: Option<Suit>,
    cards: Vec<Card>,
}

impl Trick {
    pub fn new() -> Self {
        Self {
            suit: None,
            cards: Vec::with_capacity(Seat::COUNT),
        }
    }

    /// Builds a trick from cards already on the table; the first card sets the suit.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            suit: cards.first().map(|card| card.suit),
            cards,
        }
    }

    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == Seat::COUNT
    }

    pub fn position_of(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    pub(crate) fn push(&mut self, card: Card) {
        if self.suit.is_none() {
            self.suit = Some(card.suit);
        }
        self.cards.push(card);
    }
}
