use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};

/// Public game data for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    seat: Seat,
    hand: Hand,
    score: u32,
    plays_out_of_suit: [bool; 4],
}

impl Player {
    pub fn new(seat: Seat, hand: Hand) -> Self {
        Self {
            seat,
            hand,
            score: 0,
            plays_out_of_suit: [false; 4],
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Penalty points taken so far this game.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether this player has ever discarded off-suit on a trick of `suit`.
    pub fn plays_out_of_suit(&self, suit: Suit) -> bool {
        self.plays_out_of_suit[suit.index()]
    }

    pub fn out_of_suit_flags(&self) -> [bool; 4] {
        self.plays_out_of_suit
    }

    pub(crate) fn remove_card(&mut self, card: Card) -> bool {
        self.hand.remove(card)
    }

    pub(crate) fn mark_out_of_suit(&mut self, suit: Suit) {
        self.plays_out_of_suit[suit.index()] = true;
    }

    pub(crate) fn add_points(&mut self, points: u32) {
        self.score += points;
    }
}
