mod params;
mod play;

pub use params::PlayWeights;
pub use play::{PlayPlanner, ScoreBreakdown};

use hearts_core::game::GameState;
use hearts_core::model::card::Card;
use hearts_core::model::seat::Seat;
use hearts_core::model::suit::Suit;
use hearts_core::rules;

/// What the table looks like from the seat about to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrickOutlook {
    pub lead_suit: Option<Suit>,
    /// Highest card of the lead suit played so far.
    pub winning_card: Option<Card>,
    /// Points already on the table.
    pub points_on_table: u32,
    /// Seats that still play after this one.
    pub still_to_play: usize,
}

impl TrickOutlook {
    pub fn from_state(state: &GameState) -> Self {
        let trick = state.trick();
        Self {
            lead_suit: trick.suit(),
            winning_card: rules::trick_winner(trick),
            points_on_table: rules::trick_points(trick, state.simplified()),
            still_to_play: Seat::COUNT.saturating_sub(trick.len() + 1),
        }
    }

    pub fn is_leading(&self) -> bool {
        self.lead_suit.is_none()
    }

    /// Whether `card` would currently be the best card of the trick.
    pub fn would_win(&self, card: Card) -> bool {
        match (self.lead_suit, self.winning_card) {
            (None, _) => true,
            (Some(lead), Some(best)) => card.suit == lead && card.rank > best.rank,
            (Some(lead), None) => card.suit == lead,
        }
    }
}

/// Whether any opponent of `seat` has publicly discarded on `suit`.
pub fn opponent_shows_void(state: &GameState, seat: Seat, suit: Suit) -> bool {
    state
        .players()
        .iter()
        .any(|player| player.seat() != seat && player.plays_out_of_suit(suit))
}
