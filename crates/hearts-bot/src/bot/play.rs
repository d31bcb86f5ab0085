use super::{PlayWeights, TrickOutlook, opponent_shows_void};
use hearts_core::game::PolicyContext;
use hearts_core::model::card::Card;
use hearts_core::model::rank::Rank;
use hearts_core::model::suit::Suit;
use hearts_core::rules;
use serde::{Deserialize, Serialize};

/// Per-card score split into the parts that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub capture: i32,
    pub shed: i32,
    pub lead: i32,
    pub shape: i32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i32 {
        self.capture + self.shed + self.lead + self.shape
    }
}

pub struct PlayPlanner;

impl PlayPlanner {
    /// Scores every legal card in offer order.
    pub fn score_all(ctx: &PolicyContext<'_>, weights: &PlayWeights) -> Vec<(Card, ScoreBreakdown)> {
        let outlook = TrickOutlook::from_state(ctx.state);
        ctx.legal
            .iter()
            .map(|&card| (card, score_card(ctx, &outlook, weights, card)))
            .collect()
    }
}

fn score_card(
    ctx: &PolicyContext<'_>,
    outlook: &TrickOutlook,
    weights: &PlayWeights,
    card: Card,
) -> ScoreBreakdown {
    let simplified = ctx.state.simplified();
    let points = rules::card_points(card, simplified) as i32;
    let rank = card.rank.value() as i32;
    let mut breakdown = ScoreBreakdown::default();

    match outlook.lead_suit {
        None => {
            breakdown.lead += rank * weights.lead_rank_mult;
            if opponent_shows_void(ctx.state, ctx.seat, card.suit) {
                breakdown.lead += weights.lead_into_void_penalty;
            }
            if card.is_queen_of_spades() && !simplified {
                breakdown.lead += weights.lead_queen_penalty;
            }
            if card.suit == Suit::Spades
                && card.rank > Rank::Queen
                && ctx.player.hand().contains(Card::QUEEN_OF_SPADES)
                && !simplified
            {
                breakdown.lead += weights.lead_high_spade_penalty;
            }
        }
        Some(lead) if card.suit == lead => {
            if outlook.would_win(card) {
                let table = (outlook.points_on_table as i32) + points;
                if outlook.still_to_play == 0 {
                    breakdown.capture += weights.take_trick_penalty + table * weights.take_points_mult;
                } else {
                    breakdown.capture += rank * weights.provisional_win_rank_mult
                        + table * weights.take_points_mult / 2;
                }
            } else {
                breakdown.capture += weights.duck_bonus;
                breakdown.shed += rank * weights.duck_rank_mult;
            }
        }
        Some(_) => {
            breakdown.shed += points * weights.slough_points_mult + rank * weights.slough_rank_mult;
            if card.is_queen_of_spades() && !simplified {
                breakdown.shed += weights.slough_queen_bonus;
            }
        }
    }

    if ctx.player.hand().count_suit(card.suit) == 1 {
        breakdown.shape += weights.void_creation_bonus;
    }

    breakdown
}
