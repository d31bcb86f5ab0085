use crate::game::player::Player;
use crate::game::state::GameState;
use crate::model::card::Card;
use crate::model::seat::Seat;
use serde::{Deserialize, Serialize};

/// A candidate move proposed by a policy.
///
/// `trace` is never inspected by the engine; it travels unchanged into the
/// seat's history and comes back with the feedback for that decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSummary<T> {
    pub card: Card,
    pub quality: f64,
    pub trace: T,
}

impl<T> ActionSummary<T> {
    pub fn new(card: Card, quality: f64, trace: T) -> Self {
        Self {
            card,
            quality,
            trace,
        }
    }
}

/// Everything a policy may look at when asked for a decision.
#[derive(Debug, Clone, Copy)]
pub struct PolicyContext<'a> {
    pub seat: Seat,
    pub state: &'a GameState,
    pub player: &'a Player,
    /// Legal plays for `seat`; never empty.
    pub legal: &'a [Card],
}

impl<'a> PolicyContext<'a> {
    pub fn new(state: &'a GameState, seat: Seat, legal: &'a [Card]) -> Self {
        Self {
            seat,
            state,
            player: state.player(seat),
            legal,
        }
    }

    pub fn is_leading(&self) -> bool {
        self.state.trick().is_empty()
    }
}

/// Decision function plugged into a seat.
pub trait Policy<T> {
    /// Returns one or more candidates drawn from `ctx.legal`.
    fn evaluate(&mut self, ctx: &PolicyContext<'_>) -> Vec<ActionSummary<T>>;
}

/// Policy backed by a closure; see [`from_fn`].
pub struct FnPolicy<F>(F);

/// Wraps a closure as a [`Policy`].
pub fn from_fn<T, F>(f: F) -> FnPolicy<F>
where
    F: FnMut(&PolicyContext<'_>) -> Vec<ActionSummary<T>>,
{
    FnPolicy(f)
}

impl<T, F> Policy<T> for FnPolicy<F>
where
    F: FnMut(&PolicyContext<'_>) -> Vec<ActionSummary<T>>,
{
    fn evaluate(&mut self, ctx: &PolicyContext<'_>) -> Vec<ActionSummary<T>> {
        (self.0)(ctx)
    }
}

/// Picks the candidate with the strictly highest quality; on ties the
/// earliest one wins.
pub fn select_action<T>(candidates: Vec<ActionSummary<T>>) -> Option<ActionSummary<T>> {
    let mut best: Option<ActionSummary<T>> = None;
    for candidate in candidates {
        let replace = match &best {
            None => true,
            // NaN never beats a real number, but a real number beats NaN.
            Some(current) => {
                candidate.quality > current.quality
                    || (current.quality.is_nan() && !candidate.quality.is_nan())
            }
        };
        if replace {
            best = Some(candidate);
        }
    }
    best
}
