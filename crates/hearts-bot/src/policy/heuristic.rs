use crate::bot::{PlayPlanner, PlayWeights, ScoreBreakdown};
use hearts_core::game::{ActionSummary, Policy, PolicyContext};
use hearts_core::model::card::Card;
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

/// Raw scores map onto quality through `tanh(total / QUALITY_SCALE)`.
const QUALITY_SCALE: f64 = 2000.0;

/// Score components behind one candidate, carried through to feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeuristicTrace {
    pub total: i32,
    pub capture: i32,
    pub shed: i32,
    pub lead: i32,
    pub shape: i32,
}

impl From<ScoreBreakdown> for HeuristicTrace {
    fn from(breakdown: ScoreBreakdown) -> Self {
        Self {
            total: breakdown.total(),
            capture: breakdown.capture,
            shed: breakdown.shed,
            lead: breakdown.lead,
            shape: breakdown.shape,
        }
    }
}

/// Rule-of-thumb player: ducks pointed tricks, sheds danger cards when void,
/// leads low and away from suits an opponent has shown out of.
#[derive(Debug, Clone, Default)]
pub struct HeuristicPolicy {
    weights: PlayWeights,
}

impl HeuristicPolicy {
    pub fn new(weights: PlayWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &PlayWeights {
        &self.weights
    }
}

impl Policy<HeuristicTrace> for HeuristicPolicy {
    fn evaluate(&mut self, ctx: &PolicyContext<'_>) -> Vec<ActionSummary<HeuristicTrace>> {
        let candidates: Vec<ActionSummary<HeuristicTrace>> =
            PlayPlanner::score_all(ctx, &self.weights)
                .into_iter()
                .map(|(card, breakdown)| {
                    let trace = HeuristicTrace::from(breakdown);
                    ActionSummary::new(card, quality_of(trace.total), trace)
                })
                .collect();
        log_play_scores(ctx, &candidates);
        candidates
    }
}

pub(crate) fn quality_of(total: i32) -> f64 {
    (f64::from(total) / QUALITY_SCALE).tanh()
}

fn log_play_scores(ctx: &PolicyContext<'_>, candidates: &[ActionSummary<HeuristicTrace>]) {
    if !tracing::enabled!(target: "hearts_bot::play", Level::DEBUG) {
        return;
    }

    let best: Option<Card> = candidates
        .iter()
        .max_by_key(|candidate| candidate.trace.total)
        .map(|candidate| candidate.card);
    let preview = if candidates.len() <= 6 {
        candidates
            .iter()
            .map(|candidate| format!("{}={}", candidate.card, candidate.trace.total))
            .collect::<Vec<_>>()
            .join(",")
    } else {
        format!("{} moves", candidates.len())
    };

    event!(
        target: "hearts_bot::play",
        Level::DEBUG,
        seat = %ctx.seat,
        legal_count = ctx.legal.len(),
        scores = %preview,
        best = ?best,
        hearts_broken = ctx.state.hearts_broken(),
        trick_cards = ctx.state.trick().len(),
    );
}
