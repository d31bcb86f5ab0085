mod heuristic;
mod random;

pub use heuristic::{HeuristicPolicy, HeuristicTrace};
pub use random::RandomPolicy;

use crate::bot::PlayWeights;
use hearts_core::game::{ActionSummary, Policy, PolicyContext};
use serde::{Deserialize, Serialize};

/// Policy families a seat can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Heuristic,
    Random,
}

impl AgentKind {
    pub fn label(self) -> &'static str {
        match self {
            AgentKind::Heuristic => "heuristic",
            AgentKind::Random => "random",
        }
    }
}

/// Trace emitted by an [`Agent`], tagged by the family that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentTrace {
    Heuristic(HeuristicTrace),
    Random,
}

/// Either reference policy behind one trace type, so mixed tables can share
/// a single `Policy<AgentTrace>` seat array.
#[derive(Debug, Clone)]
pub enum Agent {
    Heuristic(HeuristicPolicy),
    Random(RandomPolicy),
}

impl Agent {
    /// `seed` only matters for random seats.
    pub fn new(kind: AgentKind, seed: u64) -> Self {
        match kind {
            AgentKind::Heuristic => Agent::Heuristic(HeuristicPolicy::new(PlayWeights::default())),
            AgentKind::Random => Agent::Random(RandomPolicy::seeded(seed)),
        }
    }

    pub fn kind(&self) -> AgentKind {
        match self {
            Agent::Heuristic(_) => AgentKind::Heuristic,
            Agent::Random(_) => AgentKind::Random,
        }
    }
}

impl Policy<AgentTrace> for Agent {
    fn evaluate(&mut self, ctx: &PolicyContext<'_>) -> Vec<ActionSummary<AgentTrace>> {
        match self {
            Agent::Heuristic(policy) => policy
                .evaluate(ctx)
                .into_iter()
                .map(|s| ActionSummary::new(s.card, s.quality, AgentTrace::Heuristic(s.trace)))
                .collect(),
            Agent::Random(policy) => policy
                .evaluate(ctx)
                .into_iter()
                .map(|s| ActionSummary::new(s.card, s.quality, AgentTrace::Random))
                .collect(),
        }
    }
}
