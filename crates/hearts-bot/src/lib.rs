pub mod bot;
pub mod policy;

pub use bot::{PlayWeights, TrickOutlook};
pub use policy::{Agent, AgentKind, AgentTrace, HeuristicPolicy, HeuristicTrace, RandomPolicy};
