use super::state::GameState;
use crate::history::record::History;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Self-describing wrapper used when a game position or a sealed history is
/// written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateSnapshot {
    pub format_version: u32,
    pub state: GameState,
}

impl StateSnapshot {
    pub const FORMAT_VERSION: u32 = 1;

    pub fn capture(state: &GameState) -> Self {
        Self {
            format_version: Self::FORMAT_VERSION,
            state: state.clone(),
        }
    }

    pub fn restore(self) -> GameState {
        self.state
    }

    pub fn to_json(state: &GameState) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::capture(state))
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

pub fn history_to_json<T: Serialize>(history: &History<T>) -> serde_json::Result<String> {
    serde_json::to_string(history)
}

pub fn history_from_json<T: DeserializeOwned>(json: &str) -> serde_json::Result<History<T>> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::driver::opening_state;
    use crate::history::record::Recorder;
    use crate::model::card::Card;
    use crate::model::deck::Deck;

    #[test]
    fn snapshot_roundtrip_restores_state() {
        let state = opening_state(&Deck::shuffled_with_seed(8), false).expect("deal");
        let json = StateSnapshot::to_json(&state).expect("serialize");
        let snapshot = StateSnapshot::from_json(&json).expect("parse");
        assert_eq!(snapshot.format_version, StateSnapshot::FORMAT_VERSION);
        assert_eq!(snapshot.restore(), state);
    }

    #[test]
    fn sealed_history_survives_json() {
        let state = opening_state(&Deck::shuffled_with_seed(8), false).expect("deal");
        let leader = state.trick_leader();
        let mut recorder = Recorder::new(leader);
        recorder.record_action(state, Card::TWO_OF_CLUBS, 0.25, vec![1.0f32, 2.0]);
        recorder.assign_reward(0.5);
        let history = recorder.terminate(0);

        let json = history_to_json(&history).expect("serialize");
        let back: History<Vec<f32>> = history_from_json(&json).expect("parse");
        assert_eq!(back, history);
    }
}
