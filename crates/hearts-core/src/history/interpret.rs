//! Turns a sealed history into supervised targets: for every decision, the
//! quality the policy predicted next to the return that actually followed.

use crate::error::EngineError;
use crate::game::state::GameState;
use crate::history::record::{History, HistoryEntry};
use crate::model::card::Card;
use crate::model::seat::Seat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback<T> {
    /// Quality the policy reported when it chose the action.
    pub expected: f64,
    /// Return realised by the decisions after this one.
    pub actual: f64,
    /// Reward of the trick this action was played into.
    pub reward: f64,
    pub trace: T,
    pub state: GameState,
    pub actor: Seat,
    pub action: Card,
}

impl<T> Feedback<T> {
    pub fn error(&self) -> f64 {
        self.actual - self.expected
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation<T> {
    /// Total realised return over the game.
    pub reward: f64,
    /// Final cumulative penalty score.
    pub score: u32,
    /// One record per action, chronological.
    pub feedback: Vec<Feedback<T>>,
}

pub fn interpret_history<T>(history: History<T>) -> Result<Interpretation<T>, EngineError> {
    interpret_history_discounted(history, 1.0)
}

/// Like [`interpret_history`], with each step back in time scaling the
/// running return by `discount`.
pub fn interpret_history_discounted<T>(
    history: History<T>,
    discount: f64,
) -> Result<Interpretation<T>, EngineError> {
    let mut entries = history.into_entries();
    let (mut running, score) = match entries.pop() {
        None => return Err(EngineError::EmptyHistory),
        Some(HistoryEntry::Terminal { reward, score, .. }) => (reward, score),
        Some(HistoryEntry::Action(_)) => return Err(EngineError::MissingTerminal),
    };

    let mut feedback = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate().rev() {
        let entry = match entry {
            HistoryEntry::Action(entry) => entry,
            HistoryEntry::Terminal { .. } => return Err(EngineError::MisplacedTerminal { index }),
        };
        feedback.push(Feedback {
            expected: entry.quality,
            actual: running,
            reward: entry.reward,
            trace: entry.trace,
            state: entry.state,
            actor: entry.actor,
            action: entry.action,
        });
        running = entry.reward + discount * running;
    }
    feedback.reverse();

    Ok(Interpretation {
        reward: running,
        score,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::record::Recorder;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    fn state() -> GameState {
        GameState::new(Default::default(), Seat::North, false)
    }

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Diamonds)
    }

    #[test]
    fn terminal_only_history_has_no_feedback() {
        let mut recorder = Recorder::<()>::new(Seat::West);
        recorder.assign_reward(0.5);
        let interpretation = interpret_history(recorder.terminate(4)).expect("valid history");
        assert!(interpretation.feedback.is_empty());
        assert_eq!(interpretation.reward, 0.5);
        assert_eq!(interpretation.score, 4);
    }

    #[test]
    fn actual_excludes_the_entry_own_reward() {
        let mut recorder = Recorder::new(Seat::North);
        recorder.record_action(state(), card(Rank::Two), 0.1, 1u8);
        recorder.assign_reward(0.5);
        recorder.record_action(state(), card(Rank::Three), 0.2, 2u8);
        recorder.assign_reward(-3.0);
        recorder.record_action(state(), card(Rank::Four), 0.3, 3u8);
        recorder.assign_reward(0.5);

        let interpretation = interpret_history(recorder.terminate(3)).expect("valid history");
        let actual: Vec<f64> = interpretation.feedback.iter().map(|f| f.actual).collect();
        let rewards: Vec<f64> = interpretation.feedback.iter().map(|f| f.reward).collect();
        let expected: Vec<f64> = interpretation.feedback.iter().map(|f| f.expected).collect();
        let traces: Vec<u8> = interpretation.feedback.iter().map(|f| f.trace).collect();
        let actions: Vec<Card> = interpretation.feedback.iter().map(|f| f.action).collect();

        assert_eq!(actual, vec![-2.5, 0.5, 0.0]);
        assert_eq!(rewards, vec![0.5, -3.0, 0.5]);
        assert_eq!(expected, vec![0.1, 0.2, 0.3]);
        assert_eq!(traces, vec![1, 2, 3]);
        assert_eq!(actions, vec![card(Rank::Two), card(Rank::Three), card(Rank::Four)]);
        assert_eq!(interpretation.reward, -2.0);
        assert_eq!(interpretation.score, 3);
        assert_eq!(interpretation.feedback[2].error(), 0.0 - 0.3);
    }

    #[test]
    fn queen_trick_penalty_stays_on_its_own_action() {
        let mut recorder = Recorder::new(Seat::South);
        recorder.record_action(state(), card(Rank::Five), 0.0, ());
        recorder.assign_reward(0.5);
        recorder.record_action(state(), card(Rank::Six), 0.0, ());
        recorder.assign_reward(-13.0);

        let interpretation = interpret_history(recorder.terminate(13)).expect("valid history");
        let rewards: Vec<f64> = interpretation.feedback.iter().map(|f| f.reward).collect();
        let actual: Vec<f64> = interpretation.feedback.iter().map(|f| f.actual).collect();
        assert_eq!(rewards, vec![0.5, -13.0]);
        assert_eq!(actual, vec![-13.0, 0.0]);
        assert_eq!(interpretation.reward, -12.5);
    }

    #[test]
    fn discount_scales_later_rewards() {
        let mut recorder = Recorder::new(Seat::North);
        recorder.record_action(state(), card(Rank::Two), 0.0, ());
        recorder.assign_reward(1.0);
        recorder.record_action(state(), card(Rank::Three), 0.0, ());
        recorder.assign_reward(1.0);

        let interpretation =
            interpret_history_discounted(recorder.terminate(0), 0.5).expect("valid history");
        let actual: Vec<f64> = interpretation.feedback.iter().map(|f| f.actual).collect();
        assert_eq!(actual, vec![1.0, 0.0]);
        assert_eq!(interpretation.reward, 1.5);
    }

    #[test]
    fn empty_history_is_rejected() {
        let history: History<()> = History::from_entries(Seat::North, Vec::new());
        assert_eq!(
            interpret_history(history).unwrap_err(),
            EngineError::EmptyHistory
        );
    }

    #[test]
    fn history_must_end_with_terminal() {
        let mut recorder = Recorder::new(Seat::North);
        recorder.record_action(state(), card(Rank::Two), 0.0, ());
        let sealed = recorder.terminate(0);
        let mut entries = sealed.into_entries();
        entries.pop();
        let history = History::from_entries(Seat::North, entries);
        assert_eq!(
            interpret_history(history).unwrap_err(),
            EngineError::MissingTerminal
        );
    }

    #[test]
    fn terminal_in_the_middle_is_rejected() {
        let terminal = HistoryEntry::<()>::Terminal {
            actor: Seat::East,
            reward: 0.0,
            score: 0,
        };
        let history = History::from_entries(Seat::East, vec![terminal.clone(), terminal]);
        assert_eq!(
            interpret_history(history).unwrap_err(),
            EngineError::MisplacedTerminal { index: 0 }
        );
    }
}
