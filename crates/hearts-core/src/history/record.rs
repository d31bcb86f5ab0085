use crate::game::state::GameState;
use crate::model::card::Card;
use crate::model::seat::Seat;
use serde::{Deserialize, Serialize};

/// One decision taken by a seat, with the state it observed beforehand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEntry<T> {
    pub state: GameState,
    pub actor: Seat,
    pub action: Card,
    pub quality: f64,
    /// Reward of the trick this action was played into.
    pub reward: f64,
    pub trace: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HistoryEntry<T> {
    Action(ActionEntry<T>),
    Terminal { actor: Seat, reward: f64, score: u32 },
}

impl<T> HistoryEntry<T> {
    pub fn actor(&self) -> Seat {
        match self {
            HistoryEntry::Action(entry) => entry.actor,
            HistoryEntry::Terminal { actor, .. } => *actor,
        }
    }

    pub fn reward(&self) -> f64 {
        match self {
            HistoryEntry::Action(entry) => entry.reward,
            HistoryEntry::Terminal { reward, .. } => *reward,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, HistoryEntry::Terminal { .. })
    }
}

/// Chronological decisions of one seat over a whole game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History<T> {
    actor: Seat,
    entries: Vec<HistoryEntry<T>>,
}

impl<T> History<T> {
    /// Wraps entries produced elsewhere (e.g. read back from disk). Sealed
    /// histories come from [`Recorder::terminate`].
    pub fn from_entries(actor: Seat, entries: Vec<HistoryEntry<T>>) -> Self {
        Self { actor, entries }
    }

    pub fn actor(&self) -> Seat {
        self.actor
    }

    pub fn entries(&self) -> &[HistoryEntry<T>] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<HistoryEntry<T>> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn actions(&self) -> impl Iterator<Item = &ActionEntry<T>> {
        self.entries.iter().filter_map(|entry| match entry {
            HistoryEntry::Action(action) => Some(action),
            HistoryEntry::Terminal { .. } => None,
        })
    }

    /// Final cumulative score, if the history is sealed.
    pub fn final_score(&self) -> Option<u32> {
        match self.entries.last() {
            Some(HistoryEntry::Terminal { score, .. }) => Some(*score),
            _ => None,
        }
    }

    /// Sum of every reward recorded, terminal included.
    pub fn total_reward(&self) -> f64 {
        self.entries.iter().map(HistoryEntry::reward).sum()
    }
}

/// Append-only log of one seat's decisions during a game.
///
/// A trick reward belongs to the seat's most recent action. Rewards assigned
/// before any action is recorded are carried by the terminal entry instead.
#[derive(Debug, Clone)]
pub struct Recorder<T> {
    actor: Seat,
    entries: Vec<HistoryEntry<T>>,
    unattached_reward: f64,
}

impl<T> Recorder<T> {
    pub fn new(actor: Seat) -> Self {
        Self {
            actor,
            entries: Vec::with_capacity(14),
            unattached_reward: 0.0,
        }
    }

    pub fn actor(&self) -> Seat {
        self.actor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn record_action(&mut self, state: GameState, action: Card, quality: f64, trace: T) {
        self.entries.push(HistoryEntry::Action(ActionEntry {
            state,
            actor: self.actor,
            action,
            quality,
            reward: 0.0,
            trace,
        }));
    }

    /// Adds `amount` to the reward of the latest action.
    pub fn assign_reward(&mut self, amount: f64) {
        match self.entries.last_mut() {
            Some(HistoryEntry::Action(entry)) => entry.reward += amount,
            _ => self.unattached_reward += amount,
        }
    }

    /// Seals the log. Consuming `self` makes this a once-per-game operation.
    pub fn terminate(mut self, score: u32) -> History<T> {
        self.entries.push(HistoryEntry::Terminal {
            actor: self.actor,
            reward: self.unattached_reward,
            score,
        });
        History {
            actor: self.actor,
            entries: self.entries,
        }
    }
}
