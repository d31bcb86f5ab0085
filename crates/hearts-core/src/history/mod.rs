pub mod interpret;
pub mod record;

pub use interpret::{Feedback, Interpretation, interpret_history, interpret_history_discounted};
pub use record::{ActionEntry, History, HistoryEntry, Recorder};
