use crate::model::card::Card;
use crate::model::seat::Seat;
use thiserror::Error;

/// Integrity violations that abort a game.
///
/// Rule violations cannot surface here: the driver only ever offers a policy
/// the output of [`crate::rules::valid_plays`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no trick winner could be determined")]
    NoTrickWinner,
    #[error("trick resolution requested with {played} of 4 cards on the table")]
    IncompleteTrick { played: usize },
    #[error("winning card {card} does not map to a seat")]
    WinnerSeatNotFound { card: Card },
    #[error("starting card {card} was not dealt to any seat")]
    StartingCardMissing { card: Card },
    #[error("policy for {seat} returned no candidate actions")]
    EmptyPolicyResponse { seat: Seat },
    #[error("policy for {seat} proposed {card}, which was not among the offered plays")]
    IllegalCandidate { seat: Seat, card: Card },
    #[error("history is empty; expected at least a terminal entry")]
    EmptyHistory,
    #[error("history does not end with a terminal entry")]
    MissingTerminal,
    #[error("history holds a terminal entry at position {index} before its end")]
    MisplacedTerminal { index: usize },
}
