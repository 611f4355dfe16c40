use thiserror::Error;

/// Outcomes a poll operation can be refused with.
///
/// The display strings double as the messages sent back to clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PollError {
    #[error("No such poll found.")]
    PollNotFound,
    #[error("No such answer found.")]
    AnswerNotFound,
    #[error("You've already voted!")]
    AlreadyVoted,
    #[error("A poll needs at least one answer.")]
    NoAnswers,
    #[error("Poll store is unavailable")]
    StoreUnavailable,
}

pub type Result<T> = std::result::Result<T, PollError>;
