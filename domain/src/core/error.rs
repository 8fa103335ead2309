//! Domain error types

use super::ids::{OptionId, QuestionId};
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid determinant: target question id must be positive, got {id}")]
    InvalidDeterminant { id: i64 },

    #[error("Question {question} points to question {target}, which is not in the survey")]
    GraphIntegrity {
        question: QuestionId,
        target: QuestionId,
    },

    #[error("Invalid question id {0}: question ids must be positive")]
    InvalidQuestionId(QuestionId),

    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    #[error("Option {option} is declared on question {holder} but claims owner {owner}")]
    OptionOwnerMismatch {
        option: OptionId,
        holder: QuestionId,
        owner: QuestionId,
    },

    #[error("Unknown question: {0}")]
    UnknownQuestion(QuestionId),

    #[error("Session has already started")]
    SessionAlreadyStarted,

    #[error("Session has not started")]
    SessionNotStarted,

    #[error("Session is finished and accepts no further answers")]
    SessionFinished,

    #[error("Answer for question {answered} but the current question is {current}")]
    UnexpectedQuestion {
        answered: QuestionId,
        current: QuestionId,
    },
}
