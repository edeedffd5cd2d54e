use thiserror::Error;

use sympta_core::store::StoreError;
use sympta_instruments::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("attempt rejected: {} invalid answer(s)", .0.len())]
    InvalidAttempt(Vec<ValidationError>),

    #[error("duplicate answer for question {question_id}")]
    DuplicateQuestion { question_id: u16 },

    #[error("persistence error: {0}")]
    Store(#[from] StoreError),
}
