use thiserror::Error;

use crate::models::answer::RawAnswerRecord;
use crate::models::score::ScoreRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Append-only store for raw answers and computed score records.
///
/// Appends are independent writes; the store is not expected to order them
/// or to make a raw-answer batch atomic with its score record. Queries need
/// read-committed semantics, nothing stronger.
#[allow(async_fn_in_trait)]
pub trait ResponseStore {
    async fn append_raw_answer(&self, record: &RawAnswerRecord) -> Result<(), StoreError>;

    async fn append_score_record(&self, record: &ScoreRecord) -> Result<(), StoreError>;

    /// A respondent's score records, most recent first by `created_at`,
    /// at most `limit` of them.
    async fn query_score_records(
        &self,
        respondent_id: i64,
        limit: usize,
    ) -> Result<Vec<ScoreRecord>, StoreError>;
}
