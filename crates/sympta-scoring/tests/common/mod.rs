#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use sympta_core::models::answer::RawAnswerRecord;
use sympta_core::models::score::ScoreRecord;
use sympta_core::store::{ResponseStore, StoreError};

/// In-memory `ResponseStore` for exercising the engine without S3.
///
/// `fail_score_writes` makes the score-record append fail while the
/// raw-answer appends still succeed, which is exactly the partial-write
/// window the non-transactional scorer leaves open.
#[derive(Default)]
pub struct MemoryStore {
    pub raw_answers: Mutex<Vec<RawAnswerRecord>>,
    pub score_records: Mutex<Vec<ScoreRecord>>,
    pub fail_score_writes: AtomicBool,
}

impl MemoryStore {
    pub fn with_history(records: Vec<ScoreRecord>) -> Self {
        Self {
            score_records: Mutex::new(records),
            ..Self::default()
        }
    }
}

impl ResponseStore for MemoryStore {
    async fn append_raw_answer(&self, record: &RawAnswerRecord) -> Result<(), StoreError> {
        self.raw_answers.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn append_score_record(&self, record: &ScoreRecord) -> Result<(), StoreError> {
        if self.fail_score_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("write refused".to_string()));
        }
        self.score_records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn query_score_records(
        &self,
        respondent_id: i64,
        limit: usize,
    ) -> Result<Vec<ScoreRecord>, StoreError> {
        let mut records: Vec<ScoreRecord> = self
            .score_records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.respondent_id == respondent_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit);
        Ok(records)
    }
}
