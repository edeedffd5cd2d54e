//! S3 key/path conventions.
//!
//! Pure string functions, no AWS SDK dependency. These define the canonical
//! layout of objects in the Sympta S3 bucket: one JSON object per record,
//! grouped under a per-respondent prefix.

use uuid::Uuid;

pub fn raw_answer(respondent_id: i64, id: Uuid) -> String {
    format!("respondents/{respondent_id}/answers/{id}.json")
}

pub fn score_record(respondent_id: i64, id: Uuid) -> String {
    format!("respondents/{respondent_id}/scores/{id}.json")
}

/// Prefix covering every score record of one respondent.
pub fn score_record_prefix(respondent_id: i64) -> String {
    format!("respondents/{respondent_id}/scores/")
}
