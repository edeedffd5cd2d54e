use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One respondent's reply to a single questionnaire item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemAnswer {
    pub question_id: u16,
    pub option_value: u8,
    pub option_text: Option<String>,
}

/// Persisted echo of one [`ItemAnswer`], tagged with its submission context.
/// Append-only: never mutated or deleted after the write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAnswerRecord {
    pub id: Uuid,
    pub respondent_id: i64,
    pub survey_id: i64,
    pub question_id: u16,
    pub option_value: u8,
    pub option_text: Option<String>,
}
