use serde::{Deserialize, Serialize};

use super::answer::ItemAnswer;

/// One completed questionnaire submission, ready for scoring.
///
/// Answer order carries no meaning. Each question is expected at most once;
/// how a duplicate is treated is decided by the scorer's configured policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    pub respondent_id: i64,
    pub survey_id: i64,
    pub answers: Vec<ItemAnswer>,
}
