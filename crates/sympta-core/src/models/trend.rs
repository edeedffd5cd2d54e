use serde::{Deserialize, Serialize};

use super::score::FactorScores;

/// Rolling average over a respondent's most recent score records.
///
/// Trend columns round to one decimal place, unlike the two-decimal score
/// rows they are derived from. The count columns are averages too, so they
/// come out fractional. Timestamps are the latest seen in the window, not
/// an average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTrend {
    pub respondent_id: i64,
    pub factors: FactorScores,
    pub total_score: f64,
    pub negative_item_count: f64,
    pub positive_item_count: f64,
    pub positive_item_average: f64,
    pub record_count: usize,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
