use tracing::info;

use sympta_core::models::score::{Factor, FactorScores, ScoreRecord};
use sympta_core::models::trend::ScoreTrend;
use sympta_core::store::ResponseStore;

use crate::error::ScoringError;

pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Average a respondent's most recent score records, column by column.
///
/// Fetches at most `window_size` records (fewer when the history is
/// shorter) and returns `None` when there is no history at all. Trend
/// columns round to one decimal place; the score rows underneath keep two.
pub async fn rolling_average<S: ResponseStore>(
    store: &S,
    respondent_id: i64,
    window_size: usize,
) -> Result<Option<ScoreTrend>, ScoringError> {
    let records = store.query_score_records(respondent_id, window_size).await?;

    if !records.is_empty() {
        info!(
            respondent_id,
            window = records.len(),
            "aggregating score trend"
        );
    }

    Ok(aggregate(respondent_id, &records))
}

fn aggregate(respondent_id: i64, records: &[ScoreRecord]) -> Option<ScoreTrend> {
    let created_at = records.iter().map(|r| r.created_at).max()?;
    let updated_at = records.iter().map(|r| r.updated_at).max()?;
    let count = records.len() as f64;

    let mut factors = FactorScores::default();
    for factor in Factor::ALL {
        let mean = records.iter().map(|r| r.factors.get(factor)).sum::<f64>() / count;
        factors.set(factor, round1(mean));
    }

    let total_score = round1(records.iter().map(|r| r.total_score).sum::<f64>() / count);
    let negative_item_count = round1(
        records
            .iter()
            .map(|r| f64::from(r.negative_item_count))
            .sum::<f64>()
            / count,
    );
    let positive_item_count = round1(
        records
            .iter()
            .map(|r| f64::from(r.positive_item_count))
            .sum::<f64>()
            / count,
    );
    let positive_item_average = round1(
        records
            .iter()
            .map(|r| r.positive_item_average)
            .sum::<f64>()
            / count,
    );

    Some(ScoreTrend {
        respondent_id,
        factors,
        total_score,
        negative_item_count,
        positive_item_count,
        positive_item_average,
        record_count: records.len(),
        created_at,
        updated_at,
    })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
