use std::collections::HashMap;
use std::collections::hash_map::Entry;

use jiff::Timestamp;
use tracing::info;
use uuid::Uuid;

use sympta_core::models::answer::{ItemAnswer, RawAnswerRecord};
use sympta_core::models::attempt::Attempt;
use sympta_core::models::score::ScoreRecord;
use sympta_core::store::ResponseStore;
use sympta_instruments::scoring;

use crate::error::ScoringError;

/// How to treat an attempt that answers the same question twice.
///
/// A well-behaved client never submits duplicates, so a duplicate signals
/// a corrupt submission and the default is to reject it outright.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    #[default]
    Reject,
    FirstWins,
    LastWins,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScorerConfig {
    pub duplicate_policy: DuplicatePolicy,
}

/// Score one completed attempt and persist the outcome.
///
/// Writes one raw-answer record per answer, then one score record. The two
/// writes are not atomic: a failure after the raw answers land leaves them
/// behind with no score row. Trend aggregation reads score rows only, so an
/// orphaned raw answer never skews a trend.
///
/// An attempt with no answers at all is accepted and produces the
/// degenerate all-zero record.
pub async fn score_attempt<S: ResponseStore>(
    store: &S,
    config: &ScorerConfig,
    attempt: Attempt,
) -> Result<ScoreRecord, ScoringError> {
    let Attempt {
        respondent_id,
        survey_id,
        answers,
    } = attempt;

    let answers = normalize_answers(answers, config.duplicate_policy)?;

    let errors = scoring::validate_answers(&answers);
    if !errors.is_empty() {
        return Err(ScoringError::InvalidAttempt(errors));
    }

    info!(
        respondent_id,
        survey_id,
        answers = answers.len(),
        "scoring attempt"
    );

    for answer in &answers {
        let record = RawAnswerRecord {
            id: Uuid::new_v4(),
            respondent_id,
            survey_id,
            question_id: answer.question_id,
            option_value: answer.option_value,
            option_text: answer.option_text.clone(),
        };
        store.append_raw_answer(&record).await?;
    }

    let breakdown = scoring::score_answers(&answers);
    let now = Timestamp::now();
    let record = ScoreRecord {
        id: Uuid::new_v4(),
        respondent_id,
        factors: breakdown.factors,
        total_score: breakdown.total_score,
        negative_item_count: breakdown.negative_item_count,
        positive_item_count: breakdown.positive_item_count,
        positive_item_average: breakdown.positive_item_average,
        created_at: now,
        updated_at: now,
    };
    store.append_score_record(&record).await?;

    info!(
        respondent_id,
        score_id = %record.id,
        total_score = record.total_score,
        "attempt scored"
    );

    Ok(record)
}

/// Apply the duplicate policy. Relative order of distinct questions is
/// preserved; under `LastWins` the later answer replaces the earlier one
/// in place.
fn normalize_answers(
    answers: Vec<ItemAnswer>,
    policy: DuplicatePolicy,
) -> Result<Vec<ItemAnswer>, ScoringError> {
    let mut seen: HashMap<u16, usize> = HashMap::new();
    let mut kept: Vec<ItemAnswer> = Vec::with_capacity(answers.len());

    for answer in answers {
        match seen.entry(answer.question_id) {
            Entry::Vacant(slot) => {
                slot.insert(kept.len());
                kept.push(answer);
            }
            Entry::Occupied(slot) => match policy {
                DuplicatePolicy::Reject => {
                    return Err(ScoringError::DuplicateQuestion {
                        question_id: answer.question_id,
                    });
                }
                DuplicatePolicy::FirstWins => {}
                DuplicatePolicy::LastWins => kept[*slot.get()] = answer,
            },
        }
    }

    Ok(kept)
}
