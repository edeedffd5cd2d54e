use serde::{Deserialize, Serialize};
use thiserror::Error;

use sympta_core::models::answer::ItemAnswer;
use sympta_core::models::score::FactorScores;

use crate::scl90;

/// Valid range for a selected option value (five-point severity scale,
/// 1 = symptom absent).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RatingRange {
    pub min: u8,
    pub max: u8,
}

pub const RATING: RatingRange = RatingRange { min: 1, max: 5 };

impl RatingRange {
    pub fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A single answer that failed validation.
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: u16,
    pub option_value: u8,
    pub message: String,
}

/// Validate answers against the instrument: item ids must fall in 1..=90
/// and option values must sit on the five-point scale.
pub fn validate_answers(answers: &[ItemAnswer]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for answer in answers {
        if answer.question_id == 0 || answer.question_id > scl90::QUESTION_COUNT {
            errors.push(ValidationError {
                question_id: answer.question_id,
                option_value: answer.option_value,
                message: format!(
                    "question {} is outside the instrument (1..={})",
                    answer.question_id,
                    scl90::QUESTION_COUNT,
                ),
            });
        } else if !RATING.contains(answer.option_value) {
            errors.push(ValidationError {
                question_id: answer.question_id,
                option_value: answer.option_value,
                message: format!(
                    "question {}: option value {} is outside range [{}, {}]",
                    answer.question_id, answer.option_value, RATING.min, RATING.max,
                ),
            });
        }
    }
    errors
}

/// The full score breakdown for one attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub factors: FactorScores,
    pub total_score: f64,
    pub negative_item_count: u32,
    pub positive_item_count: u32,
    pub positive_item_average: f64,
}

/// Score one attempt's answers.
///
/// Every mean divisor is guarded: a factor with no answered items scores
/// 0.0, as does the positive-item average when nothing scored above 1.
/// The total score always divides by the canonical 90, never by the number
/// of answers present. All results round to two decimal places.
pub fn score_answers(answers: &[ItemAnswer]) -> ScoreBreakdown {
    let mut factors = FactorScores::default();
    for def in scl90::definitions() {
        let values: Vec<f64> = answers
            .iter()
            .filter(|a| def.items.contains(&a.question_id))
            .map(|a| f64::from(a.option_value))
            .collect();
        let score = if values.is_empty() {
            0.0
        } else {
            round2(values.iter().sum::<f64>() / values.len() as f64)
        };
        factors.set(def.factor, score);
    }

    let sum: f64 = answers.iter().map(|a| f64::from(a.option_value)).sum();
    let total_score = round2(sum / f64::from(scl90::QUESTION_COUNT));

    let negative_item_count = answers.iter().filter(|a| a.option_value == 1).count() as u32;
    let positive: Vec<f64> = answers
        .iter()
        .filter(|a| a.option_value > 1)
        .map(|a| f64::from(a.option_value))
        .collect();
    let positive_item_count = positive.len() as u32;
    let positive_item_average = if positive.is_empty() {
        0.0
    } else {
        round2(positive.iter().sum::<f64>() / positive.len() as f64)
    };

    ScoreBreakdown {
        factors,
        total_score,
        negative_item_count,
        positive_item_count,
        positive_item_average,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
