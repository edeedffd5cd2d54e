use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The ten clinical symptom dimensions measured by the SCL-90.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Somatization,
    Obsession,
    InterpersonalSensitivity,
    Depression,
    Anxiety,
    Hostility,
    Phobia,
    Paranoia,
    Psychoticism,
    Other,
}

impl Factor {
    pub const ALL: [Factor; 10] = [
        Factor::Somatization,
        Factor::Obsession,
        Factor::InterpersonalSensitivity,
        Factor::Depression,
        Factor::Anxiety,
        Factor::Hostility,
        Factor::Phobia,
        Factor::Paranoia,
        Factor::Psychoticism,
        Factor::Other,
    ];
}

/// Per-factor scores, one column per symptom dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub somatization: f64,
    pub obsession: f64,
    pub interpersonal_sensitivity: f64,
    pub depression: f64,
    pub anxiety: f64,
    pub hostility: f64,
    pub phobia: f64,
    pub paranoia: f64,
    pub psychoticism: f64,
    pub other: f64,
}

impl FactorScores {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Somatization => self.somatization,
            Factor::Obsession => self.obsession,
            Factor::InterpersonalSensitivity => self.interpersonal_sensitivity,
            Factor::Depression => self.depression,
            Factor::Anxiety => self.anxiety,
            Factor::Hostility => self.hostility,
            Factor::Phobia => self.phobia,
            Factor::Paranoia => self.paranoia,
            Factor::Psychoticism => self.psychoticism,
            Factor::Other => self.other,
        }
    }

    pub fn set(&mut self, factor: Factor, value: f64) {
        match factor {
            Factor::Somatization => self.somatization = value,
            Factor::Obsession => self.obsession = value,
            Factor::InterpersonalSensitivity => self.interpersonal_sensitivity = value,
            Factor::Depression => self.depression = value,
            Factor::Anxiety => self.anxiety = value,
            Factor::Hostility => self.hostility = value,
            Factor::Phobia => self.phobia = value,
            Factor::Paranoia => self.paranoia = value,
            Factor::Psychoticism => self.psychoticism = value,
            Factor::Other => self.other = value,
        }
    }
}

/// One scored questionnaire attempt.
///
/// Score rows carry no survey id: score history is keyed by respondent
/// alone, so a respondent's trend window assumes a single survey type.
/// Rows are written exactly once; `updated_at` equals `created_at` and is
/// never touched again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: Uuid,
    pub respondent_id: i64,
    #[serde(flatten)]
    pub factors: FactorScores,
    pub total_score: f64,
    pub negative_item_count: u32,
    pub positive_item_count: u32,
    pub positive_item_average: f64,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
