//! The SCL-90 factor catalog.
//!
//! Fixed mapping from the 90 questionnaire items to the ten clinical
//! factors, taken from the published scoring key. Static data, loaded once,
//! no mutation path.

use sympta_core::models::score::Factor;

/// Number of items in the instrument. Also the fixed divisor for the
/// total-score mean, so a partial submission scores proportionally lower.
pub const QUESTION_COUNT: u16 = 90;

/// A factor and the fixed set of items that feed it.
#[derive(Debug, Clone, Copy)]
pub struct FactorDefinition {
    pub factor: Factor,
    pub name: &'static str,
    pub items: &'static [u16],
}

// Item sets overlap where the scoring key says they do: item 77 counts
// toward both Psychoticism and Other. Items 64 and 89 feed no factor and
// contribute to the total score only.
static DEFINITIONS: [FactorDefinition; 10] = [
    FactorDefinition {
        factor: Factor::Somatization,
        name: "Somatization",
        items: &[1, 4, 12, 27, 40, 42, 48, 49, 52, 53, 56, 58],
    },
    FactorDefinition {
        factor: Factor::Obsession,
        name: "Obsession",
        items: &[3, 9, 10, 28, 38, 45, 46, 51, 55, 65],
    },
    FactorDefinition {
        factor: Factor::InterpersonalSensitivity,
        name: "Interpersonal Sensitivity",
        items: &[6, 21, 34, 36, 37, 41, 61, 69, 73],
    },
    FactorDefinition {
        factor: Factor::Depression,
        name: "Depression",
        items: &[5, 14, 15, 20, 22, 26, 29, 30, 31, 32, 54, 71, 79],
    },
    FactorDefinition {
        factor: Factor::Anxiety,
        name: "Anxiety",
        items: &[2, 17, 23, 33, 39, 57, 72, 78, 80, 86],
    },
    FactorDefinition {
        factor: Factor::Hostility,
        name: "Hostility",
        items: &[11, 24, 63, 67, 74, 81],
    },
    FactorDefinition {
        factor: Factor::Phobia,
        name: "Phobia",
        items: &[13, 25, 47, 50, 70, 75, 82],
    },
    FactorDefinition {
        factor: Factor::Paranoia,
        name: "Paranoia",
        items: &[8, 18, 43, 68, 76, 83],
    },
    FactorDefinition {
        factor: Factor::Psychoticism,
        name: "Psychoticism",
        items: &[7, 16, 35, 62, 77, 84, 85, 87, 88, 90],
    },
    FactorDefinition {
        factor: Factor::Other,
        name: "Other",
        items: &[19, 44, 59, 60, 66, 77],
    },
];

pub fn definitions() -> &'static [FactorDefinition; 10] {
    &DEFINITIONS
}

/// All factors a given item contributes to. May be empty, one, or several.
pub fn factors_for(question_id: u16) -> impl Iterator<Item = Factor> {
    DEFINITIONS
        .iter()
        .filter(move |d| d.items.contains(&question_id))
        .map(|d| d.factor)
}
