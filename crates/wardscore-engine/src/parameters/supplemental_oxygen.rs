use wardscore_core::models::observation::{Observation, SupplementalO2};
use wardscore_core::models::parameter::ParameterKind;

use crate::Parameter;
use crate::scoring::{ScoreResult, Zone};

/// Whether the patient is on supplemental oxygen. Any oxygen at all scores;
/// breathing room air scores nothing.
pub struct SupplementalOxygen;

impl Parameter for SupplementalOxygen {
    fn kind(&self) -> ParameterKind {
        ParameterKind::SupplementalO2
    }

    fn score(&self, obs: &Observation) -> ScoreResult {
        match obs.supplemental_o2 {
            SupplementalO2::Unset => ScoreResult::absent(),
            SupplementalO2::Yes => {
                ScoreResult::scored(2, Zone::Orange, format!("{}=Yes (+2)", self.label()))
            }
            SupplementalO2::No => ScoreResult::in_range(),
        }
    }

    fn thresholds(&self) -> &'static str {
        "Yes +2 · No 0"
    }
}
