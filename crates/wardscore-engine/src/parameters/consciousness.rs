use wardscore_core::models::observation::{ConsciousnessLevel, Observation};
use wardscore_core::models::parameter::ParameterKind;

use crate::Parameter;
use crate::scoring::{ScoreResult, Zone};

/// Consciousness on the AVPU scale. Unresponsive and Fitting are MET
/// conditions; any response below Alert scores +3.
pub struct Consciousness;

impl Parameter for Consciousness {
    fn kind(&self) -> ParameterKind {
        ParameterKind::Consciousness
    }

    fn score(&self, obs: &Observation) -> ScoreResult {
        let level = obs.consciousness;
        match level {
            ConsciousnessLevel::Unset => ScoreResult::absent(),
            ConsciousnessLevel::Unresponsive | ConsciousnessLevel::Fitting => {
                ScoreResult::escalated(format!("{}={} (MET)", self.label(), level.letter()))
            }
            ConsciousnessLevel::Voice | ConsciousnessLevel::Pain => ScoreResult::scored(
                3,
                Zone::Red,
                format!("{}={} (+3)", self.label(), level.letter()),
            ),
            ConsciousnessLevel::Alert => ScoreResult::in_range(),
        }
    }

    fn thresholds(&self) -> &'static str {
        "A 0 · V +3 · P +3 · U MET · F MET"
    }
}
