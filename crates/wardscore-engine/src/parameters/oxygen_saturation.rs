use wardscore_core::models::observation::{Observation, fmt_value};
use wardscore_core::models::parameter::ParameterKind;

use crate::Parameter;
use crate::scoring::{ScoreResult, Zone};

/// Oxygen saturation, percent. Low saturations score; there is no MET
/// condition on this parameter.
pub struct OxygenSaturation;

impl Parameter for OxygenSaturation {
    fn kind(&self) -> ParameterKind {
        ParameterKind::OxygenSaturation
    }

    fn score(&self, obs: &Observation) -> ScoreResult {
        let Some(v) = obs.oxygen_saturation else {
            return ScoreResult::absent();
        };
        let label = self.label();
        if v <= 91.0 {
            return ScoreResult::scored(3, Zone::Red, format!("{label}={} (+3)", fmt_value(v)));
        }
        if v <= 93.0 {
            return ScoreResult::scored(2, Zone::Orange, format!("{label}={} (+2)", fmt_value(v)));
        }
        if v <= 95.0 {
            return ScoreResult::scored(1, Zone::Yellow, format!("{label}={} (+1)", fmt_value(v)));
        }
        ScoreResult::in_range()
    }

    fn thresholds(&self) -> &'static str {
        "≤91 +3 · 92–93 +2 · 94–95 +1 · ≥96 0"
    }
}
