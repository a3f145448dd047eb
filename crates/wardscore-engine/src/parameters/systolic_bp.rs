use wardscore_core::models::observation::{Observation, fmt_value};
use wardscore_core::models::parameter::ParameterKind;

use crate::Parameter;
use crate::scoring::{ScoreResult, Zone};

/// Systolic blood pressure, mmHg. Only the low extreme is a MET condition;
/// severe hypertension scores +3 without escalating.
pub struct SystolicBp;

impl Parameter for SystolicBp {
    fn kind(&self) -> ParameterKind {
        ParameterKind::SystolicBp
    }

    fn score(&self, obs: &Observation) -> ScoreResult {
        let Some(v) = obs.systolic_bp else {
            return ScoreResult::absent();
        };
        let label = self.label();
        if v <= 69.0 {
            return ScoreResult::escalated(format!("{label}={} (MET)", fmt_value(v)));
        }
        if v <= 89.0 {
            return ScoreResult::scored(3, Zone::Red, format!("{label}={} (+3)", fmt_value(v)));
        }
        if v <= 99.0 {
            return ScoreResult::scored(2, Zone::Orange, format!("{label}={} (+2)", fmt_value(v)));
        }
        if v <= 109.0 {
            return ScoreResult::scored(1, Zone::Yellow, format!("{label}={} (+1)", fmt_value(v)));
        }
        if v <= 219.0 {
            return ScoreResult::in_range();
        }
        ScoreResult::scored(3, Zone::Red, format!("{label}={} (+3)", fmt_value(v)))
    }

    fn thresholds(&self) -> &'static str {
        "≤69 MET · 70–89 +3 · 90–99 +2 · 100–109 +1 · 110–219 0 · ≥220 +3"
    }
}
