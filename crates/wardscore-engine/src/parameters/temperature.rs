use wardscore_core::models::observation::{Observation, fmt_value};
use wardscore_core::models::parameter::ParameterKind;

use crate::Parameter;
use crate::scoring::{ScoreResult, Zone};

/// Temperature, °C. Symmetric scoring around the normal range; no MET
/// condition.
pub struct Temperature;

impl Parameter for Temperature {
    fn kind(&self) -> ParameterKind {
        ParameterKind::Temperature
    }

    fn score(&self, obs: &Observation) -> ScoreResult {
        let Some(v) = obs.temperature else {
            return ScoreResult::absent();
        };
        let label = self.label();
        if v <= 34.9 {
            return ScoreResult::scored(2, Zone::Orange, format!("{label}={} (+2)", fmt_value(v)));
        }
        if v <= 35.9 {
            return ScoreResult::scored(1, Zone::Yellow, format!("{label}={} (+1)", fmt_value(v)));
        }
        if v <= 37.9 {
            return ScoreResult::in_range();
        }
        if v <= 38.9 {
            return ScoreResult::scored(1, Zone::Yellow, format!("{label}={} (+1)", fmt_value(v)));
        }
        ScoreResult::scored(2, Zone::Orange, format!("{label}={} (+2)", fmt_value(v)))
    }

    fn thresholds(&self) -> &'static str {
        "≤34.9 +2 · 35–35.9 +1 · 36–37.9 0 · 38–38.9 +1 · ≥39 +2"
    }
}
