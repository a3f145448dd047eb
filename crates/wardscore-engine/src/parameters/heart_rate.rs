use wardscore_core::models::observation::{Observation, fmt_value};
use wardscore_core::models::parameter::ParameterKind;

use crate::Parameter;
use crate::scoring::{ScoreResult, Zone};

/// Heart rate, beats per minute. MET at both extremes.
pub struct HeartRate;

impl Parameter for HeartRate {
    fn kind(&self) -> ParameterKind {
        ParameterKind::HeartRate
    }

    fn score(&self, obs: &Observation) -> ScoreResult {
        let Some(v) = obs.heart_rate else {
            return ScoreResult::absent();
        };
        let label = self.label();
        if v <= 39.0 {
            return ScoreResult::escalated(format!("{label}={} (MET)", fmt_value(v)));
        }
        if v <= 49.0 {
            return ScoreResult::scored(3, Zone::Red, format!("{label}={} (+3)", fmt_value(v)));
        }
        if v <= 89.0 {
            return ScoreResult::in_range();
        }
        if v <= 110.0 {
            return ScoreResult::scored(1, Zone::Yellow, format!("{label}={} (+1)", fmt_value(v)));
        }
        if v <= 129.0 {
            return ScoreResult::scored(2, Zone::Orange, format!("{label}={} (+2)", fmt_value(v)));
        }
        if v <= 139.0 {
            return ScoreResult::scored(3, Zone::Red, format!("{label}={} (+3)", fmt_value(v)));
        }
        ScoreResult::escalated(format!("{label}={} (MET)", fmt_value(v)))
    }

    fn thresholds(&self) -> &'static str {
        "≤39 MET · 40–49 +3 · 50–89 0 · 90–110 +1 · 111–129 +2 · 130–139 +3 · ≥140 MET"
    }
}
