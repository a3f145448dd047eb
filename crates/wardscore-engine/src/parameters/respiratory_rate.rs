use wardscore_core::models::observation::{Observation, fmt_value};
use wardscore_core::models::parameter::ParameterKind;

use crate::Parameter;
use crate::scoring::{ScoreResult, Zone};

/// Respiratory rate, breaths per minute.
/// Below 5 and above 35 are MET conditions; the band between is scored in
/// five ranges.
pub struct RespiratoryRate;

impl Parameter for RespiratoryRate {
    fn kind(&self) -> ParameterKind {
        ParameterKind::RespiratoryRate
    }

    fn score(&self, obs: &Observation) -> ScoreResult {
        let Some(v) = obs.respiratory_rate else {
            return ScoreResult::absent();
        };
        let label = self.label();
        if v < 5.0 {
            return ScoreResult::escalated(format!("{label}={} (MET)", fmt_value(v)));
        }
        if v <= 8.0 {
            return ScoreResult::scored(3, Zone::Red, format!("{label}={} (+3)", fmt_value(v)));
        }
        if v <= 11.0 {
            return ScoreResult::scored(1, Zone::Yellow, format!("{label}={} (+1)", fmt_value(v)));
        }
        if v <= 20.0 {
            return ScoreResult::in_range();
        }
        if v <= 24.0 {
            return ScoreResult::scored(2, Zone::Orange, format!("{label}={} (+2)", fmt_value(v)));
        }
        if v <= 35.0 {
            return ScoreResult::scored(3, Zone::Red, format!("{label}={} (+3)", fmt_value(v)));
        }
        ScoreResult::escalated(format!("{label}={} (MET)", fmt_value(v)))
    }

    fn thresholds(&self) -> &'static str {
        "<5 MET · 5–8 +3 · 9–11 +1 · 12–20 0 · 21–24 +2 · 25–35 +3 · >35 MET"
    }
}
