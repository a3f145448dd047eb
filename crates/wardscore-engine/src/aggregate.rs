use crate::scoring::{AggregateResult, ScoreResult};

/// Fold the seven score results into a total and the missing/escalation
/// flags. Pure reduction, no side effects.
pub fn aggregate(parts: [ScoreResult; 7]) -> AggregateResult {
    let total: u8 = parts.iter().filter_map(|p| p.points).sum();
    let any_escalation = parts.iter().any(|p| p.escalation);
    let any_missing = parts.iter().any(|p| p.is_missing());
    let all_missing = parts.iter().all(|p| p.is_missing());

    AggregateResult {
        total,
        any_escalation,
        any_missing,
        all_missing,
        parts,
    }
}
