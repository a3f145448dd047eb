use crate::scoring::{AggregateResult, ScoreResult};

/// `"EWS: <total>"`, including the zero case. Blank under escalation: MET
/// supersedes the numeric score in the displayed text.
pub fn score_text(agg: &AggregateResult) -> String {
    if agg.any_escalation {
        String::new()
    } else {
        format!("EWS: {}", agg.total)
    }
}

/// `"Triggered by: ..."` over every part that escalated or contributed
/// points, in scoring order, joined with `" | "`. Empty when nothing
/// triggered.
pub fn trigger_text(parts: &[ScoreResult; 7]) -> String {
    let triggers: Vec<String> = parts
        .iter()
        .filter(|p| p.triggered())
        .map(|p| match p.zone.word() {
            "" => p.reason.clone(),
            word => format!("{} {}", strip_annotation(&p.reason), word),
        })
        .collect();

    if triggers.is_empty() {
        String::new()
    } else {
        format!("Triggered by: {}", triggers.join(" | "))
    }
}

/// Drop the trailing `" (+N)"` or `" (MET)"` annotation from a reason.
fn strip_annotation(reason: &str) -> &str {
    reason.rsplit_once(" (").map_or(reason, |(head, _)| head)
}
