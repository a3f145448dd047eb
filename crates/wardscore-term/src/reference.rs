use wardscore_engine::all_parameters;

/// The expanded scoring reference card: per-parameter thresholds and the
/// band legend.
pub fn card() -> String {
    let mut out = String::from("Early Warning Score reference\n\n");
    for p in all_parameters() {
        out.push_str(&format!("  {:<7} {}\n", p.label(), p.thresholds()));
    }
    out.push('\n');
    out.push_str("  Band: EWS 1–5 Yellow · 6–7 Orange · 8–9 Red · 10+ Blue · any MET Blue\n");
    out.push_str("  Strict mode withholds the band while any field is empty and nothing has escalated.\n");
    out
}
