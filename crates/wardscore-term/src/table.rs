use colored::Colorize;

use wardscore_core::models::observation::Observation;
use wardscore_core::models::parameter::ParameterKind;
use wardscore_engine::scoring::{ScoringModes, Zone};

use crate::state::Board;

const BED_WIDTH: usize = 5;
const CELL_WIDTH: usize = 11;

/// Render the board: a header, one line per bed, and a detail line under
/// each row that has anything to say.
///
/// Only the bed cell carries the overall band colour; parameter cells are
/// painted from the evaluation's display zones.
pub fn render_board(board: &Board, modes: ScoringModes, color: bool) -> String {
    let evals = board.evaluations(modes);
    let mut out = String::new();

    let mut header = format!("{:<BED_WIDTH$}", "Bed");
    for kind in ParameterKind::ALL {
        header.push_str(&format!("  {:<CELL_WIDTH$}", kind.column()));
    }
    if color {
        header = header.bold().to_string();
    }
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"─".repeat(BED_WIDTH + 7 * (CELL_WIDTH + 2)));
    out.push('\n');

    for (row, eval) in board.rows.iter().zip(&evals) {
        let mut line = paint(format!("{:<BED_WIDTH$}", row.bed), eval.band, color);
        for kind in ParameterKind::ALL {
            line.push_str("  ");
            line.push_str(&paint(
                format!("{:<CELL_WIDTH$}", cell_text(&row.observation, kind)),
                eval.display_zones[kind.index()],
                color,
            ));
        }
        out.push_str(&line);
        out.push('\n');

        let detail = eval.detail_text();
        if !detail.is_empty() {
            out.push_str(&format!("{:<BED_WIDTH$}  ", ""));
            out.push_str(&paint(detail, eval.band, color));
            out.push('\n');
        }
    }
    out
}

/// Uncoloured snapshot for printing, with the timestamp footer.
pub fn print_snapshot(board: &Board, modes: ScoringModes) -> String {
    let mut out = render_board(board, modes, false);
    out.push('\n');
    out.push_str(&footer());
    out.push('\n');
    out
}

fn footer() -> String {
    format!(
        "Early Warning Score board – Printed: {}",
        jiff::Zoned::now().strftime("%d %b %Y %H:%M")
    )
}

fn cell_text(obs: &Observation, kind: ParameterKind) -> String {
    let text = obs.field_text(kind);
    // Sup O₂ and AVPU show a dash placeholder when unset
    if text.is_empty()
        && matches!(
            kind,
            ParameterKind::SupplementalO2 | ParameterKind::Consciousness
        )
    {
        return "--".to_string();
    }
    text
}

/// Paint already-padded text for a zone. Padding happens before colouring
/// so escape codes never count toward the column width.
fn paint(text: String, zone: Zone, color: bool) -> String {
    if !color {
        return text;
    }
    match zone {
        Zone::None => text,
        Zone::Yellow => text.yellow().to_string(),
        Zone::Orange => text.truecolor(255, 165, 0).to_string(),
        Zone::Red => text.red().to_string(),
        Zone::Blue => text.blue().to_string(),
    }
}
