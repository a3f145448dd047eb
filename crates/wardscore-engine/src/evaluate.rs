use wardscore_core::models::observation::Observation;

use crate::scoring::{Evaluation, ScoringModes, Zone};
use crate::{aggregate, band, explain, score_observation};

/// Run one observation record through the whole pipeline.
///
/// When a gate fires, both text fragments are empty and every display zone
/// is cleared, leaving the row visually blank. Otherwise each display zone
/// is the part's own zone, or the overall band for every cell (absent ones
/// included) when the cell-band toggle is set.
pub fn evaluate(obs: &Observation, modes: ScoringModes) -> Evaluation {
    let parts = score_observation(obs);
    let agg = aggregate::aggregate(parts);
    let band = band::select_band(&agg, modes.strict);

    if band::suppressed(&agg, modes.strict) {
        return Evaluation {
            band,
            parts: agg.parts,
            score_text: String::new(),
            trigger_text: String::new(),
            display_zones: [Zone::None; 7],
        };
    }

    let score_text = explain::score_text(&agg);
    let trigger_text = explain::trigger_text(&agg.parts);
    let display_zones = if modes.cell_band_follows_overall {
        [band; 7]
    } else {
        agg.parts.each_ref().map(|p| p.zone)
    };

    Evaluation {
        band,
        parts: agg.parts,
        score_text,
        trigger_text,
        display_zones,
    }
}
