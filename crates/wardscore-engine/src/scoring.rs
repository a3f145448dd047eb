use serde::{Deserialize, Serialize};

/// Severity colour of one parameter's contribution.
///
/// The derived ordering is the banding rank: `None < Yellow < Orange < Red
/// < Blue`. Max-zone computation relies on this ordinal, never on the
/// colour words.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    #[default]
    None,
    Yellow,
    Orange,
    Red,
    Blue,
}

impl Zone {
    /// Capitalised colour word, empty for `None`.
    pub fn word(self) -> &'static str {
        match self {
            Zone::None => "",
            Zone::Yellow => "Yellow",
            Zone::Orange => "Orange",
            Zone::Red => "Red",
            Zone::Blue => "Blue",
        }
    }
}

/// Overall severity of a whole observation record — the same ordered domain
/// as [`Zone`].
pub type Band = Zone;

/// What one parameter contributed to a score pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Points contributed. `None` when the value is absent or the parameter
    /// escalated — escalation overrides point scoring.
    pub points: Option<u8>,
    /// MET condition: bypasses ordinary scoring and forces the top band.
    pub escalation: bool,
    pub zone: Zone,
    /// Empty unless the parameter contributed points or escalated.
    pub reason: String,
}

impl ScoreResult {
    /// No value entered.
    pub fn absent() -> Self {
        ScoreResult {
            points: None,
            escalation: false,
            zone: Zone::None,
            reason: String::new(),
        }
    }

    /// A value inside the normal range.
    pub fn in_range() -> Self {
        ScoreResult {
            points: Some(0),
            escalation: false,
            zone: Zone::None,
            reason: String::new(),
        }
    }

    /// A value that contributes points. `points` must be positive and the
    /// zone non-`None`.
    pub fn scored(points: u8, zone: Zone, reason: String) -> Self {
        ScoreResult {
            points: Some(points),
            escalation: false,
            zone,
            reason,
        }
    }

    /// A MET condition. Escalation never carries points and always sits in
    /// the blue zone.
    pub fn escalated(reason: String) -> Self {
        ScoreResult {
            points: None,
            escalation: true,
            zone: Zone::Blue,
            reason,
        }
    }

    /// Simply absent: no value and no escalation.
    pub fn is_missing(&self) -> bool {
        self.points.is_none() && !self.escalation
    }

    /// Contributes to the trigger text: escalated or scored above zero.
    pub fn triggered(&self) -> bool {
        self.escalation || self.points.is_some_and(|p| p > 0)
    }
}

/// The seven score results folded into a total and its flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Sum of points across scoreable parts. Missing and escalated parts
    /// contribute nothing.
    pub total: u8,
    pub any_escalation: bool,
    /// At least one part is simply absent (not escalated).
    pub any_missing: bool,
    /// Every part is simply absent.
    pub all_missing: bool,
    pub parts: [ScoreResult; 7],
}

/// The two global display-mode toggles, read-only during a score pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringModes {
    /// Withhold the band entirely while data is incomplete and nothing has
    /// escalated.
    pub strict: bool,
    /// Colour every cell with the overall band instead of its own zone.
    pub cell_band_follows_overall: bool,
}

/// Everything the presentation layer needs for one observation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub band: Band,
    pub parts: [ScoreResult; 7],
    /// `"EWS: <total>"`. Empty under escalation or when gated.
    pub score_text: String,
    /// `"Triggered by: ..."`. Empty when nothing triggered or when gated.
    pub trigger_text: String,
    /// Per-cell severity for field highlighting, already resolved against
    /// the cell-band toggle.
    pub display_zones: [Zone; 7],
}

impl Evaluation {
    /// The detail line under a row: the non-empty fragments joined with
    /// `" • "`.
    pub fn detail_text(&self) -> String {
        [self.score_text.as_str(), self.trigger_text.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" • ")
    }
}
