use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::parameter::ParameterKind;

/// Supplemental oxygen in use. `Unset` means nothing selected yet, which is
/// distinct from an explicit `No`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplementalO2 {
    #[default]
    Unset,
    No,
    Yes,
}

impl SupplementalO2 {
    pub fn as_str(self) -> &'static str {
        match self {
            SupplementalO2::Unset => "",
            SupplementalO2::No => "No",
            SupplementalO2::Yes => "Yes",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" => Some(SupplementalO2::Unset),
            "no" => Some(SupplementalO2::No),
            "yes" => Some(SupplementalO2::Yes),
            _ => None,
        }
    }
}

/// Consciousness level on the AVPU scale, with Fitting as a sixth state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsciousnessLevel {
    #[default]
    Unset,
    Alert,
    Voice,
    Pain,
    Unresponsive,
    Fitting,
}

impl ConsciousnessLevel {
    /// The single-letter chart notation, empty when unset.
    pub fn letter(self) -> &'static str {
        match self {
            ConsciousnessLevel::Unset => "",
            ConsciousnessLevel::Alert => "A",
            ConsciousnessLevel::Voice => "V",
            ConsciousnessLevel::Pain => "P",
            ConsciousnessLevel::Unresponsive => "U",
            ConsciousnessLevel::Fitting => "F",
        }
    }

    /// Accepts the chart letter or the full word, case-insensitive.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" => Some(ConsciousnessLevel::Unset),
            "a" | "alert" => Some(ConsciousnessLevel::Alert),
            "v" | "voice" => Some(ConsciousnessLevel::Voice),
            "p" | "pain" => Some(ConsciousnessLevel::Pain),
            "u" | "unresponsive" => Some(ConsciousnessLevel::Unresponsive),
            "f" | "fitting" => Some(ConsciousnessLevel::Fitting),
            _ => None,
        }
    }
}

/// One observation record: the seven fields of a single bed row.
///
/// Absence is a first-class state on every field, not zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub respiratory_rate: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub supplemental_o2: SupplementalO2,
    pub heart_rate: Option<f64>,
    pub systolic_bp: Option<f64>,
    pub temperature: Option<f64>,
    pub consciousness: ConsciousnessLevel,
}

impl Observation {
    /// Write one field from raw text.
    ///
    /// Numeric fields use the lenient parse: anything that is not a number
    /// becomes absent. The two enum fields reject unknown tokens.
    pub fn set(&mut self, kind: ParameterKind, raw: &str) -> Result<(), CoreError> {
        match kind {
            ParameterKind::RespiratoryRate => self.respiratory_rate = parse_numeric(raw),
            ParameterKind::OxygenSaturation => self.oxygen_saturation = parse_numeric(raw),
            ParameterKind::SupplementalO2 => {
                self.supplemental_o2 = SupplementalO2::from_str(raw)
                    .ok_or_else(|| CoreError::InvalidSupplementalO2(raw.to_string()))?;
            }
            ParameterKind::HeartRate => self.heart_rate = parse_numeric(raw),
            ParameterKind::SystolicBp => self.systolic_bp = parse_numeric(raw),
            ParameterKind::Temperature => self.temperature = parse_numeric(raw),
            ParameterKind::Consciousness => {
                self.consciousness = ConsciousnessLevel::from_str(raw)
                    .ok_or_else(|| CoreError::InvalidConsciousness(raw.to_string()))?;
            }
        }
        Ok(())
    }

    /// Display text for one field: empty when absent/unset.
    pub fn field_text(&self, kind: ParameterKind) -> String {
        match kind {
            ParameterKind::RespiratoryRate => numeric_text(self.respiratory_rate),
            ParameterKind::OxygenSaturation => numeric_text(self.oxygen_saturation),
            ParameterKind::SupplementalO2 => self.supplemental_o2.as_str().to_string(),
            ParameterKind::HeartRate => numeric_text(self.heart_rate),
            ParameterKind::SystolicBp => numeric_text(self.systolic_bp),
            ParameterKind::Temperature => numeric_text(self.temperature),
            ParameterKind::Consciousness => self.consciousness.letter().to_string(),
        }
    }
}

fn numeric_text(value: Option<f64>) -> String {
    value.map(fmt_value).unwrap_or_default()
}

/// Lenient numeric entry: empty or unparseable text is absent, never an
/// error.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Format an observed value the way it was entered: integral values print
/// without a fractional part.
pub fn fmt_value(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
