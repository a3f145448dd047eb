use serde::{Deserialize, Serialize};

/// The seven observed parameters, declared in scoring order.
///
/// Every score pass walks the parameters in this order, and result arrays
/// are indexed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    RespiratoryRate,
    OxygenSaturation,
    SupplementalO2,
    HeartRate,
    SystolicBp,
    Temperature,
    Consciousness,
}

impl ParameterKind {
    /// Scoring order: RR, SpO₂, Sup O₂, HR, SBP, Temp, AVPU.
    pub const ALL: [ParameterKind; 7] = [
        ParameterKind::RespiratoryRate,
        ParameterKind::OxygenSaturation,
        ParameterKind::SupplementalO2,
        ParameterKind::HeartRate,
        ParameterKind::SystolicBp,
        ParameterKind::Temperature,
        ParameterKind::Consciousness,
    ];

    /// Stable identifier used for field commands and lookups.
    pub fn id(self) -> &'static str {
        match self {
            ParameterKind::RespiratoryRate => "rr",
            ParameterKind::OxygenSaturation => "spo2",
            ParameterKind::SupplementalO2 => "o2",
            ParameterKind::HeartRate => "hr",
            ParameterKind::SystolicBp => "sbp",
            ParameterKind::Temperature => "temp",
            ParameterKind::Consciousness => "avpu",
        }
    }

    /// Short label used in reasons and trigger text.
    pub fn label(self) -> &'static str {
        match self {
            ParameterKind::RespiratoryRate => "RR",
            ParameterKind::OxygenSaturation => "SpO₂",
            ParameterKind::SupplementalO2 => "Sup O₂",
            ParameterKind::HeartRate => "HR",
            ParameterKind::SystolicBp => "SBP",
            ParameterKind::Temperature => "Temp",
            ParameterKind::Consciousness => "AVPU",
        }
    }

    /// Table column heading.
    pub fn column(self) -> &'static str {
        match self {
            ParameterKind::RespiratoryRate => "Resp Rate",
            ParameterKind::OxygenSaturation => "SpO₂ (%)",
            ParameterKind::SupplementalO2 => "Sup O₂",
            ParameterKind::HeartRate => "Heart Rate",
            ParameterKind::SystolicBp => "Systolic BP",
            ParameterKind::Temperature => "Temp (°C)",
            ParameterKind::Consciousness => "AVPU",
        }
    }

    /// Position in [`ParameterKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a parameter by its stable id.
    pub fn from_id(s: &str) -> Option<Self> {
        ParameterKind::ALL.into_iter().find(|k| k.id() == s)
    }
}
