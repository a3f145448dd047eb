//! wardscore-engine
//!
//! Early-warning scoring rules. Pure data in, pure data out — no terminal
//! or storage dependency. Defines the per-parameter scorers, the point
//! aggregate, the band-selection policy, and the trigger explanation text.

pub mod aggregate;
pub mod band;
pub mod evaluate;
pub mod explain;
pub mod parameters;
pub mod scoring;

use wardscore_core::models::observation::Observation;
use wardscore_core::models::parameter::ParameterKind;

use scoring::ScoreResult;

/// Trait implemented by each scored observation parameter.
pub trait Parameter: Send + Sync {
    /// Which of the seven fixed parameters this is.
    fn kind(&self) -> ParameterKind;

    /// Map the parameter's current value to points, zone, and reason.
    fn score(&self, obs: &Observation) -> ScoreResult;

    /// One-line threshold summary for the reference card.
    fn thresholds(&self) -> &'static str;

    /// Stable identifier (e.g. "rr", "spo2").
    fn id(&self) -> &'static str {
        self.kind().id()
    }

    /// Short display label (e.g. "RR", "SpO₂").
    fn label(&self) -> &'static str {
        self.kind().label()
    }
}

/// All seven parameters in scoring order: RR, SpO₂, Sup O₂, HR, SBP, Temp,
/// AVPU.
pub fn all_parameters() -> Vec<Box<dyn Parameter>> {
    vec![
        Box::new(parameters::respiratory_rate::RespiratoryRate),
        Box::new(parameters::oxygen_saturation::OxygenSaturation),
        Box::new(parameters::supplemental_oxygen::SupplementalOxygen),
        Box::new(parameters::heart_rate::HeartRate),
        Box::new(parameters::systolic_bp::SystolicBp),
        Box::new(parameters::temperature::Temperature),
        Box::new(parameters::consciousness::Consciousness),
    ]
}

/// Look up a parameter by ID.
pub fn get_parameter(id: &str) -> Option<Box<dyn Parameter>> {
    all_parameters().into_iter().find(|p| p.id() == id)
}

/// Score every parameter of an observation, in fixed order.
pub fn score_observation(obs: &Observation) -> [ScoreResult; 7] {
    [
        parameters::respiratory_rate::RespiratoryRate.score(obs),
        parameters::oxygen_saturation::OxygenSaturation.score(obs),
        parameters::supplemental_oxygen::SupplementalOxygen.score(obs),
        parameters::heart_rate::HeartRate.score(obs),
        parameters::systolic_bp::SystolicBp.score(obs),
        parameters::temperature::Temperature.score(obs),
        parameters::consciousness::Consciousness.score(obs),
    ]
}
