use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid supplemental O₂ value {0:?} (expected yes, no, or empty)")]
    InvalidSupplementalO2(String),

    #[error("invalid AVPU value {0:?} (expected A, V, P, U, F, or empty)")]
    InvalidConsciousness(String),
}
