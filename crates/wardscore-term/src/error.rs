use thiserror::Error;

use wardscore_core::error::CoreError;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("no bed {0:?} on the board")]
    UnknownBed(String),

    #[error("unknown field {0:?} (expected rr, spo2, o2, hr, sbp, temp, or avpu)")]
    UnknownField(String),

    #[error("unknown command {0:?} (try 'help')")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Field(#[from] CoreError),
}
