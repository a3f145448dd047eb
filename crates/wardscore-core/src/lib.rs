//! wardscore-core
//!
//! Pure domain types for the ward observation board: the observation record,
//! the fixed parameter vocabulary, and lenient field parsing. No I/O and no
//! terminal dependency — this is the shared vocabulary of the wardscore
//! system.

pub mod error;
pub mod models;
