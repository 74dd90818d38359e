//! Core error type.
//!
//! Errors only arise at configuration boundaries.  Ticking and job changes
//! never fail: every input produces a well-defined next state.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `fb-core`.
pub type CoreResult<T> = Result<T, CoreError>;
