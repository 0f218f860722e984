//! Framework error type.
//!
//! Sub-crates define their own error enums and convert them into `FhError`
//! via `From` impls where a caller wants a single error type.

use thiserror::Error;

/// The top-level error type for `fh-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FhError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `fh-*` crates.
pub type FhResult<T> = Result<T, FhError>;
