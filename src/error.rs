//! Error types for engine setup and the presentation boundary.

use thiserror::Error;

/// Everything that can go wrong outside of a generation step.
///
/// Stepping itself cannot fail once an engine exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifeError {
    #[error("failed to allocate {what} for {cells} cells")]
    Allocation { what: &'static str, cells: usize },

    #[error("seed holds {actual} bytes, grid needs {expected}")]
    SeedLength { expected: usize, actual: usize },

    #[error("pixel buffer holds {actual} pixels, grid needs {expected}")]
    PixelBuffer { expected: usize, actual: usize },

    #[error("invalid {name} `{value}`")]
    BadArgument { name: &'static str, value: String },

    #[error("unknown strategy `{0}` (expected direct, separable or vectorized)")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
