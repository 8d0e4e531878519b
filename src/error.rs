//! Library error types.

use thiserror::Error;

/// Errors the alignment engine can signal to its caller.
///
/// Degenerate input (empty reference or transcript) is never an error; it
/// produces defined zero/empty results instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A similarity threshold outside the closed [0, 1] range is a
    /// configuration mistake and is never silently clamped.
    #[error("similarity threshold {0} is outside [0.0, 1.0]")]
    InvalidThreshold(f64),
}
