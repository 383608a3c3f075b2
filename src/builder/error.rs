//! Build errors for the calculator builder.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Tape capacity must be at least 1. Use .without_tape() to disable recording")]
    ZeroTapeCapacity,
}
