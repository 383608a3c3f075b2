//! Core calculator types and logic.
//!
//! This module contains the pure functional core:
//! - The accumulator state and its transitions
//! - Operators, digits and the arithmetic they perform
//! - Parsing and formatting of entry text
//! - Error types
//!
//! Nothing in this module has side effects.

mod error;
mod number;
mod operator;
mod state;

pub use error::{CalcError, StateError, Violation};
pub use number::{format_number, parse_number};
pub use operator::{Digit, Operator};
pub use state::{CalculatorState, Mode, Readout, ERROR_SENTINEL};
