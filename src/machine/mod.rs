//! The imperative shell around the pure core.
//!
//! [`Calculator`] owns one [`CalculatorState`](crate::core::CalculatorState),
//! applies inputs in arrival order, caches the readout for the display, and
//! keeps a bounded [`Tape`] of what each input did. Logging and clock reads
//! happen here and nowhere else.

mod calculator;
mod tape;

pub use calculator::Calculator;
pub use tape::{Tape, TapeEntry, TapeError};
