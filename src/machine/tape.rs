//! Bounded record of inputs and the transitions they caused.
//!
//! The tape is immutable: [`Tape::record`] returns a new tape with the entry
//! appended, evicting the oldest entry once capacity is reached.

use crate::core::{CalcError, Mode, Readout};
use crate::input::Input;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;
use thiserror::Error;

/// What a single input did.
///
/// # Example
///
/// ```rust
/// use tally::core::{Mode, Operator, Readout};
/// use tally::input::Input;
/// use tally::machine::TapeEntry;
/// use chrono::Utc;
///
/// let entry = TapeEntry {
///     input: Input::Operator(Operator::Add),
///     from: Mode::EnteringLeft,
///     to: Mode::EnteringRight,
///     readout: Readout {
///         value_text: "5".to_string(),
///         history_text: "5+".to_string(),
///     },
///     failure: None,
///     timestamp: Utc::now(),
/// };
/// assert!(entry.changed_mode());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// The input that was applied
    pub input: Input,
    /// Mode before the input
    pub from: Mode,
    /// Mode after the input
    pub to: Mode,
    /// Readout after the input
    pub readout: Readout,
    /// Why the input landed in the error state, if it did
    pub failure: Option<CalcError>,
    /// When the input was applied
    pub timestamp: DateTime<Utc>,
}

impl TapeEntry {
    pub fn changed_mode(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered, bounded list of [`TapeEntry`] values, oldest first.
///
/// # Example
///
/// ```rust
/// use tally::core::{Digit, Mode, Readout};
/// use tally::input::Input;
/// use tally::machine::{Tape, TapeEntry};
/// use chrono::Utc;
///
/// let entry = |c| TapeEntry {
///     input: Input::Digit(Digit::new(c).unwrap()),
///     from: Mode::EnteringLeft,
///     to: Mode::EnteringLeft,
///     readout: Readout::default(),
///     failure: None,
///     timestamp: Utc::now(),
/// };
///
/// let tape = Tape::with_capacity(2);
/// let tape = tape.record(entry('1')).record(entry('2')).record(entry('3'));
///
/// assert_eq!(tape.len(), 2);
/// assert_eq!(tape.entries()[0].input, Input::Digit(Digit::new('2').unwrap()));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawTape")]
pub struct Tape {
    capacity: usize,
    entries: VecDeque<TapeEntry>,
}

/// Errors raised when restoring a tape.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TapeError {
    #[error("Tape holds {len} entries but its capacity is {capacity}")]
    OverCapacity { len: usize, capacity: usize },
}

/// Unchecked wire form; the bound is checked in `TryFrom`.
#[derive(Deserialize)]
struct RawTape {
    capacity: usize,
    entries: VecDeque<TapeEntry>,
}

impl TryFrom<RawTape> for Tape {
    type Error = TapeError;

    fn try_from(raw: RawTape) -> Result<Self, Self::Error> {
        if raw.entries.len() > raw.capacity {
            return Err(TapeError::OverCapacity {
                len: raw.entries.len(),
                capacity: raw.capacity,
            });
        }
        Ok(Self {
            capacity: raw.capacity,
            entries: raw.entries,
        })
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Capacity used by [`Tape::new`].
    pub const DEFAULT_CAPACITY: usize = 32;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// A tape holding at most `capacity` entries. Zero keeps nothing.
    ///
    /// Storage grows with use; eviction in [`Tape::record`] enforces the bound.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::new(),
        }
    }

    /// Record an entry, returning a new tape.
    ///
    /// The original tape is left untouched.
    pub fn record(&self, entry: TapeEntry) -> Self {
        if self.capacity == 0 {
            return self.clone();
        }

        let mut entries = self.entries.clone();
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);

        Self {
            capacity: self.capacity,
            entries,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> &VecDeque<TapeEntry> {
        &self.entries
    }

    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// Modes traversed: the first entry's `from`, then every `to`.
    pub fn get_path(&self) -> Vec<Mode> {
        let mut path = Vec::with_capacity(self.entries.len() + 1);
        if let Some(first) = self.entries.front() {
            path.push(first.from);
        }
        path.extend(self.entries.iter().map(|entry| entry.to));
        path
    }

    /// Entries whose input failed.
    pub fn failures(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter().filter(|entry| entry.failure.is_some())
    }

    /// Time between the oldest and newest entry, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.front()?, self.entries.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
