//! Success values returned by mutating operations.

use std::fmt;

use crate::schedule::Day;

/// What a successful mutation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Enrolled { name: String, code: String },
    Dropped { name: String, code: String },
    HolidaySet { day: Day },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Enrolled { name, .. } => write!(f, "Successfully enrolled in {name}!"),
            Outcome::Dropped { name, .. } => write!(f, "Successfully dropped {name}."),
            Outcome::HolidaySet { day } => write!(f, "Holiday set for {day}."),
        }
    }
}
