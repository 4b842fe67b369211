//! Strongly-typed execution-step counter.

use std::fmt;

/// Monotonically increasing evaluator step counter.
///
/// The evaluator bumps this once per step. Series record the tick at
/// which they were created so the stale-handle diagnostic can report
/// how old a suspect series is relative to the current step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tick(pub u64);

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Tick {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
