//! Recoverable error types surfaced by series operations.
//!
//! These are the conditions the interpreter's error path can catch and
//! turn into language-level errors. Internal invariant violations are
//! not represented here — those abort via the verification layer in
//! `skald-series`.

use std::error::Error;
use std::fmt;

/// Errors a series mutation can return to the interpreter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeriesError {
    /// Head-removal bias accumulation overflowed its counter.
    BiasOverflow {
        /// Bias before the failed increment.
        bias: u32,
        /// Element count the removal tried to add to the bias.
        delta: usize,
    },
    /// An in-place mutation was attempted on a protected series.
    ReadOnly,
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BiasOverflow { bias, delta } => {
                write!(f, "series bias overflow: bias {bias} + removal of {delta}")
            }
            Self::ReadOnly => write!(f, "series is read-only"),
        }
    }
}

impl Error for SeriesError {}
