//! Invariant verification layer.
//!
//! A cross-cutting pass over the series' own fields, run after
//! terminating mutations in verification builds (`debug_assertions`
//! or the `verify` feature) and callable unconditionally — the test
//! suite goes through [`series`] and [`terminated`] directly, so the
//! layer is exercised regardless of build toggles. Violations are
//! programmer errors, not user-level conditions: the assert wrappers
//! abort.

use std::error::Error;
use std::fmt;

use skald_core::Tick;

use crate::series::Series;
use crate::unit::SeriesUnit;

/// Structural validity word stored in every series header.
///
/// A distilled form of the node-header flag bits of the original
/// layout: one pattern for a live container node, another written by
/// the ownership layer on reclamation. Any other value means the
/// header was overwritten.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeStamp(u32);

impl NodeStamp {
    /// The pattern carried by every live series.
    pub const LIVE: NodeStamp = NodeStamp(0x5EA5_11FE);
    /// The pattern written when the ownership layer frees a series.
    pub const FREED: NodeStamp = NodeStamp(0x5EA5_DEAD);

    /// Whether this is the live pattern.
    pub fn is_live(&self) -> bool {
        *self == Self::LIVE
    }

    /// The raw pattern, for diagnostics.
    pub fn bits(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// A broken series invariant found by the verification layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The structural stamp is not the live pattern — a freed node or
    /// an overwritten header.
    NotLive {
        /// The stamp actually found.
        stamp: NodeStamp,
    },
    /// The logical length has reached or passed the visible capacity,
    /// leaving no terminator slot.
    LengthExceedsCapacity {
        /// Logical element count.
        len: usize,
        /// Visible capacity in units.
        capacity: usize,
    },
    /// The slot after the last element does not hold the terminator.
    Unterminated {
        /// Logical element count (the slot checked).
        len: usize,
        /// Element width in bytes.
        width: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotLive { stamp } => {
                write!(f, "series node stamp {stamp} is not the live pattern")
            }
            Self::LengthExceedsCapacity { len, capacity } => {
                write!(f, "series length {len} >= capacity {capacity}")
            }
            Self::Unterminated { len, width } => {
                write!(
                    f,
                    "series of width {width} is not terminated at element {len}"
                )
            }
        }
    }
}

impl Error for InvariantViolation {}

/// Verify the termination invariant: the slot at `len` holds the
/// canonical end sentinel (cell arrays) or a zero unit (scalar
/// series).
pub fn terminated<T: SeriesUnit>(s: &Series<T>) -> Result<(), InvariantViolation> {
    if s.tail_unit().is_terminator() {
        Ok(())
    } else {
        Err(InvariantViolation::Unterminated {
            len: s.len(),
            width: s.width(),
        })
    }
}

/// Verify the structural invariants: live node stamp, strict
/// `len < capacity`, then termination.
pub fn series<T: SeriesUnit>(s: &Series<T>) -> Result<(), InvariantViolation> {
    if !s.stamp().is_live() {
        return Err(InvariantViolation::NotLive { stamp: s.stamp() });
    }
    if s.len() >= s.capacity() {
        return Err(InvariantViolation::LengthExceedsCapacity {
            len: s.len(),
            capacity: s.capacity(),
        });
    }
    terminated(s)
}

/// Abort on a broken termination invariant.
pub fn assert_terminated<T: SeriesUnit>(s: &Series<T>) {
    if let Err(violation) = terminated(s) {
        panic!("series invariant violated: {violation}");
    }
}

/// Abort on any broken series invariant.
pub fn assert_series<T: SeriesUnit>(s: &Series<T>) {
    if let Err(violation) = series(s) {
        panic!("series invariant violated: {violation}");
    }
}

/// Diagnostic abort for a series handle used after its lifetime.
///
/// Reports whether the series was managed and whether it was still
/// live or already freed, relative to the recorded creation step and
/// the current one, then aborts. The original implementation poked a
/// canary field here so an attached memory-safety tool would produce
/// its own trace; in safe Rust the report itself is the trace.
pub fn panic_stale<T: SeriesUnit>(s: &Series<T>, now: Tick) -> ! {
    let managed = if s.is_managed() {
        "managed"
    } else {
        "unmanaged"
    };
    let state = if s.stamp().is_live() {
        "created"
    } else {
        "freed"
    };
    panic!(
        "stale series: {managed} series was likely {state} during evaluator tick {}, \
         current tick {now}",
        s.birth()
    );
}
