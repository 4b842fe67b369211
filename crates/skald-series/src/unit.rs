//! Typed series units.
//!
//! The C lineage of this container stored raw bytes plus a runtime
//! element width. Here the unit type fixes the width at compile time:
//! a `Series<u8>` is a binary, `Series<u16>` a string, `Series<Cell>`
//! a block. The trait also supplies the per-kind terminator.

use std::fmt;

use skald_core::Cell;

/// A fixed-width element a series can store.
///
/// Units are duplicated bitwise (`Copy`) and never interpreted by the
/// container. `TERMINATOR` is the sentinel written immediately after
/// the last logical element.
pub trait SeriesUnit: Copy + PartialEq + fmt::Debug + 'static {
    /// The canonical terminator unit for this series kind.
    const TERMINATOR: Self;

    /// Whether this unit is an interpreter value-cell. Cell arrays
    /// have different termination and copy rules from flat scalar
    /// series.
    const IS_CELL: bool;

    /// Whether this unit terminates a series.
    fn is_terminator(&self) -> bool {
        *self == Self::TERMINATOR
    }

    /// Byte size of one unit.
    fn width() -> usize {
        std::mem::size_of::<Self>()
    }
}

/// Marker for flat scalar units (non-cell series).
///
/// Gates the operations the cell-array side must not use — `append`,
/// `copy_full`, the scratch-buffer snapshot — so that what the C
/// original could only assert at runtime is a compile error here.
pub trait ScalarUnit: SeriesUnit {}

macro_rules! scalar_unit {
    ($($t:ty),*) => {
        $(
            impl SeriesUnit for $t {
                const TERMINATOR: Self = 0;
                const IS_CELL: bool = false;
            }
            impl ScalarUnit for $t {}
        )*
    };
}

scalar_unit!(u8, u16, u32, u64);

impl SeriesUnit for Cell {
    const TERMINATOR: Self = Cell::END;
    const IS_CELL: bool = true;

    // END cells are not canonized to a single bit pattern by the
    // evaluator; only the kind tag decides.
    fn is_terminator(&self) -> bool {
        self.is_end()
    }
}
