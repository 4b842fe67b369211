//! Skald runtime memory core: typed series containers.
//!
//! This is the facade crate that re-exports the public API of the
//! Skald memory sub-crates. For most users, adding `skald` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use skald::prelude::*;
//!
//! // A binary is a series of bytes.
//! let mut bin: Series<u8> = Series::with_capacity(16);
//! bin.append(&[1, 2, 3]);
//! assert_eq!(bin.as_slice(), &[1, 2, 3]);
//!
//! // Head removal on dynamic storage is O(1) via bias.
//! bin.remove(0, 1).unwrap();
//! assert_eq!(bin.as_slice(), &[2, 3]);
//!
//! // A block is a series of cells, END-terminated.
//! let mut block = Array::with_capacity(8);
//! block.append_cells(&[Cell::int(7), Cell::logic(true)]);
//! assert!(block.tail_unit().is_end());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use skald_core as core;
pub use skald_series as series;

/// Commonly used types, ready for glob import.
pub mod prelude {
    pub use skald_core::{Cell, CellKind, SeriesError, Tick};
    pub use skald_series::{
        Array, BufLease, Position, ScalarUnit, ScratchBuffer, Series, SeriesUnit,
    };
}

pub use skald_core::{Cell, CellKind, SeriesError, Tick};
pub use skald_series::{
    check, Array, BufLease, InvariantViolation, NodeStamp, Position, ScalarUnit, ScratchBuffer,
    Series, SeriesUnit, INLINE_UNITS, MAX_SERIES_BIAS,
};
