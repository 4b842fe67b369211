//! The series container: resizable, typed, contiguous storage.
//!
//! Every dynamic value in the Skald runtime — strings, binaries,
//! blocks of cells, vectors, bitsets — sits on top of a [`Series`].
//! This crate implements the container itself: growth, insertion,
//! removal with head-slack bias, copying, reset/resize/clear, the
//! shared scratch buffer, and the invariant verification layer.
//!
//! # Architecture
//!
//! ```text
//! Series<T: SeriesUnit>
//! ├── Store::Inline  — small series embedded in the header, bias 0
//! ├── Store::Dynamic — allocator-owned Box<[T]> + bias + len
//! ├── grow/remove/copy/reset — the mutation surface
//! ├── ScratchBuffer  — long-lived reusable build buffer (scoped lease)
//! └── check          — verification layer (termination, structure)
//! ```
//!
//! Storage is always one unit larger than the logical length: the slot
//! at `len` holds the terminator (a zero unit for scalar series, the
//! `END` cell for cell arrays). Growth may relocate backing storage;
//! the borrow checker enforces what the C runtime this design descends
//! from could only state as a caller rule — no view into a series
//! survives a mutating call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod check;
mod copy;
mod grow;
mod remove;
mod reset;
pub mod scratch;
mod series;
mod store;
mod unit;

pub use check::{InvariantViolation, NodeStamp};
pub use copy::Position;
pub use scratch::{BufLease, ScratchBuffer};
pub use series::{Array, Series};
pub use store::{INLINE_UNITS, MAX_SERIES_BIAS};
pub use unit::{ScalarUnit, SeriesUnit};
