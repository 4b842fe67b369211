//! Core types for the Skald runtime.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value-cell representation shared by the interpreter and the
//! series container, the execution-step counter used for diagnostics,
//! and the recoverable error types that series operations surface to
//! the interpreter's error path.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;

pub use cell::{Cell, CellKind};
pub use error::SeriesError;
pub use id::Tick;
