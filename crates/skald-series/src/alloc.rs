//! Allocator facade for series backing storage.
//!
//! The real pooled allocator lives outside this crate; series code
//! consumes it through these two entry points. Buffers are plain
//! `Box<[T]>` values, terminator-filled on allocation, and growth may
//! relocate — callers hold offsets, never pointers, so relocation is
//! invisible to them.

use crate::unit::SeriesUnit;

/// Smallest dynamic allocation, in units.
pub const MIN_UNITS: usize = 8;

/// Allocate a fresh backing buffer of at least `capacity` units.
///
/// The requested capacity is rounded up to the next power-of-two size
/// class at or above [`MIN_UNITS`] so repeated small growths amortize.
/// Every slot holds the terminator unit.
pub fn allocate_units<T: SeriesUnit>(capacity: usize) -> Box<[T]> {
    vec![T::TERMINATOR; round_capacity(capacity)].into_boxed_slice()
}

/// Grow a backing buffer to at least `new_capacity` units.
///
/// Returns the old buffer unchanged if it is already large enough;
/// otherwise relocates into a fresh size class, preserving contents
/// and terminator-filling the tail.
pub fn grow_units<T: SeriesUnit>(buf: Box<[T]>, new_capacity: usize) -> Box<[T]> {
    if buf.len() >= new_capacity {
        return buf;
    }
    let mut grown = allocate_units::<T>(new_capacity);
    grown[..buf.len()].copy_from_slice(&buf);
    grown
}

fn round_capacity(requested: usize) -> usize {
    requested.max(MIN_UNITS).next_power_of_two()
}
