//! Copy operations: full, ranged, and position-based duplication.

use crate::series::Series;
use crate::unit::{ScalarUnit, SeriesUnit};

/// A borrowed series/index pair, as carried by interpreter values
/// that reference a position inside a series.
#[derive(Clone, Copy, Debug)]
pub struct Position<'a, T: SeriesUnit> {
    series: &'a Series<T>,
    index: usize,
}

impl<'a, T: SeriesUnit> Position<'a, T> {
    /// Reference a position inside `series`. An index past the end is
    /// allowed; operations treat it as the tail.
    pub fn new(series: &'a Series<T>, index: usize) -> Self {
        Self { series, index }
    }

    /// The referenced series.
    pub fn series(&self) -> &Series<T> {
        self.series
    }

    /// The referenced index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Element count from the position to the tail.
    pub fn len_at(&self) -> usize {
        self.series.len().saturating_sub(self.index)
    }
}

impl<T: ScalarUnit> Series<T> {
    /// Duplicate the whole series, terminator included, into a
    /// freshly allocated independent series.
    pub fn copy_full(&self) -> Series<T> {
        self.copy_range(0, self.len())
    }

    /// Duplicate `len` elements starting at `index`, plus the one
    /// unit following the range, into an independent terminated
    /// series. The source must have a valid unit at `index + len` —
    /// in practice the range must stop at or before the tail.
    pub fn copy_range(&self, index: usize, len: usize) -> Series<T> {
        debug_assert!(
            index + len <= self.len(),
            "copy_range source must be terminated at index + len"
        );
        let mut copy = Series::with_capacity(len);
        copy.store_mut().window_mut()[..len + 1]
            .copy_from_slice(&self.store().window()[index..index + len + 1]);
        copy.set_len(len);
        copy.terminate();
        copy.verify();
        copy
    }

    /// Duplicate from an externally-owned position reference to the
    /// tail of its series.
    pub fn copy_at_position(position: &Position<'_, T>) -> Series<T> {
        let index = position.index().min(position.series().len());
        position.series().copy_range(index, position.len_at())
    }
}
