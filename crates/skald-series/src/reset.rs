//! Reset, resize, and clear.

use skald_core::SeriesError;

use crate::series::Series;
use crate::store::Store;
use crate::unit::SeriesUnit;

impl<T: SeriesUnit> Series<T> {
    /// Reset to empty: drop bias and slack, truncate to length zero,
    /// re-terminate. The allocation is retained for reuse.
    pub fn reset(&mut self) {
        if let Store::Dynamic(d) = self.store_mut() {
            d.rebase(false);
        }
        self.set_len(0);
        self.terminate();
        self.verify();
    }

    /// Fill the entire backing region with terminator units and drop
    /// all slack. The length is untouched; the zeroed prefix remains
    /// addressable content.
    ///
    /// Returns [`SeriesError::ReadOnly`] when the protection layer has
    /// marked the series immutable.
    pub fn clear(&mut self) -> Result<(), SeriesError> {
        if self.is_read_only() {
            return Err(SeriesError::ReadOnly);
        }
        match self.store_mut() {
            Store::Inline { buf, .. } => buf.fill(T::TERMINATOR),
            Store::Dynamic(d) => {
                d.rebase(false);
                d.buf.fill(T::TERMINATOR);
            }
        }
        self.terminate();
        self.verify();
        Ok(())
    }

    /// Empty the series and guarantee capacity for `size` elements:
    /// slack is dropped, the length becomes zero, storage grows to at
    /// least `size` plus the terminator slot. Prepares a bulk fill.
    pub fn resize(&mut self, size: usize) {
        self.set_len(0);
        if let Store::Dynamic(d) = self.store_mut() {
            d.rebase(true);
        }
        self.ensure_capacity(size + 1);
        self.terminate();
        self.verify();
    }
}
