//! Removal and bias management.
//!
//! Head removal on dynamic storage is O(1): the logical start advances
//! by growing `bias` instead of moving memory. Consolidation bounds
//! how much slack the bias can pin: once it crosses either threshold
//! (the bias field maximum, or more than half the allocation), the
//! live elements are shifted back to the allocation origin and the
//! bias returns to zero.

use skald_core::SeriesError;

use crate::series::Series;
use crate::store::{Store, MAX_SERIES_BIAS};
use crate::unit::SeriesUnit;

impl<T: SeriesUnit> Series<T> {
    /// Remove `len` elements starting at `index`.
    ///
    /// No-op when `len` is zero or `index` is past the end. Head
    /// removal on dynamic storage takes the bias fast path; removal
    /// reaching the tail truncates; anything else shifts the
    /// surviving suffix down over the gap. The series is terminated
    /// on return.
    ///
    /// The only failure is [`SeriesError::BiasOverflow`], when the
    /// bias counter itself cannot absorb the removal.
    pub fn remove(&mut self, index: usize, len: usize) -> Result<(), SeriesError> {
        if len == 0 {
            return Ok(());
        }
        let len_old = self.len();

        // Head removal on dynamic storage: advance the logical start
        // without moving any element.
        let head_fast_path = index == 0
            && match self.store_mut() {
                Store::Dynamic(d) => {
                    let len = len.min(len_old);
                    d.len -= len;

                    if d.len == 0 {
                        // Reclaim all slack: window back to the
                        // allocation origin, terminate at length zero.
                        d.bias = 0;
                        d.buf[0] = T::TERMINATOR;
                    } else {
                        let grown = u32::try_from(len)
                            .ok()
                            .and_then(|delta| d.bias.checked_add(delta))
                            .ok_or(SeriesError::BiasOverflow {
                                bias: d.bias,
                                delta: len,
                            })?;
                        d.bias = grown;

                        // Two independent consolidation triggers: the
                        // bias field maximum, and more-than-half-biased.
                        if d.bias >= MAX_SERIES_BIAS || d.bias as usize > d.rest() {
                            d.rebase(true);
                        }
                    }
                    true
                }
                Store::Inline { .. } => false,
            };
        if head_fast_path {
            self.verify();
            return Ok(());
        }

        if index >= len_old {
            return Ok(());
        }

        // Removal reaching the tail: truncate, no data movement. The
        // subtraction cannot wrap (index < len_old here), and unlike
        // `index + len` it cannot overflow on an oversized `len`.
        if len >= len_old - index {
            self.set_len(index);
            self.terminate();
            self.verify();
            return Ok(());
        }

        // General case: shift the surviving suffix down over the gap.
        self.store_mut()
            .window_mut()
            .copy_within(index + len..len_old, index);
        self.set_len(len_old - len);
        self.terminate();
        self.verify();
        Ok(())
    }

    /// Reclaim front slack: reset bias to zero and restore the data
    /// origin to the allocation start. With `keep` the live elements
    /// are relocated and the series re-terminated; without it the
    /// relocation is skipped, valid only when the caller is about to
    /// overwrite the whole content.
    pub fn unbias(&mut self, keep: bool) {
        if let Store::Dynamic(d) = self.store_mut() {
            d.rebase(keep);
        }
        if keep {
            self.verify();
        }
    }
}
