//! The shared scratch buffer for incremental builds.
//!
//! The runtime keeps a few process-lifetime series that unrelated
//! build operations (molding, string joins, encoding) reuse to avoid
//! allocate/free churn. The C lineage exposed these as bare globals
//! with a caller-enforced discipline; here the buffer is an explicit
//! handle and use goes through a scoped [`BufLease`], so two
//! interleaved builds against the same buffer cannot compile.

use crate::series::Series;
use crate::store::Store;
use crate::unit::ScalarUnit;

/// A long-lived reusable build buffer.
///
/// Created unallocated at runtime startup and allocated on first use;
/// leasing an unallocated buffer is a fatal runtime error, not a
/// recoverable condition.
#[derive(Debug)]
pub struct ScratchBuffer<T: ScalarUnit> {
    series: Option<Series<T>>,
}

impl<T: ScalarUnit> ScratchBuffer<T> {
    /// A buffer that has not been allocated yet.
    pub const fn unallocated() -> Self {
        Self { series: None }
    }

    /// A buffer backed by storage for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            series: Some(Series::with_capacity(capacity)),
        }
    }

    /// Allocate backing storage if none exists yet.
    pub fn allocate(&mut self, capacity: usize) {
        if self.series.is_none() {
            self.series = Some(Series::with_capacity(capacity));
        }
    }

    /// Whether backing storage exists.
    pub fn is_allocated(&self) -> bool {
        self.series.is_some()
    }

    /// Check out the buffer for one build.
    ///
    /// The exclusive borrow is the reentrancy protection: a second
    /// lease cannot be taken while one is alive.
    ///
    /// # Panics
    ///
    /// Panics if the buffer was never allocated.
    pub fn lease(&mut self) -> BufLease<'_, T> {
        match &mut self.series {
            Some(series) => BufLease { series },
            None => panic!("scratch buffer not yet allocated"),
        }
    }
}

/// Exclusive access to a [`ScratchBuffer`] for the duration of one
/// build operation.
#[derive(Debug)]
pub struct BufLease<'a, T: ScalarUnit> {
    series: &'a mut Series<T>,
}

impl<T: ScalarUnit> BufLease<'_, T> {
    /// Prepare the buffer for a new build: drop all slack, grow if
    /// `len` exceeds current capacity, and set the length directly to
    /// `len` WITHOUT writing a terminator. Returns the writable view
    /// over those `len` slots, valid until the next mutating call.
    ///
    /// The caller must [`terminate`](Self::terminate) once content is
    /// written.
    pub fn reset(&mut self, len: usize) -> &mut [T] {
        self.series.set_len(0);
        // Straight to the store: the buffer is legitimately
        // unterminated between reset and terminate, so the verifying
        // unbias wrapper does not apply here.
        if let Store::Dynamic(d) = self.series.store_mut() {
            d.rebase(true);
        }
        self.series.expand_at(0, len);
        self.series.as_mut_slice()
    }

    /// Write the terminator after the current content, finishing a
    /// build started by [`reset`](Self::reset).
    pub fn terminate(&mut self) {
        self.series.terminate();
    }

    /// Snapshot the live region from `index` to `end_offset`
    /// (exclusive) into a new independent terminated series.
    pub fn snapshot(&self, index: usize, end_offset: usize) -> Series<T> {
        debug_assert!(index <= end_offset && end_offset <= self.series.len());
        let data = &self.series.as_slice()[index..end_offset];
        let mut copy = Series::with_capacity(data.len());
        copy.append(data);
        copy
    }

    /// The underlying series, for inspection.
    pub fn series(&self) -> &Series<T> {
        self.series
    }

    /// Current logical length of the buffer.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the buffer holds no content.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "scratch buffer not yet allocated")]
    fn leasing_unallocated_buffer_aborts() {
        let mut buf: ScratchBuffer<u8> = ScratchBuffer::unallocated();
        let _ = buf.lease();
    }

    #[test]
    fn allocate_is_idempotent() {
        let mut buf: ScratchBuffer<u8> = ScratchBuffer::unallocated();
        assert!(!buf.is_allocated());
        buf.allocate(16);
        buf.lease().reset(4).copy_from_slice(&[1, 2, 3, 4]);
        buf.allocate(999);
        assert_eq!(buf.lease().len(), 4);
    }

    #[test]
    fn reset_sets_length_without_terminating() {
        let mut buf: ScratchBuffer<u8> = ScratchBuffer::with_capacity(8);
        let mut lease = buf.lease();
        lease.reset(3).copy_from_slice(&[1, 2, 3]);
        lease.terminate();

        // A shorter rebuild leaves the old unit at the new tail slot:
        // reset itself wrote no terminator.
        let view = lease.reset(2);
        assert_eq!(view.len(), 2);
        assert_eq!(lease.series().tail_unit(), 3);
        lease.terminate();
        assert_eq!(lease.series().tail_unit(), 0);
    }

    #[test]
    fn reset_grows_beyond_current_capacity() {
        let mut buf: ScratchBuffer<u8> = ScratchBuffer::with_capacity(4);
        let mut lease = buf.lease();
        let view = lease.reset(200);
        assert_eq!(view.len(), 200);
        view.fill(7);
        lease.terminate();
        assert_eq!(lease.len(), 200);
    }

    #[test]
    fn snapshot_copies_live_region_with_terminator() {
        let mut buf: ScratchBuffer<u8> = ScratchBuffer::with_capacity(16);
        let mut lease = buf.lease();
        lease.reset(5).copy_from_slice(&[1, 2, 3, 4, 5]);
        lease.terminate();

        let copy = lease.snapshot(1, 4);
        assert_eq!(copy.as_slice(), &[2, 3, 4]);
        assert_eq!(copy.tail_unit(), 0);

        // The buffer itself is untouched and reusable.
        assert_eq!(lease.series().as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn buffer_reuse_keeps_allocation() {
        let mut buf: ScratchBuffer<u8> = ScratchBuffer::with_capacity(64);
        let mut lease = buf.lease();
        lease.reset(60).fill(1);
        lease.terminate();
        let capacity = lease.series().capacity();

        let second = lease.reset(30);
        second.fill(2);
        lease.terminate();
        assert_eq!(lease.series().capacity(), capacity);
        assert_eq!(lease.series().as_slice(), &[2; 30]);
    }
}
