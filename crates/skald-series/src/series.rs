//! The series container type and its structural accessors.

use skald_core::{Cell, Tick};

use crate::alloc;
use crate::check::NodeStamp;
use crate::store::{DynamicStore, Store, INLINE_UNITS};
use crate::unit::SeriesUnit;

/// A resizable, typed, contiguous container of fixed-width units.
///
/// The unit type decides the series kind: scalar units (`u8`, `u16`,
/// `u32`, `u64`) make flat binaries/strings/vectors, [`Cell`] makes a
/// block ([`Array`]). Storage always reserves one slot past `len` for
/// the terminator, so `len() < capacity()` holds at all times.
///
/// Mutating operations may relocate backing storage; any slice
/// previously borrowed from the series is invalidated, which the
/// borrow checker enforces.
#[derive(Debug)]
pub struct Series<T: SeriesUnit> {
    store: Store<T>,
    stamp: NodeStamp,
    birth: Tick,
    managed: bool,
    read_only: bool,
}

/// A series of interpreter value-cells, END-terminated.
pub type Array = Series<Cell>;

impl<T: SeriesUnit> Series<T> {
    /// Create a series able to hold `capacity` elements before its
    /// first growth. One extra terminator slot is always reserved;
    /// series small enough are stored inline and never touch the
    /// allocator.
    pub fn with_capacity(capacity: usize) -> Self {
        let store = if capacity < INLINE_UNITS {
            Store::Inline {
                buf: [T::TERMINATOR; INLINE_UNITS],
                len: 0,
            }
        } else {
            Store::Dynamic(DynamicStore {
                buf: alloc::allocate_units::<T>(capacity + 1),
                bias: 0,
                len: 0,
            })
        };
        Self {
            store,
            stamp: NodeStamp::LIVE,
            birth: Tick::default(),
            managed: false,
            read_only: false,
        }
    }

    /// Logical element count.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the series holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visible capacity ("rest") in units, terminator slot included.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Head slack in units. Always zero for inline storage.
    pub fn bias(&self) -> u32 {
        self.store.bias()
    }

    /// Byte size of one element.
    pub fn width(&self) -> usize {
        T::width()
    }

    /// Whether backing storage is heap-allocated.
    pub fn is_dynamic(&self) -> bool {
        self.store.is_dynamic()
    }

    /// The logical contents.
    pub fn as_slice(&self) -> &[T] {
        &self.store.window()[..self.len()]
    }

    /// Mutable view of the logical contents.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len();
        &mut self.store.window_mut()[..len]
    }

    /// The element at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// The unit in the slot immediately after the last element — the
    /// terminator, when the series is in a terminated state.
    pub fn tail_unit(&self) -> T {
        self.store.window()[self.len()]
    }

    /// Whether the series is marked read-only by the protection layer.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Set or clear the read-only protection flag.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Whether the ownership layer manages this series.
    pub fn is_managed(&self) -> bool {
        self.managed
    }

    /// Hand the series to the ownership layer.
    pub fn mark_managed(&mut self) {
        self.managed = true;
    }

    /// Structural validity stamp, consumed by the verification layer.
    pub fn stamp(&self) -> NodeStamp {
        self.stamp
    }

    /// Called by the ownership layer when it reclaims the series.
    /// Any later structural check fails, and the stale-series
    /// diagnostic reports the freed state.
    pub fn mark_freed(&mut self) {
        self.stamp = NodeStamp::FREED;
    }

    /// Evaluator step at which the series was created.
    pub fn birth(&self) -> Tick {
        self.birth
    }

    /// Record the creation step for stale-handle diagnostics.
    pub fn stamp_birth(&mut self, tick: Tick) {
        self.birth = tick;
    }

    /// Write the terminator into the slot at `len`.
    pub(crate) fn terminate(&mut self) {
        let len = self.len();
        self.store.window_mut()[len] = T::TERMINATOR;
    }

    /// Set the logical length without touching contents or the
    /// terminator. Callers are responsible for re-terminating.
    pub(crate) fn set_len(&mut self, len: usize) {
        self.store.set_len(len);
    }

    /// Make sure the visible capacity is at least `min_rest` units,
    /// growing (and possibly relocating, or promoting inline storage
    /// to dynamic) as needed. Bias is preserved.
    pub(crate) fn ensure_capacity(&mut self, min_rest: usize) {
        if self.capacity() >= min_rest {
            return;
        }
        match &mut self.store {
            Store::Inline { buf, len } => {
                let len = *len as usize;
                let mut grown = alloc::allocate_units::<T>(min_rest);
                grown[..len].copy_from_slice(&buf[..len]);
                self.store = Store::Dynamic(DynamicStore {
                    buf: grown,
                    bias: 0,
                    len,
                });
            }
            Store::Dynamic(d) => {
                let total = d.bias as usize + min_rest;
                let old = std::mem::take(&mut d.buf);
                d.buf = alloc::grow_units(old, total);
            }
        }
    }

    /// Direct access to the storage variant for sibling modules.
    pub(crate) fn store_mut(&mut self) -> &mut Store<T> {
        &mut self.store
    }

    /// Shared access to the storage variant for sibling modules.
    pub(crate) fn store(&self) -> &Store<T> {
        &self.store
    }

    /// Re-check the container invariants after a terminating
    /// mutation. Compiled out of performance builds.
    #[inline]
    pub(crate) fn verify(&self) {
        #[cfg(any(debug_assertions, feature = "verify"))]
        crate::check::assert_series(self);
    }
}

impl<T: SeriesUnit> Default for Series<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skald_core::Cell;

    #[test]
    fn small_series_stays_inline() {
        let s: Series<u8> = Series::with_capacity(7);
        assert!(!s.is_dynamic());
        assert_eq!(s.capacity(), INLINE_UNITS);
        assert_eq!(s.bias(), 0);
        assert!(s.is_empty());
        assert_eq!(s.tail_unit(), 0);
    }

    #[test]
    fn large_series_goes_dynamic() {
        let s: Series<u8> = Series::with_capacity(32);
        assert!(s.is_dynamic());
        assert!(s.capacity() >= 33);
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn fresh_array_is_end_terminated() {
        let a = Array::with_capacity(16);
        assert!(a.tail_unit().is_end());
        assert_eq!(a.width(), std::mem::size_of::<Cell>());
    }

    #[test]
    fn promotion_preserves_content() {
        let mut s: Series<u8> = Series::with_capacity(0);
        assert!(!s.is_dynamic());
        s.append(&[1, 2, 3]);
        s.ensure_capacity(100);
        assert!(s.is_dynamic());
        assert_eq!(s.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn flags_and_stamps() {
        let mut s: Series<u8> = Series::with_capacity(4);
        assert!(!s.is_read_only());
        assert!(!s.is_managed());
        s.set_read_only(true);
        s.mark_managed();
        s.stamp_birth(Tick(9));
        assert!(s.is_read_only());
        assert!(s.is_managed());
        assert_eq!(s.birth(), Tick(9));
        assert!(s.stamp().is_live());
        s.mark_freed();
        assert!(!s.stamp().is_live());
    }
}
