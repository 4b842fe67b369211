//! Growth and insertion.

use skald_core::Cell;

use crate::series::Series;
use crate::unit::{ScalarUnit, SeriesUnit};

impl<T: SeriesUnit> Series<T> {
    /// Grow tail capacity by `delta` units without changing the
    /// length. Reserves writable space ahead of a bulk fill; does not
    /// terminate.
    pub fn extend(&mut self, delta: usize) {
        let len = self.len();
        self.ensure_capacity(len + delta + 1);
    }

    /// Open a gap of `delta` units at `index`: storage grows as
    /// needed, the suffix shifts up, and the length increases by
    /// `delta`. The gap contents are unspecified and the series is
    /// not terminated — callers fill and terminate.
    pub fn expand_at(&mut self, index: usize, delta: usize) {
        debug_assert!(index <= self.len());
        let old_len = self.len();
        self.ensure_capacity(old_len + delta + 1);
        self.store_mut()
            .window_mut()
            .copy_within(index..old_len, index + delta);
        self.set_len(old_len + delta);
    }

    /// Insert `data` at `index`, clamped to `[0, len]` — an index past
    /// the end appends. Returns the position just past the inserted
    /// run. Does not terminate; that is the caller's responsibility.
    pub fn insert(&mut self, index: usize, data: &[T]) -> usize {
        let index = index.min(self.len());
        self.expand_at(index, data.len());
        self.store_mut().window_mut()[index..index + data.len()].copy_from_slice(data);
        index + data.len()
    }

    /// Shared tail-append: grow, copy, terminate.
    pub(crate) fn append_raw(&mut self, data: &[T]) {
        let old_len = self.len();
        self.ensure_capacity(old_len + data.len() + 1);
        self.store_mut().window_mut()[old_len..old_len + data.len()].copy_from_slice(data);
        self.set_len(old_len + data.len());
        self.terminate();
        self.verify();
    }
}

impl<T: ScalarUnit> Series<T> {
    /// Append units onto the tail and re-terminate.
    pub fn append(&mut self, data: &[T]) {
        self.append_raw(data);
    }
}

impl Series<Cell> {
    /// Append cells onto the tail of an array — shallow, bitwise cell
    /// duplication — and write the `END` sentinel at the new tail.
    pub fn append_cells(&mut self, head: &[Cell]) {
        self.append_raw(head);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Array;

    #[test]
    fn append_round_trips_and_terminates() {
        let mut s: Series<u8> = Series::with_capacity(4);
        s.append(&[1, 2, 3]);
        assert_eq!(s.as_slice(), &[1, 2, 3]);
        assert_eq!(s.tail_unit(), 0);
    }

    #[test]
    fn append_grows_across_inline_boundary() {
        let mut s: Series<u8> = Series::with_capacity(2);
        let data: Vec<u8> = (1..=40).collect();
        s.append(&data);
        assert!(s.is_dynamic());
        assert_eq!(s.as_slice(), data.as_slice());
        assert_eq!(s.tail_unit(), 0);
    }

    #[test]
    fn extend_reserves_without_touching_length() {
        let mut s: Series<u8> = Series::with_capacity(4);
        s.append(&[9]);
        s.extend(100);
        assert_eq!(s.len(), 1);
        assert!(s.capacity() >= 102);
        assert_eq!(s.as_slice(), &[9]);
    }

    #[test]
    fn insert_in_middle_shifts_suffix() {
        let mut s: Series<u8> = Series::with_capacity(8);
        s.append(&[1, 4, 5]);
        let past = s.insert(1, &[2, 3]);
        assert_eq!(past, 3);
        assert_eq!(s.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn insert_clamps_past_end() {
        let mut s: Series<u8> = Series::with_capacity(8);
        s.append(&[1, 2, 3, 4, 5]);
        let past = s.insert(10, &[6, 7]);
        assert_eq!(past, 7);
        assert_eq!(s.as_slice(), &[1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn insert_at_len_matches_append_content_but_not_terminator() {
        let mut appended: Series<u8> = Series::with_capacity(16);
        appended.append(&[1, 2]);
        appended.append(&[3, 4]);

        let mut inserted: Series<u8> = Series::with_capacity(16);
        inserted.append(&[1, 2]);
        // Plant a sentinel where the terminator would land so the
        // missing write is observable.
        inserted.extend(4);
        inserted.store_mut().window_mut()[4] = 0xEE;
        let len = inserted.len();
        inserted.insert(len, &[3, 4]);

        assert_eq!(appended.as_slice(), inserted.as_slice());
        assert_eq!(appended.tail_unit(), 0);
        // insert wrote no terminator: the sentinel survives.
        assert_eq!(inserted.tail_unit(), 0xEE);
    }

    #[test]
    fn append_cells_end_terminates() {
        let mut a = Array::with_capacity(4);
        a.append_cells(&[Cell::int(1), Cell::int(2)]);
        assert_eq!(a.len(), 2);
        assert_eq!(a.get(1).and_then(Cell::as_int), Some(2));
        assert!(a.tail_unit().is_end());
    }

    #[test]
    fn expand_at_opens_unterminated_gap() {
        let mut s: Series<u8> = Series::with_capacity(8);
        s.append(&[1, 2, 3]);
        s.expand_at(1, 2);
        assert_eq!(s.len(), 5);
        let w = s.as_slice();
        assert_eq!(w[0], 1);
        assert_eq!(&w[3..5], &[2, 3]);
    }
}
