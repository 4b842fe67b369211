//! The two storage representations of a series.
//!
//! Small series live inline in the header ([`Store::Inline`]); larger
//! ones hold an allocator-owned buffer with explicit `bias` and `len`
//! offsets ([`Store::Dynamic`]). The C original expressed bias by
//! moving the data pointer; here the buffer origin never moves and the
//! logical start is `buf[bias]`, so every access stays bounds-checked.

use crate::unit::SeriesUnit;

/// Capacity of the inline storage representation, in units.
///
/// A series whose requested capacity (including the terminator slot)
/// fits in this many units is embedded directly in the header and
/// never touches the allocator.
pub const INLINE_UNITS: usize = 8;

/// Largest bias the dynamic representation will carry.
///
/// Mirrors the 16-bit bias field of the original layout. Reaching it
/// forces consolidation regardless of how much capacity remains.
pub const MAX_SERIES_BIAS: u32 = 0xFFFF;

/// Tagged storage variant of a [`Series`](crate::Series).
#[derive(Debug)]
pub(crate) enum Store<T: SeriesUnit> {
    /// Element units embedded in the series header. Bias is
    /// structurally zero; the variant has no field for it.
    Inline {
        /// The embedded units. Slots past `len` hold terminators.
        buf: [T; INLINE_UNITS],
        /// Logical element count, strictly less than [`INLINE_UNITS`].
        len: u8,
    },
    /// Allocator-owned heap storage.
    Dynamic(DynamicStore<T>),
}

/// Heap storage with explicit head-slack ("bias") bookkeeping.
#[derive(Debug)]
pub(crate) struct DynamicStore<T: SeriesUnit> {
    /// Allocator-owned backing buffer.
    pub(crate) buf: Box<[T]>,
    /// Unused slots before the logical start.
    pub(crate) bias: u32,
    /// Logical element count.
    pub(crate) len: usize,
}

impl<T: SeriesUnit> DynamicStore<T> {
    /// Visible capacity ("rest"): total allocation minus bias.
    pub(crate) fn rest(&self) -> usize {
        self.buf.len() - self.bias as usize
    }

    /// The addressable window from the logical start to the end of
    /// the allocation. `window()[..len]` is content, `window()[len]`
    /// the terminator slot.
    pub(crate) fn window(&self) -> &[T] {
        &self.buf[self.bias as usize..]
    }

    /// Mutable [`window`](Self::window).
    pub(crate) fn window_mut(&mut self) -> &mut [T] {
        &mut self.buf[self.bias as usize..]
    }

    /// Reset bias to zero, restoring the window to the allocation
    /// origin. When `keep` is set the live elements are relocated to
    /// the new origin and the series re-terminated; otherwise the
    /// caller is about to overwrite everything and relocation is
    /// skipped.
    pub(crate) fn rebase(&mut self, keep: bool) {
        let slack = self.bias as usize;
        if slack == 0 {
            return;
        }
        self.bias = 0;
        if keep {
            self.buf.copy_within(slack..slack + self.len, 0);
            self.buf[self.len] = T::TERMINATOR;
        }
    }
}

impl<T: SeriesUnit> Store<T> {
    /// Logical element count.
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Inline { len, .. } => *len as usize,
            Self::Dynamic(d) => d.len,
        }
    }

    /// Set the logical element count without touching contents.
    pub(crate) fn set_len(&mut self, new_len: usize) {
        match self {
            Self::Inline { len, .. } => {
                debug_assert!(new_len < INLINE_UNITS);
                *len = new_len as u8;
            }
            Self::Dynamic(d) => d.len = new_len,
        }
    }

    /// Visible capacity in units, terminator slot included.
    pub(crate) fn capacity(&self) -> usize {
        match self {
            Self::Inline { .. } => INLINE_UNITS,
            Self::Dynamic(d) => d.rest(),
        }
    }

    /// Current bias (always zero for inline storage).
    pub(crate) fn bias(&self) -> u32 {
        match self {
            Self::Inline { .. } => 0,
            Self::Dynamic(d) => d.bias,
        }
    }

    /// Whether this series has heap-allocated storage.
    pub(crate) fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }

    /// The addressable window starting at the logical start.
    pub(crate) fn window(&self) -> &[T] {
        match self {
            Self::Inline { buf, .. } => buf,
            Self::Dynamic(d) => d.window(),
        }
    }

    /// Mutable [`window`](Self::window).
    pub(crate) fn window_mut(&mut self) -> &mut [T] {
        match self {
            Self::Inline { buf, .. } => buf,
            Self::Dynamic(d) => d.window_mut(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dynamic(content: &[u8], bias: u32, total: usize) -> DynamicStore<u8> {
        let mut buf = vec![0u8; total].into_boxed_slice();
        let start = bias as usize;
        buf[start..start + content.len()].copy_from_slice(content);
        DynamicStore {
            buf,
            bias,
            len: content.len(),
        }
    }

    #[test]
    fn rest_excludes_bias() {
        let d = dynamic(&[1, 2, 3], 4, 16);
        assert_eq!(d.rest(), 12);
        assert_eq!(&d.window()[..3], &[1, 2, 3]);
    }

    #[test]
    fn rebase_keep_relocates_and_terminates() {
        let mut d = dynamic(&[1, 2, 3], 4, 16);
        d.rebase(true);
        assert_eq!(d.bias, 0);
        assert_eq!(d.rest(), 16);
        assert_eq!(&d.window()[..4], &[1, 2, 3, 0]);
    }

    #[test]
    fn rebase_without_keep_skips_relocation() {
        let mut d = dynamic(&[7, 8], 4, 16);
        d.rebase(false);
        assert_eq!(d.bias, 0);
        // Content deliberately not moved; caller overwrites next.
        assert_eq!(d.buf[4], 7);
    }

    #[test]
    fn rebase_is_noop_at_zero_bias() {
        let mut d = dynamic(&[5], 0, 8);
        d.rebase(true);
        assert_eq!(d.bias, 0);
        assert_eq!(d.window()[0], 5);
    }

    #[test]
    fn inline_store_reports_fixed_capacity() {
        let s: Store<u8> = Store::Inline {
            buf: [0; INLINE_UNITS],
            len: 0,
        };
        assert_eq!(s.capacity(), INLINE_UNITS);
        assert_eq!(s.bias(), 0);
        assert!(!s.is_dynamic());
    }
}
