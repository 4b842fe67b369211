//! The interpreter value-cell and its end sentinel.
//!
//! A [`Cell`] is the fixed-size unit stored in arrays (blocks) of the
//! runtime: a kind tag plus two payload words. Cells are `Copy` — the
//! series layer duplicates them bitwise and never interprets payloads.
//! The canonical [`Cell::END`] sentinel terminates every cell array;
//! downstream consumers walk cells until they hit it rather than
//! carrying a length everywhere.

use std::fmt;

/// Discriminant of a [`Cell`].
///
/// Only the kinds the memory core needs to distinguish are listed;
/// the evaluator extends the payload interpretation, not this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellKind {
    /// The end-of-array sentinel. Never a user-visible value.
    End = 0,
    /// A unit value carrying no payload.
    Blank,
    /// A boolean.
    Logic,
    /// A 64-bit signed integer.
    Integer,
    /// A 64-bit float, stored as raw bits so cells stay `Eq`.
    Decimal,
}

/// A single interpreter value slot.
///
/// Layout is deliberately flat: one tag plus two payload words, no
/// heap indirection at this level. Values that need storage (strings,
/// blocks) keep an index into runtime tables in `payload`/`extra`;
/// the series core treats both words as opaque bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    kind: CellKind,
    payload: u64,
    extra: u64,
}

impl Cell {
    /// The canonical end sentinel written after the last element of
    /// every cell array.
    pub const END: Cell = Cell {
        kind: CellKind::End,
        payload: 0,
        extra: 0,
    };

    /// A blank (unit) cell.
    pub const fn blank() -> Self {
        Self {
            kind: CellKind::Blank,
            payload: 0,
            extra: 0,
        }
    }

    /// A logic cell.
    pub const fn logic(value: bool) -> Self {
        Self {
            kind: CellKind::Logic,
            payload: value as u64,
            extra: 0,
        }
    }

    /// An integer cell.
    pub const fn int(value: i64) -> Self {
        Self {
            kind: CellKind::Integer,
            payload: value as u64,
            extra: 0,
        }
    }

    /// A decimal cell. The float is stored as raw bits.
    pub fn decimal(value: f64) -> Self {
        Self {
            kind: CellKind::Decimal,
            payload: value.to_bits(),
            extra: 0,
        }
    }

    /// The cell's kind tag.
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Whether this cell is the end sentinel.
    pub fn is_end(&self) -> bool {
        self.kind == CellKind::End
    }

    /// The integer payload, if this is an integer cell.
    pub fn as_int(&self) -> Option<i64> {
        match self.kind {
            CellKind::Integer => Some(self.payload as i64),
            _ => None,
        }
    }

    /// The logic payload, if this is a logic cell.
    pub fn as_logic(&self) -> Option<bool> {
        match self.kind {
            CellKind::Logic => Some(self.payload != 0),
            _ => None,
        }
    }

    /// The decimal payload, if this is a decimal cell.
    pub fn as_decimal(&self) -> Option<f64> {
        match self.kind {
            CellKind::Decimal => Some(f64::from_bits(self.payload)),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CellKind::End => write!(f, "#[end]"),
            CellKind::Blank => write!(f, "_"),
            CellKind::Logic => write!(f, "{}", self.payload != 0),
            CellKind::Integer => write!(f, "{}", self.payload as i64),
            CellKind::Decimal => write!(f, "{}", f64::from_bits(self.payload)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_sentinel_is_distinguished() {
        assert!(Cell::END.is_end());
        assert!(!Cell::int(0).is_end());
        assert!(!Cell::blank().is_end());
    }

    #[test]
    fn integer_round_trip() {
        let c = Cell::int(-42);
        assert_eq!(c.kind(), CellKind::Integer);
        assert_eq!(c.as_int(), Some(-42));
        assert_eq!(c.as_logic(), None);
    }

    #[test]
    fn decimal_preserves_bits() {
        let c = Cell::decimal(1.5);
        assert_eq!(c.as_decimal(), Some(1.5));
        // Equality is bitwise, so identical decimals compare equal.
        assert_eq!(c, Cell::decimal(1.5));
    }

    #[test]
    fn bitwise_copy_contract() {
        let a = Cell::int(7);
        let b = a;
        assert_eq!(a, b);
        assert_eq!(b.as_int(), Some(7));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn int_payload_round_trips(v in any::<i64>()) {
                prop_assert_eq!(Cell::int(v).as_int(), Some(v));
            }

            #[test]
            fn no_constructed_cell_is_end(v in any::<i64>()) {
                prop_assert!(!Cell::int(v).is_end());
                prop_assert!(!Cell::decimal(v as f64).is_end());
            }
        }
    }
}
