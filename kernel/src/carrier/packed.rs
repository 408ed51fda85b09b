//! `PackedKeyV1`: 64-bit identity of an inventory.
//!
//! # Layout
//!
//! | Bits   | Field                          |
//! |--------|--------------------------------|
//! | 0-7    | count of `Polarization::Lambda` |
//! | 8-15   | count of `Polarization::Xi`     |
//! | ...    | ...                            |
//! | 56-63  | count of `Polarization::Omega`  |
//!
//! Equivalently, `to_le_bytes()[i]` is the count of the polarization with
//! ordinal `i`. Packing and unpacking are mutual inverses for every
//! representable inventory, so the key is the sole identity used for
//! deduplication in the search node table.

use std::fmt;

use crate::carrier::polarization::Polarization;

/// Packed inventory key.
///
/// Derives `Ord` for use as `BTreeMap` keys (canonical ordering).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PackedKeyV1(u64);

impl PackedKeyV1 {
    /// Bit width of one count field.
    pub const FIELD_BIT_WIDTH: u32 = 8;

    /// Mask for one count field after shifting.
    pub const FIELD_MASK: u64 = 0xFF;

    /// Wrap a raw 64-bit value. Every value is a valid key.
    #[must_use]
    pub const fn from_u64(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw 64-bit value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Construct from per-polarization counts in ordinal order.
    #[must_use]
    pub const fn from_counts(counts: [u8; Polarization::COUNT]) -> Self {
        Self(u64::from_le_bytes(counts))
    }

    /// Per-polarization counts in ordinal order.
    #[must_use]
    pub const fn to_counts(self) -> [u8; Polarization::COUNT] {
        self.0.to_le_bytes()
    }

    /// Little-endian bytes (canonical serialization form).
    #[must_use]
    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    /// Count stored in the field for `pol`.
    #[must_use]
    pub const fn field(self, pol: Polarization) -> u8 {
        #[allow(clippy::cast_possible_truncation)]
        let count = ((self.0 >> (pol.index() as u32 * Self::FIELD_BIT_WIDTH)) & Self::FIELD_MASK)
            as u8;
        count
    }
}

impl fmt::Debug for PackedKeyV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedKeyV1({:?} / 0x{:016x})", self.to_counts(), self.0)
    }
}

impl fmt::Display for PackedKeyV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}
