//! `InventoryV1`: eight byte-sized polarization counts.
//!
//! # Equality semantics
//!
//! An inventory has no identity beyond its values. Two inventories are equal
//! iff all eight counts are equal, which is exactly when their packed keys are
//! equal (see [`InventoryV1::pack`]).
//!
//! # Render
//!
//! [`InventoryV1::render`] is a diagnostic projection only. The search never
//! consults it. Its output format is fixed:
//!
//! ```text
//!   0  1 -1  0  0  0  0  0 [20, 20 = 0]
//! ```
//!
//! One signed delta per polarization against a caller-chosen baseline
//! (two-space prefix when non-negative, one-space prefix when negative), then
//! the left/right group sums and their balance residue.

use std::fmt::Write;

use crate::carrier::packed::PackedKeyV1;
use crate::carrier::polarization::Polarization;

/// Offset that keeps the balance residue computation non-negative for any
/// inventory in the practical count range.
const BALANCE_OFFSET: i32 = 800;

/// Modulus of the balance residue.
const BALANCE_MODULUS: i32 = 8;

/// Eight polarization counts, one per [`Polarization`], ordinal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InventoryV1 {
    counts: [u8; Polarization::COUNT],
}

/// The two-group balance metric shown by [`InventoryV1::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceV1 {
    /// Theta + Omega + Zeta + Gamma.
    pub left: i32,
    /// Lambda + Epsilon + Xi + Phi.
    pub right: i32,
    /// `(left - right + 800) % 8`, truncating remainder.
    pub residue: i32,
}

impl InventoryV1 {
    /// Empty inventory (all counts zero).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; Polarization::COUNT],
        }
    }

    /// Inventory with every count equal to `count`.
    #[must_use]
    pub const fn uniform(count: u8) -> Self {
        Self {
            counts: [count; Polarization::COUNT],
        }
    }

    /// Construct from counts in ordinal order.
    #[must_use]
    pub const fn from_counts(counts: [u8; Polarization::COUNT]) -> Self {
        Self { counts }
    }

    /// Counts in ordinal order.
    #[must_use]
    pub const fn counts(&self) -> [u8; Polarization::COUNT] {
        self.counts
    }

    /// Count for one polarization.
    #[must_use]
    pub const fn count(&self, pol: Polarization) -> u8 {
        self.counts[pol.index()]
    }

    /// Overwrite the count for one polarization.
    pub fn set_count(&mut self, pol: Polarization, count: u8) {
        self.counts[pol.index()] = count;
    }

    /// Builder form of [`set_count`](Self::set_count).
    #[must_use]
    pub fn with_count(mut self, pol: Polarization, count: u8) -> Self {
        self.counts[pol.index()] = count;
        self
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    /// Pack into the 64-bit search key. Total and injective.
    #[must_use]
    pub const fn pack(&self) -> PackedKeyV1 {
        PackedKeyV1::from_counts(self.counts)
    }

    /// Exact inverse of [`pack`](Self::pack).
    #[must_use]
    pub const fn unpack(key: PackedKeyV1) -> Self {
        Self {
            counts: key.to_counts(),
        }
    }

    /// Left/right group sums and their residue.
    #[must_use]
    pub fn balance(&self) -> BalanceV1 {
        let mut left = 0i32;
        let mut right = 0i32;
        for pol in Polarization::ALL {
            let count = i32::from(self.count(pol));
            if pol.is_left_group() {
                left += count;
            } else {
                right += count;
            }
        }
        BalanceV1 {
            left,
            right,
            residue: (left - right + BALANCE_OFFSET) % BALANCE_MODULUS,
        }
    }

    /// Signed-delta view against `baseline`, followed by the balance metric.
    ///
    /// Deltas are computed in `i64`, so every `i32` baseline renders.
    #[must_use]
    pub fn render(&self, baseline: i32) -> String {
        let mut out = String::new();
        for &count in &self.counts {
            let delta = i64::from(count) - i64::from(baseline);
            out.push_str(if delta >= 0 { "  " } else { " " });
            let _ = write!(out, "{delta}");
        }
        let balance = self.balance();
        let _ = write!(
            out,
            " [{}, {} = {}]",
            balance.left, balance.right, balance.residue
        );
        out
    }
}

impl From<PackedKeyV1> for InventoryV1 {
    fn from(key: PackedKeyV1) -> Self {
        Self::unpack(key)
    }
}

impl From<InventoryV1> for PackedKeyV1 {
    fn from(inventory: InventoryV1) -> Self {
        inventory.pack()
    }
}

impl From<&InventoryV1> for PackedKeyV1 {
    fn from(inventory: &InventoryV1) -> Self {
        inventory.pack()
    }
}
