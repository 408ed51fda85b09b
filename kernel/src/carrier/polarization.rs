//! `Polarization`: the closed set of eight arcosphere kinds.
//!
//! The ordinal of each variant is its field index in [`InventoryV1`] and its
//! byte offset in [`PackedKeyV1`]. The set is never extended at runtime.
//!
//! [`InventoryV1`]: crate::carrier::inventory::InventoryV1
//! [`PackedKeyV1`]: crate::carrier::packed::PackedKeyV1

use std::fmt;

/// One of the eight arcosphere polarizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Polarization {
    Lambda,
    Xi,
    Epsilon,
    Phi,
    Zeta,
    Theta,
    Gamma,
    Omega,
}

impl Polarization {
    /// Number of polarizations.
    pub const COUNT: usize = 8;

    /// All polarizations in ordinal order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Lambda,
        Self::Xi,
        Self::Epsilon,
        Self::Phi,
        Self::Zeta,
        Self::Theta,
        Self::Gamma,
        Self::Omega,
    ];

    /// Ordinal index (0..8).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index). `None` for out-of-range ordinals.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Canonical lowercase name (used in serialized artifacts).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lambda => "lambda",
            Self::Xi => "xi",
            Self::Epsilon => "epsilon",
            Self::Phi => "phi",
            Self::Zeta => "zeta",
            Self::Theta => "theta",
            Self::Gamma => "gamma",
            Self::Omega => "omega",
        }
    }

    /// Balance group used by the render diagnostic.
    ///
    /// Theta, Omega, Zeta and Gamma form the left group; the other four the right.
    #[must_use]
    pub const fn is_left_group(self) -> bool {
        matches!(self, Self::Zeta | Self::Theta | Self::Gamma | Self::Omega)
    }
}

impl fmt::Display for Polarization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
