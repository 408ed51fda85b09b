//! Carrier module: `Polarization`, `InventoryV1`, and the `PackedKeyV1` encoding.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod inventory;
pub mod packed;
pub mod polarization;
