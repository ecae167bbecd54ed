//! PHY Register Definitions
//!
//! Register definitions for PHY devices accessed via MDIO.
//!
//! # Module Organization
//!
//! - [`standard`] - IEEE 802.3 Clause 22 standard PHY registers (0-15)
//!
//! # Access Method
//!
//! PHY registers are never memory mapped here; every access goes through
//! the switch driver's MDIO commands.

pub mod standard;

pub use standard::{STD_MMDCTRL, STD_MMDDATA, bmcr, mmd_ctrl, phy_reg};
