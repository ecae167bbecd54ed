//! Centralized Constants
//!
//! Single source of truth for the protocol facts and defaults the shim
//! depends on.
//!
//! # Organization
//!
//! - **Register id encoding**: packed Clause-45 tag and field layout
//! - **Addressing**: PHY and MMD address ranges
//! - **Defaults**: controller index, reset polling
//!
//! # Note
//!
//! PHY register addresses and bit definitions live in
//! [`phy_regs`](super::phy_regs).

// =============================================================================
// Register Id Encoding
// =============================================================================

/// Tag bit marking a packed register id as Clause-45
pub const MII_ADDR_C45: u32 = 1 << 30;

/// Shift of the MMD device field in a packed Clause-45 id
pub const MMD_DEVICE_SHIFT: u32 = 16;

/// Mask of the MMD device field (after shifting)
pub const MMD_DEVICE_MASK: u32 = 0x1F;

/// Mask of the register offset field
pub const MMD_OFFSET_MASK: u32 = 0xFFFF;

// =============================================================================
// Addressing
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u16 = 31;

/// Maximum valid MMD device id (5-bit field)
pub const MAX_MMD_DEVICE: u8 = 31;

// =============================================================================
// Defaults
// =============================================================================

/// Default MAC controller index (the XGMAC wired to the GPY2xx on reference boards)
pub const DEFAULT_MAC_INDEX: u8 = 2;

/// Soft reset timeout in milliseconds
pub const SOFT_RESET_TIMEOUT_MS: u32 = 600;

/// Interval between BMCR polls while waiting for reset to self-clear
pub const SOFT_RESET_POLL_INTERVAL_MS: u32 = 50;
