//! IEEE 802.3 PHY Register Definitions
//!
//! Standard Clause 22 register addresses and the bits the shim touches.
//!
//! # Standard Registers
//!
//! | Register | Name | Description |
//! |----------|------|-------------|
//! | 0 | BMCR | Basic Mode Control |
//! | 1 | BMSR | Basic Mode Status |
//! | 2 | PHYIDR1 | PHY Identifier 1 |
//! | 3 | PHYIDR2 | PHY Identifier 2 |
//! | 13 | MMDCTRL | MMD Access Control |
//! | 14 | MMDDATA | MMD Access Address/Data |
//!
//! The GPY2xx register map documents these registers by byte offset; the
//! MDIO word index is the byte offset divided by two.

// =============================================================================
// Byte Offsets
// =============================================================================

/// MMD access control register, byte offset in the GPY2xx map
pub const STD_MMDCTRL: u16 = 0x1A;

/// MMD access address/data register, byte offset in the GPY2xx map
pub const STD_MMDDATA: u16 = 0x1C;

// =============================================================================
// Standard PHY Register Addresses
// =============================================================================

/// Standard PHY register word addresses (IEEE 802.3 Clause 22)
pub mod phy_reg {
    use super::{STD_MMDCTRL, STD_MMDDATA};

    /// Basic Mode Control Register
    pub const BMCR: u16 = 0;
    /// Basic Mode Status Register
    pub const BMSR: u16 = 1;
    /// PHY Identifier 1
    pub const PHYIDR1: u16 = 2;
    /// PHY Identifier 2
    pub const PHYIDR2: u16 = 3;
    /// Auto-Negotiation Advertisement Register
    pub const ANAR: u16 = 4;
    /// Auto-Negotiation Link Partner Ability Register
    pub const ANLPAR: u16 = 5;
    /// Auto-Negotiation Expansion Register
    pub const ANER: u16 = 6;
    /// MMD Access Control Register
    pub const MMD_CTRL: u16 = STD_MMDCTRL / 2;
    /// MMD Access Data Register
    pub const MMD_DATA: u16 = STD_MMDDATA / 2;
    /// Extended Status Register
    pub const ESTATUS: u16 = 15;
}

// =============================================================================
// BMCR - Basic Mode Control Register (Register 0)
// =============================================================================

/// BMCR (Basic Mode Control Register) bits
pub mod bmcr {
    /// Soft reset - self-clearing
    pub const RESET: u16 = 1 << 15;
    /// Loopback mode
    pub const LOOPBACK: u16 = 1 << 14;
    /// Auto-negotiation enable
    pub const AN_ENABLE: u16 = 1 << 12;
    /// Power down
    pub const POWER_DOWN: u16 = 1 << 11;
    /// Isolate PHY from the MAC interface
    pub const ISOLATE: u16 = 1 << 10;
}

// =============================================================================
// MMDCTRL - MMD Access Control Register (Register 13)
// =============================================================================

/// MMDCTRL bits
pub mod mmd_ctrl {
    /// Function field mask (bits 15:14)
    pub const FUNCTION_MASK: u16 = 0xC000;
    /// Function: the next MMDDATA access is the register address
    pub const FUNCTION_ADDRESS: u16 = 0x0000;
    /// Function: the next MMDDATA access is register data, no post increment
    pub const FUNCTION_DATA: u16 = 0x4000;
    /// Device address field mask (bits 4:0)
    pub const DEVAD_MASK: u16 = 0x001F;
}
