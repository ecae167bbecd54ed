//! PHY Register Addressing
//!
//! A register on a GPY2xx is either a flat Clause 22 index or a Clause 45
//! (MMD device, offset) pair. [`RegisterId`] keeps the two apart at the type
//! level; the packed `u32` form used by the vendor PHY library (tag bit 30,
//! device in bits 16-20, offset in bits 0-15) exists only for conversion.

use crate::error::{ConfigError, ConfigResult};
use crate::internal::constants::{
    MAX_MMD_DEVICE, MII_ADDR_C45, MMD_DEVICE_MASK, MMD_DEVICE_SHIFT, MMD_OFFSET_MASK,
};

// =============================================================================
// MMD Device
// =============================================================================

/// A Clause 45 MMD device address (0-31).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MmdDevice(u8);

impl MmdDevice {
    /// Physical Medium Attachment/Dependent.
    pub const PMAPMD: Self = MmdDevice(1);
    /// WAN interface sublayer.
    pub const WIS: Self = MmdDevice(2);
    /// Physical coding sublayer.
    pub const PCS: Self = MmdDevice(3);
    /// PHY Extender sublayer.
    pub const PHYXS: Self = MmdDevice(4);
    /// DTE Extender sublayer.
    pub const DTEXS: Self = MmdDevice(5);
    /// Transmission convergence.
    pub const TC: Self = MmdDevice(6);
    /// Auto negotiation.
    pub const AN: Self = MmdDevice(7);
    /// Clause 22 extension.
    pub const C22_EXT: Self = MmdDevice(29);
    /// Vendor specific 1.
    pub const VEND1: Self = MmdDevice(30);
    /// Vendor specific 2.
    pub const VEND2: Self = MmdDevice(31);

    /// Create a device address, rejecting values above 31
    pub const fn new(device: u8) -> ConfigResult<Self> {
        if device > MAX_MMD_DEVICE {
            Err(ConfigError::InvalidMmdDevice)
        } else {
            Ok(MmdDevice(device))
        }
    }

    /// Raw 5-bit device address
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Keep only the low five bits; always valid.
    const fn from_bits_truncate(bits: u32) -> Self {
        MmdDevice((bits & MMD_DEVICE_MASK) as u8)
    }
}

// =============================================================================
// Register Id
// =============================================================================

/// Address of one 16-bit PHY register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterId {
    /// Clause 22 register index. Real hardware only decodes 0-31, but any
    /// 16-bit value is passed through unchanged.
    Flat(u16),
    /// Clause 45 register within an MMD device.
    Mmd {
        /// Target MMD
        device: MmdDevice,
        /// Register offset within the device
        offset: u16,
    },
}

impl RegisterId {
    /// Clause 22 register
    pub const fn flat(reg: u16) -> Self {
        RegisterId::Flat(reg)
    }

    /// Clause 45 register; fails if `device` is above 31
    pub const fn mmd(device: u8, offset: u16) -> ConfigResult<Self> {
        match MmdDevice::new(device) {
            Ok(device) => Ok(RegisterId::Mmd { device, offset }),
            Err(e) => Err(e),
        }
    }

    /// Decode the packed vendor-library form.
    ///
    /// With [`MII_ADDR_C45`] set, bits 16-20 are the device and bits 0-15 the
    /// offset; other high bits are ignored. Without it, the low 16 bits are a
    /// flat register index.
    pub const fn from_raw(raw: u32) -> Self {
        if raw & MII_ADDR_C45 != 0 {
            RegisterId::Mmd {
                device: MmdDevice::from_bits_truncate(raw >> MMD_DEVICE_SHIFT),
                offset: (raw & MMD_OFFSET_MASK) as u16,
            }
        } else {
            RegisterId::Flat(raw as u16)
        }
    }

    /// Encode into the packed vendor-library form
    pub const fn to_raw(self) -> u32 {
        match self {
            RegisterId::Flat(reg) => reg as u32,
            RegisterId::Mmd { device, offset } => {
                MII_ADDR_C45 | ((device.0 as u32) << MMD_DEVICE_SHIFT) | offset as u32
            }
        }
    }

    /// True for Clause 45 ids
    pub const fn is_mmd(&self) -> bool {
        matches!(self, RegisterId::Mmd { .. })
    }
}

impl From<u32> for RegisterId {
    fn from(raw: u32) -> Self {
        RegisterId::from_raw(raw)
    }
}

impl From<RegisterId> for u32 {
    fn from(reg: RegisterId) -> Self {
        reg.to_raw()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
