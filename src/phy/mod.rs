//! Ethernet PHY access
//!
//! The PHY layer is independent of how registers reach the chip; it only sees
//! the [`MdioBus`](crate::hal::MdioBus) trait. This allows:
//!
//! - Use over a plain [`BusHandle`](crate::BusHandle) or a serialized
//!   [`SharedBus`](crate::sync::SharedBus)
//! - Testing with a mock switch driver
//!
//! # Example
//!
//! ```ignore
//! use gpy2xx_mdio::{BusConfig, BusHandle, MmdDevice, PhyDevice};
//!
//! let bus = BusHandle::new(switch_dev, BusConfig::new());
//! let phy = PhyDevice::new(&bus, 0);
//!
//! let id = phy.phy_id()?;
//! let pma_ctrl1 = phy.read_mmd(MmdDevice::PMAPMD, 0x0000)?;
//! ```

pub mod device;

pub use device::PhyDevice;

// Re-export IEEE 802.3 standard register definitions
pub use crate::internal::phy_regs::{STD_MMDCTRL, STD_MMDDATA, bmcr, mmd_ctrl, phy_reg};
