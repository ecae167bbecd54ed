//! Configuration types for the MDIO bus handle

use crate::error::{ConfigError, ConfigResult};
use crate::internal::constants::{DEFAULT_MAC_INDEX, MAX_PHY_ADDR};

/// Bus handle configuration
///
/// Selects which of the switch's MDIO controllers a handle drives and how
/// strictly PHY addresses are checked.
///
/// # Example
///
/// ```ignore
/// let config = BusConfig::new().with_mac_index(1);
/// let bus = BusHandle::new(api, config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusConfig {
    /// MAC/MDIO controller index passed with every driver command
    pub mac_index: u8,
    /// Reject PHY addresses above 31 before touching the driver
    pub check_phy_address: bool,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BusConfig {
    /// Default configuration: controller 2, PHY address checking on
    pub const fn new() -> Self {
        Self {
            mac_index: DEFAULT_MAC_INDEX,
            check_phy_address: true,
        }
    }

    /// Set the MAC controller index
    #[must_use]
    pub const fn with_mac_index(mut self, mac_index: u8) -> Self {
        self.mac_index = mac_index;
        self
    }

    /// Enable or disable the PHY address range check
    ///
    /// Some switch drivers accept out-of-range addresses as aliases for
    /// internal PHYs; disable the check to pass them through.
    #[must_use]
    pub const fn with_phy_address_check(mut self, enabled: bool) -> Self {
        self.check_phy_address = enabled;
        self
    }

    /// Check a PHY address against this configuration
    pub const fn check_phy_addr(&self, phy_addr: u16) -> ConfigResult<()> {
        if self.check_phy_address && phy_addr > MAX_PHY_ADDR {
            Err(ConfigError::InvalidPhyAddress)
        } else {
            Ok(())
        }
    }
}
