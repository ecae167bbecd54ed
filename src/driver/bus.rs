//! MDIO bus handle
//!
//! A [`BusHandle`] pairs a caller-supplied [`SwitchApi`] with the index of the
//! MAC controller whose MDIO master it drives. It holds no other state: the
//! clause mode of a PHY is re-queried on every access because the driver may
//! reinitialize the PHY between calls.
//!
//! # Serialization
//!
//! An emulated Clause 45 access is four bus operations that the hardware does
//! not treat as atomic. Two handles driving the same physical controller must
//! not interleave; keep one handle per controller or wrap it in
//! [`SharedBus`](crate::sync::SharedBus).

use crate::error::{Result, TransportError, TransportResult};
use crate::hal::mdio::{self, MdioBus};
use crate::hal::register::RegisterId;
use crate::hal::transport::{MacCliCommand, SwitchApi};

use super::config::BusConfig;

/// Caller-owned MDIO bus context
#[derive(Debug)]
pub struct BusHandle<A: SwitchApi> {
    api: A,
    config: BusConfig,
}

impl<A: SwitchApi> BusHandle<A> {
    /// Create a handle driving the controller selected by `config`
    pub const fn new(api: A, config: BusConfig) -> Self {
        Self { api, config }
    }

    /// MAC controller index sent with every command
    pub const fn mac_index(&self) -> u8 {
        self.config.mac_index
    }

    /// Handle configuration
    pub const fn config(&self) -> &BusConfig {
        &self.config
    }

    /// Borrow the underlying driver
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Give back the underlying driver
    pub fn release(self) -> A {
        self.api
    }

    /// Issue one command and return the driver's non-negative result as-is.
    pub fn execute_raw(&self, cmd: MacCliCommand) -> TransportResult<u32> {
        let ret = self.api.xgmac_cfg(self.config.mac_index, cmd);
        if ret < 0 {
            Err(TransportError::new(ret))
        } else {
            Ok(ret as u32)
        }
    }

    /// Issue one command; register reads return the low 16 bits.
    pub fn execute(&self, cmd: MacCliCommand) -> TransportResult<u16> {
        self.execute_raw(cmd).map(|value| value as u16)
    }
}

impl<A: SwitchApi> MdioBus for BusHandle<A> {
    fn read(&self, phy_addr: u16, reg: RegisterId) -> Result<u16> {
        mdio::read(self, phy_addr, reg)
    }

    fn write(&self, phy_addr: u16, reg: RegisterId, value: u16) -> Result<()> {
        mdio::write(self, phy_addr, reg, value)
    }
}
