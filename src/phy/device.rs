//! PHY device context
//!
//! Binds an [`MdioBus`] to one PHY address so callers stop threading the
//! address through every access. The vendor PHY library takes exactly this
//! pair (bus callbacks plus `phy_addr`) as its device handle.

use embedded_hal::delay::DelayNs;

use crate::error::{Error, Result};
use crate::hal::mdio::MdioBus;
use crate::hal::register::{MmdDevice, RegisterId};
use crate::internal::constants::{SOFT_RESET_POLL_INTERVAL_MS, SOFT_RESET_TIMEOUT_MS};
use crate::internal::phy_regs::{bmcr, phy_reg};

/// One PHY on an MDIO bus
#[derive(Debug)]
pub struct PhyDevice<'a, M: MdioBus> {
    bus: &'a M,
    addr: u16,
}

impl<M: MdioBus> Clone for PhyDevice<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: MdioBus> Copy for PhyDevice<'_, M> {}

impl<'a, M: MdioBus> PhyDevice<'a, M> {
    /// Bind `bus` to the PHY at `addr`.
    ///
    /// The address is not checked here; the bus applies its own
    /// [`BusConfig`](crate::BusConfig) range check on every access.
    pub const fn new(bus: &'a M, addr: u16) -> Self {
        Self { bus, addr }
    }

    /// PHY address
    pub fn address(&self) -> u16 {
        self.addr
    }

    /// The bus this device is bound to
    pub fn bus(&self) -> &'a M {
        self.bus
    }

    /// Read a register
    pub fn read(&self, reg: RegisterId) -> Result<u16> {
        self.bus.read(self.addr, reg)
    }

    /// Write a register
    pub fn write(&self, reg: RegisterId, value: u16) -> Result<()> {
        self.bus.write(self.addr, reg, value)
    }

    /// Clear then set bits in a register, returning the previous value
    pub fn modify(&self, reg: RegisterId, clear: u16, set: u16) -> Result<u16> {
        self.bus.modify(self.addr, reg, clear, set)
    }

    /// Read a Clause 45 register
    pub fn read_mmd(&self, device: MmdDevice, offset: u16) -> Result<u16> {
        self.read(RegisterId::Mmd { device, offset })
    }

    /// Write a Clause 45 register
    pub fn write_mmd(&self, device: MmdDevice, offset: u16, value: u16) -> Result<()> {
        self.write(RegisterId::Mmd { device, offset }, value)
    }

    /// Read the PHY identifier: `(PHYIDR1 << 16) | PHYIDR2`
    pub fn phy_id(&self) -> Result<u32> {
        let id1 = self.read(RegisterId::Flat(phy_reg::PHYIDR1))? as u32;
        let id2 = self.read(RegisterId::Flat(phy_reg::PHYIDR2))? as u32;
        Ok((id1 << 16) | id2)
    }

    /// Soft reset via BMCR and wait for the bit to self-clear.
    ///
    /// RESET is always written, even if it already reads as set. Polls
    /// every 50 ms for up to 600 ms. Access errors end the wait
    /// immediately; a bit that never clears yields [`Error::Timeout`].
    pub fn soft_reset<D: DelayNs>(&self, delay: &mut D) -> Result<()> {
        let bmcr_reg = RegisterId::Flat(phy_reg::BMCR);
        let old = self.read(bmcr_reg)?;
        self.write(bmcr_reg, old | bmcr::RESET)?;

        let mut waited_ms = 0;
        loop {
            delay.delay_ms(SOFT_RESET_POLL_INTERVAL_MS);
            waited_ms += SOFT_RESET_POLL_INTERVAL_MS;

            if self.read(bmcr_reg)? & bmcr::RESET == 0 {
                return Ok(());
            }
            if waited_ms >= SOFT_RESET_TIMEOUT_MS {
                #[cfg(feature = "defmt")]
                defmt::warn!("PHY {} reset did not complete", self.addr);
                return Err(Error::Timeout);
            }
        }
    }
}
