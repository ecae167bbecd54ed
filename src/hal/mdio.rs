//! MDIO register access
//!
//! Public entry points for reading and writing PHY registers through a
//! [`BusHandle`]. Each access:
//!
//! 1. queries the clause the bus currently speaks for the PHY; a failed query
//!    returns before any register is touched,
//! 2. plans the access with the [`codec`](super::codec),
//! 3. runs the plan and returns its result unchanged.
//!
//! No retries and no fallback to the other clause are attempted.

use crate::driver::BusHandle;
use crate::error::Result;
use crate::internal::constants::MAX_PHY_ADDR;
use crate::internal::phy_regs::phy_reg;

use super::clause::query_clause;
use super::codec::{plan_read, plan_write};
use super::register::RegisterId;
use super::transport::SwitchApi;

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// Implemented by [`BusHandle`] and [`SharedBus`](crate::sync::SharedBus) so
/// PHY-level code can work with either.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&self, phy_addr: u16, reg: RegisterId) -> Result<u16>;

    /// Write a PHY register
    fn write(&self, phy_addr: u16, reg: RegisterId, value: u16) -> Result<()>;

    /// Clear then set bits in a PHY register, returning the previous value.
    ///
    /// The write is skipped when the value would not change.
    fn modify(&self, phy_addr: u16, reg: RegisterId, clear: u16, set: u16) -> Result<u16> {
        let old = self.read(phy_addr, reg)?;
        let new = (old & !clear) | set;
        if new != old {
            self.write(phy_addr, reg, new)?;
        }
        Ok(old)
    }
}

impl<M: MdioBus + ?Sized> MdioBus for &M {
    fn read(&self, phy_addr: u16, reg: RegisterId) -> Result<u16> {
        (**self).read(phy_addr, reg)
    }

    fn write(&self, phy_addr: u16, reg: RegisterId, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg, value)
    }

    fn modify(&self, phy_addr: u16, reg: RegisterId, clear: u16, set: u16) -> Result<u16> {
        (**self).modify(phy_addr, reg, clear, set)
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Read one PHY register
pub fn read<A: SwitchApi>(bus: &BusHandle<A>, phy_addr: u16, reg: RegisterId) -> Result<u16> {
    bus.config().check_phy_addr(phy_addr)?;
    let mode = query_clause(bus, phy_addr)?;
    let plan = plan_read(mode, phy_addr, reg);

    #[cfg(feature = "defmt")]
    defmt::trace!(
        "mdio read PHY {} {} via {} ({} ops)",
        phy_addr,
        reg,
        mode,
        plan.op_count()
    );

    Ok(plan.execute(bus)?)
}

/// Write one PHY register
pub fn write<A: SwitchApi>(
    bus: &BusHandle<A>,
    phy_addr: u16,
    reg: RegisterId,
    data: u16,
) -> Result<()> {
    bus.config().check_phy_addr(phy_addr)?;
    let mode = query_clause(bus, phy_addr)?;
    let plan = plan_write(mode, phy_addr, reg, data);

    #[cfg(feature = "defmt")]
    defmt::trace!(
        "mdio write PHY {} {} = {:#06x} via {} ({} ops)",
        phy_addr,
        reg,
        data,
        mode,
        plan.op_count()
    );

    plan.execute(bus)?;
    Ok(())
}

// =============================================================================
// Bus Scan
// =============================================================================

/// Probe PHY addresses 0-31 and record those that answer.
///
/// An address counts as populated when its PHY identifier is neither all
/// zeros nor all ones. Access errors on an address mean "nothing there" for
/// the purpose of the scan. Stops early once `found` is full; returns the
/// number of addresses written.
pub fn scan<M: MdioBus>(bus: &M, found: &mut [u16]) -> usize {
    let mut count = 0;

    for phy_addr in 0..=MAX_PHY_ADDR {
        if count == found.len() {
            break;
        }
        let Ok(id1) = bus.read(phy_addr, RegisterId::Flat(phy_reg::PHYIDR1)) else {
            continue;
        };
        let Ok(id2) = bus.read(phy_addr, RegisterId::Flat(phy_reg::PHYIDR2)) else {
            continue;
        };
        let id = ((id1 as u32) << 16) | id2 as u32;
        if id != 0 && id != 0xFFFF_FFFF {
            #[cfg(feature = "defmt")]
            defmt::debug!("PHY {} answers with id {:#010x}", phy_addr, id);
            found[count] = phy_addr;
            count += 1;
        }
    }

    count
}

// =============================================================================
// Unit Tests
// =============================================================================
