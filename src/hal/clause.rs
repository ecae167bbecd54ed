//! Clause capability query
//!
//! Whether a PHY's MDIO bus runs Clause 22 or Clause 45 frames is a property
//! of the driver's current PHY setup, not of the handle. It is asked for on
//! every access and never cached.

use crate::driver::BusHandle;
use crate::error::{Error, Result};

use super::transport::{MacCliCommand, SwitchApi};

/// MDIO clause the bus currently uses for a PHY
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClauseMode {
    /// Clause 22 frames only; MMD registers need emulation
    Clause22,
    /// Native Clause 45 frames
    Clause45,
}

impl ClauseMode {
    /// Decode the driver's non-negative clause flag: zero means Clause 45.
    ///
    /// The flag is a byte; bits above the low eight are ignored.
    pub const fn from_query_result(flag: u32) -> Self {
        if flag as u8 == 0 {
            ClauseMode::Clause45
        } else {
            ClauseMode::Clause22
        }
    }
}

/// Ask the driver which clause the bus uses for `phy_addr`.
///
/// A failed query is reported as [`Error::CapabilityQueryFailed`]; it is
/// never read as either mode.
pub fn query_clause<A: SwitchApi>(bus: &BusHandle<A>, phy_addr: u16) -> Result<ClauseMode> {
    match bus.execute_raw(MacCliCommand::QueryClause { phy_addr }) {
        Ok(flag) => Ok(ClauseMode::from_query_result(flag)),
        Err(e) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("clause query for PHY {} failed: {}", phy_addr, e.code());
            Err(Error::CapabilityQueryFailed(e))
        }
    }
}
