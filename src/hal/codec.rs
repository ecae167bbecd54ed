//! Register address codec
//!
//! Turns a [`RegisterId`] and the PHY's current [`ClauseMode`] into the driver
//! commands that perform the access:
//!
//! | Register id | Clause 45 bus | Clause 22 bus |
//! |-------------|---------------|---------------|
//! | `Flat`      | 1 x C22       | 1 x C22       |
//! | `Mmd`       | 1 x native C45 | 3 x C22 setup + 1 x C22 access |
//!
//! The Clause 22 emulation of an MMD access goes through MMDCTRL/MMDDATA:
//!
//! 1. `MMDCTRL := device` (function = address)
//! 2. `MMDDATA := offset` (latch the register address)
//! 3. `MMDCTRL := 0x4000 | device` (function = data)
//! 4. read or write `MMDDATA`
//!
//! Planning is pure; [`AccessPlan::execute`] runs the commands in order and
//! stops at the first failure. Nothing is undone after a failure: the
//! MMDCTRL/MMDDATA latches hold no state that outlives the next access, and
//! a retry replays the whole sequence.

use core::iter;

use crate::driver::BusHandle;
use crate::error::TransportResult;
use crate::internal::phy_regs::{mmd_ctrl, phy_reg};

use super::clause::ClauseMode;
use super::register::{MmdDevice, RegisterId};
use super::transport::{MacCliCommand, SwitchApi};

/// Number of setup writes in an emulated Clause 45 access
pub const MMD_SETUP_WRITES: usize = 3;

// =============================================================================
// Access Plan
// =============================================================================

/// The driver commands for one logical register access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccessPlan {
    /// A single Clause 22 or native Clause 45 command
    Direct(MacCliCommand),
    /// Clause 45 emulated over Clause 22
    Emulated {
        /// MMDCTRL/MMDDATA address setup writes
        setup: [MacCliCommand; MMD_SETUP_WRITES],
        /// Final MMDDATA read or write
        access: MacCliCommand,
    },
}

impl AccessPlan {
    /// True if this plan emulates Clause 45 over Clause 22
    pub const fn is_emulated(&self) -> bool {
        matches!(self, AccessPlan::Emulated { .. })
    }

    /// Number of driver commands in the plan
    pub const fn op_count(&self) -> usize {
        match self {
            AccessPlan::Direct(_) => 1,
            AccessPlan::Emulated { .. } => MMD_SETUP_WRITES + 1,
        }
    }

    /// The command whose result is the result of the access
    pub const fn access(&self) -> MacCliCommand {
        match *self {
            AccessPlan::Direct(cmd) | AccessPlan::Emulated { access: cmd, .. } => cmd,
        }
    }

    /// All commands in issue order
    pub fn commands(&self) -> impl Iterator<Item = MacCliCommand> + '_ {
        let setup: &[MacCliCommand] = match self {
            AccessPlan::Direct(_) => &[],
            AccessPlan::Emulated { setup, .. } => setup,
        };
        setup.iter().copied().chain(iter::once(self.access()))
    }

    /// Run the plan against `bus`.
    ///
    /// Returns the final command's result: the register value for a read,
    /// the driver's success indicator for a write.
    pub fn execute<A: SwitchApi>(&self, bus: &BusHandle<A>) -> TransportResult<u16> {
        if let AccessPlan::Emulated { setup, .. } = self {
            for (_step, cmd) in setup.iter().enumerate() {
                if let Err(e) = bus.execute(*cmd) {
                    #[cfg(feature = "defmt")]
                    defmt::warn!(
                        "MMD emulation aborted at step {}: {}",
                        _step + 1,
                        e.code()
                    );
                    return Err(e);
                }
            }
        }
        bus.execute(self.access())
    }
}

// =============================================================================
// Planning
// =============================================================================

/// Plan a read of `reg` on a bus currently in `mode`
pub const fn plan_read(mode: ClauseMode, phy_addr: u16, reg: RegisterId) -> AccessPlan {
    match (reg, mode) {
        (RegisterId::Flat(reg), _) => AccessPlan::Direct(MacCliCommand::ReadC22 { phy_addr, reg }),
        (RegisterId::Mmd { device, offset }, ClauseMode::Clause45) => {
            AccessPlan::Direct(MacCliCommand::ReadC45 {
                phy_addr,
                device,
                reg: offset,
            })
        }
        (RegisterId::Mmd { device, offset }, ClauseMode::Clause22) => AccessPlan::Emulated {
            setup: mmd_setup(phy_addr, device, offset),
            access: MacCliCommand::ReadC22 {
                phy_addr,
                reg: phy_reg::MMD_DATA,
            },
        },
    }
}

/// Plan a write of `data` to `reg` on a bus currently in `mode`
pub const fn plan_write(mode: ClauseMode, phy_addr: u16, reg: RegisterId, data: u16) -> AccessPlan {
    match (reg, mode) {
        (RegisterId::Flat(reg), _) => {
            AccessPlan::Direct(MacCliCommand::WriteC22 { phy_addr, reg, data })
        }
        (RegisterId::Mmd { device, offset }, ClauseMode::Clause45) => {
            AccessPlan::Direct(MacCliCommand::WriteC45 {
                phy_addr,
                device,
                reg: offset,
                data,
            })
        }
        (RegisterId::Mmd { device, offset }, ClauseMode::Clause22) => AccessPlan::Emulated {
            setup: mmd_setup(phy_addr, device, offset),
            access: MacCliCommand::WriteC22 {
                phy_addr,
                reg: phy_reg::MMD_DATA,
                data,
            },
        },
    }
}

/// MMDCTRL/MMDDATA writes that point MMDDATA at `device`:`offset`
const fn mmd_setup(phy_addr: u16, device: MmdDevice, offset: u16) -> [MacCliCommand; 3] {
    let devad = device.value() as u16 & mmd_ctrl::DEVAD_MASK;
    [
        MacCliCommand::WriteC22 {
            phy_addr,
            reg: phy_reg::MMD_CTRL,
            data: mmd_ctrl::FUNCTION_ADDRESS | devad,
        },
        MacCliCommand::WriteC22 {
            phy_addr,
            reg: phy_reg::MMD_DATA,
            data: offset,
        },
        MacCliCommand::WriteC22 {
            phy_addr,
            reg: phy_reg::MMD_CTRL,
            data: mmd_ctrl::FUNCTION_DATA | devad,
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
