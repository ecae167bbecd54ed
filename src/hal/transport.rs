//! Switch driver transport
//!
//! The switch driver exposes MDIO through one configuration entry point
//! (`GSW_XGMAC_CFG` on `/dev/switch_api/N`) that takes a command type, a MAC
//! index and up to four integer arguments. [`MacCliCommand`] is the typed
//! form of those commands; [`SwitchApi`] is the driver call itself, supplied
//! by the caller.
//!
//! Every other layer in this crate is pure address and data shuffling around
//! [`BusHandle::execute`](crate::driver::BusHandle::execute), the only place
//! a [`SwitchApi`] is invoked.

use super::register::MmdDevice;

// =============================================================================
// Driver Command Types
// =============================================================================

/// Command type field of a driver request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacCliCmdType {
    /// MDIO register read (`MAC_CLI_SET_MDIO_RD`)
    MdioRead,
    /// MDIO register write (`MAC_CLI_SET_MDIO_WR`)
    MdioWrite,
    /// Clause capability query (`MAC_CLI_GET_MDIO_CL`)
    MdioClause,
}

/// One driver request
///
/// Clause 22 commands carry no device field; the driver receives device 0
/// for them, which is how it tells a Clause 22 frame from a Clause 45 one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacCliCommand {
    /// Clause 22 read of a flat register
    ReadC22 {
        /// PHY address
        phy_addr: u16,
        /// Register word index
        reg: u16,
    },
    /// Clause 22 write of a flat register
    WriteC22 {
        /// PHY address
        phy_addr: u16,
        /// Register word index
        reg: u16,
        /// Value to write
        data: u16,
    },
    /// Native Clause 45 read
    ReadC45 {
        /// PHY address
        phy_addr: u16,
        /// Target MMD
        device: MmdDevice,
        /// Register offset within the MMD
        reg: u16,
    },
    /// Native Clause 45 write
    WriteC45 {
        /// PHY address
        phy_addr: u16,
        /// Target MMD
        device: MmdDevice,
        /// Register offset within the MMD
        reg: u16,
        /// Value to write
        data: u16,
    },
    /// Ask which clause the PHY's bus currently speaks
    QueryClause {
        /// PHY address
        phy_addr: u16,
    },
}

impl MacCliCommand {
    /// Command type field
    pub const fn cmd_type(&self) -> MacCliCmdType {
        match self {
            MacCliCommand::ReadC22 { .. } | MacCliCommand::ReadC45 { .. } => {
                MacCliCmdType::MdioRead
            }
            MacCliCommand::WriteC22 { .. } | MacCliCommand::WriteC45 { .. } => {
                MacCliCmdType::MdioWrite
            }
            MacCliCommand::QueryClause { .. } => MacCliCmdType::MdioClause,
        }
    }

    /// Target PHY address
    pub const fn phy_addr(&self) -> u16 {
        match *self {
            MacCliCommand::ReadC22 { phy_addr, .. }
            | MacCliCommand::WriteC22 { phy_addr, .. }
            | MacCliCommand::ReadC45 { phy_addr, .. }
            | MacCliCommand::WriteC45 { phy_addr, .. }
            | MacCliCommand::QueryClause { phy_addr } => phy_addr,
        }
    }

    /// True if the driver is expected to return data
    pub const fn is_get(&self) -> bool {
        !matches!(self.cmd_type(), MacCliCmdType::MdioWrite)
    }

    /// Argument vector in driver order: `[device, phy, reg, data]`.
    ///
    /// Returns the number of meaningful arguments alongside the vector;
    /// unused trailing slots are zero.
    pub const fn args(&self) -> (usize, [u32; 4]) {
        match *self {
            MacCliCommand::ReadC22 { phy_addr, reg } => (3, [0, phy_addr as u32, reg as u32, 0]),
            MacCliCommand::WriteC22 {
                phy_addr,
                reg,
                data,
            } => (4, [0, phy_addr as u32, reg as u32, data as u32]),
            MacCliCommand::ReadC45 {
                phy_addr,
                device,
                reg,
            } => (3, [device.value() as u32, phy_addr as u32, reg as u32, 0]),
            MacCliCommand::WriteC45 {
                phy_addr,
                device,
                reg,
                data,
            } => (
                4,
                [
                    device.value() as u32,
                    phy_addr as u32,
                    reg as u32,
                    data as u32,
                ],
            ),
            MacCliCommand::QueryClause { phy_addr } => (2, [0, phy_addr as u32, 0, 0]),
        }
    }
}

// =============================================================================
// Driver Trait
// =============================================================================

/// The switch driver's configuration call
///
/// Implemented by the caller, typically as an `ioctl` on an open switch
/// device node. A negative return is an error code; a non-negative return is
/// the read value, the clause flag, or a success indicator depending on the
/// command. Takes `&self`: an open descriptor is not mutated by issuing
/// requests on it.
///
/// # Example Implementation
///
/// ```ignore
/// struct SwitchDev {
///     fd: RawFd,
/// }
///
/// impl SwitchApi for SwitchDev {
///     fn xgmac_cfg(&self, mac_idx: u8, cmd: MacCliCommand) -> i32 {
///         let (argc, val) = cmd.args();
///         let mut param = GswMacCli::new(cmd.cmd_type(), mac_idx, argc, val);
///         unsafe { libc::ioctl(self.fd, GSW_XGMAC_CFG, &mut param) }
///     }
/// }
/// ```
pub trait SwitchApi {
    /// Issue one request against MAC controller `mac_idx`
    fn xgmac_cfg(&self, mac_idx: u8, cmd: MacCliCommand) -> i32;
}

impl<T: SwitchApi + ?Sized> SwitchApi for &T {
    fn xgmac_cfg(&self, mac_idx: u8, cmd: MacCliCommand) -> i32 {
        (**self).xgmac_cfg(mac_idx, cmd)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
