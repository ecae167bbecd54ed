//! Testing utilities and mock implementations
//!
//! This module provides a mock switch driver for testing the MDIO layer
//! on the host without a switch device node.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::vec::Vec;

use crate::hal::clause::ClauseMode;
use crate::hal::register::MmdDevice;
use crate::hal::transport::{MacCliCommand, SwitchApi};
use crate::internal::phy_regs::{mmd_ctrl, phy_reg};

/// PHY identifier reported by [`MockSwitchApi::setup_gpy211`]
pub const GPY211_PHY_ID: u32 = 0x67C9_DE00;

// =============================================================================
// Mock Switch Driver
// =============================================================================

/// MMDCTRL/MMDDATA state of one mocked PHY
#[derive(Debug, Default, Clone, Copy)]
struct MmdLatch {
    ctrl: u16,
    addr: u16,
}

/// Bits cleared after a number of reads of a register
#[derive(Debug, Clone, Copy)]
struct ClearOnRead {
    mask: u16,
    reads_left: u32,
}

/// Mock switch driver for testing without a device node
///
/// Backs Clause 22 and Clause 45 register files per PHY address and
/// models the MMDCTRL/MMDDATA indirection, so an emulated Clause 45 write
/// is visible to a later native read and vice versa. Every call is logged.
///
/// # Example
///
/// ```ignore
/// let api = MockSwitchApi::new();
/// api.set_clause(ClauseMode::Clause22);
/// api.set_c45(0, MmdDevice::PCS, 0x0010, 0x8001);
///
/// let bus = BusHandle::new(&api, BusConfig::new());
/// assert_eq!(bus.read(0, RegisterId::mmd(3, 0x0010)?), Ok(0x8001));
/// assert_eq!(api.commands().len(), 5);
/// ```
#[derive(Debug)]
pub struct MockSwitchApi {
    /// Every call: (mac_idx, command)
    log: RefCell<Vec<(u8, MacCliCommand)>>,
    /// Calls issued since creation
    calls: Cell<usize>,
    /// One-shot failure: (call number, return code)
    failure: Cell<Option<(usize, i32)>>,
    /// Value returned for clause queries
    query_result: Cell<i32>,
    /// Clause 22 registers: (phy_addr, reg) -> value
    c22: RefCell<HashMap<(u16, u16), u16>>,
    /// Clause 45 registers: (phy_addr, devad, reg) -> value
    c45: RefCell<HashMap<(u16, u8, u16), u16>>,
    /// MMD indirection state per PHY address
    latches: RefCell<HashMap<u16, MmdLatch>>,
    /// Self-clearing bits: (phy_addr, reg) -> rule
    clear_on_read: RefCell<HashMap<(u16, u16), ClearOnRead>>,
}

impl Default for MockSwitchApi {
    fn default() -> Self {
        Self {
            log: RefCell::default(),
            calls: Cell::new(0),
            failure: Cell::new(None),
            query_result: Cell::new(1),
            c22: RefCell::default(),
            c45: RefCell::default(),
            latches: RefCell::default(),
            clear_on_read: RefCell::default(),
        }
    }
}

impl MockSwitchApi {
    /// Create a mock whose PHYs report Clause 22 and hold all-zero registers
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued since creation or the last [`clear_commands`](Self::clear_commands)
    pub fn commands(&self) -> Vec<MacCliCommand> {
        self.log.borrow().iter().map(|&(_, cmd)| cmd).collect()
    }

    /// MAC indices the commands were sent to
    pub fn mac_indices(&self) -> Vec<u8> {
        self.log.borrow().iter().map(|&(idx, _)| idx).collect()
    }

    /// Clear the command log
    pub fn clear_commands(&self) {
        self.log.borrow_mut().clear();
    }

    /// Make call number `call` (counted from creation, starting at 0) return
    /// `code`. The failing call is still logged.
    pub fn fail_call(&self, call: usize, code: i32) {
        self.failure.set(Some((call, code)));
    }

    /// Raw value returned for clause queries (negative fails them)
    pub fn set_query_result(&self, result: i32) {
        self.query_result.set(result);
    }

    /// Report `mode` for clause queries
    pub fn set_clause(&self, mode: ClauseMode) {
        self.set_query_result(match mode {
            ClauseMode::Clause45 => 0,
            ClauseMode::Clause22 => 1,
        });
    }

    /// Set a Clause 22 register
    pub fn set_c22(&self, phy_addr: u16, reg: u16, value: u16) {
        self.c22.borrow_mut().insert((phy_addr, reg), value);
    }

    /// Current value of a Clause 22 register, if it was ever set or written
    pub fn c22(&self, phy_addr: u16, reg: u16) -> Option<u16> {
        self.c22.borrow().get(&(phy_addr, reg)).copied()
    }

    /// Set a Clause 45 register
    pub fn set_c45(&self, phy_addr: u16, device: MmdDevice, reg: u16, value: u16) {
        self.c45
            .borrow_mut()
            .insert((phy_addr, device.value(), reg), value);
    }

    /// Current value of a Clause 45 register, if it was ever set or written
    pub fn c45(&self, phy_addr: u16, device: MmdDevice, reg: u16) -> Option<u16> {
        self.c45
            .borrow()
            .get(&(phy_addr, device.value(), reg))
            .copied()
    }

    /// Clear `mask` in a Clause 22 register on its `reads`-th read from now
    pub fn clear_on_read(&self, phy_addr: u16, reg: u16, mask: u16, reads: u32) {
        self.clear_on_read.borrow_mut().insert(
            (phy_addr, reg),
            ClearOnRead {
                mask,
                reads_left: reads,
            },
        );
    }

    /// Populate the identifier registers of a GPY211 at `phy_addr`
    pub fn setup_gpy211(&self, phy_addr: u16) {
        self.set_c22(phy_addr, phy_reg::PHYIDR1, (GPY211_PHY_ID >> 16) as u16);
        self.set_c22(phy_addr, phy_reg::PHYIDR2, GPY211_PHY_ID as u16);
    }

    fn latch(&self, phy_addr: u16) -> MmdLatch {
        self.latches
            .borrow()
            .get(&phy_addr)
            .copied()
            .unwrap_or_default()
    }

    fn read_c22(&self, phy_addr: u16, reg: u16) -> u16 {
        if reg == phy_reg::MMD_DATA {
            let latch = self.latch(phy_addr);
            if latch.ctrl & mmd_ctrl::FUNCTION_MASK == mmd_ctrl::FUNCTION_ADDRESS {
                return latch.addr;
            }
            let devad = (latch.ctrl & mmd_ctrl::DEVAD_MASK) as u8;
            return self
                .c45
                .borrow()
                .get(&(phy_addr, devad, latch.addr))
                .copied()
                .unwrap_or(0);
        }

        let mut rules = self.clear_on_read.borrow_mut();
        if let Some(rule) = rules.get_mut(&(phy_addr, reg)) {
            rule.reads_left = rule.reads_left.saturating_sub(1);
            if rule.reads_left == 0 {
                let mask = rule.mask;
                rules.remove(&(phy_addr, reg));
                if let Some(value) = self.c22.borrow_mut().get_mut(&(phy_addr, reg)) {
                    *value &= !mask;
                }
            }
        }
        self.c22(phy_addr, reg).unwrap_or(0)
    }

    fn write_c22(&self, phy_addr: u16, reg: u16, data: u16) {
        let mut latches = self.latches.borrow_mut();
        let latch = latches.entry(phy_addr).or_default();

        if reg == phy_reg::MMD_CTRL {
            latch.ctrl = data;
        } else if reg == phy_reg::MMD_DATA {
            if latch.ctrl & mmd_ctrl::FUNCTION_MASK == mmd_ctrl::FUNCTION_ADDRESS {
                latch.addr = data;
            } else {
                let devad = (latch.ctrl & mmd_ctrl::DEVAD_MASK) as u8;
                self.c45
                    .borrow_mut()
                    .insert((phy_addr, devad, latch.addr), data);
            }
            return;
        }
        self.set_c22(phy_addr, reg, data);
    }
}

impl SwitchApi for MockSwitchApi {
    fn xgmac_cfg(&self, mac_idx: u8, cmd: MacCliCommand) -> i32 {
        self.log.borrow_mut().push((mac_idx, cmd));

        let call = self.calls.get();
        self.calls.set(call + 1);
        if let Some((failing, code)) = self.failure.get() {
            if failing == call {
                self.failure.set(None);
                return code;
            }
        }

        match cmd {
            MacCliCommand::QueryClause { .. } => self.query_result.get(),
            MacCliCommand::ReadC22 { phy_addr, reg } => i32::from(self.read_c22(phy_addr, reg)),
            MacCliCommand::WriteC22 {
                phy_addr,
                reg,
                data,
            } => {
                self.write_c22(phy_addr, reg, data);
                0
            }
            MacCliCommand::ReadC45 {
                phy_addr,
                device,
                reg,
            } => i32::from(self.c45(phy_addr, device, reg).unwrap_or(0)),
            MacCliCommand::WriteC45 {
                phy_addr,
                device,
                reg,
                data,
            } => {
                self.set_c45(phy_addr, device, reg, data);
                0
            }
        }
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: u64,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total milliseconds that were "delayed"
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.total_ns += u64::from(us) * 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

// =============================================================================
// Test Assertions
// =============================================================================

/// Assert that a Clause 22 register was written with a specific value
#[macro_export]
macro_rules! assert_c22_written {
    ($api:expr, $phy:expr, $reg:expr, $value:expr) => {
        let cmds = $api.commands();
        assert!(
            cmds.contains(&$crate::hal::transport::MacCliCommand::WriteC22 {
                phy_addr: $phy,
                reg: $reg,
                data: $value,
            }),
            "Expected write to PHY {} reg {} with value 0x{:04X}, but got: {:?}",
            $phy,
            $reg,
            $value,
            cmds
        );
    };
}

/// Assert an exact run of Clause 22 writes, optionally ending in a read
#[macro_export]
macro_rules! assert_c22_sequence {
    ($cmds:expr, $phy:expr, [$(($reg:expr, $data:expr)),* $(,)?] $(, read $read_reg:expr)?) => {{
        let mut expected = std::vec::Vec::new();
        $(
            expected.push($crate::hal::transport::MacCliCommand::WriteC22 {
                phy_addr: $phy,
                reg: $reg,
                data: $data,
            });
        )*
        $(
            expected.push($crate::hal::transport::MacCliCommand::ReadC22 {
                phy_addr: $phy,
                reg: $read_reg,
            });
        )?
        assert_eq!($cmds, expected);
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_registers_read_zero() {
        let api = MockSwitchApi::new();
        let value = api.xgmac_cfg(2, MacCliCommand::ReadC22 { phy_addr: 0, reg: 1 });
        assert_eq!(value, 0);
        assert_eq!(api.c22(0, 1), None);
    }

    #[test]
    fn failure_is_one_shot() {
        let api = MockSwitchApi::new();
        api.fail_call(1, -5);
        let query = MacCliCommand::QueryClause { phy_addr: 0 };

        assert_eq!(api.xgmac_cfg(2, query), 1);
        assert_eq!(api.xgmac_cfg(2, query), -5);
        assert_eq!(api.xgmac_cfg(2, query), 1);
        assert_eq!(api.commands().len(), 3);
    }

    #[test]
    fn mmd_latch_reaches_c45_file() {
        let api = MockSwitchApi::new();
        let write = |reg, data| {
            api.xgmac_cfg(2, MacCliCommand::WriteC22 {
                phy_addr: 0,
                reg,
                data,
            })
        };

        write(13, 0x0007);
        write(14, 0x0020);
        write(13, 0x4007);
        write(14, 0x1234);

        assert_eq!(api.c45(0, MmdDevice::AN, 0x0020), Some(0x1234));
        assert_eq!(api.c22(0, 14), None);
    }

    #[test]
    fn clear_on_read_fires_on_nth_read() {
        let api = MockSwitchApi::new();
        api.set_c22(0, 0, 0x8000);
        api.clear_on_read(0, 0, 0x8000, 2);
        let read = || api.xgmac_cfg(2, MacCliCommand::ReadC22 { phy_addr: 0, reg: 0 });

        assert_eq!(read(), 0x8000);
        assert_eq!(read(), 0);
        assert_eq!(read(), 0);
    }
}
