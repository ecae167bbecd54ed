//! GPY2xx MDIO Bus Shim
//!
//! A `no_std`, `no_alloc` MDIO access layer for MaxLinear/Intel GPY2xx
//! Ethernet PHYs sitting behind a switch driver's MAC controller.
//!
//! The vendor PHY library addresses registers with one `u32` per register:
//! plain Clause 22 word indices, or Clause 45 ids tagged with
//! [`MII_ADDR_C45`](constants::MII_ADDR_C45) that carry an MMD device and a
//! 16-bit offset. This crate turns each access into the right sequence of
//! switch driver commands:
//!
//! - Clause 22 ids: one Clause 22 frame
//! - Clause 45 ids on a native Clause 45 bus: one Clause 45 frame
//! - Clause 45 ids on a Clause 22 bus: emulated through MMDCTRL/MMDDATA
//!   (three setup writes plus the data access)
//!
//! The bus clause is asked for on every access, since the driver can switch
//! it whenever it reinitializes the PHY.
//!
//! # Architecture
//!
//! 1. **HAL Layer** ([`hal`]): Driver commands, register ids, the address
//!    codec, the clause query and the [`MdioBus`] trait
//! 2. **Driver Layer** ([`driver`]): The caller-owned [`BusHandle`] and its
//!    [`BusConfig`]
//! 3. **PHY Layer** ([`phy`]): [`PhyDevice`], one PHY bound to a bus
//!
//! The switch driver itself is supplied by the caller through [`SwitchApi`].
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for public types and debug logging
//! - `critical-section`: Enable the ISR-safe [`SharedBus`](sync::SharedBus) wrapper
//!
//! # Example
//!
//! ```ignore
//! use gpy2xx_mdio::{BusConfig, BusHandle, MdioBus, RegisterId};
//!
//! // Your SwitchApi implementation (ioctl on /dev/switch_api/0 or similar)
//! let switch = SwitchDev::open()?;
//!
//! let bus = BusHandle::new(switch, BusConfig::new());
//!
//! // Flat Clause 22 register
//! let bmsr = bus.read(0, RegisterId::Flat(1))?;
//!
//! // PCS register 3.16, whichever clause the bus speaks right now
//! let pcs = bus.read(0, RegisterId::from_raw(0x4003_0010))?;
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; thresholds and config are in clippy.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod driver;
pub mod hal;
pub mod phy;

mod error;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub(crate) mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::{BusConfig, BusHandle};
pub use error::{
    ConfigError, ConfigResult, Error, Result, TransportError, TransportResult,
};
pub use hal::{
    AccessPlan, ClauseMode, MacCliCmdType, MacCliCommand, MdioBus, MmdDevice, RegisterId,
    SwitchApi, plan_read, plan_write, query_clause, read, scan, write,
};

// Re-export PHY types
pub use phy::PhyDevice;

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedBus;

/// Shared protocol constants.
///
/// Grouped into a dedicated module to keep the top-level facade focused on
/// bus types.
pub mod constants {
    pub use crate::hal::codec::MMD_SETUP_WRITES;
    pub use crate::internal::constants::{
        // Controller
        DEFAULT_MAC_INDEX,
        // Addressing
        MAX_MMD_DEVICE,
        MAX_PHY_ADDR,
        // Register id encoding
        MII_ADDR_C45,
        MMD_DEVICE_MASK,
        MMD_DEVICE_SHIFT,
        MMD_OFFSET_MASK,
        // Timing
        SOFT_RESET_POLL_INTERVAL_MS,
        SOFT_RESET_TIMEOUT_MS,
    };
}
