//! Synchronization Support
//!
//! Serialized access to one MAC controller's MDIO master:
//!
//! - **Primitives** (`primitives`): [`CriticalSectionCell`], ISR-safe
//!   interior mutability
//! - **Shared Wrappers** (`shared`): [`SharedBus`], a bus handle whose
//!   accesses never interleave
//!
//! # Feature Flags
//!
//! - `critical-section`: Enables this module
//!
//! # Example
//!
//! ```ignore
//! use gpy2xx_mdio::sync::SharedBus;
//!
//! static BUS: SharedBus<SwitchDev> = SharedBus::new(SwitchDev::new(), BusConfig::new());
//!
//! fn poll() {
//!     let status = BUS.read(0, RegisterId::Flat(1));
//! }
//!
//! #[interrupt]
//! fn PHY_IRQ() {
//!     // Cannot land between another context's MMDCTRL and MMDDATA writes
//!     BUS.read(0, RegisterId::Flat(0x1A)).ok();
//! }
//! ```

mod primitives;

pub use primitives::CriticalSectionCell;

mod shared;

pub use shared::SharedBus;
