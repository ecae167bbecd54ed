//! MDIO Access Layer
//!
//! Leaves first:
//!
//! - [`transport`]: Typed driver commands and the [`SwitchApi`] call
//! - [`register`]: Clause 22 / Clause 45 register addressing
//! - [`codec`]: Register id + clause mode to driver commands
//! - [`clause`]: Per-call clause capability query
//! - [`mdio`]: `read` / `write` entry points and the [`MdioBus`] trait

pub mod clause;
pub mod codec;
pub mod mdio;
pub mod register;
pub mod transport;

// Re-export commonly used types
pub use clause::{ClauseMode, query_clause};
pub use codec::{AccessPlan, plan_read, plan_write};
pub use mdio::{MdioBus, read, scan, write};
pub use register::{MmdDevice, RegisterId};
pub use transport::{MacCliCmdType, MacCliCommand, SwitchApi};
