//! Bus handle driver
//!
//! - [`config`]: Bus handle configuration
//! - [`bus`]: The caller-owned [`BusHandle`](bus::BusHandle)

pub mod bus;
pub mod config;

pub use bus::BusHandle;
pub use config::BusConfig;
