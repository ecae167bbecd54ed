//! Error types for the GPY2xx MDIO shim
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Invalid addresses or handle configuration
//! - [`TransportError`]: A driver call returned a negative code
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by the register access entry points.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and addressing errors
///
/// These are raised before any driver call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Invalid PHY address (must be 0-31)
    InvalidPhyAddress,
    /// Invalid MMD device id (must be 0-31)
    InvalidMmdDevice,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::InvalidMmdDevice => "invalid MMD device",
        }
    }
}

// =============================================================================
// Transport Errors
// =============================================================================

/// A failed driver call
///
/// Carries the negative code returned by the switch driver, untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransportError {
    code: i32,
}

impl TransportError {
    /// Wrap a driver return code
    pub const fn new(code: i32) -> Self {
        Self { code }
    }

    /// The code the driver returned
    pub const fn code(&self) -> i32 {
        self.code
    }
}

impl core::fmt::Display for TransportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "driver call failed ({})", self.code)
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// A failed clause query is kept apart from a failed register access so a
/// caller can tell "the bus could not be probed" from "the access failed":
/// ```ignore
/// match mdio::read(&bus, 0, reg) {
///     Err(Error::CapabilityQueryFailed(e)) => { /* nothing was touched */ }
///     Err(Error::Transport(e)) => { /* an access step failed */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A register access step failed
    Transport(TransportError),
    /// The clause capability query failed
    CapabilityQueryFailed(TransportError),
    /// Configuration error
    Config(ConfigError),
    /// A self-clearing bit never cleared
    Timeout,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "transport: {e}"),
            Error::CapabilityQueryFailed(e) => write!(f, "clause query: {e}"),
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Timeout => f.write_str("operation timed out"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Transport(e)
    }
}

/// Result type alias for register access operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for single driver calls
pub type TransportResult<T> = core::result::Result<T, TransportError>;

// =============================================================================
// Unit Tests
// =============================================================================
