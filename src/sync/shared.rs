//! Serialized bus handle using critical sections.
//!
//! Provides [`SharedBus`], a [`BusHandle`] whose accesses never interleave.

use super::primitives::CriticalSectionCell;
use crate::driver::{BusConfig, BusHandle};
use crate::error::Result;
use crate::hal::mdio::{self, MdioBus};
use crate::hal::register::RegisterId;
use crate::hal::transport::SwitchApi;

/// ISR-safe, serialized MDIO bus.
///
/// Each access (clause query plus every step of an emulated Clause 45
/// sequence) runs inside one `critical_section::with()`, so two contexts
/// sharing a controller cannot corrupt each other's MMDCTRL/MMDDATA setup.
/// [`MdioBus::modify`] holds the section across its read and write.
///
/// # Example
///
/// ```ignore
/// static BUS: SharedBus<SwitchDev> = SharedBus::new(SwitchDev::new(), BusConfig::new());
///
/// let phy = PhyDevice::new(&BUS, 0);
/// phy.modify(RegisterId::Flat(0), 0, bmcr::RESET)?;
/// ```
pub struct SharedBus<A: SwitchApi> {
    inner: CriticalSectionCell<BusHandle<A>>,
}

impl<A: SwitchApi> SharedBus<A> {
    /// Create a new shared bus (const, suitable for static initialization).
    pub const fn new(api: A, config: BusConfig) -> Self {
        Self::from_handle(BusHandle::new(api, config))
    }

    /// Wrap an existing handle
    pub const fn from_handle(bus: BusHandle<A>) -> Self {
        Self {
            inner: CriticalSectionCell::new(bus),
        }
    }

    /// Execute a closure with exclusive access to the handle.
    ///
    /// Use this to group several accesses into one uninterrupted sequence.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&BusHandle<A>) -> R,
    {
        self.inner.with(|bus| f(bus))
    }

    /// Try to execute a closure, returning `None` if already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&BusHandle<A>) -> R,
    {
        self.inner.try_with(|bus| f(bus))
    }

    /// Give back the wrapped handle
    pub fn into_inner(self) -> BusHandle<A> {
        self.inner.into_inner()
    }
}

impl<A: SwitchApi> MdioBus for SharedBus<A> {
    fn read(&self, phy_addr: u16, reg: RegisterId) -> Result<u16> {
        self.with(|bus| mdio::read(bus, phy_addr, reg))
    }

    fn write(&self, phy_addr: u16, reg: RegisterId, value: u16) -> Result<()> {
        self.with(|bus| mdio::write(bus, phy_addr, reg, value))
    }

    fn modify(&self, phy_addr: u16, reg: RegisterId, clear: u16, set: u16) -> Result<u16> {
        self.with(|bus| bus.modify(phy_addr, reg, clear, set))
    }
}
