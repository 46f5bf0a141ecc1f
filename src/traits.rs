//! Core trait that decouples ksw from any specific compositor or
//! transport mechanism.
//!
//! The concrete backend (swaymsg, a test harness, …) implements
//! [`Compositor`].  The [`LayoutCycler`](crate::cycler::LayoutCycler)
//! only depends on this abstraction.

use crate::device::InputDevice;

/// Abstraction over a compositor that can report its input devices and
/// switch a device's keyboard layout.
///
/// An implementation might shell out to `swaymsg`, or it might be a
/// fixture-backed stub used in tests.
pub trait Compositor {
    /// The error type produced by this compositor.
    type Error: std::error::Error + Send + 'static;

    /// Return the list of input devices the compositor knows about, in
    /// the compositor's own order.
    fn inputs(&self) -> Result<Vec<InputDevice>, Self::Error>;

    /// Switch the layout of the device addressed by `identifier` to the
    /// one at `index` in that device's configured layout list.
    ///
    /// The index is not validated here; the compositor decides whether
    /// it is in range for the device.
    fn switch_layout(&self, identifier: &str, index: usize) -> Result<(), Self::Error>;
}
