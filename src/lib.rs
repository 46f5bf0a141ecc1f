//! **ksw** — a synchronized keyboard layout switcher for Sway.
//!
//! Sway configures keyboard layouts per input device, so switching layouts
//! on a machine with several physical keyboards means issuing one command
//! per device.  ksw queries the compositor's input-device list, keeps the
//! keyboards with two or more configured layouts, computes the next layout
//! index, and applies it to every one of them in a single invocation.
//!
//! # Architecture
//!
//! The crate is organised around one core trait:
//!
//! * [`traits::Compositor`] — abstracts the input-device query and the
//!   layout mutation so the cycling logic is not coupled to any specific
//!   compositor or IPC mechanism.
//!
//! The concrete implementation lives in [`sway`] (shelling out to
//! `swaymsg`); the [`cycler::LayoutCycler`] only depends on the trait.

pub mod config;
pub mod cycler;
pub mod device;
pub mod sway;
pub mod traits;
