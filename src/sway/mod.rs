//! Sway-specific implementation.
//!
//! This module provides the concrete backend for the
//! [`Compositor`](crate::traits::Compositor) trait, powered by the
//! `swaymsg` command-line tool.
//!
//! Nothing outside this module should reference Sway directly.

pub mod msg;
