//! The main orchestrator that ties the device filter and the compositor
//! together.
//!
//! [`LayoutCycler`] fetches the input-device list, keeps the multi-layout
//! keyboards, computes the next layout index, and issues one switch
//! command per keyboard through the [`Compositor`] trait.

use crate::device::{multi_layout_keyboards, InputDevice};
use crate::traits::Compositor;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::io;

/// Possible errors from the cycler.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    /// The compositor returned an error.
    #[error("compositor error: {0}")]
    Compositor(String),

    /// Fewer than two multi-layout keyboards were found.
    #[error("nothing to switch: found {found} keyboard(s) with 2 or more layouts, need at least 2")]
    NothingToSwitch { found: usize },

    /// `require_uniform_layouts` is set and a keyboard's layout list
    /// differs from the reference device's.
    #[error("layout lists differ: {0}")]
    LayoutMismatch(String),

    /// Writing a success line failed.
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

/// How the next layout index is computed across keyboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CycleMode {
    /// One index, computed from the reference device (the first
    /// multi-layout keyboard in query order), applied to every keyboard.
    ///
    /// This keeps heterogeneous keyboards in lock-step, but assumes all
    /// of them share the same layout-name ordering; when orderings or
    /// layout counts differ, keyboards can land on unrelated layouts or
    /// receive an index that is out of range for them.  Set
    /// [`require_uniform_layouts`](crate::config::Config::require_uniform_layouts)
    /// to make that precondition checked.
    #[default]
    #[serde(rename = "lockstep")]
    LockStep,

    /// Each keyboard advances from its own active layout, independently
    /// of the others.
    #[serde(rename = "per-device")]
    PerDevice,
}

/// Orchestrates the fetch → filter → compute → apply sequence.
///
/// The cycler is generic over any [`Compositor`] implementation, making it
/// completely independent of Sway or any other concrete backend.  Success
/// lines are written to the `out` writer passed to [`run`](Self::run), one
/// per keyboard, as each switch completes.
///
/// # Typical usage
///
/// ```ignore
/// let mut cycler = LayoutCycler::new(SwayMsg::new());
/// cycler.run(&mut std::io::stdout().lock())?;
/// ```
pub struct LayoutCycler<C: Compositor> {
    compositor: C,
    mode: CycleMode,
    require_uniform_layouts: bool,
}

impl<C: Compositor> LayoutCycler<C> {
    /// Create a new cycler with the default lock-step mode and no
    /// uniform-layouts check.
    pub fn new(compositor: C) -> Self {
        Self {
            compositor,
            mode: CycleMode::default(),
            require_uniform_layouts: false,
        }
    }

    /// Set the cycle mode.
    pub fn set_mode(&mut self, mode: CycleMode) {
        self.mode = mode;
    }

    /// Require every keyboard's layout list to be identical to the
    /// reference device's before any switch is issued.
    ///
    /// Only meaningful in [`CycleMode::LockStep`]; per-device mode never
    /// indexes one keyboard's list with another keyboard's position.
    pub fn set_require_uniform_layouts(&mut self, require: bool) {
        self.require_uniform_layouts = require;
    }

    /// Run one cycle: fetch devices, filter, compute the next index, and
    /// switch every multi-layout keyboard.
    ///
    /// Writes one success line per keyboard to `out` as each switch
    /// completes.  On error the remaining keyboards are left untouched;
    /// keyboards already switched in this run keep their new layout (no
    /// rollback).
    pub fn run<W: io::Write>(&self, out: &mut W) -> Result<(), CycleError> {
        let devices = self
            .compositor
            .inputs()
            .map_err(|e| CycleError::Compositor(e.to_string()))?;
        debug!("compositor reported {} input device(s)", devices.len());

        let keyboards = multi_layout_keyboards(devices);
        if keyboards.len() < 2 {
            return Err(CycleError::NothingToSwitch {
                found: keyboards.len(),
            });
        }
        info!("switching {} keyboard(s)", keyboards.len());

        let reference = &keyboards[0];
        if self.require_uniform_layouts {
            check_uniform_layouts(reference, &keyboards)?;
        }

        let lockstep_index = match self.mode {
            CycleMode::LockStep => Some(Self::next_index(reference)),
            CycleMode::PerDevice => None,
        };

        for keyboard in &keyboards {
            let index = match lockstep_index {
                Some(index) => index,
                None => Self::next_index(keyboard),
            };

            self.compositor
                .switch_layout(&keyboard.identifier, index)
                .map_err(|e| CycleError::Compositor(e.to_string()))?;

            writeln!(
                out,
                "{} switched to layout {} successfully.",
                keyboard.name,
                layout_label(keyboard, index)
            )?;
        }

        Ok(())
    }

    /// Next layout index for one keyboard: the position after its active
    /// layout, wrapping to 0 past the end of its list.
    ///
    /// A keyboard whose reported active layout is not in its own list is
    /// treated as being at position 0, so the next index is 1.
    fn next_index(keyboard: &InputDevice) -> usize {
        let current = keyboard.active_layout_index().unwrap_or_else(|| {
            warn!(
                "{}: active layout {:?} not in layout list, assuming index 0",
                keyboard.identifier, keyboard.active_layout_name
            );
            0
        });
        (current + 1) % keyboard.layout_names.len()
    }
}

/// Fail unless every keyboard's layout list equals the reference device's.
fn check_uniform_layouts(
    reference: &InputDevice,
    keyboards: &[InputDevice],
) -> Result<(), CycleError> {
    for keyboard in keyboards {
        if keyboard.layout_names != reference.layout_names {
            return Err(CycleError::LayoutMismatch(format!(
                "{} has layouts {:?} but reference device {} has {:?}",
                keyboard.identifier,
                keyboard.layout_names,
                reference.identifier,
                reference.layout_names
            )));
        }
    }
    Ok(())
}

/// Name of the layout a keyboard lands on at `index`, for the success line.
///
/// In lock-step mode the index comes from the reference device and can be
/// out of range for a keyboard with fewer layouts; render a placeholder
/// instead of panicking.
fn layout_label(keyboard: &InputDevice, index: usize) -> String {
    match keyboard.layout_names.get(index) {
        Some(name) => name.clone(),
        None => {
            warn!(
                "{}: layout index {} out of range ({} layouts configured)",
                keyboard.identifier,
                index,
                keyboard.layout_names.len()
            );
            format!("#{}", index)
        }
    }
}
