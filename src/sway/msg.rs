//! [`Compositor`] implementation backed by the `swaymsg` tool.
//!
//! ksw never opens the Sway IPC socket itself; every query and mutation
//! goes through a short-lived `swaymsg` child process.  `swaymsg` resolves
//! the socket from the session environment, so no socket discovery is
//! needed here.

use crate::device::InputDevice;
use crate::traits::Compositor;
use log::debug;
use std::process::Command;

/// swaymsg-backed compositor.
///
/// Each method call spawns one `swaymsg` process and blocks until it
/// exits.  There is no timeout and no retry.
pub struct SwayMsg;

/// Errors that can occur when talking to swaymsg.
#[derive(Debug, thiserror::Error)]
pub enum SwayMsgError {
    /// The `swaymsg` process could not be spawned or its output could not
    /// be collected.
    #[error("failed to invoke swaymsg: {0}")]
    Invoke(#[from] std::io::Error),

    /// `swaymsg` exited with a non-zero status.
    #[error("swaymsg failed: {0}")]
    Command(String),

    /// The query output was not the expected JSON.
    #[error("failed to parse swaymsg output: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Default for SwayMsg {
    fn default() -> Self {
        Self
    }
}

impl SwayMsg {
    /// Create a new handle.
    ///
    /// No process is spawned eagerly; each method call runs its own
    /// short-lived `swaymsg` invocation.
    pub fn new() -> Self {
        Self
    }
}

//  swaymsg invocation helper

/// Run `swaymsg` with the given arguments and return its stdout.
///
/// A non-zero exit status becomes [`SwayMsgError::Command`] carrying the
/// trimmed stderr text.
fn swaymsg(args: &[&str]) -> Result<Vec<u8>, SwayMsgError> {
    debug!("swaymsg {}", args.join(" "));
    let output = Command::new("swaymsg").args(args).output()?;
    if !output.status.success() {
        return Err(SwayMsgError::Command(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }
    Ok(output.stdout)
}

/// Parse the `get_inputs` reply: a JSON array of device objects.
fn parse_inputs(raw: &[u8]) -> Result<Vec<InputDevice>, serde_json::Error> {
    serde_json::from_slice(raw)
}

//  Compositor implementation

impl Compositor for SwayMsg {
    type Error = SwayMsgError;

    fn inputs(&self) -> Result<Vec<InputDevice>, Self::Error> {
        let raw = swaymsg(&["--raw", "--type", "get_inputs"])?;
        Ok(parse_inputs(&raw)?)
    }

    fn switch_layout(&self, identifier: &str, index: usize) -> Result<(), Self::Error> {
        // swaymsg prints a JSON status array on success; only the exit
        // status matters, the output is discarded.
        swaymsg(&["input", identifier, "xkb_switch_layout", &index.to_string()])?;
        Ok(())
    }
}
