//! Lifecycle policy for the desktop shell
//!
//! The host runtime owns the window set and the event loop; this module only
//! answers the two questions the shell has to decide for itself:
//! - does closing the last window end the process?
//! - does reactivating the application open a fresh window?

use tracing::debug;

/// What to do when the host reports that the last window has closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    /// Terminate the process
    Exit,
    /// Keep the process resident with zero windows
    StayResident,
}

/// Whether applications on this platform conventionally stay resident after
/// their last window closes. `os` is expected in `std::env::consts::OS` form.
pub fn remains_resident(os: &str) -> bool {
    os == "macos"
}

/// Decide the process fate when the last window closes.
pub fn on_all_windows_closed(os: &str) -> ExitDecision {
    let decision = if remains_resident(os) {
        ExitDecision::StayResident
    } else {
        ExitDecision::Exit
    };
    debug!(os, ?decision, "all windows closed");
    decision
}

/// A reactivation signal opens a new window only when none are open.
pub fn should_respawn_on_activate(open_windows: usize) -> bool {
    open_windows == 0
}
