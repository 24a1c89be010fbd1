//! Application lifecycle wiring
//!
//! Binds the Tauri runtime events to the shell's lifecycle policy: startup
//! opens the main window, closing the last window ends the process except on
//! platforms with a resident convention, and reactivation with zero open
//! windows opens a fresh one.

use tauri::{AppHandle, Manager, RunEvent};
use tracing::{debug, error};
use vellum_core::lifecycle::{self, ExitDecision};
use vellum_core::window::WindowConfig;

use crate::window;

/// Run the Tauri application
pub fn run() {
    let app = tauri::Builder::default()
        .setup(|app| {
            window::spawn_main_window(app.handle(), &WindowConfig::default())?;
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(handle_run_event);
}

fn handle_run_event(app: &AppHandle, event: RunEvent) {
    match event {
        // Emitted with no exit code when the last window closes. A request
        // carrying an explicit code is a programmatic quit and is never
        // blocked.
        RunEvent::ExitRequested { api, code, .. } => {
            if code.is_none()
                && lifecycle::on_all_windows_closed(std::env::consts::OS)
                    == ExitDecision::StayResident
            {
                api.prevent_exit();
            }
        }
        // macOS dock activation. Only reached while resident with zero
        // windows; any other activation finds a window already open.
        RunEvent::Reopen { .. } => {
            if lifecycle::should_respawn_on_activate(app.webview_windows().len()) {
                if let Err(err) = window::spawn_main_window(app, &WindowConfig::default()) {
                    error!(%err, "failed to reopen window");
                }
            } else {
                debug!("reopen with windows already open, ignoring");
            }
        }
        _ => {}
    }
}
