//! Window factory
//!
//! Creates the shell's top-level window and points it at the bundled
//! document. Host-level access for the loaded content is granted statically
//! in `tauri.conf.json` (`withGlobalTauri`) and `capabilities/default.json`.

use tauri::{AppHandle, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tracing::info;
use vellum_core::error::{Error, Result};
use vellum_core::window::{CONTENT_DOCUMENT, MAIN_WINDOW_LABEL, WindowConfig};

/// Open the main window and load the bundled document into it.
pub fn spawn_main_window(app: &AppHandle, config: &WindowConfig) -> Result<WebviewWindow> {
    config.validate()?;

    let window = WebviewWindowBuilder::new(
        app,
        MAIN_WINDOW_LABEL,
        WebviewUrl::App(CONTENT_DOCUMENT.into()),
    )
    .title(config.title.as_str())
    .inner_size(config.width, config.height)
    .build()
    .map_err(|err| Error::WindowCreation(MAIN_WINDOW_LABEL.to_string(), err.to_string()))?;

    info!(
        label = MAIN_WINDOW_LABEL,
        width = config.width,
        height = config.height,
        "opened window"
    );
    Ok(window)
}
