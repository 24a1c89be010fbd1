//! Vellum GUI - Tauri Desktop Application
//!
//! Main entry point for the Vellum desktop shell. It hosts the bundled
//! HTML document in a single native window.

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

mod shell;
mod window;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vellum_core=info".parse()?)
                .add_directive("vellum_gui=info".parse()?),
        )
        .init();

    shell::run();
    Ok(())
}
