//! Vellum Core Library
//!
//! This crate provides the host-independent pieces of the Vellum desktop
//! shell:
//! - Window configuration (title, dimensions, content document)
//! - Lifecycle policy (exit and reopen decisions)
//! - Error types
//!
//! Everything here is pure: the Tauri wiring lives in `vellum-gui`.

pub mod error;
pub mod lifecycle;
pub mod window;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::lifecycle::ExitDecision;
    pub use crate::window::WindowConfig;
}
