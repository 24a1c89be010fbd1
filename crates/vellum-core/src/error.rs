//! Error types for Vellum

use thiserror::Error;

/// Result type alias using Vellum's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Vellum error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Window '{0}' could not be created: {1}")]
    WindowCreation(String, String),

    #[error("Invalid window configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_creation_message_names_the_window() {
        let err = Error::WindowCreation("main".to_string(), "webview unavailable".to_string());
        let msg = err.to_string();
        assert!(msg.contains("main"));
        assert!(msg.contains("webview unavailable"));
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "index.html");
        let err = Error::from(io);
        assert_eq!(err.to_string(), "index.html");
    }
}
