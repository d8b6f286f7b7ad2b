// --- File: crates/littlelemon_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by all Little Lemon crates.
///
/// Crate-specific errors extend this by implementing `From<SpecificError> for LittleLemonError`.
#[derive(Error, Debug)]
pub enum LittleLemonError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for LittleLemonError {
    fn status_code(&self) -> u16 {
        match self {
            LittleLemonError::ConfigError(_) => 500,
            LittleLemonError::ValidationError(_) => 400,
            LittleLemonError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, LittleLemonError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, LittleLemonError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, LittleLemonError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| LittleLemonError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, LittleLemonError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| LittleLemonError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> LittleLemonError {
    LittleLemonError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> LittleLemonError {
    LittleLemonError::ValidationError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(validation_error("bad guests").status_code(), 400);
        assert_eq!(config_error("no server").status_code(), 500);
    }

    #[test]
    fn test_context_errors_are_internal() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        let err = result
            .with_context(|| format!("Failed to bind {}", "127.0.0.1:8086"))
            .unwrap_err();
        assert!(matches!(err, LittleLemonError::InternalError(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_context_wraps_source_message() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing file",
        ));
        let err = result.context("reading config").unwrap_err();
        assert_eq!(err.to_string(), "Internal error: reading config: missing file");
    }
}
