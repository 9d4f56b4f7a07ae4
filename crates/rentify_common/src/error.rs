use crate::services::StoreError;
use std::fmt;
use thiserror::Error;

/// The base error type surfaced by the Rentify HTTP layer.
///
/// Each crate keeps its own error enum and converts into this one at the
/// handler boundary by implementing `From<SpecificError> for RentifyError`.
#[derive(Error, Debug)]
pub enum RentifyError {
    /// The outbound request never produced a response
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// User supplied input was rejected before any remote call
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A remote service answered, but not with success
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for RentifyError {
    fn status_code(&self) -> u16 {
        match self {
            RentifyError::HttpError(_) => 500,
            RentifyError::ConfigError(_) => 500,
            RentifyError::ValidationError(_) => 400,
            RentifyError::ExternalServiceError { .. } => 502,
            RentifyError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, RentifyError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, RentifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, RentifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| RentifyError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, RentifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| RentifyError::InternalError(format!("{}: {}", f(), error)))
    }
}

/// Name under which record store failures are reported.
pub const RECORD_STORE: &str = "notion";

impl From<StoreError> for RentifyError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Remote { status, body } => {
                external_service_error(RECORD_STORE, format!("{} {}", status, body))
            }
            StoreError::Transport(message) => RentifyError::HttpError(message),
            StoreError::Decode(message) => external_service_error(RECORD_STORE, message),
        }
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> RentifyError {
    RentifyError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> RentifyError {
    RentifyError::ValidationError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> RentifyError {
    RentifyError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(validation_error("blank name").status_code(), 400);
        assert_eq!(external_service_error("notion", "boom").status_code(), 502);
        assert_eq!(config_error("missing token").status_code(), 500);
    }

    #[test]
    fn test_store_errors_map_to_gateway_or_transport() {
        let remote: RentifyError = StoreError::Remote {
            status: 400,
            body: r#"{"code":"validation_error"}"#.to_string(),
        }
        .into();
        assert_eq!(remote.status_code(), 502);
        assert_eq!(
            remote.to_string(),
            r#"External service error: notion - 400 {"code":"validation_error"}"#
        );

        let transport: RentifyError = StoreError::Transport("connection refused".to_string()).into();
        assert_eq!(transport.status_code(), 500);

        let decode: RentifyError = StoreError::Decode("missing id".to_string()).into();
        assert_eq!(decode.status_code(), 502);
    }

    #[test]
    fn test_context_wraps_as_internal_error() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        let err = result.context("Failed to bind listener").unwrap_err();
        assert!(matches!(err, RentifyError::InternalError(ref m) if m.starts_with("Failed to bind listener")));
    }
}
