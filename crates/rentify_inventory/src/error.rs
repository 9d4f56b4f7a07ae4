// --- File: crates/rentify_inventory/src/error.rs ---
use rentify_common::services::StoreError;
use rentify_common::{validation_error, RentifyError};
use thiserror::Error;

/// Faults raised by the inventory operations.
///
/// Field-level parse problems never show up here: the extractor absorbs
/// them into defaults. Lookup misses during assignment are per-item issues
/// on the assignment result, not errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InventoryError {
    /// Required user input was blank or inconsistent; nothing was sent to the store.
    #[error("{0}")]
    Validation(String),

    /// The store rejected the request. `body` is the raw response text.
    #[error("Record store returned {status}: {body}")]
    Remote { status: u16, body: String },

    /// The store could not be reached or answered with something unreadable.
    #[error("Record store unavailable: {0}")]
    Store(StoreError),
}

impl From<StoreError> for InventoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Remote { status, body } => InventoryError::Remote { status, body },
            other => InventoryError::Store(other),
        }
    }
}

impl From<InventoryError> for RentifyError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::Validation(message) => validation_error(message),
            InventoryError::Remote { status, body } => StoreError::Remote { status, body }.into(),
            InventoryError::Store(store) => store.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentify_common::HttpStatusCode;

    #[test]
    fn test_remote_store_error_keeps_status_and_body() {
        let err: InventoryError = StoreError::Remote {
            status: 400,
            body: "bad".to_string(),
        }
        .into();
        assert_eq!(
            err,
            InventoryError::Remote {
                status: 400,
                body: "bad".to_string()
            }
        );
    }

    #[test]
    fn test_http_mapping() {
        let validation: RentifyError = InventoryError::Validation("blank".to_string()).into();
        assert_eq!(validation.status_code(), 400);

        let remote: RentifyError = InventoryError::Remote {
            status: 400,
            body: "{\"code\":\"validation_error\"}".to_string(),
        }
        .into();
        assert_eq!(remote.status_code(), 502);
        assert!(remote.to_string().contains("validation_error"));

        let transport: RentifyError =
            InventoryError::Store(StoreError::Transport("timed out".to_string())).into();
        assert_eq!(transport.status_code(), 500);
    }
}
