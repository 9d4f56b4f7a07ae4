// --- File: crates/rentify_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod routes; // Shared routes
pub mod services; // Service abstractions

// Re-export the routes function to be used by the main backend service
pub use routes::routes;

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, validation_error, Context, HttpStatusCode, RentifyError,
};

// Re-export HTTP utilities for easier access
pub use http::{client::create_client, IntoHttpResponse};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, parse_level};

// Re-export the record store abstraction
pub use services::{BoxFuture, PropertyValue, QueryFilter, RawRecord, RecordStore, StoreError};
