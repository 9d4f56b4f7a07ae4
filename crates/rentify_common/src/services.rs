// --- File: crates/rentify_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! The inventory logic talks to the hosted record store only through the
//! [`RecordStore`] trait, so it can be exercised against an in-memory store
//! in tests and against the Notion client in production.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A record as returned by the store: an identifier plus an untyped property map.
///
/// Property shapes are never trusted; see the inventory extractor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawRecord {
    pub id: String,
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// A store-agnostic property value used when creating or patching records.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Title(String),
    Select(String),
    Date(NaiveDate),
    /// Replaces the whole relation list.
    Relation(Vec<String>),
}

/// A named property assignment.
pub type Property = (String, PropertyValue);

/// Equality filter on a single-choice property.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilter {
    pub property: String,
    pub select_equals: String,
}

impl QueryFilter {
    pub fn select_equals(property: &str, value: &str) -> Self {
        Self {
            property: property.to_string(),
            select_equals: value.to_string(),
        }
    }
}

/// Errors a record store can report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The store answered with a non-success status; `body` is the raw response text.
    #[error("store returned {status}: {body}")]
    Remote { status: u16, body: String },

    /// The request never produced a response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// A success response could not be decoded.
    #[error("could not decode store response: {0}")]
    Decode(String),
}

/// Query / create / patch over a hosted structured-record store.
///
/// Calls are issued one at a time by the callers; implementations need not
/// support concurrent use beyond `Send + Sync`.
pub trait RecordStore: Send + Sync {
    /// Fetch a single page of records, at most `page_size` long.
    fn query(
        &self,
        database_id: &str,
        filter: Option<QueryFilter>,
        page_size: u32,
    ) -> BoxFuture<'_, Vec<RawRecord>, StoreError>;

    /// Create a record in `database_id` and return it (with its new id).
    fn create(
        &self,
        database_id: &str,
        properties: Vec<Property>,
    ) -> BoxFuture<'_, RawRecord, StoreError>;

    /// Partially update the record `record_id`.
    fn patch(&self, record_id: &str, properties: Vec<Property>) -> BoxFuture<'_, (), StoreError>;
}
