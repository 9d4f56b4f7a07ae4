// --- File: crates/rentify_inventory/src/lib.rs ---
//! Rental device availability and location assignment.
//!
//! Devices and locations live in two databases of a hosted record store,
//! reached through [`rentify_common::services::RecordStore`]. This crate
//! normalizes their records, decides availability for a date range, creates
//! locations and re-links devices to them, and serves all of it over axum.

pub mod assignment;
pub mod availability;
#[cfg(test)]
mod availability_proptest;
#[cfg(test)]
mod availability_test;
pub mod catalog;
pub mod doc;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod provisioner;
pub mod routes;
pub mod service;

pub use error::InventoryError;
pub use models::{DateRange, Device, Location, LocationId, LocationKind};
pub use service::{AssignmentReport, InventoryService};
