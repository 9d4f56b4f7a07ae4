//! Notion integration for Rentify
//!
//! Provides [`NotionClient`], a thin reqwest client for the Notion databases
//! API, and its [`RecordStore`](rentify_common::RecordStore) implementation.
//!
//! # Example
//!
//! ```rust,no_run
//! use rentify_config::load_config;
//! use rentify_notion::NotionClient;
//!
//! async fn fetch() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config()?;
//!     let client = NotionClient::new(config.notion.clone())?;
//!     let devices = client
//!         .query_database(&config.notion.devices_database_id, None, 100)
//!         .await?;
//!     println!("{} devices", devices.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod models;
pub mod service;

pub use client::{NotionClient, NotionError};
