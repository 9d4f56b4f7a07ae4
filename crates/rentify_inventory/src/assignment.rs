// --- File: crates/rentify_inventory/src/assignment.rs ---
//! Links selected devices to a destination location.
//!
//! Every name is handled on its own: a lookup miss or a failed update is
//! recorded as an [`AssignmentIssue`] and the batch moves on. Updates that
//! already went through are never rolled back.

use crate::models::{schema, Device, LocationId};
use rentify_common::services::{PropertyValue, RecordStore, StoreError};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Why a single device could not be assigned.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssignmentIssue {
    /// No device in the catalog carries this exact name.
    NotFound { device_name: String },
    /// The store refused the update.
    Rejected {
        device_name: String,
        status: u16,
        body: String,
    },
    /// The update never got an answer.
    Unreachable { device_name: String, message: String },
}

impl AssignmentIssue {
    pub fn device_name(&self) -> &str {
        match self {
            AssignmentIssue::NotFound { device_name }
            | AssignmentIssue::Rejected { device_name, .. }
            | AssignmentIssue::Unreachable { device_name, .. } => device_name,
        }
    }
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentOutcome {
    Complete,
    Partial,
    Failed,
}

impl AssignmentOutcome {
    /// A partial batch still counts as assigned.
    pub fn is_assigned(self) -> bool {
        !matches!(self, AssignmentOutcome::Failed)
    }
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentResult {
    pub succeeded: usize,
    pub total: usize,
    pub issues: Vec<AssignmentIssue>,
}

impl AssignmentResult {
    pub fn outcome(&self) -> AssignmentOutcome {
        if self.succeeded == self.total {
            AssignmentOutcome::Complete
        } else if self.succeeded > 0 {
            AssignmentOutcome::Partial
        } else {
            AssignmentOutcome::Failed
        }
    }
}

/// Id of the first catalog device whose name equals `name` exactly.
pub fn resolve_device_id<'a>(catalog: &'a [Device], name: &str) -> Option<&'a str> {
    catalog
        .iter()
        .find(|device| device.name == name)
        .map(|device| device.id.as_str())
}

/// Points the location relation of each named device at `destination`.
///
/// Names are processed in the given order without deduplication; the
/// relation is overwritten, not extended.
pub async fn assign(
    store: &dyn RecordStore,
    device_names: &[String],
    destination: &LocationId,
    catalog: &[Device],
) -> AssignmentResult {
    let total = device_names.len();
    let mut succeeded = 0;
    let mut issues = Vec::new();

    for (index, name) in device_names.iter().enumerate() {
        let Some(device_id) = resolve_device_id(catalog, name) else {
            warn!("No device named '{}' in the catalog, skipping", name);
            issues.push(AssignmentIssue::NotFound {
                device_name: name.clone(),
            });
            continue;
        };

        let properties = vec![(
            schema::LOCATION.to_string(),
            PropertyValue::Relation(vec![destination.to_string()]),
        )];
        match store.patch(device_id, properties).await {
            Ok(()) => succeeded += 1,
            Err(StoreError::Remote { status, body }) => {
                warn!("Failed to assign '{}': {} {}", name, status, body);
                issues.push(AssignmentIssue::Rejected {
                    device_name: name.clone(),
                    status,
                    body,
                });
            }
            Err(e) => {
                warn!("Failed to assign '{}': {}", name, e);
                issues.push(AssignmentIssue::Unreachable {
                    device_name: name.clone(),
                    message: e.to_string(),
                });
            }
        }
        debug!("Assignment progress: {}/{}", index + 1, total);
    }

    info!(
        "Assigned {} of {} devices to location {}",
        succeeded, total, destination
    );
    AssignmentResult {
        succeeded,
        total,
        issues,
    }
}
