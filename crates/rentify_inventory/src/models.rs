// --- File: crates/rentify_inventory/src/models.rs ---
use crate::error::InventoryError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name used when a record has no readable title.
pub const UNNAMED: &str = "Unnamed";
/// Tag used when a device has no readable classification.
pub const NO_TAG: &str = "No tag";

/// Property names of the devices and locations databases.
pub mod schema {
    pub const NAME: &str = "Name";
    pub const TAGS: &str = "Tags";
    pub const LOCATION: &str = "Location";
    pub const START_DATE: &str = "Start Date";
    pub const END_DATE: &str = "End Date";
    pub const TYPE: &str = "Type";
    pub const UNITS: &str = "Units";
}

/// A rental device as read from the devices database.
///
/// `start_date` / `end_date` keep the date text as the store served it; it is
/// parsed only when availability is evaluated.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    #[cfg_attr(feature = "openapi", schema(example = "9b1c6f0e-2d7a-4c55-8a31-0f3e7c1d2b44"))]
    pub id: String,
    #[cfg_attr(feature = "openapi", schema(example = "Ultra 07"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Ultra"))]
    pub tag: String,
    pub location_ref_count: usize,
    #[cfg_attr(feature = "openapi", schema(example = "2025-03-01"))]
    pub start_date: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "2025-03-10"))]
    pub end_date: Option<String>,
}

impl Device {
    pub fn has_tag(&self) -> bool {
        !self.tag.is_empty() && self.tag != NO_TAG
    }
}

/// Identifier of a location record.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LocationKind {
    Client,
    InHouse,
}

impl LocationKind {
    /// The select option used by the locations database.
    pub fn label(self) -> &'static str {
        match self {
            LocationKind::Client => "Client",
            LocationKind::InHouse => "In House",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Client" => Some(LocationKind::Client),
            "In House" => Some(LocationKind::InHouse),
            _ => None,
        }
    }
}

/// A destination devices can be assigned to.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub kind: LocationKind,
    /// Capacity annotation of In House locations. Not enforced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_count: Option<i64>,
}

/// Inclusive calendar date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InventoryError> {
        if start > end {
            return Err(InventoryError::Validation(format!(
                "Start date {} must not be after end date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
