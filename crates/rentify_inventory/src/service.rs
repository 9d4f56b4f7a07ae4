// --- File: crates/rentify_inventory/src/service.rs ---
//! Inventory service: the catalog, provisioning and assignment operations
//! bound to one record store and one pair of databases.

use crate::assignment::{assign, AssignmentOutcome, AssignmentResult};
use crate::catalog;
use crate::error::InventoryError;
use crate::models::{DateRange, Device, Location, LocationId};
use crate::provisioner::{self, validate_location_name};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use rentify_common::services::RecordStore;
use rentify_config::{InventoryConfig, NotionConfig};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

const DEFAULT_TIME_ZONE: Tz = Tz::Europe__Madrid;

/// What happened to one assignment request.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentReport {
    pub location_id: LocationId,
    pub location_name: String,
    pub result: AssignmentResult,
}

impl AssignmentReport {
    pub fn outcome(&self) -> AssignmentOutcome {
        self.result.outcome()
    }

    pub fn message(&self) -> String {
        let AssignmentResult {
            succeeded, total, ..
        } = self.result;
        match self.outcome() {
            AssignmentOutcome::Complete => format!(
                "{} {} assigned to '{}'",
                succeeded,
                if succeeded == 1 { "device" } else { "devices" },
                self.location_name
            ),
            AssignmentOutcome::Partial => format!(
                "Assigned {} of {} devices to '{}'",
                succeeded, total, self.location_name
            ),
            AssignmentOutcome::Failed => {
                format!("No device could be assigned to '{}'", self.location_name)
            }
        }
    }
}

pub struct InventoryService {
    store: Arc<dyn RecordStore>,
    devices_database_id: String,
    locations_database_id: String,
    page_size: u32,
    time_zone: Tz,
}

impl InventoryService {
    pub fn new(
        store: Arc<dyn RecordStore>,
        notion: &NotionConfig,
        inventory: &InventoryConfig,
    ) -> Self {
        let time_zone = match inventory.time_zone.as_deref() {
            None => DEFAULT_TIME_ZONE,
            Some(name) => Tz::from_str(name).unwrap_or_else(|_| {
                warn!("Unknown time zone '{}', falling back to UTC", name);
                Tz::UTC
            }),
        };

        Self {
            store,
            devices_database_id: notion.devices_database_id.clone(),
            locations_database_id: notion.locations_database_id.clone(),
            page_size: notion.page_size,
            time_zone,
        }
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// The current calendar date in the configured time zone.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.time_zone).date_naive()
    }

    pub async fn list_available(&self, range: &DateRange) -> Result<Vec<Device>, InventoryError> {
        catalog::list_available(
            self.store.as_ref(),
            &self.devices_database_id,
            self.page_size,
            range,
        )
        .await
    }

    pub async fn list_in_house_locations(&self) -> Result<Vec<Location>, InventoryError> {
        catalog::list_in_house_locations(
            self.store.as_ref(),
            &self.locations_database_id,
            self.page_size,
        )
        .await
    }

    pub async fn create_in_house(
        &self,
        name: &str,
        start_date: NaiveDate,
    ) -> Result<LocationId, InventoryError> {
        provisioner::create_in_house(
            self.store.as_ref(),
            &self.locations_database_id,
            name,
            start_date,
        )
        .await
    }

    pub async fn create_client(
        &self,
        name: &str,
        range: &DateRange,
    ) -> Result<LocationId, InventoryError> {
        provisioner::create_client(
            self.store.as_ref(),
            &self.locations_database_id,
            name,
            range.start(),
            range.end(),
        )
        .await
    }

    pub async fn assign(
        &self,
        device_names: &[String],
        destination: &LocationId,
        catalog: &[Device],
    ) -> AssignmentResult {
        assign(self.store.as_ref(), device_names, destination, catalog).await
    }

    /// Creates a Client location for `range` and assigns the devices to it.
    ///
    /// A failed create stops the flow before any device is touched.
    pub async fn assign_to_new_client(
        &self,
        device_names: &[String],
        client_name: &str,
        range: &DateRange,
        catalog: &[Device],
    ) -> Result<AssignmentReport, InventoryError> {
        let location_name = validate_location_name(client_name)?;
        let location_id = self.create_client(&location_name, range).await?;
        let result = self.assign(device_names, &location_id, catalog).await;
        Ok(AssignmentReport {
            location_id,
            location_name,
            result,
        })
    }

    /// Creates an In House location starting today and assigns the devices to it.
    pub async fn assign_to_new_in_house(
        &self,
        device_names: &[String],
        name: &str,
        catalog: &[Device],
    ) -> Result<AssignmentReport, InventoryError> {
        let location_name = validate_location_name(name)?;
        let today = self.today();
        info!(
            "Creating In House location '{}' starting {}",
            location_name, today
        );
        let location_id = self.create_in_house(&location_name, today).await?;
        let result = self.assign(device_names, &location_id, catalog).await;
        Ok(AssignmentReport {
            location_id,
            location_name,
            result,
        })
    }

    /// Assigns the devices to an existing location. `location_name` is only
    /// used for reporting; the id is shown when it is missing.
    pub async fn assign_to_location(
        &self,
        device_names: &[String],
        location_id: LocationId,
        location_name: Option<&str>,
        catalog: &[Device],
    ) -> AssignmentReport {
        let result = self.assign(device_names, &location_id, catalog).await;
        let location_name = location_name
            .map(str::to_string)
            .unwrap_or_else(|| location_id.to_string());
        AssignmentReport {
            location_id,
            location_name,
            result,
        }
    }
}
