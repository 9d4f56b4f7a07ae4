// --- File: crates/rentify_inventory/src/catalog.rs ---
use crate::availability::is_available_in;
use crate::error::InventoryError;
use crate::extract::{extract_device, extract_location};
use crate::models::{schema, DateRange, Device, Location, LocationKind, NO_TAG};
use rentify_common::services::{QueryFilter, RecordStore};
use std::collections::BTreeSet;
use tracing::{debug, error, info};

/// Keeps the devices that are free for the whole of `range`, in input order.
pub fn filter_available(devices: Vec<Device>, range: &DateRange) -> Vec<Device> {
    devices
        .into_iter()
        .filter(|device| is_available_in(device, range))
        .collect()
}

/// Distinct tags of `devices`, sorted ascending, without the "No tag" sentinel.
pub fn unique_tags(devices: &[Device]) -> Vec<String> {
    devices
        .iter()
        .filter(|device| device.has_tag())
        .map(|device| device.tag.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// `None` keeps every device; otherwise only exact tag matches survive.
pub fn filter_by_tag(devices: Vec<Device>, tag: Option<&str>) -> Vec<Device> {
    match tag {
        None => devices,
        Some(tag) => devices
            .into_iter()
            .filter(|device| device.tag == tag)
            .collect(),
    }
}

pub fn sort_by_name(devices: &mut [Device]) {
    devices.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Fetches every device record (one page) and keeps the ones free over `range`.
///
/// Records beyond the first `page_size` are never seen.
pub async fn list_available(
    store: &dyn RecordStore,
    devices_database_id: &str,
    page_size: u32,
    range: &DateRange,
) -> Result<Vec<Device>, InventoryError> {
    let devices = list_devices(store, devices_database_id, page_size).await?;
    let fetched = devices.len();
    let available = filter_available(devices, range);
    info!(
        "{} of {} devices available for {}",
        available.len(),
        fetched,
        range
    );
    Ok(available)
}

/// Fetches and normalizes every device record (one page), unfiltered.
pub async fn list_devices(
    store: &dyn RecordStore,
    devices_database_id: &str,
    page_size: u32,
) -> Result<Vec<Device>, InventoryError> {
    let records = store
        .query(devices_database_id, None, page_size)
        .await
        .map_err(|e| {
            error!("Failed to query devices database: {}", e);
            InventoryError::from(e)
        })?;
    debug!("Fetched {} device records", records.len());
    Ok(records.iter().map(extract_device).collect())
}

/// Locations whose `Type` is In House, each with its unit count.
pub async fn list_in_house_locations(
    store: &dyn RecordStore,
    locations_database_id: &str,
    page_size: u32,
) -> Result<Vec<Location>, InventoryError> {
    let filter = QueryFilter::select_equals(schema::TYPE, LocationKind::InHouse.label());
    let records = store
        .query(locations_database_id, Some(filter), page_size)
        .await
        .map_err(|e| {
            error!("Failed to query locations database: {}", e);
            InventoryError::from(e)
        })?;

    Ok(records
        .iter()
        .map(extract_location)
        .filter(|location| location.kind == LocationKind::InHouse)
        .collect())
}
