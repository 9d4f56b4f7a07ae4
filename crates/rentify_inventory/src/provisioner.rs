// --- File: crates/rentify_inventory/src/provisioner.rs ---
use crate::error::InventoryError;
use crate::models::{schema, LocationId, LocationKind};
use chrono::NaiveDate;
use rentify_common::services::{Property, PropertyValue, RecordStore};
use tracing::{error, info};

/// Trims `name` and rejects it when nothing is left.
pub fn validate_location_name(name: &str) -> Result<String, InventoryError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(InventoryError::Validation(
            "Location name must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Creates an In House location occupied from `start_date` on.
pub async fn create_in_house(
    store: &dyn RecordStore,
    locations_database_id: &str,
    name: &str,
    start_date: NaiveDate,
) -> Result<LocationId, InventoryError> {
    create_location(
        store,
        locations_database_id,
        name,
        LocationKind::InHouse,
        start_date,
        None,
    )
    .await
}

/// Creates a Client location for the rental period `[start_date, end_date]`.
pub async fn create_client(
    store: &dyn RecordStore,
    locations_database_id: &str,
    name: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<LocationId, InventoryError> {
    create_location(
        store,
        locations_database_id,
        name,
        LocationKind::Client,
        start_date,
        Some(end_date),
    )
    .await
}

async fn create_location(
    store: &dyn RecordStore,
    locations_database_id: &str,
    name: &str,
    kind: LocationKind,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
) -> Result<LocationId, InventoryError> {
    let name = validate_location_name(name)?;

    let mut properties: Vec<Property> = vec![
        (schema::NAME.to_string(), PropertyValue::Title(name.clone())),
        (
            schema::TYPE.to_string(),
            PropertyValue::Select(kind.label().to_string()),
        ),
        (schema::START_DATE.to_string(), PropertyValue::Date(start_date)),
    ];
    if let Some(end_date) = end_date {
        properties.push((schema::END_DATE.to_string(), PropertyValue::Date(end_date)));
    }

    match store.create(locations_database_id, properties).await {
        Ok(record) => {
            info!(
                "Created {} location '{}' ({})",
                kind.label(),
                name,
                record.id
            );
            Ok(LocationId::new(record.id))
        }
        Err(e) => {
            error!("Failed to create {} location '{}': {}", kind.label(), name, e);
            Err(e.into())
        }
    }
}
