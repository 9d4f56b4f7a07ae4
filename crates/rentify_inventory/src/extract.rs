// --- File: crates/rentify_inventory/src/extract.rs ---
//! Normalizes raw store records into [`Device`] and [`Location`] values.
//!
//! Every field goes through its own `Option`-returning parser. A missing,
//! null or oddly shaped property yields `None`, and the record extractors
//! substitute the documented default. Nothing here fails.

use crate::models::{schema, Device, Location, LocationId, LocationKind, NO_TAG, UNNAMED};
use rentify_common::services::RawRecord;
use serde_json::Value;

fn property<'a>(record: &'a RawRecord, name: &str) -> Option<&'a Value> {
    record.properties.get(name).filter(|value| !value.is_null())
}

/// `{"title": [{"text": {"content": ..}}, ..]}` → content of the first item.
pub fn title_text(property: &Value) -> Option<String> {
    property
        .get("title")?
        .as_array()?
        .first()?
        .get("text")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}

/// `{"select": {"name": ..}}` → name.
pub fn select_name(property: &Value) -> Option<String> {
    property
        .get("select")?
        .get("name")?
        .as_str()
        .map(str::to_string)
}

/// `{"relation": [{"id": ..}, ..]}` → number of related records.
///
/// An item without an id makes the whole relation unreadable.
pub fn relation_count(property: &Value) -> Option<usize> {
    let items = property.get("relation")?.as_array()?;
    let ids = items
        .iter()
        .map(|item| item.get("id").and_then(Value::as_str))
        .collect::<Option<Vec<_>>>()?;
    Some(ids.len())
}

/// `{"date": {"start": ..}}` → start text.
pub fn date_start(value: &Value) -> Option<String> {
    value
        .get("date")?
        .get("start")?
        .as_str()
        .map(str::to_string)
}

/// Date text of a rollup-like property.
///
/// Accepts a rollup of type `date`, a rollup of type `array` whose first
/// item is a date, or a plain date property.
pub fn rollup_date(property: &Value) -> Option<String> {
    match property.get("rollup") {
        Some(rollup) if !rollup.is_null() => match rollup.get("type")?.as_str()? {
            "date" => date_start(rollup),
            "array" => {
                let first = rollup.get("array")?.as_array()?.first()?;
                if first.get("type")?.as_str()? == "date" {
                    date_start(first)
                } else {
                    None
                }
            }
            _ => None,
        },
        _ => date_start(property),
    }
}

/// `{"number": ..}` → integer part.
pub fn number_value(property: &Value) -> Option<i64> {
    let number = property.get("number")?;
    number
        .as_i64()
        .or_else(|| number.as_f64().map(|value| value as i64))
}

/// Builds a [`Device`] from a devices database record.
pub fn extract_device(record: &RawRecord) -> Device {
    Device {
        id: record.id.clone(),
        name: property(record, schema::NAME)
            .and_then(title_text)
            .unwrap_or_else(|| UNNAMED.to_string()),
        tag: property(record, schema::TAGS)
            .and_then(select_name)
            .unwrap_or_else(|| NO_TAG.to_string()),
        location_ref_count: property(record, schema::LOCATION)
            .and_then(relation_count)
            .unwrap_or(0),
        start_date: property(record, schema::START_DATE).and_then(rollup_date),
        end_date: property(record, schema::END_DATE).and_then(rollup_date),
    }
}

/// Builds a [`Location`] from a locations database record.
///
/// An unknown or missing `Type` reads as a Client location; only In House
/// locations carry a unit count (0 when unreadable).
pub fn extract_location(record: &RawRecord) -> Location {
    let kind = property(record, schema::TYPE)
        .and_then(select_name)
        .and_then(|label| LocationKind::from_label(&label))
        .unwrap_or(LocationKind::Client);
    let unit_count = match kind {
        LocationKind::InHouse => Some(
            property(record, schema::UNITS)
                .and_then(number_value)
                .unwrap_or(0),
        ),
        LocationKind::Client => None,
    };

    Location {
        id: LocationId::new(record.id.clone()),
        name: property(record, schema::NAME)
            .and_then(title_text)
            .unwrap_or_else(|| UNNAMED.to_string()),
        kind,
        unit_count,
    }
}
