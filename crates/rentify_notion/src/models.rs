//! Wire types for the Notion REST API.
//!
//! Only the request bodies are strongly typed. Responses are read as raw
//! records because property shapes vary per database and are interpreted by
//! the inventory extractor.

use rentify_common::services::{Property, PropertyValue, QueryFilter};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Body of `POST /databases/{id}/query`.
#[derive(Debug, Serialize)]
pub struct QueryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SelectFilter>,
    pub page_size: u32,
}

/// `{"property": .., "select": {"equals": ..}}`
#[derive(Debug, Serialize, PartialEq)]
pub struct SelectFilter {
    pub property: String,
    pub select: SelectEquals,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SelectEquals {
    pub equals: String,
}

impl From<QueryFilter> for SelectFilter {
    fn from(filter: QueryFilter) -> Self {
        Self {
            property: filter.property,
            select: SelectEquals {
                equals: filter.select_equals,
            },
        }
    }
}

/// Response of a database query. Results stay untyped until each one is decoded.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Value>,
    #[serde(default)]
    pub has_more: bool,
}

/// Body of `POST /pages`.
#[derive(Debug, Serialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct Parent {
    pub database_id: String,
}

/// Body of `PATCH /pages/{id}`.
#[derive(Debug, Serialize)]
pub struct UpdatePageRequest {
    pub properties: Map<String, Value>,
}

/// Encodes one property value in Notion's shape.
pub fn property_json(value: &PropertyValue) -> Value {
    match value {
        PropertyValue::Title(text) => json!({ "title": [ { "text": { "content": text } } ] }),
        PropertyValue::Select(name) => json!({ "select": { "name": name } }),
        PropertyValue::Date(date) => {
            json!({ "date": { "start": date.format("%Y-%m-%d").to_string() } })
        }
        PropertyValue::Relation(ids) => {
            let items: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
            json!({ "relation": items })
        }
    }
}

pub fn properties_json(properties: &[Property]) -> Map<String, Value> {
    properties
        .iter()
        .map(|(name, value)| (name.clone(), property_json(value)))
        .collect()
}
