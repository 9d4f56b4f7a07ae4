// File: crates/rentify_inventory/src/handlers.rs
use crate::assignment::{AssignmentIssue, AssignmentOutcome};
use crate::catalog::{filter_by_tag, sort_by_name, unique_tags};
use crate::models::{DateRange, Device, Location, LocationId};
use crate::provisioner::validate_location_name;
use crate::service::{AssignmentReport, InventoryService};
use axum::{
    extract::{Query, State},
    response::Json,
};
use chrono::NaiveDate;
use rentify_common::{validation_error, RentifyError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

// Shared state for the inventory handlers
#[derive(Clone)]
pub struct InventoryState {
    pub service: Arc<InventoryService>,
}

// --- Request / Response Types ---
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AvailabilityQuery {
    /// First day of the rental period (YYYY-MM-DD)
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-03-01"))]
    pub start_date: String,

    /// Last day of the rental period, inclusive (YYYY-MM-DD)
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-03-10"))]
    pub end_date: String,

    /// Only return devices with this tag
    #[cfg_attr(feature = "openapi", schema(example = "Ultra"))]
    pub tag: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AvailabilityResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Available devices before the tag filter
    pub total_available: usize,
    /// Tags present among the available devices
    pub tags: Vec<String>,
    pub devices: Vec<Device>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LocationsResponse {
    pub locations: Vec<Location>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClientAssignmentRequest {
    pub device_names: Vec<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Hotel Sol"))]
    pub client_name: String,
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-03-01"))]
    pub start_date: String,
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-03-10"))]
    pub end_date: String,
}

/// Assign to an existing In House location (`location_id`) or to a new one
/// (`new_location_name`). Exactly one of the two must be given.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct InHouseAssignmentRequest {
    pub device_names: Vec<String>,
    pub location_id: Option<String>,
    /// Display name of `location_id`, used in the response message
    pub location_name: Option<String>,
    pub new_location_name: Option<String>,
    /// The period the devices were listed as available for
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-03-01"))]
    pub start_date: String,
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-03-10"))]
    pub end_date: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AssignmentResponse {
    pub success: bool,
    pub outcome: AssignmentOutcome,
    pub location_id: LocationId,
    pub location_name: String,
    pub succeeded: usize,
    pub total: usize,
    pub message: String,
    pub issues: Vec<AssignmentIssue>,
}

impl From<AssignmentReport> for AssignmentResponse {
    fn from(report: AssignmentReport) -> Self {
        let outcome = report.outcome();
        let message = report.message();
        Self {
            success: outcome.is_assigned(),
            outcome,
            location_id: report.location_id,
            location_name: report.location_name,
            succeeded: report.result.succeeded,
            total: report.result.total,
            message,
            issues: report.result.issues,
        }
    }
}

fn parse_date(value: &str, field: &str) -> Result<NaiveDate, RentifyError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| validation_error(format!("Invalid {} format (YYYY-MM-DD)", field)))
}

fn parse_range(start_date: &str, end_date: &str) -> Result<DateRange, RentifyError> {
    let start = parse_date(start_date, "start_date")?;
    let end = parse_date(end_date, "end_date")?;
    Ok(DateRange::new(start, end)?)
}

fn require_devices(device_names: &[String]) -> Result<(), RentifyError> {
    if device_names.is_empty() {
        return Err(validation_error("Select at least one device"));
    }
    Ok(())
}

/// Lists the devices free for the whole requested period.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/inventory/availability",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Available devices", body = AvailabilityResponse),
        (status = 400, description = "Invalid or inverted dates"),
        (status = 502, description = "Record store rejected the query")
    ),
    tag = "Inventory"
))]
pub async fn get_availability_handler(
    State(state): State<Arc<InventoryState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, RentifyError> {
    let range = parse_range(&query.start_date, &query.end_date)?;
    let tag = query
        .tag
        .as_deref()
        .map(str::trim)
        .filter(|tag| !tag.is_empty());

    let available = state.service.list_available(&range).await?;
    let total_available = available.len();
    let tags = unique_tags(&available);
    let mut devices = filter_by_tag(available, tag);
    sort_by_name(&mut devices);

    Ok(Json(AvailabilityResponse {
        start_date: range.start(),
        end_date: range.end(),
        total_available,
        tags,
        devices,
    }))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/inventory/locations/in-house",
    responses(
        (status = 200, description = "In House locations", body = LocationsResponse),
        (status = 502, description = "Record store rejected the query")
    ),
    tag = "Inventory"
))]
pub async fn get_in_house_locations_handler(
    State(state): State<Arc<InventoryState>>,
) -> Result<Json<LocationsResponse>, RentifyError> {
    let locations = state.service.list_in_house_locations().await?;
    Ok(Json(LocationsResponse { locations }))
}

/// Creates a Client location for the period and assigns the devices to it.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/inventory/assignments/client",
    request_body = ClientAssignmentRequest,
    responses(
        (status = 200, description = "Assignment result", body = AssignmentResponse),
        (status = 400, description = "Blank client name, no devices or invalid dates"),
        (status = 502, description = "Record store rejected the new location")
    ),
    tag = "Inventory"
))]
pub async fn assign_client_handler(
    State(state): State<Arc<InventoryState>>,
    Json(payload): Json<ClientAssignmentRequest>,
) -> Result<Json<AssignmentResponse>, RentifyError> {
    let range = parse_range(&payload.start_date, &payload.end_date)?;
    require_devices(&payload.device_names)?;
    let client_name = validate_location_name(&payload.client_name)?;

    let catalog = state.service.list_available(&range).await?;
    let report = state
        .service
        .assign_to_new_client(&payload.device_names, &client_name, &range, &catalog)
        .await?;
    info!("{}", report.message());
    Ok(Json(report.into()))
}

/// Assigns the devices to an existing or a new In House location.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/inventory/assignments/in-house",
    request_body = InHouseAssignmentRequest,
    responses(
        (status = 200, description = "Assignment result", body = AssignmentResponse),
        (status = 400, description = "Missing or ambiguous destination, no devices or invalid dates"),
        (status = 502, description = "Record store rejected the new location")
    ),
    tag = "Inventory"
))]
pub async fn assign_in_house_handler(
    State(state): State<Arc<InventoryState>>,
    Json(payload): Json<InHouseAssignmentRequest>,
) -> Result<Json<AssignmentResponse>, RentifyError> {
    let range = parse_range(&payload.start_date, &payload.end_date)?;
    require_devices(&payload.device_names)?;

    let location_id = payload
        .location_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());
    let new_location_name = payload
        .new_location_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());
    let report = match (location_id, new_location_name) {
        (Some(location_id), None) => {
            let catalog = state.service.list_available(&range).await?;
            state
                .service
                .assign_to_location(
                    &payload.device_names,
                    LocationId::new(location_id),
                    payload.location_name.as_deref(),
                    &catalog,
                )
                .await
        }
        (None, Some(new_location_name)) => {
            let name = validate_location_name(new_location_name)?;
            let catalog = state.service.list_available(&range).await?;
            state
                .service
                .assign_to_new_in_house(&payload.device_names, &name, &catalog)
                .await?
        }
        (Some(_), Some(_)) => {
            return Err(validation_error(
                "Give either location_id or new_location_name, not both",
            ))
        }
        (None, None) => {
            return Err(validation_error(
                "A location_id or a new_location_name is required",
            ))
        }
    };
    info!("{}", report.message());
    Ok(Json(report.into()))
}
