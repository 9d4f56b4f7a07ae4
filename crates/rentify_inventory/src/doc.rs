// File: crates/rentify_inventory/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::assignment::{AssignmentIssue, AssignmentOutcome};
use crate::handlers::{
    AssignmentResponse, AvailabilityQuery, AvailabilityResponse, ClientAssignmentRequest,
    InHouseAssignmentRequest, LocationsResponse,
};
use crate::models::{Device, Location, LocationId, LocationKind};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_availability_handler,
        crate::handlers::get_in_house_locations_handler,
        crate::handlers::assign_client_handler,
        crate::handlers::assign_in_house_handler
    ),
    components(
        schemas(
            AvailabilityQuery,
            AvailabilityResponse,
            LocationsResponse,
            ClientAssignmentRequest,
            InHouseAssignmentRequest,
            AssignmentResponse,
            AssignmentOutcome,
            AssignmentIssue,
            Device,
            Location,
            LocationId,
            LocationKind
        )
    ),
    tags(
        (name = "Inventory", description = "Rental device availability and assignment API")
    ),
    servers(
        (url = "/api", description = "Rentify API server")
    )
)]
pub struct InventoryApiDoc;
