// --- File: crates/rentify_inventory/src/routes.rs ---

use crate::handlers::{
    assign_client_handler, assign_in_house_handler, get_availability_handler,
    get_in_house_locations_handler, InventoryState,
};
use crate::service::InventoryService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates a router containing all inventory routes, bound to `service`.
pub fn routes(service: Arc<InventoryService>) -> Router {
    let state = Arc::new(InventoryState { service });

    Router::new()
        .route("/inventory/availability", get(get_availability_handler))
        .route(
            "/inventory/locations/in-house",
            get(get_in_house_locations_handler),
        )
        .route("/inventory/assignments/client", post(assign_client_handler))
        .route(
            "/inventory/assignments/in-house",
            post(assign_in_house_handler),
        )
        .with_state(state)
}
