// File: services/rentify_backend/src/main.rs
use axum::{routing::get, Router};
use rentify_common::logging::{init_with_level, parse_level};
use rentify_common::{config_error, Context, RentifyError};
use rentify_config::{ensure_dotenv_loaded, load_config, AppConfig};
use rentify_inventory::routes as inventory_routes;
use rentify_inventory::InventoryService;
use rentify_notion::NotionClient;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Wires the Notion client into the inventory service and mounts everything under `/api`.
fn build_app(config: &AppConfig) -> Result<Router, RentifyError> {
    let client = NotionClient::new(config.notion.clone()).context("Failed to build Notion client")?;
    let service = InventoryService::new(Arc::new(client), &config.notion, &config.inventory);

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to Rentify API!" }))
        .merge(rentify_common::routes())
        .merge(inventory_routes::routes(Arc::new(service)));

    #[allow(unused_mut)] // mutated only with the openapi feature
    let mut app = Router::new().nest("/api", api_router);

    #[cfg(feature = "openapi")]
    {
        use rentify_inventory::doc::InventoryApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Rentify API",
                version = "0.1.0",
                description = "Rental device availability and assignment",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Rentify", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(InventoryApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    Ok(app.layer(TraceLayer::new_for_http()))
}

#[tokio::main]
async fn main() -> Result<(), RentifyError> {
    ensure_dotenv_loaded();
    let level = std::env::var("RENTIFY_LOG_LEVEL")
        .map(|value| parse_level(&value))
        .unwrap_or(tracing::Level::INFO);
    init_with_level(level);

    let config = load_config().map_err(config_error)?;
    let app = build_app(&config)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}
