//! Notion REST client
//!
//! `NotionClient` wraps a reqwest client configured with the integration's
//! bearer token and API version header. It exposes the three calls the
//! inventory needs: query a database, create a page, patch a page.

use crate::models::{
    properties_json, CreatePageRequest, Parent, QueryRequest, QueryResponse, UpdatePageRequest,
};
use rentify_common::create_client;
use rentify_common::services::{Property, QueryFilter, RawRecord};
use rentify_config::NotionConfig;
use reqwest::{header, Client, Method, RequestBuilder, Response};
use thiserror::Error;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("rentify-notion/", env!("CARGO_PKG_VERSION"));

/// Errors that can occur when talking to the Notion API
#[derive(Error, Debug)]
pub enum NotionError {
    /// Error during the HTTP exchange itself
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Notion answered with a non-success status
    #[error("Notion API error ({status}): {body}")]
    ApiError { status: u16, body: String },

    /// A success response did not have the expected shape
    #[error("Unexpected Notion response: {0}")]
    DecodeError(String),
}

/// Client for the Notion databases and pages endpoints
pub struct NotionClient {
    client: Client,
    config: NotionConfig,
}

impl NotionClient {
    /// Builds a client with the configured timeout.
    pub fn new(config: NotionConfig) -> Result<Self, NotionError> {
        let client = create_client(config.timeout_secs, USER_AGENT)?;
        Ok(Self { client, config })
    }

    /// Uses an already configured reqwest client.
    pub fn with_client(client: Client, config: NotionConfig) -> Self {
        Self { client, config }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!(
            "{}/{}",
            self.config.api_base_url.trim_end_matches('/'),
            path
        );
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.config.token))
            .header("Notion-Version", &self.config.notion_version)
    }

    async fn ensure_success(response: Response) -> Result<Response, NotionError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await?;
        Err(NotionError::ApiError {
            status: status.as_u16(),
            body,
        })
    }

    /// Fetches one page of a database. Results that are not page objects are skipped.
    pub async fn query_database(
        &self,
        database_id: &str,
        filter: Option<QueryFilter>,
        page_size: u32,
    ) -> Result<Vec<RawRecord>, NotionError> {
        let body = QueryRequest {
            filter: filter.map(Into::into),
            page_size,
        };
        let response = self
            .request(Method::POST, &format!("databases/{}/query", database_id))
            .json(&body)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let query: QueryResponse = response
            .json()
            .await
            .map_err(|e| NotionError::DecodeError(e.to_string()))?;
        if query.has_more {
            warn!(
                "Database {} has more than {} records; only the first page is used",
                database_id, page_size
            );
        }

        let records = query
            .results
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<RawRecord>(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping undecodable record in {}: {}", database_id, e);
                    None
                }
            })
            .collect::<Vec<_>>();
        debug!("Fetched {} records from {}", records.len(), database_id);
        Ok(records)
    }

    /// Creates a page in `database_id` and returns it.
    pub async fn create_page(
        &self,
        database_id: &str,
        properties: &[Property],
    ) -> Result<RawRecord, NotionError> {
        let body = CreatePageRequest {
            parent: Parent {
                database_id: database_id.to_string(),
            },
            properties: properties_json(properties),
        };
        let response = self
            .request(Method::POST, "pages")
            .json(&body)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        response
            .json::<RawRecord>()
            .await
            .map_err(|e| NotionError::DecodeError(e.to_string()))
    }

    /// Updates the given properties of page `page_id`.
    pub async fn update_page(
        &self,
        page_id: &str,
        properties: &[Property],
    ) -> Result<(), NotionError> {
        let body = UpdatePageRequest {
            properties: properties_json(properties),
        };
        let response = self
            .request(Method::PATCH, &format!("pages/{}", page_id))
            .json(&body)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
