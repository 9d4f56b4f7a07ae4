//! `RecordStore` implementation backed by the Notion API.

use crate::client::{NotionClient, NotionError};
use rentify_common::services::{
    BoxFuture, Property, QueryFilter, RawRecord, RecordStore, StoreError,
};

impl From<NotionError> for StoreError {
    fn from(err: NotionError) -> Self {
        match err {
            NotionError::ApiError { status, body } => StoreError::Remote { status, body },
            NotionError::RequestError(e) => StoreError::Transport(e.to_string()),
            NotionError::DecodeError(msg) => StoreError::Decode(msg),
        }
    }
}

impl RecordStore for NotionClient {
    fn query(
        &self,
        database_id: &str,
        filter: Option<QueryFilter>,
        page_size: u32,
    ) -> BoxFuture<'_, Vec<RawRecord>, StoreError> {
        let database_id = database_id.to_string();
        Box::pin(async move {
            Ok(self
                .query_database(&database_id, filter, page_size)
                .await?)
        })
    }

    fn create(
        &self,
        database_id: &str,
        properties: Vec<Property>,
    ) -> BoxFuture<'_, RawRecord, StoreError> {
        let database_id = database_id.to_string();
        Box::pin(async move { Ok(self.create_page(&database_id, &properties).await?) })
    }

    fn patch(&self, record_id: &str, properties: Vec<Property>) -> BoxFuture<'_, (), StoreError> {
        let record_id = record_id.to_string();
        Box::pin(async move { Ok(self.update_page(&record_id, &properties).await?) })
    }
}
