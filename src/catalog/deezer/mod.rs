//! Deezer catalog integration
//!
//! Deezer ids are integers, its search API understands `dur_min`/`dur_max`
//! duration filters, and ISRC lookups are a direct endpoint
//! (`/track/isrc:{code}`) rather than a search.
//!
//! API docs: https://developers.deezer.com/api

pub mod dto;
mod adapter;
mod client;

use async_trait::async_trait;
use serde_json::Value;

pub use client::DeezerClient;

use crate::catalog::domain::{
    CatalogError, DisplayInfo, EntityType, ItemId, Platform, SearchField, SearchParameters,
};
use crate::catalog::traits::CatalogAdapter;

#[async_trait]
impl CatalogAdapter for DeezerClient {
    fn platform(&self) -> Platform {
        Platform::Deezer
    }

    async fn fetch_by_id(&self, id: &ItemId, entity: EntityType) -> Result<Value, CatalogError> {
        match id {
            ItemId::Numeric(id) => self.entity(entity, *id).await,
            ItemId::Opaque(_) => Err(CatalogError::NotFound),
        }
    }

    async fn search_first(
        &self,
        fields: &SearchParameters,
        entity: EntityType,
        limit: u32,
    ) -> Result<Option<Value>, CatalogError> {
        let query = self.build_query(fields);
        tracing::info!(platform = "deezer", %entity, %query, "Searching");

        let page = self.search(entity, &query, limit).await?;
        Ok(page.data.into_iter().next())
    }

    async fn lookup_track_by_isrc(&self, isrc: &str) -> Result<Option<Value>, CatalogError> {
        tracing::info!(platform = "deezer", isrc, "Looking up track by ISRC");
        self.track_by_isrc(isrc).await
    }

    fn supports_field(&self, field: SearchField) -> bool {
        field != SearchField::TrackTitles
    }

    fn extract_id(&self, raw: &Value) -> Result<ItemId, CatalogError> {
        adapter::extract_id(raw)
    }

    fn extract_search_parameters(
        &self,
        raw: &Value,
        entity: EntityType,
    ) -> Result<SearchParameters, CatalogError> {
        adapter::to_search_parameters(raw, entity)
    }

    fn extract_isrc(&self, raw: &Value, entity: EntityType) -> Option<String> {
        adapter::extract_isrc(raw, entity)
    }

    fn extract_image_url(&self, raw: &Value, entity: EntityType) -> String {
        adapter::extract_image_url(raw, entity)
    }

    fn extract_canonical_url(&self, raw: &Value, entity: EntityType) -> Option<String> {
        adapter::extract_canonical_url(raw, entity)
    }

    fn extract_display(&self, raw: &Value, entity: EntityType) -> DisplayInfo {
        adapter::to_display(raw, entity)
    }

    fn duration_term(&self, seconds: u32) -> Option<String> {
        Some(format!("dur_min:{} dur_max:{}", seconds, seconds))
    }
}
