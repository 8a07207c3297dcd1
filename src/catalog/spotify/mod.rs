//! Spotify catalog integration
//!
//! Spotify ids are opaque base62 strings. The search API has no duration
//! filter, and ISRC lookups go through `/search?q=isrc:{code}`, which returns
//! a search envelope rather than a track.
//!
//! API docs: https://developer.spotify.com/documentation/web-api

pub mod dto;
mod adapter;
mod client;

use async_trait::async_trait;
use serde_json::Value;

pub use client::SpotifyClient;

use crate::catalog::domain::{
    CatalogError, DisplayInfo, EntityType, ItemId, Platform, SearchField, SearchParameters,
};
use crate::catalog::traits::CatalogAdapter;

#[async_trait]
impl CatalogAdapter for SpotifyClient {
    fn platform(&self) -> Platform {
        Platform::Spotify
    }

    async fn fetch_by_id(&self, id: &ItemId, entity: EntityType) -> Result<Value, CatalogError> {
        match id {
            ItemId::Opaque(id) => self.entity(entity, id).await,
            ItemId::Numeric(_) => Err(CatalogError::NotFound),
        }
    }

    async fn search_first(
        &self,
        fields: &SearchParameters,
        entity: EntityType,
        limit: u32,
    ) -> Result<Option<Value>, CatalogError> {
        let query = self.build_query(fields);
        tracing::info!(platform = "spotify", %entity, %query, "Searching");

        let response = self.search(&query, entity, limit).await?;
        adapter::first_search_item(response, entity)
    }

    async fn lookup_track_by_isrc(&self, isrc: &str) -> Result<Option<Value>, CatalogError> {
        tracing::info!(platform = "spotify", isrc, "Looking up track by ISRC");
        self.track_by_isrc(isrc).await
    }

    fn supports_field(&self, field: SearchField) -> bool {
        !matches!(field, SearchField::DurationSeconds | SearchField::TrackTitles)
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;

    fn client() -> SpotifyClient {
        SpotifyClient::new("https://api.spotify.com/v1", None, &HttpConfig::default()).unwrap()
    }

    #[test]
    fn test_duration_is_left_out_of_queries() {
        let fields = SearchParameters {
            track: Some("one more time".to_string()),
            artist: Some("daft punk".to_string()),
            duration_secs: Some(320),
            ..Default::default()
        };

        assert_eq!(
            client().build_query(&fields),
            "track:\"one more time\" artist:\"daft punk\""
        );
    }

    #[test]
    fn test_artist_query() {
        let fields = SearchParameters {
            artist: Some("test artist".to_string()),
            ..Default::default()
        };
        assert_eq!(client().build_query(&fields), "artist:\"test artist\"");
    }
}
