//! The catalog adapter contract.
//!
//! Every catalog is wrapped behind [`CatalogAdapter`], so the resolver and
//! the conversion service never know which concrete catalog they talk to.
//! Production code uses [`DeezerClient`](super::deezer::DeezerClient) and
//! [`SpotifyClient`](super::spotify::SpotifyClient); tests substitute the
//! fixture catalog from [`mocks`].
//!
//! # Example
//!
//! ```ignore
//! use spoteezer::catalog::CatalogAdapter;
//!
//! async fn first_hit(catalog: &dyn CatalogAdapter, params: &SearchParameters) {
//!     let raw = catalog.search_first(params, EntityType::Track, 1).await?;
//! }
//! ```

use async_trait::async_trait;
use serde_json::Value;

use super::domain::{
    CatalogError, DisplayInfo, EntityType, FieldValue, ItemId, Platform, SearchField,
    SearchParameters,
};

/// Uniform access to one streaming catalog.
///
/// Network operations are async; extraction operations are pure reads of a
/// raw payload previously returned by this same catalog.
#[async_trait]
pub trait CatalogAdapter: Send + Sync {
    /// Which catalog this adapter talks to
    fn platform(&self) -> Platform;

    /// Direct lookup. Fails with [`CatalogError::NotFound`] for unknown ids.
    async fn fetch_by_id(&self, id: &ItemId, entity: EntityType) -> Result<Value, CatalogError>;

    /// Run one query built from `fields` and return the first result.
    ///
    /// Zero results is `Ok(None)`, not an error.
    async fn search_first(
        &self,
        fields: &SearchParameters,
        entity: EntityType,
        limit: u32,
    ) -> Result<Option<Value>, CatalogError>;

    /// Exact cross-reference of a recording by ISRC.
    ///
    /// `Ok(None)` when the catalog doesn't know the code.
    async fn lookup_track_by_isrc(&self, isrc: &str) -> Result<Option<Value>, CatalogError>;

    /// Whether the search API can filter on this field
    fn supports_field(&self, field: SearchField) -> bool;

    fn extract_id(&self, raw: &Value) -> Result<ItemId, CatalogError>;

    /// Normalized comparison values (first-listed artist only).
    fn extract_search_parameters(
        &self,
        raw: &Value,
        entity: EntityType,
    ) -> Result<SearchParameters, CatalogError>;

    fn extract_isrc(&self, raw: &Value, entity: EntityType) -> Option<String>;

    /// Cover or picture URL, empty when the catalog has none.
    fn extract_image_url(&self, raw: &Value, entity: EntityType) -> String;

    fn extract_canonical_url(&self, raw: &Value, entity: EntityType) -> Option<String>;

    fn extract_display(&self, raw: &Value, entity: EntityType) -> DisplayInfo;

    /// Query term for a duration filter, `None` if the catalog can't express one.
    fn duration_term(&self, _seconds: u32) -> Option<String> {
        None
    }

    /// Build the search query for a (restricted) parameter set.
    ///
    /// Each present field becomes `field:"value"`; absent fields are left out.
    fn build_query(&self, fields: &SearchParameters) -> String {
        fields
            .present_fields()
            .filter(|(field, _)| self.supports_field(*field))
            .filter_map(|(field, value)| match value {
                FieldValue::Text(text) => Some(format!("{}:\"{}\"", field.keyword(), text)),
                FieldValue::Seconds(seconds) => self.duration_term(seconds),
                FieldValue::Titles(_) => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
