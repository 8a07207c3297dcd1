//! The catalog-neutral representation of one track, album or artist.

use serde::Serialize;
use serde_json::Value;

use crate::catalog::{
    CatalogAdapter, CatalogError, DisplayInfo, EntityType, ItemId, Platform, SearchParameters,
};

/// One entity of one catalog, with everything needed to find it elsewhere.
///
/// Items are immutable once built. The search parameters of a source item
/// are derived from its own raw payload; a converted item carries its
/// source's parameters so both ends of a conversion compare the same values.
#[derive(Debug, Clone)]
pub struct Item {
    platform: Platform,
    entity_type: EntityType,
    id: ItemId,
    url: String,
    image_url: String,
    isrc: Option<String>,
    search_params: SearchParameters,
    raw: Value,
    display: DisplayInfo,
}

impl Item {
    /// Build an item from a direct lookup on its own catalog.
    ///
    /// `link` is the URL the item was looked up from; it is kept when the
    /// payload carries no recognizable canonical URL.
    pub fn from_lookup(
        catalog: &dyn CatalogAdapter,
        entity_type: EntityType,
        id: ItemId,
        raw: Value,
        link: &str,
    ) -> Result<Self, CatalogError> {
        let search_params = catalog.extract_search_parameters(&raw, entity_type)?;
        let url = catalog
            .extract_canonical_url(&raw, entity_type)
            .unwrap_or_else(|| link.to_string());

        Ok(Self {
            platform: catalog.platform(),
            entity_type,
            id,
            url,
            image_url: catalog.extract_image_url(&raw, entity_type),
            isrc: catalog.extract_isrc(&raw, entity_type),
            display: catalog.extract_display(&raw, entity_type),
            search_params,
            raw,
        })
    }

    /// Build the counterpart of `source` from a raw match on `target`.
    pub fn from_match(
        target: &dyn CatalogAdapter,
        source: &Item,
        raw: Value,
    ) -> Result<Self, CatalogError> {
        let entity_type = source.entity_type;
        let id = target.extract_id(&raw)?;
        let url = target.extract_canonical_url(&raw, entity_type).ok_or_else(|| {
            CatalogError::InvalidResponse(format!("no {} URL in matched payload", entity_type))
        })?;

        Ok(Self {
            platform: target.platform(),
            entity_type,
            id,
            url,
            image_url: target.extract_image_url(&raw, entity_type),
            isrc: target.extract_isrc(&raw, entity_type),
            display: target.extract_display(&raw, entity_type),
            search_params: source.search_params.clone(),
            raw,
        })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Canonical public URL on the item's catalog
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Cover or picture URL, empty when the catalog has none
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn isrc(&self) -> Option<&str> {
        self.isrc.as_deref()
    }

    pub fn search_params(&self) -> &SearchParameters {
        &self.search_params
    }

    /// The catalog payload exactly as received
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn display(&self) -> &DisplayInfo {
        &self.display
    }

    /// The fields exposed to web clients
    pub fn web_info(&self) -> WebInfo {
        WebInfo {
            url: self.url.clone(),
            entity_type: self.entity_type,
            id: self.id.clone(),
            platform: self.platform,
            image_url: self.image_url.clone(),
        }
    }
}

/// Public view of an [`Item`] in the web envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebInfo {
    pub url: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub id: ItemId,
    pub platform: Platform,
    #[serde(rename = "imgUrl")]
    pub image_url: String,
}
