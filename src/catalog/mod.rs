//! Catalog access - everything that knows about a specific streaming catalog.
//!
//! # Architecture
//!
//! - **Domain types** (`domain.rs`) - platform, entity type, ids, search parameters
//! - **Normalizer** (`normalize.rs`) - free-text canonicalization
//! - **Trial table** (`trials.rs`) - ordered field subsets for fallback search
//! - **Adapter contract** (`traits.rs`) - the uniform catalog interface
//! - **Catalogs** (`deezer/`, `spotify/`) - HTTP client, DTOs and payload adapter each
//!
//! Raw payloads stay as `serde_json::Value`; DTOs are only used inside a
//! catalog module to read fields out of them.

pub mod deezer;
pub mod domain;
pub mod normalize;
pub mod spotify;
pub mod traits;
pub mod tree;
pub mod trials;

use std::sync::Arc;

pub use deezer::DeezerClient;
pub use domain::{
    CatalogError, DisplayInfo, EntityType, FieldValue, ItemId, Platform, SearchField,
    SearchParameters,
};
pub use spotify::SpotifyClient;
pub use traits::CatalogAdapter;

use crate::config::Config;

/// The pair of catalogs a conversion moves between.
///
/// Adapters are shared, stateless and safe to use from concurrent requests.
#[derive(Clone)]
pub struct Catalogs {
    deezer: Arc<dyn CatalogAdapter>,
    spotify: Arc<dyn CatalogAdapter>,
}

impl Catalogs {
    pub fn new(deezer: Arc<dyn CatalogAdapter>, spotify: Arc<dyn CatalogAdapter>) -> Self {
        Self { deezer, spotify }
    }

    /// Build the real HTTP-backed adapters from configuration
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        let deezer = DeezerClient::new(&config.deezer.base_url, &config.http)?;
        let spotify = SpotifyClient::new(
            &config.spotify.base_url,
            config.credentials.spotify_access_token.clone(),
            &config.http,
        )?;

        Ok(Self::new(Arc::new(deezer), Arc::new(spotify)))
    }

    pub fn get(&self, platform: Platform) -> &dyn CatalogAdapter {
        match platform {
            Platform::Deezer => self.deezer.as_ref(),
            Platform::Spotify => self.spotify.as_ref(),
        }
    }
}
