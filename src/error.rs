//! Application-wide error types.
//!
//! Catalog modules report [`CatalogError`]; everything above them (links,
//! resolution, conversion) reports [`Error`]. The CLI uses `anyhow` on top.
//!
//! # Design
//!
//! - [`Error`]: Top-level conversion error enum
//! - [`CatalogError`]: what a single catalog call can fail with
//! - [`Error::is_not_found`] groups the outcomes users see as "no match"
//!
//! # Example
//!
//! ```ignore
//! use spoteezer::error::{Error, Result};
//!
//! async fn convert(service: &ConversionService, url: &str) -> Result<Conversion> {
//!     let source = service.load_item(url).await?;
//!     service.convert_item(&source).await
//! }
//! ```

use crate::catalog::{CatalogError, EntityType, ItemId, Platform};

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level conversion error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Empty URL or a host that belongs to neither catalog
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Right catalog, but not a track/album/artist link we can read
    #[error("Unrecognized {platform} URL: {url}")]
    UnrecognizedUrlShape { platform: Platform, url: String },

    /// Entity type other than track/album/artist (playlists, podcasts...)
    #[error("Unsupported entity type: {0}")]
    UnsupportedEntityType(String),

    /// The source item doesn't exist in its own catalog
    #[error("{entity} {id} not found on {platform}")]
    NotFound {
        platform: Platform,
        entity: EntityType,
        id: ItemId,
    },

    /// Every lookup strategy ran without a hit on the target catalog
    #[error("No matching {entity} found on {platform}")]
    ResolutionExhausted {
        platform: Platform,
        entity: EntityType,
    },

    /// Catalog call failed (network, quota, auth, malformed payload)
    #[error("{platform} request failed: {source}")]
    Provider {
        platform: Platform,
        #[source]
        source: CatalogError,
    },

    /// Following a short link failed
    #[error("Could not follow {url}: {message}")]
    Redirect { url: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Wrap a catalog failure.
    ///
    /// A catalog `NotFound` stays a provider error here; callers that know
    /// the id map it to [`Error::NotFound`] themselves.
    pub fn provider(platform: Platform, source: CatalogError) -> Self {
        Self::Provider { platform, source }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error means "there is nothing to convert to".
    ///
    /// Looks through context wrappers.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } | Self::ResolutionExhausted { .. } => true,
            Self::WithContext { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}
