//! Conversion service - turns a link on one catalog into a link on the other
//!
//! This is the high-level API behind both the CLI and the web handler:
//! 1. Check the link's shape and platform (no network)
//! 2. Follow short links to the final catalog URL
//! 3. Load the source item from its own catalog
//! 4. Resolve it on the counterpart catalog

use std::sync::Arc;

use serde::Serialize;

use super::link::{self, InboundLink};
use super::redirect::UrlResolver;
use crate::catalog::{CatalogError, Catalogs};
use crate::error::{Error, Result};
use crate::item::{Item, WebInfo};
use crate::resolver::{MatchStrategy, Resolver};

const SUCCESS_MESSAGE: &str = "Conversion successful!";
const NOT_FOUND_MESSAGE: &str = "Could not find a match...";

/// Source and converted item of a successful conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    pub init: Item,
    pub result: Item,
    pub strategy: MatchStrategy,
}

/// The `{result, log}` envelope returned to web clients
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResponse {
    pub result: ConversionResult,
    pub log: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ConversionResult {
    Pair { init: WebInfo, result: WebInfo },
    /// Serializes as `{}`
    Empty {},
}

impl ConversionResponse {
    pub fn is_success(&self) -> bool {
        matches!(self.result, ConversionResult::Pair { .. })
    }
}

/// Service converting links between the two catalogs
#[derive(Clone)]
pub struct ConversionService {
    catalogs: Catalogs,
    redirects: Arc<dyn UrlResolver>,
}

impl ConversionService {
    pub fn new(catalogs: Catalogs, redirects: Arc<dyn UrlResolver>) -> Self {
        Self {
            catalogs,
            redirects,
        }
    }

    /// Load the item a link points to from its own catalog
    pub async fn load_item(&self, url: &str) -> Result<Item> {
        let link = InboundLink::parse(url)?;
        let final_url = self.redirects.resolve_redirects(&link.url).await?;
        let (entity, id) = link::parse_entity(link.platform, &final_url)?;

        let platform = link.platform;
        let catalog = self.catalogs.get(platform);
        tracing::info!(%platform, %entity, %id, "Loading source item");

        let raw = match catalog.fetch_by_id(&id, entity).await {
            Ok(raw) => raw,
            Err(CatalogError::NotFound) => {
                return Err(Error::NotFound {
                    platform,
                    entity,
                    id,
                });
            }
            Err(e) => return Err(Error::provider(platform, e)),
        };

        Item::from_lookup(catalog, entity, id, raw, &final_url)
            .map_err(|e| Error::provider(platform, e))
    }

    /// Find the counterpart of an item on the other catalog
    pub async fn convert_item(&self, item: &Item) -> Result<(Item, MatchStrategy)> {
        let target = self.catalogs.get(item.platform().counterpart());
        let resolution = Resolver::new(target).resolve(item).await?;
        Ok((resolution.item, resolution.strategy))
    }

    pub async fn convert(&self, url: &str) -> Result<Conversion> {
        let init = self.load_item(url).await?;
        let (result, strategy) = self.convert_item(&init).await?;

        Ok(Conversion {
            init,
            result,
            strategy,
        })
    }

    /// Run a conversion and wrap the outcome in the web envelope.
    ///
    /// Never fails; errors become the envelope's `log` message.
    pub async fn respond(&self, url: Option<&str>) -> ConversionResponse {
        tracing::info!(url, "Conversion started");

        let outcome = match url {
            Some(url) => self.convert(url).await,
            None => Err(Error::invalid_input("No URL provided")),
        };

        match outcome {
            Ok(conversion) => ConversionResponse {
                result: ConversionResult::Pair {
                    init: conversion.init.web_info(),
                    result: conversion.result.web_info(),
                },
                log: SUCCESS_MESSAGE.to_string(),
            },
            Err(e) if e.is_not_found() => {
                tracing::info!("Conversion found no match: {}", e);
                ConversionResponse {
                    result: ConversionResult::Empty {},
                    log: NOT_FOUND_MESSAGE.to_string(),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Conversion failed");
                ConversionResponse {
                    result: ConversionResult::Empty {},
                    log: format!("Something went wrong.\n{}\nPlease try again!", e),
                }
            }
        }
    }
}
