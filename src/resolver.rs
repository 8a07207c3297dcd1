//! Cross-catalog resolution.
//!
//! Finds the counterpart of a source [`Item`] on a target catalog:
//! 1. Exact ISRC lookup (tracks that carry one)
//! 2. Fallback searches, one per trial of the effective trial table, most
//!    specific first, stopping at the first hit
//!
//! Candidates are never ranked; the first result of the first successful
//! query is the match.

use crate::catalog::{CatalogAdapter, EntityType, trials};
use crate::error::{Error, Result};
use crate::item::Item;

/// Results requested per search query
const SEARCH_LIMIT: u32 = 1;

/// How a match was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Exact ISRC cross-reference
    Isrc,
    /// Fallback search; index into the target's effective trial table
    Trial(usize),
}

/// A successful resolution
#[derive(Debug, Clone)]
pub struct Resolution {
    pub item: Item,
    pub strategy: MatchStrategy,
}

/// Resolves source items against one target catalog
pub struct Resolver<'a> {
    target: &'a dyn CatalogAdapter,
}

impl<'a> Resolver<'a> {
    pub fn new(target: &'a dyn CatalogAdapter) -> Self {
        Self { target }
    }

    /// Find the target catalog's counterpart of `source`.
    ///
    /// Fails with [`Error::ResolutionExhausted`] when every strategy came up
    /// empty, and with [`Error::Provider`] when a search call fails.
    pub async fn resolve(&self, source: &Item) -> Result<Resolution> {
        let platform = self.target.platform();
        let entity = source.entity_type();

        if let Some(item) = self.try_isrc(source).await {
            tracing::info!(%platform, %entity, id = %item.id(), "Matched by ISRC");
            return Ok(Resolution {
                item,
                strategy: MatchStrategy::Isrc,
            });
        }

        let table = trials::effective_trials(entity, |field| self.target.supports_field(field));

        for (index, trial) in table.iter().enumerate() {
            // A trial only runs when the source has a value for every one of its fields
            let fields = source.search_params().restricted_to(trial);
            if fields.present_fields().count() < trial.len() {
                tracing::debug!(%platform, trial = index, "Skipping trial with missing values");
                continue;
            }

            let hit = self
                .target
                .search_first(&fields, entity, SEARCH_LIMIT)
                .await
                .map_err(|e| Error::provider(platform, e))?;

            if let Some(raw) = hit {
                let item = Item::from_match(self.target, source, raw)
                    .map_err(|e| Error::provider(platform, e))?;
                tracing::info!(%platform, %entity, trial = index, id = %item.id(), "Matched by search");
                return Ok(Resolution {
                    item,
                    strategy: MatchStrategy::Trial(index),
                });
            }
        }

        tracing::info!(%platform, %entity, trials = table.len(), "No match found");
        Err(Error::ResolutionExhausted { platform, entity })
    }

    /// ISRC step. Never fails: every problem is logged and means "no match".
    async fn try_isrc(&self, source: &Item) -> Option<Item> {
        if source.entity_type() != EntityType::Track {
            return None;
        }
        let isrc = source.isrc().filter(|isrc| !isrc.is_empty())?;

        let raw = match self.target.lookup_track_by_isrc(isrc).await {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(platform = %self.target.platform(), isrc, "ISRC lookup failed: {}", e);
                return None;
            }
        };

        match Item::from_match(self.target, source, raw) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(platform = %self.target.platform(), isrc, "Unusable ISRC match: {}", e);
                None
            }
        }
    }
}
