//! Spotify Web API client
//!
//! Handles communication with the Spotify Web API.
//! See: https://developer.spotify.com/documentation/web-api
//!
//! The client sends a pre-issued bearer token. Obtaining and refreshing that
//! token happens outside this crate.

use serde_json::Value;

use super::{adapter, dto};
use crate::catalog::domain::{CatalogError, EntityType};
use crate::config::HttpConfig;

/// Spotify Web API client
pub struct SpotifyClient {
    http_client: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl SpotifyClient {
    /// Create a new client
    pub fn new(
        base_url: impl Into<String>,
        access_token: Option<String>,
        http: &HttpConfig,
    ) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(http.user_agent.as_str())
            .timeout(http.timeout())
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.filter(|t| !t.is_empty()),
        })
    }

    /// Look up a track, album or artist by id (`/tracks/{id}` etc.)
    pub async fn entity(&self, entity: EntityType, id: &str) -> Result<Value, CatalogError> {
        let path = format!("{}s/{}", entity, urlencoding::encode(id));

        match self.get(&path, &[]).await {
            // Malformed ids come back as 400 "invalid id"
            Err(CatalogError::Api { status: 400, .. }) => Err(CatalogError::NotFound),
            other => other,
        }
    }

    /// Run a search and return the raw envelope
    pub async fn search(
        &self,
        query: &str,
        entity: EntityType,
        limit: u32,
    ) -> Result<Value, CatalogError> {
        let limit = limit.to_string();
        let params = [("q", query), ("type", entity.as_str()), ("limit", limit.as_str())];

        self.get("search", &params).await
    }

    /// Search `isrc:{code}` and return the first track, if the envelope reports a match
    pub async fn track_by_isrc(&self, isrc: &str) -> Result<Option<Value>, CatalogError> {
        let response = self
            .search(&format!("isrc:{}", isrc), EntityType::Track, 1)
            .await?;
        adapter::first_search_item(response, EntityType::Track)
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, CatalogError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(target: "catalog::spotify", %url, ?query, "GET");

        let mut request = self.http_client.get(&url).query(query);
        if let Some(ref token) = self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if status.is_success() {
            return response
                .json::<Value>()
                .await
                .map_err(|e| CatalogError::Parse(e.to_string()));
        }

        match status {
            reqwest::StatusCode::NOT_FOUND => Err(CatalogError::NotFound),
            reqwest::StatusCode::UNAUTHORIZED => Err(CatalogError::Unauthorized),
            reqwest::StatusCode::TOO_MANY_REQUESTS => Err(CatalogError::RateLimited),
            _ => {
                let message = match response.json::<dto::ErrorResponse>().await {
                    Ok(error) => error.error.message,
                    Err(_) => status.canonical_reason().unwrap_or("Unknown").to_string(),
                };
                Err(CatalogError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}
