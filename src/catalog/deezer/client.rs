//! Deezer HTTP client
//!
//! Talks to the public Deezer API. No credentials are needed for catalog
//! lookups and search.
//! See: https://developers.deezer.com/api
//!
//! ## API Quirks
//!
//! Deezer answers most failures with HTTP 200 and an `{"error": {...}}`
//! body, so every response is checked for that envelope before use.
//! Code 800 ("no data") means the entity doesn't exist.

use serde_json::Value;

use super::dto;
use crate::catalog::domain::{CatalogError, EntityType};
use crate::config::HttpConfig;

/// Deezer API client
pub struct DeezerClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DeezerClient {
    /// Create a new client
    ///
    /// The request timeout comes from `http`; there is no automatic retry.
    pub fn new(base_url: impl Into<String>, http: &HttpConfig) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(http.user_agent.as_str())
            .timeout(http.timeout())
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Look up a track, album or artist by id
    pub async fn entity(&self, entity: EntityType, id: u64) -> Result<Value, CatalogError> {
        self.get(&format!("{}/{}", entity, id), &[]).await
    }

    /// Run a search and return the result page
    pub async fn search(
        &self,
        entity: EntityType,
        query: &str,
        limit: u32,
    ) -> Result<dto::SearchPage, CatalogError> {
        let path = match entity {
            EntityType::Track => "search",
            EntityType::Album => "search/album",
            EntityType::Artist => "search/artist",
        };
        let limit = limit.to_string();

        let body = self.get(path, &[("q", query), ("limit", limit.as_str())]).await?;
        serde_json::from_value(body).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Look up a track by ISRC, `None` if Deezer doesn't know it
    pub async fn track_by_isrc(&self, isrc: &str) -> Result<Option<Value>, CatalogError> {
        let path = format!("track/isrc:{}", urlencoding::encode(isrc));

        match self.get(&path, &[]).await {
            Ok(track) => Ok(Some(track)),
            Err(CatalogError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Send a GET request and unwrap Deezer's error envelope
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, CatalogError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(target: "catalog::deezer", %url, ?query, "GET");

        let response = self
            .http_client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        check_error_envelope(body)
    }
}

/// Turn a 200-with-error body into the matching [`CatalogError`]
fn check_error_envelope(body: Value) -> Result<Value, CatalogError> {
    if body.get("error").is_none() {
        return Ok(body);
    }

    let envelope: dto::ErrorEnvelope =
        serde_json::from_value(body).map_err(|e| CatalogError::Parse(e.to_string()))?;

    match envelope.error.code {
        Some(dto::ApiError::NO_DATA) => Err(CatalogError::NotFound),
        Some(dto::ApiError::QUOTA) => Err(CatalogError::RateLimited),
        code => Err(CatalogError::Api {
            status: 200,
            message: format!(
                "{} (code {})",
                envelope.error.message.unwrap_or_else(|| "unknown error".to_string()),
                code.map(|c| c.to_string()).unwrap_or_else(|| "?".to_string())
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation_trims_base_url() {
        let client = DeezerClient::new("https://api.deezer.com/", &HttpConfig::default()).unwrap();
        assert_eq!(client.base_url, "https://api.deezer.com");
    }

    #[test]
    fn test_plain_body_passes_through() {
        let body = json!({"id": 1, "title": "Song"});
        assert_eq!(check_error_envelope(body.clone()).unwrap(), body);
    }

    #[test]
    fn test_no_data_is_not_found() {
        let body = json!({"error": {"type": "DataException", "message": "no data", "code": 800}});
        assert!(matches!(check_error_envelope(body), Err(CatalogError::NotFound)));
    }

    #[test]
    fn test_quota_is_rate_limited() {
        let body = json!({"error": {"type": "Exception", "message": "Quota limit exceeded", "code": 4}});
        assert!(matches!(check_error_envelope(body), Err(CatalogError::RateLimited)));
    }

    #[test]
    fn test_other_errors_keep_message() {
        let body = json!({"error": {"type": "ParameterException", "message": "Wrong parameter", "code": 500}});
        match check_error_envelope(body) {
            Err(CatalogError::Api { message, .. }) => {
                assert!(message.contains("Wrong parameter"));
                assert!(message.contains("500"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
