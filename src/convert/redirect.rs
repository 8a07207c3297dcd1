//! Following share and short links to their final catalog URL.

use async_trait::async_trait;

use crate::config::HttpConfig;
use crate::error::{Error, Result};

/// Resolves a URL to wherever its redirect chain ends.
#[async_trait]
pub trait UrlResolver: Send + Sync {
    async fn resolve_redirects(&self, url: &str) -> Result<String>;
}

/// Follows redirects with a plain GET, like a browser would
pub struct HttpRedirectResolver {
    http_client: reqwest::Client,
}

impl HttpRedirectResolver {
    pub fn new(http: &HttpConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(http.user_agent.as_str())
            .timeout(http.timeout())
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl UrlResolver for HttpRedirectResolver {
    async fn resolve_redirects(&self, url: &str) -> Result<String> {
        let redirect_error = |e: reqwest::Error| Error::Redirect {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.http_client.get(url).send().await.map_err(redirect_error)?;
        let final_url = response.url().to_string();

        if final_url != url {
            tracing::debug!(from = url, to = %final_url, "Followed redirects");
        }
        Ok(final_url)
    }
}
