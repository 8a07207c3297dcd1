//! HTTP server setup and routing
//!
//! - `POST /convert` with `{"initURL": "..."}` returns the conversion envelope
//! - `GET /health` for liveness checks
//!
//! `/convert` always answers 200; failures are reported in the envelope's
//! `log` message so browser clients only ever parse one shape.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::convert::{ConversionResponse, ConversionService};

#[derive(Debug, Default, Deserialize)]
struct ConvertRequest {
    #[serde(rename = "initURL", default)]
    init_url: Option<String>,
}

/// Build the router around a conversion service
pub fn router(service: ConversionService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/convert", post(convert))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        // Web front-ends are served from a different origin
        .layer(CorsLayer::permissive())
}

/// Bind and serve until Ctrl-C
pub async fn serve(bind: &str, service: ConversionService) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutting down");
            }
        })
        .await
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Bodies that aren't JSON objects count as a request without a URL
async fn convert(State(service): State<ConversionService>, body: Bytes) -> Json<ConversionResponse> {
    let request: ConvertRequest = serde_json::from_slice(&body).unwrap_or_default();
    Json(service.respond(request.init_url.as_deref()).await)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::traits::mocks::{FixtureCatalog, FixtureEntry};
    use crate::catalog::{Catalogs, ItemId, Platform};
    use crate::convert::redirect::mocks::FakeRedirects;

    fn app() -> Router {
        let deezer = FixtureCatalog::new(
            Platform::Deezer,
            vec![FixtureEntry::track(ItemId::Numeric(3135556), "One More Time", "Daft Punk", "Discovery", 320)],
        );
        let spotify = FixtureCatalog::text_only(
            Platform::Spotify,
            vec![FixtureEntry::track(
                ItemId::Opaque("0DiWol3AO6WpXZgp0goxAV".into()),
                "One More Time",
                "Daft Punk",
                "Discovery",
                320,
            )],
        );
        let service = ConversionService::new(
            Catalogs::new(Arc::new(deezer), Arc::new(spotify)),
            Arc::new(FakeRedirects::default()),
        );
        router(service)
    }

    async fn post_convert(body: &'static str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/convert")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_convert_endpoint_success() {
        let (status, body) =
            post_convert(r#"{"initURL": "https://www.deezer.com/track/3135556"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["log"], "Conversion successful!");
        assert_eq!(body["result"]["init"]["platform"], "deezer");
        assert_eq!(body["result"]["result"]["platform"], "spotify");
        assert_eq!(body["result"]["result"]["id"], "0DiWol3AO6WpXZgp0goxAV");
        assert_eq!(
            body["result"]["result"]["url"],
            "https://spotify.test/track/0DiWol3AO6WpXZgp0goxAV"
        );
    }

    #[tokio::test]
    async fn test_convert_endpoint_missing_url() {
        let (status, body) = post_convert("{}").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], json!({}));
        assert!(body["log"].as_str().unwrap().contains("No URL provided"));
    }

    #[tokio::test]
    async fn test_convert_endpoint_malformed_body() {
        let (status, body) = post_convert("not json").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["log"].as_str().unwrap().starts_with("Something went wrong."));
    }

    #[tokio::test]
    async fn test_convert_endpoint_unknown_host() {
        let (status, body) = post_convert(r#"{"initURL": "https://tidal.com/track/1"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], json!({}));
        assert!(body["log"].as_str().unwrap().contains("neither a Deezer nor a Spotify link"));
    }
}
