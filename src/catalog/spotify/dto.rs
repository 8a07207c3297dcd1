//! Spotify Web API Data Transfer Objects
//!
//! These types match the shapes returned by the Spotify Web API. Use them
//! only inside the spotify module - convert to domain types via the adapter.
//!
//! API Reference: https://developer.spotify.com/documentation/web-api

use serde::Deserialize;
use serde_json::Value;

/// Full or simplified track object
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    pub album: Option<AlbumRef>,
    /// Duration in milliseconds
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub external_ids: ExternalIds,
}

/// Full album object (`/albums/{id}`) or search item
#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub images: Vec<Image>,
    /// Only present on direct lookups
    pub tracks: Option<Paging<TrackName>>,
}

/// Full artist object
#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Simplified artist embedded in tracks and albums
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    pub name: String,
}

/// Simplified album embedded in tracks
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRef {
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackName {
    pub name: String,
}

/// Image, largest first in Spotify responses
#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalIds {
    pub isrc: Option<String>,
    pub upc: Option<String>,
}

/// Generic paging object
#[derive(Debug, Clone, Deserialize)]
pub struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

/// `/search` response; only the requested type's page is present
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<Paging<Value>>,
    pub albums: Option<Paging<Value>>,
    pub artists: Option<Paging<Value>>,
}

/// Error body (`{"error": {"status": 400, "message": "invalid id"}}`)
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_track() {
        let track: Track =
            serde_json::from_value(crate::test_utils::spotify_track()).expect("Should parse track");

        assert_eq!(track.id, "0DiWol3AO6WpXZgp0goxAV");
        assert_eq!(track.duration_ms, 320357);
        assert_eq!(track.external_ids.isrc.as_deref(), Some("GBDUW0000059"));
        assert_eq!(track.artists[0].name, "Daft Punk");
    }

    #[test]
    fn test_parse_album_with_track_page() {
        let album: Album =
            serde_json::from_value(crate::test_utils::spotify_album()).expect("Should parse album");

        let tracks = album.tracks.expect("lookup includes tracks");
        assert_eq!(tracks.total, 2);
        assert_eq!(tracks.items[1].name, "Aerodynamic");
    }

    #[test]
    fn test_parse_search_response() {
        let response: SearchResponse =
            serde_json::from_value(crate::test_utils::spotify_track_search()).expect("Should parse");

        let tracks = response.tracks.expect("track page");
        assert_eq!(tracks.total, 1);
        assert_eq!(tracks.items.len(), 1);
        assert!(response.albums.is_none());
    }

    #[test]
    fn test_parse_error_response() {
        let json = r#"{"error": {"status": 400, "message": "invalid id"}}"#;
        let error: ErrorResponse = serde_json::from_str(json).expect("Should parse error");
        assert_eq!(error.error.status, 400);
        assert_eq!(error.error.message, "invalid id");
    }
}
