//! Deezer API Data Transfer Objects
//!
//! These types mirror what the Deezer public API returns. They're only used
//! to read fields out of raw payloads inside this module; nothing outside
//! `deezer` sees them.
//!
//! API Reference: https://developers.deezer.com/api
//!
//! Search results carry fewer fields than direct lookups (no ISRC, no track
//! list), hence the optional fields.

use serde::Deserialize;
use serde_json::Value;

/// Track object (`/track/{id}`, `/track/isrc:{isrc}`, `/search` items)
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub id: u64,
    pub title: String,
    /// Title without version suffixes
    pub title_short: Option<String>,
    pub link: Option<String>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: u32,
    pub isrc: Option<String>,
    pub artist: ArtistRef,
    pub album: Option<AlbumRef>,
    /// Every credited artist (direct lookups only)
    #[serde(default)]
    pub contributors: Vec<ArtistRef>,
}

/// Album object (`/album/{id}`, `/search/album` items)
#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    pub id: u64,
    pub title: String,
    pub link: Option<String>,
    pub cover_big: Option<String>,
    pub artist: Option<ArtistRef>,
    #[serde(default)]
    pub contributors: Vec<ArtistRef>,
    pub tracks: Option<TrackList>,
}

/// Artist object (`/artist/{id}`, `/search/artist` items)
#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub id: u64,
    pub name: String,
    pub link: Option<String>,
    pub picture_big: Option<String>,
}

/// Artist as embedded in tracks and albums
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    pub name: String,
}

/// Album as embedded in tracks
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRef {
    pub title: String,
    pub cover_big: Option<String>,
}

/// Track list embedded in an album lookup
#[derive(Debug, Clone, Deserialize)]
pub struct TrackList {
    #[serde(default)]
    pub data: Vec<TrackTitle>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackTitle {
    pub title: String,
}

/// Search response page
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub data: Vec<Value>,
    pub total: Option<u64>,
}

/// Deezer reports most errors with HTTP 200 and this body
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: Option<String>,
    pub code: Option<u32>,
}

impl ApiError {
    /// "No data" - the requested entity doesn't exist
    pub const NO_DATA: u32 = 800;
    /// Quota exceeded
    pub const QUOTA: u32 = 4;
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================
