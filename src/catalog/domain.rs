//! Internal domain types shared by every catalog.
//!
//! These types are OUR types - they don't change when a catalog's API changes.
//! Catalog responses are kept as raw JSON and read through the adapters.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// A supported streaming catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Deezer,
    Spotify,
}

impl Platform {
    /// Lowercase identifier used in URLs, logs and the web envelope
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Deezer => "deezer",
            Platform::Spotify => "spotify",
        }
    }

    /// The catalog a link from this platform gets converted to
    pub fn counterpart(self) -> Platform {
        match self {
            Platform::Deezer => Platform::Spotify,
            Platform::Spotify => Platform::Deezer,
        }
    }

    /// Identify the platform from a URL host (short-link hosts included).
    pub fn from_host(host: &str) -> Option<Platform> {
        let host = host.to_ascii_lowercase();
        if host.contains("deezer") {
            Some(Platform::Deezer)
        } else if host.contains("spotify") {
            Some(Platform::Spotify)
        } else {
            None
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Kind of catalog entity that can be converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Track,
    Album,
    Artist,
}

impl EntityType {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Track => "track",
            EntityType::Album => "album",
            EntityType::Artist => "artist",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EntityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Error for entity type strings other than track/album/artist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported entity type: {0}")]
pub struct UnsupportedEntityType(pub String);

impl FromStr for EntityType {
    type Err = UnsupportedEntityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "track" => Ok(EntityType::Track),
            "album" => Ok(EntityType::Album),
            "artist" => Ok(EntityType::Artist),
            other => Err(UnsupportedEntityType(other.to_string())),
        }
    }
}

/// Catalog-native identifier.
///
/// Deezer uses integers, Spotify uses opaque base62 strings. Serializes as a
/// JSON number or string accordingly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemId {
    Numeric(u64),
    Opaque(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Numeric(id) => write!(f, "{}", id),
            ItemId::Opaque(id) => f.write_str(id),
        }
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ItemId::Numeric(id) => serializer.serialize_u64(*id),
            ItemId::Opaque(id) => serializer.serialize_str(id),
        }
    }
}

/// Comparison field used to build search queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SearchField {
    Track,
    Artist,
    Album,
    DurationSeconds,
    TrackTitles,
}

impl SearchField {
    /// Canonical order in which query terms are emitted
    pub const ALL: [SearchField; 5] = [
        SearchField::Track,
        SearchField::Artist,
        SearchField::Album,
        SearchField::DurationSeconds,
        SearchField::TrackTitles,
    ];

    /// Keyword used in catalog search syntax (`track:"..."`)
    pub fn keyword(self) -> &'static str {
        match self {
            SearchField::Track => "track",
            SearchField::Artist => "artist",
            SearchField::Album => "album",
            SearchField::DurationSeconds => "duration",
            SearchField::TrackTitles => "tracks",
        }
    }
}

/// A single comparison value borrowed from [`SearchParameters`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Seconds(u32),
    Titles(&'a [String]),
}

/// Normalized comparison values derived from a catalog entity.
///
/// Text values have already been through [`super::normalize::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParameters {
    pub track: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration_secs: Option<u32>,
    pub track_titles: Vec<String>,
}

impl SearchParameters {
    /// Value for a field, `None` when the field is absent or empty.
    pub fn get(&self, field: SearchField) -> Option<FieldValue<'_>> {
        fn text(value: &Option<String>) -> Option<FieldValue<'_>> {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(FieldValue::Text)
        }

        match field {
            SearchField::Track => text(&self.track),
            SearchField::Artist => text(&self.artist),
            SearchField::Album => text(&self.album),
            SearchField::DurationSeconds => self.duration_secs.map(FieldValue::Seconds),
            SearchField::TrackTitles if self.track_titles.is_empty() => None,
            SearchField::TrackTitles => Some(FieldValue::Titles(&self.track_titles)),
        }
    }

    /// Copy of these parameters keeping only the fields of one trial.
    pub fn restricted_to(&self, fields: &[SearchField]) -> SearchParameters {
        let keep = |field: SearchField| fields.contains(&field);

        SearchParameters {
            track: self.track.clone().filter(|_| keep(SearchField::Track)),
            artist: self.artist.clone().filter(|_| keep(SearchField::Artist)),
            album: self.album.clone().filter(|_| keep(SearchField::Album)),
            duration_secs: self.duration_secs.filter(|_| keep(SearchField::DurationSeconds)),
            track_titles: if keep(SearchField::TrackTitles) {
                self.track_titles.clone()
            } else {
                Vec::new()
            },
        }
    }

    /// Fields that currently carry a value, in canonical order
    pub fn present_fields(&self) -> impl Iterator<Item = (SearchField, FieldValue<'_>)> {
        SearchField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.present_fields().next().is_none()
    }
}

/// Human-readable labels for an entity (not used for matching)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayInfo {
    /// Track, album or artist name as the catalog spells it
    pub title: String,
    /// All credited artists joined with ", " (empty for artists)
    pub artists: String,
}

/// Errors raised by catalog clients and adapters
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API request failed ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Catalog rejected the credentials")]
    Unauthorized,

    #[error("No such entity in the catalog")]
    NotFound,

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}
