//! Adapter layer: read Spotify payloads into domain values

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::dto;
use crate::catalog::domain::{CatalogError, DisplayInfo, EntityType, ItemId, SearchParameters};
use crate::catalog::normalize::{normalize, normalize_title};
use crate::catalog::tree::find_first_str_with;

fn parse<T: DeserializeOwned>(raw: &Value, what: &str) -> Result<T, CatalogError> {
    T::deserialize(raw)
        .map_err(|e| CatalogError::InvalidResponse(format!("Spotify {}: {}", what, e)))
}

pub fn extract_id(raw: &Value) -> Result<ItemId, CatalogError> {
    raw.get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(|id| ItemId::Opaque(id.to_string()))
        .ok_or_else(|| CatalogError::InvalidResponse("Spotify payload has no id".to_string()))
}

/// Only the first credited artist is used for matching
fn first_artist(artists: &[dto::ArtistRef]) -> Option<String> {
    artists.first().map(|a| normalize(&a.name))
}

/// Build comparison values from a Spotify payload.
///
/// Track and album names lose their featured-artist qualifier first.
pub fn to_search_parameters(raw: &Value, entity: EntityType) -> Result<SearchParameters, CatalogError> {
    let params = match entity {
        EntityType::Track => {
            let track: dto::Track = parse(raw, "track")?;
            SearchParameters {
                track: Some(normalize_title(&track.name)),
                artist: first_artist(&track.artists),
                album: track.album.map(|a| normalize_title(&a.name)),
                duration_secs: Some((track.duration_ms / 1000) as u32).filter(|d| *d > 0),
                track_titles: vec![],
            }
        }
        EntityType::Album => {
            let album: dto::Album = parse(raw, "album")?;
            SearchParameters {
                album: Some(normalize_title(&album.name)),
                artist: first_artist(&album.artists),
                track_titles: album
                    .tracks
                    .map(|page| page.items.iter().map(|t| normalize(&t.name)).collect())
                    .unwrap_or_default(),
                ..Default::default()
            }
        }
        EntityType::Artist => {
            let artist: dto::Artist = parse(raw, "artist")?;
            SearchParameters {
                artist: Some(normalize(&artist.name)),
                ..Default::default()
            }
        }
    };

    Ok(params)
}

pub fn extract_isrc(raw: &Value, entity: EntityType) -> Option<String> {
    match entity {
        EntityType::Track => raw
            .pointer("/external_ids/isrc")
            .and_then(Value::as_str)
            .filter(|isrc| !isrc.is_empty())
            .map(String::from),
        _ => None,
    }
}

pub fn extract_image_url(raw: &Value, entity: EntityType) -> String {
    let url = match entity {
        EntityType::Track => raw.pointer("/album/images/0/url"),
        EntityType::Album | EntityType::Artist => raw.pointer("/images/0/url"),
    };

    url.and_then(Value::as_str).unwrap_or_default().to_string()
}

/// `external_urls.spotify` when it points at this entity, otherwise the first
/// nested `spotify` link naming the entity type.
pub fn extract_canonical_url(raw: &Value, entity: EntityType) -> Option<String> {
    raw.pointer("/external_urls/spotify")
        .and_then(Value::as_str)
        .filter(|link| link.contains(entity.as_str()))
        .or_else(|| find_first_str_with(raw, "spotify", entity.as_str()))
        .map(String::from)
}

/// First item of a search envelope, if the envelope reports any match.
pub fn first_search_item(response: Value, entity: EntityType) -> Result<Option<Value>, CatalogError> {
    let response: dto::SearchResponse = parse(&response, "search response")?;

    let page = match entity {
        EntityType::Track => response.tracks,
        EntityType::Album => response.albums,
        EntityType::Artist => response.artists,
    };

    Ok(page
        .filter(|page| page.total > 0)
        .and_then(|page| page.items.into_iter().next()))
}

pub fn to_display(raw: &Value, entity: EntityType) -> DisplayInfo {
    let join = |artists: &[dto::ArtistRef]| {
        artists.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", ")
    };

    match entity {
        EntityType::Track => parse::<dto::Track>(raw, "track")
            .map(|t| DisplayInfo {
                artists: join(&t.artists),
                title: t.name,
            })
            .unwrap_or_default(),
        EntityType::Album => parse::<dto::Album>(raw, "album")
            .map(|a| DisplayInfo {
                artists: join(&a.artists),
                title: a.name,
            })
            .unwrap_or_default(),
        EntityType::Artist => parse::<dto::Artist>(raw, "artist")
            .map(|a| DisplayInfo {
                title: a.name,
                artists: String::new(),
            })
            .unwrap_or_default(),
    }
}
