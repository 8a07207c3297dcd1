//! Adapter layer: read Deezer payloads into domain values
//!
//! This is the ONLY place where Deezer DTOs are converted to domain types.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::dto;
use crate::catalog::domain::{CatalogError, DisplayInfo, EntityType, ItemId, SearchParameters};
use crate::catalog::normalize::{normalize, normalize_title};
use crate::catalog::tree::find_first_str_with;

fn parse<T: DeserializeOwned>(raw: &Value, what: &str) -> Result<T, CatalogError> {
    T::deserialize(raw).map_err(|e| CatalogError::InvalidResponse(format!("Deezer {}: {}", what, e)))
}

pub fn extract_id(raw: &Value) -> Result<ItemId, CatalogError> {
    raw.get("id")
        .and_then(Value::as_u64)
        .map(ItemId::Numeric)
        .ok_or_else(|| CatalogError::InvalidResponse("Deezer payload has no numeric id".to_string()))
}

/// Build comparison values from a Deezer payload
pub fn to_search_parameters(raw: &Value, entity: EntityType) -> Result<SearchParameters, CatalogError> {
    let params = match entity {
        EntityType::Track => {
            let track: dto::Track = parse(raw, "track")?;
            SearchParameters {
                track: Some(normalize_title(&track.title)),
                artist: Some(normalize(&track.artist.name)),
                album: track.album.map(|a| normalize(&a.title)),
                duration_secs: Some(track.duration).filter(|d| *d > 0),
                track_titles: vec![],
            }
        }
        EntityType::Album => {
            let album: dto::Album = parse(raw, "album")?;
            SearchParameters {
                album: Some(normalize(&album.title)),
                artist: album.artist.map(|a| normalize(&a.name)),
                track_titles: album
                    .tracks
                    .map(|list| list.data.iter().map(|t| normalize(&t.title)).collect())
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
            .get("isrc")
            .and_then(Value::as_str)
            .filter(|isrc| !isrc.is_empty())
            .map(String::from),
        _ => None,
    }
}

pub fn extract_image_url(raw: &Value, entity: EntityType) -> String {
    let url = match entity {
        EntityType::Track => raw.pointer("/album/cover_big"),
        EntityType::Album => raw.get("cover_big"),
        EntityType::Artist => raw.get("picture_big"),
    };

    url.and_then(Value::as_str).unwrap_or_default().to_string()
}

/// `link` on the entity itself, or the first nested `link` naming the entity type
pub fn extract_canonical_url(raw: &Value, entity: EntityType) -> Option<String> {
    raw.get("link")
        .and_then(Value::as_str)
        .filter(|link| link.contains(entity.as_str()))
        .or_else(|| find_first_str_with(raw, "link", entity.as_str()))
        .map(String::from)
}

/// Display labels; all contributors are listed when the payload has them
pub fn to_display(raw: &Value, entity: EntityType) -> DisplayInfo {
    let join = |names: &[dto::ArtistRef], fallback: Option<&dto::ArtistRef>| {
        if names.is_empty() {
            fallback.map(|a| a.name.clone()).unwrap_or_default()
        } else {
            names.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", ")
        }
    };

    match entity {
        EntityType::Track => parse::<dto::Track>(raw, "track")
            .map(|t| DisplayInfo {
                artists: join(&t.contributors, Some(&t.artist)),
                title: t.title,
            })
            .unwrap_or_default(),
        EntityType::Album => parse::<dto::Album>(raw, "album")
            .map(|a| DisplayInfo {
                artists: join(&a.contributors, a.artist.as_ref()),
                title: a.title,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn test_track_search_parameters() {
        let params = to_search_parameters(&test_utils::deezer_track(), EntityType::Track).unwrap();

        assert_eq!(params.track.as_deref(), Some("one more time"));
        assert_eq!(params.artist.as_deref(), Some("daft punk"));
        assert_eq!(params.album.as_deref(), Some("discovery"));
        assert_eq!(params.duration_secs, Some(320));
    }

    #[test]
    fn test_featuring_qualifier_is_stripped() {
        let mut raw = test_utils::deezer_track();
        raw["title"] = "Get Lucky (feat. Pharrell Williams)".into();

        let params = to_search_parameters(&raw, EntityType::Track).unwrap();
        assert_eq!(params.track.as_deref(), Some("get lucky"));
    }

    #[test]
    fn test_album_search_parameters_include_track_titles() {
        let params = to_search_parameters(&test_utils::deezer_album(), EntityType::Album).unwrap();

        assert_eq!(params.album.as_deref(), Some("discovery"));
        assert_eq!(params.artist.as_deref(), Some("daft punk"));
        assert_eq!(params.track_titles, vec!["one more time", "aerodynamic"]);
    }

    #[test]
    fn test_artist_search_parameters() {
        let params = to_search_parameters(&test_utils::deezer_artist(), EntityType::Artist).unwrap();
        assert_eq!(params.artist.as_deref(), Some("daft punk"));
        assert!(params.track.is_none());
    }

    #[test]
    fn test_malformed_payload_is_invalid_response() {
        let result = to_search_parameters(&serde_json::json!({"id": 1}), EntityType::Track);
        assert!(matches!(result, Err(CatalogError::InvalidResponse(_))));
    }

    #[test]
    fn test_image_urls_per_entity() {
        assert_eq!(
            extract_image_url(&test_utils::deezer_track(), EntityType::Track),
            "https://e-cdns-images.dzcdn.net/images/cover/discovery/500x500.jpg"
        );
        assert_eq!(
            extract_image_url(&test_utils::deezer_artist(), EntityType::Artist),
            "https://e-cdns-images.dzcdn.net/images/artist/daftpunk/500x500.jpg"
        );
        assert_eq!(extract_image_url(&serde_json::json!({}), EntityType::Album), "");
    }

    #[test]
    fn test_canonical_url_and_isrc() {
        let raw = test_utils::deezer_track();
        assert_eq!(
            extract_canonical_url(&raw, EntityType::Track).as_deref(),
            Some("https://www.deezer.com/track/3135556")
        );
        assert_eq!(extract_isrc(&raw, EntityType::Track).as_deref(), Some("GBDUW0000059"));
        assert_eq!(extract_isrc(&raw, EntityType::Album), None);
        assert_eq!(extract_id(&raw).unwrap(), ItemId::Numeric(3135556));
    }

    #[test]
    fn test_display_joins_contributors() {
        let mut raw = test_utils::deezer_track();
        raw["contributors"] = serde_json::json!([{"name": "Daft Punk"}, {"name": "Romanthony"}]);

        let display = to_display(&raw, EntityType::Track);
        assert_eq!(display.title, "One More Time");
        assert_eq!(display.artists, "Daft Punk, Romanthony");
    }
}
