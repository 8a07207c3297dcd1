//! Inbound link parsing.
//!
//! Two stages: [`InboundLink::parse`] looks only at the text the user gave
//! us, so garbage is rejected before anything touches the network.
//! [`parse_entity`] reads entity type and id out of the URL we end up at
//! once short links have been followed.

use std::str::FromStr;

use reqwest::Url;

use crate::catalog::{EntityType, ItemId, Platform};
use crate::error::{Error, Result};

/// A user-supplied link, checked for shape but not yet followed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundLink {
    pub platform: Platform,
    /// Trimmed, https-normalized URL
    pub url: String,
}

impl InboundLink {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_input("No URL provided"));
        }

        let url = if let Some(rest) = trimmed.strip_prefix("http://") {
            format!("https://{}", rest)
        } else if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        };

        let parsed =
            Url::parse(&url).map_err(|e| Error::invalid_input(format!("{}: {}", trimmed, e)))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| Error::invalid_input(format!("{} has no host", trimmed)))?;
        let platform = Platform::from_host(host).ok_or_else(|| {
            Error::invalid_input(format!("{} is neither a Deezer nor a Spotify link", host))
        })?;

        Ok(Self { platform, url })
    }
}

/// Read entity type and id from a fully resolved catalog URL.
///
/// Accepts `https://www.deezer.com/{lang}/track/3135556` and
/// `https://open.spotify.com/{intl}/album/{id}` shapes; the last two path
/// segments are always type and id.
pub fn parse_entity(platform: Platform, url: &str) -> Result<(EntityType, ItemId)> {
    let unrecognized = || Error::UnrecognizedUrlShape {
        platform,
        url: url.to_string(),
    };

    let parsed = Url::parse(url).map_err(|_| unrecognized())?;
    let host = parsed.host_str().unwrap_or_default().to_ascii_lowercase();
    let host_matches = match platform {
        Platform::Deezer => host == "deezer.com" || host.ends_with(".deezer.com"),
        Platform::Spotify => host == "open.spotify.com",
    };
    if !host_matches {
        return Err(unrecognized());
    }

    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();
    let [.., kind, id] = segments.as_slice() else {
        return Err(unrecognized());
    };

    let entity = EntityType::from_str(kind).map_err(|e| Error::UnsupportedEntityType(e.0))?;

    let id = match platform {
        Platform::Deezer => ItemId::Numeric(id.parse().map_err(|_| unrecognized())?),
        Platform::Spotify if id.chars().all(|c| c.is_ascii_alphanumeric()) => {
            ItemId::Opaque(id.to_string())
        }
        Platform::Spotify => return Err(unrecognized()),
    };

    Ok((entity, id))
}
