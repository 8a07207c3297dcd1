//! Test utilities and fixtures.
//!
//! Raw catalog payloads trimmed down from real API responses. Tests that
//! need a variation clone one and patch fields through `Value` indexing:
//!
//! ```ignore
//! let mut raw = test_utils::deezer_track();
//! raw["title"] = "Get Lucky (feat. Pharrell Williams)".into();
//! ```

use serde_json::{Value, json};

// ============================================================================
// Deezer
// ============================================================================

/// `/track/3135556`
pub fn deezer_track() -> Value {
    json!({
        "id": 3135556,
        "readable": true,
        "title": "One More Time",
        "title_short": "One More Time",
        "isrc": "GBDUW0000059",
        "link": "https://www.deezer.com/track/3135556",
        "duration": 320,
        "track_position": 1,
        "rank": 869012,
        "contributors": [
            {"id": 27, "name": "Daft Punk", "role": "Main"}
        ],
        "artist": {
            "id": 27,
            "name": "Daft Punk",
            "link": "https://www.deezer.com/artist/27",
            "type": "artist"
        },
        "album": {
            "id": 302127,
            "title": "Discovery",
            "link": "https://www.deezer.com/album/302127",
            "cover_big": "https://e-cdns-images.dzcdn.net/images/cover/discovery/500x500.jpg",
            "type": "album"
        },
        "type": "track"
    })
}

/// `/album/302127`
pub fn deezer_album() -> Value {
    json!({
        "id": 302127,
        "title": "Discovery",
        "upc": "724384960650",
        "link": "https://www.deezer.com/album/302127",
        "cover_big": "https://e-cdns-images.dzcdn.net/images/cover/discovery/500x500.jpg",
        "nb_tracks": 2,
        "contributors": [
            {"id": 27, "name": "Daft Punk", "role": "Main"}
        ],
        "artist": {"id": 27, "name": "Daft Punk", "type": "artist"},
        "tracks": {
            "data": [
                {"id": 3135556, "title": "One More Time", "duration": 320},
                {"id": 3135557, "title": "Aerodynamic", "duration": 212}
            ]
        },
        "type": "album"
    })
}

/// `/artist/27`
pub fn deezer_artist() -> Value {
    json!({
        "id": 27,
        "name": "Daft Punk",
        "link": "https://www.deezer.com/artist/27",
        "picture_big": "https://e-cdns-images.dzcdn.net/images/artist/daftpunk/500x500.jpg",
        "nb_album": 29,
        "type": "artist"
    })
}

// ============================================================================
// Spotify
// ============================================================================

/// `/tracks/0DiWol3AO6WpXZgp0goxAV`
pub fn spotify_track() -> Value {
    json!({
        "id": "0DiWol3AO6WpXZgp0goxAV",
        "name": "One More Time",
        "type": "track",
        "duration_ms": 320357,
        "explicit": false,
        "external_ids": {"isrc": "GBDUW0000059"},
        "external_urls": {
            "spotify": "https://open.spotify.com/track/0DiWol3AO6WpXZgp0goxAV"
        },
        "artists": [
            {
                "id": "4tZwfgrHOc3mvqYlEYSvVi",
                "name": "Daft Punk",
                "external_urls": {
                    "spotify": "https://open.spotify.com/artist/4tZwfgrHOc3mvqYlEYSvVi"
                }
            }
        ],
        "album": {
            "id": "2noRn2Aes5aoNVsU6iWThc",
            "name": "Discovery",
            "album_type": "album",
            "images": [
                {"url": "https://i.scdn.co/image/discovery-640", "width": 640, "height": 640},
                {"url": "https://i.scdn.co/image/discovery-300", "width": 300, "height": 300}
            ],
            "external_urls": {
                "spotify": "https://open.spotify.com/album/2noRn2Aes5aoNVsU6iWThc"
            }
        }
    })
}

/// `/albums/2noRn2Aes5aoNVsU6iWThc`
pub fn spotify_album() -> Value {
    json!({
        "id": "2noRn2Aes5aoNVsU6iWThc",
        "name": "Discovery",
        "type": "album",
        "artists": [{"id": "4tZwfgrHOc3mvqYlEYSvVi", "name": "Daft Punk"}],
        "images": [
            {"url": "https://i.scdn.co/image/discovery-640", "width": 640, "height": 640}
        ],
        "external_ids": {"upc": "724384960650"},
        "external_urls": {
            "spotify": "https://open.spotify.com/album/2noRn2Aes5aoNVsU6iWThc"
        },
        "tracks": {
            "items": [
                {"id": "0DiWol3AO6WpXZgp0goxAV", "name": "One More Time"},
                {"id": "2VEZx7NWsZ1D0eJ4uv5Fym", "name": "Aerodynamic"}
            ],
            "total": 2
        }
    })
}

/// `/artists/4tZwfgrHOc3mvqYlEYSvVi`
pub fn spotify_artist() -> Value {
    json!({
        "id": "4tZwfgrHOc3mvqYlEYSvVi",
        "name": "Daft Punk",
        "type": "artist",
        "images": [
            {"url": "https://i.scdn.co/image/daftpunk-640", "width": 640, "height": 640}
        ],
        "external_urls": {
            "spotify": "https://open.spotify.com/artist/4tZwfgrHOc3mvqYlEYSvVi"
        }
    })
}

/// `/search?q=isrc:GBDUW0000059&type=track`
pub fn spotify_track_search() -> Value {
    json!({
        "tracks": {
            "href": "https://api.spotify.com/v1/search?query=isrc%3AGBDUW0000059&type=track",
            "items": [spotify_track()],
            "limit": 1,
            "offset": 0,
            "total": 1
        }
    })
}
