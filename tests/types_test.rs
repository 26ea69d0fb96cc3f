use chrono::Utc;
use nowplayd::spotify::player::project_now_playing;
use nowplayd::types::{
    AlbumImage, CurrentlyPlayingResponse, NowPlaying, SpotifyError, Token, TokenResponse,
    TrackAlbum, TrackArtist, TrackItem,
};
use serde_json::json;

fn unix_now() -> u64 {
    Utc::now().timestamp() as u64
}

// Helper function to create a playing payload with several artists and images
fn playing_response() -> CurrentlyPlayingResponse {
    CurrentlyPlayingResponse {
        is_playing: true,
        progress_ms: Some(41_500),
        item: Some(TrackItem {
            name: "Cut To The Feeling".to_string(),
            duration_ms: 207_959,
            artists: vec![
                TrackArtist {
                    id: Some("6sFIWsNpZYqfjUpaCgueju".to_string()),
                    name: "Carly Rae Jepsen".to_string(),
                },
                TrackArtist {
                    id: Some("0LyfQWJT6nXafLPZqxe9Of".to_string()),
                    name: "Featured Guest".to_string(),
                },
            ],
            album: TrackAlbum {
                name: "Cut To The Feeling / Single".to_string(),
                images: vec![
                    AlbumImage {
                        url: "https://i.scdn.co/image/large".to_string(),
                        width: Some(640),
                        height: Some(640),
                    },
                    AlbumImage {
                        url: "https://i.scdn.co/image/small".to_string(),
                        width: Some(300),
                        height: Some(300),
                    },
                ],
            },
        }),
    }
}

#[test]
fn test_fresh_token_is_not_expired() {
    let token = Token {
        access_token: "token".to_string(),
        expires_in: 3600,
        obtained_at: unix_now(),
    };

    assert!(!token.is_expired());
}

#[test]
fn test_stale_token_is_expired() {
    let token = Token {
        access_token: "token".to_string(),
        expires_in: 3600,
        obtained_at: unix_now() - 7200,
    };

    assert!(token.is_expired());
}

#[test]
fn test_token_expires_at_end_of_lifetime() {
    // Exactly at obtained_at + expires_in the token no longer counts as valid
    let token = Token {
        access_token: "token".to_string(),
        expires_in: 3600,
        obtained_at: unix_now() - 3600,
    };

    assert!(token.is_expired());
}

#[test]
fn test_token_response_parsing() {
    let body = r#"{
        "access_token": "BQDWdpZ8",
        "token_type": "Bearer",
        "expires_in": 3600,
        "scope": "user-read-currently-playing"
    }"#;

    let parsed: TokenResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.access_token, "BQDWdpZ8");
    assert_eq!(parsed.expires_in, 3600);
    assert_eq!(parsed.scope.as_deref(), Some("user-read-currently-playing"));
    assert_eq!(parsed.token_type.as_deref(), Some("Bearer"));
}

#[test]
fn test_token_response_rejects_missing_access_token() {
    // A 200 from the token endpoint without an access token is malformed
    let body = r#"{"token_type": "Bearer", "expires_in": 3600}"#;

    assert!(serde_json::from_str::<TokenResponse>(body).is_err());
}

#[test]
fn test_currently_playing_response_parsing() {
    // Trimmed-down but real-shaped upstream payload, including fields the
    // service does not consume
    let body = r#"{
        "timestamp": 1700000000000,
        "progress_ms": 41500,
        "is_playing": true,
        "currently_playing_type": "track",
        "item": {
            "id": "11dFghVXANMlKmJXsNCbNl",
            "name": "Cut To The Feeling",
            "duration_ms": 207959,
            "artists": [
                {"id": "6sFIWsNpZYqfjUpaCgueju", "name": "Carly Rae Jepsen"}
            ],
            "album": {
                "name": "Cut To The Feeling",
                "images": [
                    {"url": "https://i.scdn.co/image/large", "width": 640, "height": 640}
                ]
            }
        }
    }"#;

    let parsed: CurrentlyPlayingResponse = serde_json::from_str(body).unwrap();
    assert!(parsed.is_playing);
    assert_eq!(parsed.progress_ms, Some(41_500));

    let item = parsed.item.unwrap();
    assert_eq!(item.name, "Cut To The Feeling");
    assert_eq!(item.duration_ms, 207_959);
    assert_eq!(item.artists[0].name, "Carly Rae Jepsen");
    assert_eq!(item.album.name, "Cut To The Feeling");
    assert_eq!(item.album.images[0].url, "https://i.scdn.co/image/large");
}

#[test]
fn test_currently_playing_response_parsing_without_item() {
    // Between tracks the payload may carry neither item nor progress
    let body = r#"{"timestamp": 1700000000000, "progress_ms": null, "is_playing": false, "item": null}"#;

    let parsed: CurrentlyPlayingResponse = serde_json::from_str(body).unwrap();
    assert!(!parsed.is_playing);
    assert_eq!(parsed.progress_ms, None);
    assert!(parsed.item.is_none());
}

#[test]
fn test_project_takes_first_artist_and_first_image() {
    let projected = project_now_playing(playing_response(), 1_700_000_000_000).unwrap();

    match projected {
        NowPlaying::Playing(track) => {
            assert!(track.is_playing);
            assert_eq!(track.name, "Cut To The Feeling");
            assert_eq!(track.artist, "Carly Rae Jepsen");
            assert_eq!(track.album, "Cut To The Feeling / Single");
            assert_eq!(track.album_art, "https://i.scdn.co/image/large");
            assert_eq!(track.progress, 41_500);
            assert_eq!(track.duration, 207_959);
            assert_eq!(track.timestamp, 1_700_000_000_000);
        }
        NowPlaying::NotPlaying(_) => panic!("expected the playing arm"),
    }
}

#[test]
fn test_project_paused_playback_is_not_playing() {
    // A paused player keeps its item in the payload but is not "playing"
    let mut response = playing_response();
    response.is_playing = false;

    let projected = project_now_playing(response, 1_700_000_000_000).unwrap();
    assert!(matches!(projected, NowPlaying::NotPlaying(_)));
}

#[test]
fn test_project_null_progress_defaults_to_zero() {
    let mut response = playing_response();
    response.progress_ms = None;

    match project_now_playing(response, 1_700_000_000_000).unwrap() {
        NowPlaying::Playing(track) => assert_eq!(track.progress, 0),
        NowPlaying::NotPlaying(_) => panic!("expected the playing arm"),
    }
}

#[test]
fn test_project_playing_without_item_is_upstream_error() {
    let mut response = playing_response();
    response.item = None;

    let result = project_now_playing(response, 1_700_000_000_000);
    assert!(matches!(result, Err(SpotifyError::Upstream(_))));
}

#[test]
fn test_project_playing_without_artists_is_upstream_error() {
    let mut response = playing_response();
    response.item.as_mut().unwrap().artists.clear();

    let result = project_now_playing(response, 1_700_000_000_000);
    assert!(matches!(result, Err(SpotifyError::Upstream(_))));
}

#[test]
fn test_not_playing_wire_shape() {
    let value = serde_json::to_value(NowPlaying::not_playing()).unwrap();

    assert_eq!(value, json!({"isPlaying": false}));
}

#[test]
fn test_playing_wire_shape() {
    let projected = project_now_playing(playing_response(), 1_700_000_000_000).unwrap();
    let value = serde_json::to_value(projected).unwrap();

    assert_eq!(
        value,
        json!({
            "isPlaying": true,
            "name": "Cut To The Feeling",
            "artist": "Carly Rae Jepsen",
            "album": "Cut To The Feeling / Single",
            "albumArt": "https://i.scdn.co/image/large",
            "progress": 41_500,
            "duration": 207_959,
            "timestamp": 1_700_000_000_000u64
        })
    );
}
