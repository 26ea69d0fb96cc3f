use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpotifyError {
    #[error("token refresh failed: {0}")]
    Auth(String),

    #[error("currently-playing request failed: {0}")]
    Upstream(String),
}

#[derive(Debug, Clone)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.obtained_at + self.expires_in
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
    pub scope: Option<String>,
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentlyPlayingResponse {
    pub is_playing: bool,
    pub progress_ms: Option<u64>,
    pub item: Option<TrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    pub name: String,
    pub duration_ms: u64,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
    pub images: Vec<AlbumImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumImage {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum NowPlaying {
    NotPlaying(NowPlayingIdle),
    Playing(NowPlayingTrack),
}

impl NowPlaying {
    pub fn not_playing() -> Self {
        NowPlaying::NotPlaying(NowPlayingIdle { is_playing: false })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlayingIdle {
    pub is_playing: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlayingTrack {
    pub is_playing: bool,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub album_art: String,
    pub progress: u64,
    pub duration: u64,
    pub timestamp: u64,
}
