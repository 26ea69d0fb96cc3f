use std::sync::Arc;

use chrono::Utc;
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;

use crate::{
    management::TokenManager,
    types::{CurrentlyPlayingResponse, NowPlaying, NowPlayingTrack, SpotifyError},
};

/// Retrieves the currently playing track from the Spotify Web API.
///
/// Obtains a valid access token from the token manager first, so an
/// authentication failure surfaces before any upstream call is made. The
/// playback endpoint is then interpreted by status:
///
/// - `204 No Content` - nothing is playing
/// - other non-2xx - upstream failure
/// - `200` - track payload, projected via [`project_now_playing`]
///
/// # Arguments
///
/// * `manager` - Shared token manager guarding the cached access token
/// * `api_url` - Base URL of the Spotify Web API
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(NowPlaying)` - Normalized playback state
/// - `Err(SpotifyError)` - Token exchange or upstream failure
pub async fn get_currently_playing(
    manager: Arc<Mutex<TokenManager>>,
    api_url: &str,
) -> Result<NowPlaying, SpotifyError> {
    let token = {
        let mut manager = manager.lock().await;
        manager.ensure_valid_token().await?
    };

    let api_url = format!("{uri}/me/player/currently-playing", uri = api_url);

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| SpotifyError::Upstream(e.to_string()))?;

    if response.status() == StatusCode::NO_CONTENT {
        return Ok(NowPlaying::not_playing());
    }

    if !response.status().is_success() {
        return Err(SpotifyError::Upstream(format!(
            "currently-playing endpoint returned {}",
            response.status()
        )));
    }

    let body = response
        .json::<CurrentlyPlayingResponse>()
        .await
        .map_err(|e| SpotifyError::Upstream(e.to_string()))?;

    project_now_playing(body, Utc::now().timestamp_millis() as u64)
}

/// Projects an upstream track payload into the normalized response shape.
///
/// A paused player (`is_playing: false`) maps to the not-playing arm. For an
/// active player the first artist and the first album image are taken; a
/// payload claiming to play without a track item, artist, or album art does
/// not fit the published contract and is treated as an upstream failure.
pub fn project_now_playing(
    body: CurrentlyPlayingResponse,
    fetched_at: u64,
) -> Result<NowPlaying, SpotifyError> {
    if !body.is_playing {
        return Ok(NowPlaying::not_playing());
    }

    let item = body
        .item
        .ok_or_else(|| SpotifyError::Upstream("playing response without track item".to_string()))?;

    let artist = item
        .artists
        .first()
        .ok_or_else(|| SpotifyError::Upstream("track item without artists".to_string()))?
        .name
        .clone();

    let album_art = item
        .album
        .images
        .first()
        .ok_or_else(|| SpotifyError::Upstream("album without cover image".to_string()))?
        .url
        .clone();

    Ok(NowPlaying::Playing(NowPlayingTrack {
        is_playing: true,
        name: item.name,
        artist,
        album: item.album.name,
        album_art,
        progress: body.progress_ms.unwrap_or_default(),
        duration: item.duration_ms,
        timestamp: fetched_at,
    }))
}
