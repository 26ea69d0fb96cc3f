//! Configuration management for the now-playing proxy.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. All Spotify credentials and
//! endpoint URLs are environment-sourced; nothing is hardcoded or persisted.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file.
///
/// Looks for the file in the platform-specific local data directory under
/// `nowplayd/.env`, creating the directory structure if needed:
/// - Linux: `~/.local/share/nowplayd/.env`
/// - macOS: `~/Library/Application Support/nowplayd/.env`
/// - Windows: `%LOCALAPPDATA%/nowplayd/.env`
///
/// When no file exists there, falls back to a `.env` in the working
/// directory. Variables already exported in the environment always win, so
/// a deployment may skip the file entirely.
pub async fn load_env() {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("nowplayd/.env");
    if let Some(parent) = path.parent() {
        let _ = async_fs::create_dir_all(parent).await;
    }

    if dotenv::from_path(&path).is_err() {
        dotenv::dotenv().ok();
    }
}

/// Returns the address the API server binds to.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:3000"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify API client ID for authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable is
/// not set.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").expect("SPOTIFY_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the long-lived refresh token exchanged for access tokens.
///
/// Obtained once from an authorization grant against the Spotify account the
/// service reports on, then configured here for the lifetime of that grant.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REFRESH_TOKEN` environment variable is not set.
pub fn spotify_refresh_token() -> String {
    env::var("SPOTIFY_API_REFRESH_TOKEN").expect("SPOTIFY_API_REFRESH_TOKEN must be set")
}

/// Returns the Spotify Web API base URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Spotify OAuth token endpoint URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}
