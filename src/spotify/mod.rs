//! # Spotify Integration Module
//!
//! This module is the integration layer between the proxy and the Spotify
//! Web API. It owns all upstream HTTP communication and the interpretation
//! of upstream responses; nothing above it ever sees a raw Spotify payload.
//!
//! ## Overview
//!
//! A single player-state concern lives here:
//!
//! - [`player`] - Fetches the currently playing track and projects it into
//!   the normalized response shape served to clients.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers (api)
//!          ↓
//! Spotify Integration Layer
//!     ├── Token acquisition (management::TokenManager)
//!     └── Player state (currently-playing endpoint)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me/player/currently-playing` - Playback state of the configured
//!   account. A `204` means nothing is playing; a `200` carries the track
//!   payload.
//! - `POST /api/token` - Access-token refresh, performed through
//!   [`crate::management::TokenManager`] before each upstream call.
//!
//! ## Error Handling
//!
//! Token-exchange failures surface as [`SpotifyError::Auth`] and
//! currently-playing failures as [`SpotifyError::Upstream`]; both are typed
//! in [`crate::types`] and collapse to a generic error response at the HTTP
//! layer. Transient upstream failures are not retried; a single failed call
//! surfaces immediately.
//!
//! [`SpotifyError::Auth`]: crate::types::SpotifyError::Auth
//! [`SpotifyError::Upstream`]: crate::types::SpotifyError::Upstream

pub mod player;
