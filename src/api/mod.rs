//! # API Module
//!
//! This module provides the HTTP endpoints served by the nowplayd proxy.
//!
//! ## Overview
//!
//! The API module is the web interface layer of the service. It exposes:
//!
//! - **Playback State**: The normalized currently-playing payload consumed
//!   by widget-style clients.
//! - **Health Monitoring**: A health check endpoint for system monitoring
//!   and deployment verification.
//!
//! ## Endpoints
//!
//! ### Playback
//!
//! - [`now_playing`] - Returns the currently playing track of the configured
//!   Spotify account, reshaped into a compact JSON body. Any upstream or
//!   authentication failure collapses to a generic 500 response; the cause
//!   is only logged server-side.
//!
//! ### Monitoring
//!
//! - [`health`] - Returns application status and version information for
//!   monitoring systems and load balancers.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is implemented as an async function that plugs into Axum's
//! routing system; shared request state arrives through an `Extension`
//! layer.
//!
//! ## Related Modules
//!
//! - [`crate::spotify`] - Spotify API integration
//! - [`crate::server`] - Router construction and shared state

mod health;
mod now_playing;

pub use health::health;
pub use now_playing::now_playing;
