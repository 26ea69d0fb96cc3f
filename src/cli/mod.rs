//! # CLI Module
//!
//! This module provides the command-line interface layer for nowplayd. The
//! surface is intentionally small: the service has exactly one operational
//! mode, serving the now-playing proxy.
//!
//! ## Commands
//!
//! - [`serve`] - Builds the Spotify credentials and shared request state
//!   from configuration and runs the HTTP server until terminated.
//!
//! Shell-completion generation is handled directly in `main` via
//! `clap_complete`.

mod serve;

pub use serve::serve;
