//! # TIDAL Backing-Service HTTP Client
//!
//! This module provides a typed HTTP client for the backing TIDAL service,
//! which wraps the vendor TIDAL client behind a small REST surface: favorites,
//! track radio, playlists and search.
//!
//! ## Modules
//!
//! - [`client`] - Main HTTP client implementation with all API methods
//! - [`types`] - Type definitions for API requests and responses
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcp_tidal::client::TidalClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = TidalClient::new("http://localhost:5050".to_string());
//!
//! // Check the session held by the backing service
//! let status = client.auth_status().await?;
//! println!("authenticated: {}", status.authenticated);
//!
//! // Fetch up to 50 favorites in one request
//! let tracks = client.favorite_tracks(50).await?;
//! println!("got {} tracks", tracks.len());
//! # Ok(())
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod client;
pub mod types;

pub use client::TidalClient;
pub use types::*;
