//! # TIDAL MCP Library
//!
//! This library exposes a TIDAL music account (favorites, playlists, search,
//! recommendations) through the Model Context Protocol (MCP). It consists of
//! three main components:
//!
//! ## Client Module
//!
//! The [`client`] module provides a typed HTTP client for the backing TIDAL
//! service, which wraps the vendor TIDAL client and owns the authenticated
//! session.
//!
//! ## Paging Module
//!
//! The [`paging`] module holds the aggregation core: a sequential pagination
//! helper, a concurrent per-seed fan-out collector with de-duplication, and
//! the request-limit clamp applied before every fetch.
//!
//! ## Server Module
//!
//! The [`server`] module implements an MCP server that exposes TIDAL
//! functionality as standardized tools that AI assistants can use.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcp_tidal::{TidalClient, TidalMcpServer};
//!
//! // Use the client directly
//! let client = TidalClient::new("http://127.0.0.1:5050".to_string());
//!
//! // Or create an MCP server backed by the same service
//! let server = TidalMcpServer::new("http://127.0.0.1:5050".to_string());
//! ```

pub mod client;
pub mod paging;
pub mod server;
pub mod service;

pub use client::TidalClient;
pub use server::TidalMcpServer;
