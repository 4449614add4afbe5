//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API that EarlyWrapped needs.
//!
//! ## Modules
//!
//! - [`auth`] - Authorization URL construction and the PKCE code-for-token
//!   exchange against the accounts service
//! - [`stats`] - Bearer-authenticated reads of the user's top tracks, top
//!   artists and recently played items
//!
//! ## API Coverage
//!
//! - `GET /authorize` (browser redirect, built here, never requested)
//! - `POST /api/token` - authorization code grant
//! - `GET /me/top/tracks?limit=5&time_range=long_term`
//! - `GET /me/top/artists?limit=5&time_range=long_term`
//! - `GET /me/player/recently-played?limit=50`
//!
//! Every function builds its own request from the [`crate::config::Config`]
//! it is handed. There is no shared connection, no caching and no retry:
//! a failed call is reported once and left to the caller.
//!
//! ## Error Types
//!
//! - [`crate::error::AuthError`] for the token exchange
//! - [`crate::error::ApiError`] for resource reads, non-2xx answers included

pub mod auth;
pub mod stats;
