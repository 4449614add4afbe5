//! # API Module
//!
//! HTTP endpoints of the local server that receives the Spotify redirect.
//!
//! ## Endpoints
//!
//! - [`callback`] - `GET /callback`, the redirect target. Hands the
//!   authorization code to the [`crate::management::AuthSession`] and, on
//!   success, redirects to `/` so the code no longer sits in the URL.
//! - [`index`] - `GET /`, a small page reporting the login state.
//! - [`health`] - `GET /health`, status and version as JSON.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use earlywrapped::api::{callback, health, index};
//!
//! let app = Router::new()
//!     .route("/", get(index))
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;
mod index;

pub use callback::callback;
pub use health::health;
pub use index::index;
