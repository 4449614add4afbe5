//! Configuration management for EarlyWrapped.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Every value has a default so a bare
//! install talks to the public Spotify endpoints with the public client id.
//!
//! The resolved values are collected in a [`Config`] that is handed to the
//! authentication session and the API functions explicitly.
//!
//! Precedence:
//! 1. Environment variables
//! 2. `.env` file in the local data directory
//! 3. Built-in defaults

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr};

use crate::error::ConfigError;

pub const DEFAULT_CLIENT_ID: &str = "5aab9ba401374e7292e3ee291e498067";
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SCOPE: &str = "user-top-read user-read-recently-played";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";

/// Returns the application directory inside the platform local data dir.
///
/// - Linux: `~/.local/share/earlywrapped`
/// - macOS: `~/Library/Application Support/earlywrapped`
/// - Windows: `%LOCALAPPDATA%/earlywrapped`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("earlywrapped");
    path
}

/// Loads environment variables from `.env` in the local data directory.
///
/// Creates the directory if needed. A missing `.env` file is fine, the
/// defaults apply then; a file that exists but cannot be parsed is an error.
/// Variables already present in the process environment are not overridden.
pub async fn load_env() -> Result<(), ConfigError> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir).await?;

    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| ConfigError::Dotenv(e.to_string()))
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub server_address: SocketAddr,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// Reads `SPOTIFY_API_AUTH_CLIENT_ID`, `SPOTIFY_API_REDIRECT_URI`,
    /// `SPOTIFY_API_AUTH_SCOPE`, `SPOTIFY_API_AUTH_URL`,
    /// `SPOTIFY_API_TOKEN_URL`, `SPOTIFY_API_URL` and `SERVER_ADDRESS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let redirect_uri = var("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI);
        validate_http_url("SPOTIFY_API_REDIRECT_URI", &redirect_uri)?;
        validate_redirect_path(&redirect_uri)?;

        let scopes: Vec<String> = var("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let address = var("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS);
        let server_address =
            SocketAddr::from_str(&address).map_err(|e| ConfigError::Invalid {
                name: "SERVER_ADDRESS",
                detail: e.to_string(),
            })?;

        let config = Self {
            client_id: var("SPOTIFY_API_AUTH_CLIENT_ID", DEFAULT_CLIENT_ID),
            redirect_uri,
            scopes,
            auth_url: var("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: var("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: var("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            server_address,
        };
        config.validate()?;
        Ok(config)
    }

    /// Configuration with every value at its default.
    pub fn defaults() -> Self {
        Self {
            client_id: DEFAULT_CLIENT_ID.to_string(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            scopes: DEFAULT_SCOPE.split(' ').map(str::to_string).collect(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            server_address: SocketAddr::from(([127, 0, 0, 1], 8888)),
        }
    }

    /// Points every Spotify endpoint at another base URL, keeping the
    /// Spotify path layout (`/authorize`, `/api/token`, `/v1`).
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.auth_url = format!("{base}/authorize");
        self.token_url = format!("{base}/api/token");
        self.api_url = format!("{base}/v1");
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.client_id.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid {
                name: "SPOTIFY_API_AUTH_CLIENT_ID",
                detail: "must not contain whitespace".to_string(),
            });
        }
        if self.scopes.is_empty() {
            return Err(ConfigError::Invalid {
                name: "SPOTIFY_API_AUTH_SCOPE",
                detail: "at least one scope is required".to_string(),
            });
        }
        validate_http_url("SPOTIFY_API_AUTH_URL", &self.auth_url)?;
        validate_http_url("SPOTIFY_API_TOKEN_URL", &self.token_url)?;
        validate_http_url("SPOTIFY_API_URL", &self.api_url)
    }
}

fn validate_http_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
    match reqwest::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        Ok(url) => Err(ConfigError::Invalid {
            name,
            detail: format!("unsupported URL `{url}`"),
        }),
        Err(e) => Err(ConfigError::Invalid {
            name,
            detail: e.to_string(),
        }),
    }
}

fn validate_redirect_path(redirect_uri: &str) -> Result<(), ConfigError> {
    let path = reqwest::Url::parse(redirect_uri)
        .map(|url| url.path().to_string())
        .unwrap_or_default();
    if path == "/" || path == "/health" {
        return Err(ConfigError::Invalid {
            name: "SPOTIFY_API_REDIRECT_URI",
            detail: format!("path `{path}` is reserved, use e.g. `/callback`"),
        });
    }
    Ok(())
}
