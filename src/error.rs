use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot prepare config directory: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot load .env file: {0}")]
    Dotenv(String),

    #[error("{name} is invalid: {detail}")]
    Invalid { name: &'static str, detail: String },
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Storage file is corrupt: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("No code verifier stored. Start the login again.")]
    MissingVerifier,

    #[error("Token request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Token endpoint answered with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Token response has no access_token field")]
    MalformedResponse,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request to {endpoint} failed: {source}")]
    Http {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Cannot decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Nothing has been rendered yet")]
    EmptyView,

    #[error("Cannot write export file: {0}")]
    Io(#[from] io::Error),
}
