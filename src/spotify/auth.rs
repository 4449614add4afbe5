use reqwest::Client;
use serde_json::Value;

use crate::{config::Config, debug, error::AuthError};

/// Builds the Spotify authorization URL for the PKCE flow.
///
/// Parameters are emitted in a fixed order: `response_type`, `client_id`,
/// `scope`, `redirect_uri`, `code_challenge_method`, `code_challenge`. The
/// scopes are joined with `%20` and the redirect target is percent-encoded.
///
/// # Example
///
/// ```ignore
/// let url = authorize_url(&config, &challenge);
/// // https://accounts.spotify.com/authorize?response_type=code&client_id=...
/// ```
pub fn authorize_url(config: &Config, code_challenge: &str) -> String {
    let scope = config
        .scopes
        .iter()
        .map(|s| urlencoding::encode(s))
        .collect::<Vec<_>>()
        .join("%20");

    format!(
        "{auth_url}?response_type=code&client_id={client_id}&scope={scope}&redirect_uri={redirect_uri}&code_challenge_method=S256&code_challenge={code_challenge}",
        auth_url = config.auth_url,
        client_id = urlencoding::encode(&config.client_id),
        scope = scope,
        redirect_uri = urlencoding::encode(&config.redirect_uri),
        code_challenge = code_challenge,
    )
}

/// Exchanges an authorization code plus the stored verifier for an access token.
///
/// Issues exactly one form-encoded POST to the token endpoint. Only the
/// `access_token` field of the JSON answer is consumed.
///
/// # Errors
///
/// - [`AuthError::Http`] for transport failures or an undecodable body
/// - [`AuthError::Status`] for any non-2xx answer
/// - [`AuthError::MalformedResponse`] when `access_token` is missing or empty
pub async fn exchange_code(config: &Config, code: &str, verifier: &str) -> Result<String, AuthError> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .form(&[
            ("client_id", config.client_id.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("code_verifier", verifier),
        ])
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(AuthError::Status { status, body });
    }

    let json: Value = res.json().await?;
    debug!("Token endpoint answered with fields: {:?}", field_names(&json));

    match json["access_token"].as_str() {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(AuthError::MalformedResponse),
    }
}

fn field_names(json: &Value) -> Vec<&str> {
    json.as_object()
        .map(|o| o.keys().map(String::as_str).collect())
        .unwrap_or_default()
}
