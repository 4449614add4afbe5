use std::collections::HashMap;

use earlywrapped::config::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn test_empty_environment_yields_defaults() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.client_id, DEFAULT_CLIENT_ID);
    assert_eq!(config.redirect_uri, DEFAULT_REDIRECT_URI);
    assert_eq!(
        config.scopes,
        vec!["user-top-read", "user-read-recently-played"]
    );
    assert_eq!(config.server_address.port(), 8888);
}

#[test]
fn test_defaults_match_empty_environment() {
    let from_env = Config::from_lookup(lookup(&[])).unwrap();
    let defaults = Config::defaults();
    assert_eq!(from_env.scopes, defaults.scopes);
    assert_eq!(from_env.api_url, defaults.api_url);
    assert_eq!(from_env.server_address, defaults.server_address);
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config = Config::from_lookup(lookup(&[("SPOTIFY_API_AUTH_CLIENT_ID", "   ")])).unwrap();
    assert_eq!(config.client_id, DEFAULT_CLIENT_ID);
}

#[test]
fn test_scopes_are_split_on_whitespace() {
    let config = Config::from_lookup(lookup(&[(
        "SPOTIFY_API_AUTH_SCOPE",
        " user-top-read   user-read-private ",
    )]))
    .unwrap();
    assert_eq!(config.scopes, vec!["user-top-read", "user-read-private"]);
}

#[test]
fn test_trailing_slash_is_trimmed_from_api_url() {
    let config =
        Config::from_lookup(lookup(&[("SPOTIFY_API_URL", "https://api.example.com/v1/")]))
            .unwrap();
    assert_eq!(config.api_url, "https://api.example.com/v1");
}

#[test]
fn test_relative_redirect_uri_is_rejected() {
    let err = Config::from_lookup(lookup(&[("SPOTIFY_API_REDIRECT_URI", "/callback")]))
        .unwrap_err();
    assert!(err.to_string().contains("SPOTIFY_API_REDIRECT_URI"));
}

#[test]
fn test_non_http_token_url_is_rejected() {
    let err = Config::from_lookup(lookup(&[("SPOTIFY_API_TOKEN_URL", "ftp://example.com/token")]))
        .unwrap_err();
    assert!(err.to_string().contains("SPOTIFY_API_TOKEN_URL"));
}

#[test]
fn test_bad_server_address_is_rejected() {
    let err = Config::from_lookup(lookup(&[("SERVER_ADDRESS", "localhost")])).unwrap_err();
    assert!(err.to_string().contains("SERVER_ADDRESS"));
}

#[test]
fn test_base_url_override_moves_all_endpoints() {
    let config = Config::defaults().with_base_url("http://127.0.0.1:9000/");
    assert_eq!(config.auth_url, "http://127.0.0.1:9000/authorize");
    assert_eq!(config.token_url, "http://127.0.0.1:9000/api/token");
    assert_eq!(config.api_url, "http://127.0.0.1:9000/v1");
}

#[test]
fn test_data_dir_ends_with_app_name() {
    assert!(data_dir().ends_with("earlywrapped"));
}

#[test]
fn test_root_redirect_path_is_rejected() {
    let err = Config::from_lookup(lookup(&[(
        "SPOTIFY_API_REDIRECT_URI",
        "http://127.0.0.1:8888/",
    )]))
    .unwrap_err();
    assert!(err.to_string().contains("reserved"));
}
