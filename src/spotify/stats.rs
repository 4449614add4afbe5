use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    debug,
    error::ApiError,
    types::{Artist, Paging, PlayHistory, Track},
};

pub const TOP_ITEMS_LIMIT: u32 = 5;
pub const TOP_ITEMS_TIME_RANGE: &str = "long_term";
pub const RECENTLY_PLAYED_LIMIT: u32 = 50;

/// Retrieves the user's five long-term top tracks.
///
/// # Example
///
/// ```ignore
/// let tracks = get_top_tracks(&config, &token).await?;
/// ```
pub async fn get_top_tracks(config: &Config, token: &str) -> Result<Vec<Track>, ApiError> {
    let api_url = format!(
        "{uri}/me/top/tracks?limit={limit}&time_range={range}",
        uri = config.api_url,
        limit = TOP_ITEMS_LIMIT,
        range = TOP_ITEMS_TIME_RANGE,
    );
    let page: Paging<Track> = get_json("top tracks", &api_url, token).await?;
    Ok(page.items)
}

/// Retrieves the user's five long-term top artists, genres included.
pub async fn get_top_artists(config: &Config, token: &str) -> Result<Vec<Artist>, ApiError> {
    let api_url = format!(
        "{uri}/me/top/artists?limit={limit}&time_range={range}",
        uri = config.api_url,
        limit = TOP_ITEMS_LIMIT,
        range = TOP_ITEMS_TIME_RANGE,
    );
    let page: Paging<Artist> = get_json("top artists", &api_url, token).await?;
    Ok(page.items)
}

/// Retrieves the last fifty played items.
///
/// Every call is a request of its own; callers that need the history twice
/// pay for two round trips.
pub async fn get_recently_played(
    config: &Config,
    token: &str,
) -> Result<Vec<PlayHistory>, ApiError> {
    let api_url = format!(
        "{uri}/me/player/recently-played?limit={limit}",
        uri = config.api_url,
        limit = RECENTLY_PLAYED_LIMIT,
    );
    let page: Paging<PlayHistory> = get_json("recently played", &api_url, token).await?;
    Ok(page.items)
}

async fn get_json<T: DeserializeOwned>(
    endpoint: &'static str,
    api_url: &str,
    token: &str,
) -> Result<T, ApiError> {
    let http = |source| ApiError::Http { endpoint, source };

    let client = Client::new();
    let body = client
        .get(api_url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(http)?
        .error_for_status()
        .map_err(http)?
        .text()
        .await
        .map_err(http)?;

    debug!("{} API: {}", endpoint, body);

    serde_json::from_str(&body).map_err(|source| ApiError::Decode { endpoint, source })
}
