//! The four listening statistics.
//!
//! Each operation performs one request, transforms the answer and fills its
//! own output region. Failures are settled on the spot: logged, never
//! retried, and the region keeps its previous content.

use crate::{
    config::Config,
    settle, spotify,
    types::{ArtistTableRow, TrackTableRow},
    utils,
    view::{Region, StatsView},
};

/// Top five tracks, each paired with its primary artist.
pub async fn top_tracks(config: &Config, token: &str, list: &mut Region<Vec<TrackTableRow>>) {
    let result = spotify::stats::get_top_tracks(config, token).await;
    if let Some(tracks) = settle("Top Tracks", result) {
        list.fill(utils::rank_tracks(&tracks));
    }
}

/// Top five artists plus the genre label derived from them.
pub async fn top_artists(
    config: &Config,
    token: &str,
    list: &mut Region<Vec<ArtistTableRow>>,
    genre: &mut Region<String>,
) {
    let result = spotify::stats::get_top_artists(config, token).await;
    if let Some(artists) = settle("Top Artists", result) {
        list.fill(utils::rank_artists(&artists));
        genre.fill(utils::top_genre(&artists));
    }
}

/// Minutes listened over the last fifty plays.
pub async fn listening_stats(config: &Config, token: &str, minutes: &mut Region<u64>) {
    let result = spotify::stats::get_recently_played(config, token).await;
    if let Some(history) = settle("Listening Stats", result) {
        minutes.fill(utils::total_minutes(&history));
    }
}

/// Distinct primary artists over the last fifty plays.
pub async fn unique_artists(config: &Config, token: &str, count: &mut Region<usize>) {
    let result = spotify::stats::get_recently_played(config, token).await;
    if let Some(history) = settle("Unique Artists", result) {
        count.fill(utils::unique_artist_count(&history));
    }
}

/// Runs all four operations concurrently against one view.
///
/// The operations neither wait for nor know about each other; each writes
/// only the regions it owns, whenever its own response arrives.
pub async fn load_stats(config: &Config, token: &str, view: &mut StatsView) {
    let StatsView {
        top_tracks: tracks,
        top_artists: artists,
        top_genre: genre,
        total_minutes: minutes,
        unique_artists: count,
    } = view;

    tokio::join!(
        top_tracks(config, token, tracks),
        top_artists(config, token, artists, genre),
        listening_stats(config, token, minutes),
        unique_artists(config, token, count),
    );
}
