use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{Artist, ArtistTableRow, PlayHistory, Track, TrackTableRow};

/// Label shown when no top artist carries a genre.
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Label shown for a track without any credited artist.
pub const UNKNOWN_ARTIST: &str = "Unknown";

const MS_PER_MINUTE: f64 = 60_000.0;

pub fn generate_code_verifier(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// SHA-256 of the UTF-8 verifier, base64url encoded without padding.
pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

pub fn rank_tracks(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| TrackTableRow {
            rank: format!("{}.", i + 1),
            name: track.name.clone(),
            artist: track
                .artists
                .first()
                .map(|a| a.name.clone())
                .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
        })
        .collect()
}

pub fn rank_artists(artists: &[Artist]) -> Vec<ArtistTableRow> {
    artists
        .iter()
        .enumerate()
        .map(|(i, artist)| ArtistTableRow {
            rank: format!("{}.", i + 1),
            name: artist.name.clone(),
        })
        .collect()
}

/// First genre of the first artist that has any genre at all.
pub fn top_genre(artists: &[Artist]) -> String {
    artists
        .iter()
        .find_map(|artist| artist.genres.first())
        .cloned()
        .unwrap_or_else(|| UNKNOWN_GENRE.to_string())
}

/// Total play time in whole minutes, rounded half away from zero.
pub fn total_minutes(history: &[PlayHistory]) -> u64 {
    let total_ms: u64 = history.iter().map(|item| item.track.duration_ms).sum();
    (total_ms as f64 / MS_PER_MINUTE).round() as u64
}

/// Number of distinct primary artists, tracks without artists are skipped.
///
/// Artists without an id (local files) all count as one shared artist.
pub fn unique_artist_count(history: &[PlayHistory]) -> usize {
    history
        .iter()
        .filter_map(|item| item.track.artists.first())
        .map(|artist| artist.id.as_deref())
        .collect::<HashSet<_>>()
        .len()
}
