use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    /// `null` for artists of local files.
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    pub duration_ms: u64,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayHistory {
    pub track: Track,
    pub played_at: Option<String>,
}

/// Envelope shared by the top-items and recently-played endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub rank: String,
    #[tabled(rename = "Track")]
    pub name: String,
    #[tabled(rename = "Artist")]
    pub artist: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ArtistTableRow {
    #[tabled(rename = "#")]
    pub rank: String,
    #[tabled(rename = "Artist")]
    pub name: String,
}
