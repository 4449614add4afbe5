//! Output regions and their rendering.
//!
//! Every statistic owns one named [`Region`]. A region is only written when
//! its operation succeeds, so a failed fetch leaves whatever was shown
//! before untouched. [`StatsView`] groups the regions into the capture area
//! that is printed to the terminal and written out by [`export`].

use std::path::{Path, PathBuf};

use chrono::Local;
use colored::Colorize;
use tabled::{Table, Tabled, settings::Style};

use crate::{
    error::ExportError,
    types::{ArtistTableRow, TrackTableRow},
};

pub const EXPORT_FILE_NAME: &str = "early-wrapped.txt";

const PLACEHOLDER: &str = "-";

/// A named output target holding the last successfully rendered content.
#[derive(Debug, Clone)]
pub struct Region<T> {
    name: &'static str,
    content: Option<T>,
}

impl<T> Region<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            content: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Replaces the content of the region.
    pub fn fill(&mut self, content: T) {
        self.content = Some(content);
    }

    pub fn get(&self) -> Option<&T> {
        self.content.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

/// The capture region: every statistic EarlyWrapped shows.
#[derive(Debug, Clone)]
pub struct StatsView {
    pub top_tracks: Region<Vec<TrackTableRow>>,
    pub top_artists: Region<Vec<ArtistTableRow>>,
    pub top_genre: Region<String>,
    pub total_minutes: Region<u64>,
    pub unique_artists: Region<usize>,
}

impl Default for StatsView {
    fn default() -> Self {
        Self {
            top_tracks: Region::new("topTracks"),
            top_artists: Region::new("topArtist"),
            top_genre: Region::new("topGenre"),
            total_minutes: Region::new("totalMinutes"),
            unique_artists: Region::new("uniqueArtists"),
        }
    }
}

impl StatsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.top_tracks.is_empty()
            && self.top_artists.is_empty()
            && self.top_genre.is_empty()
            && self.total_minutes.is_empty()
            && self.unique_artists.is_empty()
    }

    /// Renders the view as text; `styled` adds terminal colors.
    pub fn render(&self, styled: bool) -> String {
        let heading = |s: &str| {
            if styled {
                s.bold().to_string()
            } else {
                s.to_string()
            }
        };
        let value = |s: String| {
            if styled { s.green().to_string() } else { s }
        };

        let mut out = String::new();
        out.push_str(&heading("Top Tracks"));
        out.push('\n');
        out.push_str(&render_rows(self.top_tracks.get()));
        out.push('\n');
        out.push_str(&heading("Top Artists"));
        out.push('\n');
        out.push_str(&render_rows(self.top_artists.get()));
        out.push('\n');

        let labels = [
            ("Top Genre", self.top_genre.get().cloned()),
            (
                "Minutes Listened",
                self.total_minutes.get().map(|m| m.to_string()),
            ),
            (
                "Unique Artists",
                self.unique_artists.get().map(|c| c.to_string()),
            ),
        ];
        for (label, content) in labels {
            out.push_str(&format!(
                "{}: {}\n",
                heading(label),
                value(content.unwrap_or_else(|| PLACEHOLDER.to_string()))
            ));
        }

        out
    }
}

fn render_rows<R: Tabled>(rows: Option<&Vec<R>>) -> String {
    match rows {
        Some(rows) if !rows.is_empty() => {
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            format!("{table}\n")
        }
        _ => format!("{PLACEHOLDER}\n"),
    }
}

/// Writes the capture region to `path` as plain text.
///
/// Refuses to write when nothing has been rendered at all.
pub async fn export(view: &StatsView, path: &Path) -> Result<PathBuf, ExportError> {
    if view.is_empty() {
        return Err(ExportError::EmptyView);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        async_fs::create_dir_all(parent).await?;
    }

    let content = format!(
        "EarlyWrapped\nGenerated at {}\n\n{}",
        Local::now().format("%Y-%m-%d %H:%M"),
        view.render(false)
    );
    async_fs::write(path, content).await?;

    Ok(path.to_path_buf())
}
