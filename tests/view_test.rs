use earlywrapped::error::ExportError;
use earlywrapped::types::{ArtistTableRow, TrackTableRow};
use earlywrapped::view::*;

fn filled_view() -> StatsView {
    let mut view = StatsView::new();
    view.top_tracks.fill(vec![TrackTableRow {
        rank: "1.".to_string(),
        name: "Alpha".to_string(),
        artist: "Artist a".to_string(),
    }]);
    view.top_artists.fill(vec![ArtistTableRow {
        rank: "1.".to_string(),
        name: "First".to_string(),
    }]);
    view.top_genre.fill("lofi".to_string());
    view.total_minutes.fill(2);
    view.unique_artists.fill(3);
    view
}

#[test]
fn test_region_fill_replaces_content() {
    let mut region = Region::new("topGenre");
    assert!(region.is_empty());
    assert_eq!(region.name(), "topGenre");

    region.fill("jazz".to_string());
    region.fill("lofi".to_string());
    assert_eq!(region.get().map(String::as_str), Some("lofi"));
}

#[test]
fn test_new_view_is_empty() {
    let view = StatsView::new();
    assert!(view.is_empty());
    assert_eq!(view.top_tracks.name(), "topTracks");
    assert_eq!(view.unique_artists.name(), "uniqueArtists");
}

#[test]
fn test_render_plain_contains_every_region() {
    let rendered = filled_view().render(false);

    assert!(rendered.contains("Top Tracks"));
    assert!(rendered.contains("Alpha"));
    assert!(rendered.contains("Artist a"));
    assert!(rendered.contains("First"));
    assert!(rendered.contains("Top Genre: lofi"));
    assert!(rendered.contains("Minutes Listened: 2"));
    assert!(rendered.contains("Unique Artists: 3"));
    assert!(!rendered.contains('\u{1b}'));
}

#[test]
fn test_render_empty_regions_as_placeholder() {
    let rendered = StatsView::new().render(false);
    assert!(rendered.contains("Top Genre: -"));
    assert!(rendered.contains("Minutes Listened: -"));
}

#[tokio::test]
async fn test_export_writes_rendered_view() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join(EXPORT_FILE_NAME);

    let written = export(&filled_view(), &path).await.unwrap();

    assert_eq!(written, path);
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("EarlyWrapped\nGenerated at "));
    assert!(content.contains("Top Genre: lofi"));
}

#[tokio::test]
async fn test_export_refuses_empty_view() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(EXPORT_FILE_NAME);

    let err = export(&StatsView::new(), &path).await.unwrap_err();

    assert!(matches!(err, ExportError::EmptyView));
    assert!(!path.exists());
}
