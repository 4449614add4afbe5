use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    management::AuthSession,
    stats, success,
    view::{self, StatsView},
    warning,
};

/// Fetches and prints the listening stats, optionally exporting them.
///
/// Without a stored token nothing is fetched; the user is pointed at
/// `earlywrapped login` instead. Individual failed statistics show up as
/// `-` and are logged, the rest still render.
pub async fn stats(session: AuthSession, export: Option<PathBuf>) {
    let Some(token) = session.current_token().await else {
        warning!("No token found. Run `earlywrapped login` first.");
        return;
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching listening stats...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let mut stats_view = StatsView::new();
    stats::load_stats(session.config(), &token, &mut stats_view).await;
    pb.finish_and_clear();

    println!("{}", stats_view.render(true));

    if let Some(path) = export {
        match view::export(&stats_view, &path).await {
            Ok(path) => success!("Saved to {}", path.display()),
            Err(e) => warning!("Export failed. Err: {}", e),
        }
    }
}
