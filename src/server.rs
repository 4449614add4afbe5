use axum::{Extension, Router, routing::get};
use tokio::net::TcpListener;

use crate::{api, management::AuthSession};

/// Builds the callback router around a session.
///
/// The callback is mounted on the path of the configured redirect target.
pub fn router(session: AuthSession) -> Router {
    let callback_path = callback_path(&session.config().redirect_uri);
    Router::new()
        .route("/", get(api::index))
        .route(&callback_path, get(api::callback))
        .route("/health", get(api::health))
        .layer(Extension(session))
}

/// Serves the callback router on an already bound listener until the process ends.
pub async fn serve(listener: TcpListener, session: AuthSession) -> std::io::Result<()> {
    axum::serve(listener, router(session)).await
}

fn callback_path(redirect_uri: &str) -> String {
    reqwest::Url::parse(redirect_uri)
        .ok()
        .map(|url| url.path().to_string())
        .filter(|path| path != "/" && path != "/health")
        .unwrap_or_else(|| "/callback".to_string())
}
