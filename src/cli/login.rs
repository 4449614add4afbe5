use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::net::TcpListener;

use crate::{
    cli, error, info,
    management::{AuthSession, AuthState},
    server, success, warning,
};

const LOGIN_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs the PKCE login and renders the stats once a token is stored.
///
/// 1. Generates verifier and challenge, storing the verifier
/// 2. Starts the local callback server on the configured address
/// 3. Opens the authorization URL in the default browser
/// 4. Waits until the callback has stored a token
/// 5. Renders the stats right away
///
/// An existing token short-circuits the flow; it stays valid until the
/// storage file is removed.
pub async fn login(session: AuthSession) {
    if session.state().await == AuthState::Authenticated {
        info!("Already logged in. Delete the storage file to log in again.");
        cli::stats(session, None).await;
        return;
    }

    let listener = match TcpListener::bind(session.config().server_address).await {
        Ok(listener) => listener,
        Err(e) => error!(
            "Cannot bind callback server to {}. Err: {}",
            session.config().server_address,
            e
        ),
    };

    let auth_url = match session.begin_login().await {
        Ok(url) => url,
        Err(e) => error!("Cannot start login. Err: {}", e),
    };

    let server_session = session.clone();
    tokio::spawn(async move {
        if let Err(e) = server::serve(listener, server_session).await {
            warning!("Callback server stopped. Err: {}", e);
        }
    });

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Waiting for Spotify login...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let token = session.wait_for_token(LOGIN_TIMEOUT).await;
    pb.finish_and_clear();

    match token {
        Some(_) => {
            success!("Authentication successful!");
            cli::stats(session, None).await;
        }
        None => error!("Authentication failed or timed out."),
    }
}
