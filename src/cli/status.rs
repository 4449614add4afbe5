use std::path::Path;

use crate::{
    info,
    management::{AuthSession, AuthState},
    success, warning,
};

pub async fn status(session: AuthSession, storage_path: &Path) {
    match session.state().await {
        AuthState::Authenticated => success!("Logged in."),
        AuthState::PendingRedirect => {
            warning!("Login started but not finished. Run `earlywrapped login` again.")
        }
        AuthState::ExchangingCode => info!("Login is being completed."),
        AuthState::Unauthenticated => warning!("Not logged in. Run `earlywrapped login`."),
    }
    info!("Storage: {}", storage_path.display());
    info!("Callback: {}", session.config().redirect_uri);
}
