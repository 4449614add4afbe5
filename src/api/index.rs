use axum::{Extension, response::Html};

use crate::management::{AuthSession, AuthState};

pub async fn index(Extension(session): Extension<AuthSession>) -> Html<&'static str> {
    match session.state().await {
        AuthState::Authenticated => {
            Html("<h2>Authentication successful.</h2><p>Close this window and return to the terminal.</p>")
        }
        AuthState::ExchangingCode => Html("<h4>Finishing login...</h4>"),
        AuthState::PendingRedirect | AuthState::Unauthenticated => {
            Html("<h4>Not logged in.</h4><p>Run <code>earlywrapped login</code>.</p>")
        }
    }
}
