use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::management::{AuthSession, AuthState};

pub async fn health(Extension(session): Extension<AuthSession>) -> Json<Value> {
    let authenticated = session.state().await == AuthState::Authenticated;
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "authenticated": authenticated,
    }))
}
