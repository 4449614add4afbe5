use std::collections::HashMap;

use axum::{
    Extension,
    extract::Query,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{management::AuthSession, settle, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(session): Extension<AuthSession>,
) -> Response {
    if let Some(reason) = params.get("error") {
        warning!("Spotify declined the login: {}", reason);
        return Html("<h4>Login was declined.</h4>").into_response();
    }

    let Some(code) = params.get("code").filter(|c| !c.is_empty()) else {
        return Html("<h4>Missing authorization code.</h4>").into_response();
    };

    match settle("Code exchange", session.complete_login(code).await) {
        // drop the code from the address bar so a reload cannot replay it
        Some(_) => Redirect::to("/").into_response(),
        None => Html("<h4>Login failed.</h4>").into_response(),
    }
}
