use std::sync::Arc;

use earlywrapped::config::Config;
use earlywrapped::management::*;
use earlywrapped::server;
use reqwest::{StatusCode, redirect::Policy};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn start(token_server: &MockServer) -> (String, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let config = Config::defaults().with_base_url(&token_server.uri());
    let session = AuthSession::with_shared_store(config, store.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server::serve(listener, session));

    (format!("http://{addr}"), store)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_callback_exchanges_code_and_strips_it() {
    let token_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "BQC-token"
        })))
        .expect(1)
        .mount(&token_server)
        .await;

    let (base, store) = start(&token_server).await;
    store.set(CODE_VERIFIER_KEY, "verifier").await.unwrap();

    let res = client()
        .get(format!("{base}/callback?code=abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()["location"], "/");
    assert_eq!(store.get(TOKEN_KEY).await.unwrap().as_deref(), Some("BQC-token"));

    // a reload of the old callback URL does not hit the token endpoint again
    let res = client()
        .get(format!("{base}/callback?code=abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let page = client().get(format!("{base}/")).send().await.unwrap();
    assert!(page.text().await.unwrap().contains("Authentication successful"));
}

#[tokio::test]
async fn test_callback_failure_renders_page() {
    let token_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&token_server)
        .await;

    let (base, store) = start(&token_server).await;
    store.set(CODE_VERIFIER_KEY, "verifier").await.unwrap();

    let res = client()
        .get(format!("{base}/callback?code=abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("Login failed"));
    assert!(store.get(TOKEN_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_callback_declined_and_missing_code() {
    let token_server = MockServer::start().await;
    let (base, _store) = start(&token_server).await;

    let declined = client()
        .get(format!("{base}/callback?error=access_denied"))
        .send()
        .await
        .unwrap();
    assert!(declined.text().await.unwrap().contains("declined"));

    let missing = client()
        .get(format!("{base}/callback"))
        .send()
        .await
        .unwrap();
    assert!(missing.text().await.unwrap().contains("Missing authorization code"));
}

#[tokio::test]
async fn test_health_reports_login_state() {
    let token_server = MockServer::start().await;
    let (base, store) = start(&token_server).await;

    let json: serde_json::Value = client()
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["service"], "earlywrapped");
    assert_eq!(json["authenticated"], false);

    store.set(TOKEN_KEY, "tok").await.unwrap();
    let json: serde_json::Value = client()
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["authenticated"], true);
}
