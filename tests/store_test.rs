use earlywrapped::management::*;

#[tokio::test]
async fn test_file_store_missing_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("storage.json"));

    assert!(store.get(TOKEN_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_file_store_set_get_remove() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("storage.json");
    let store = FileStore::new(&path);

    store.set(TOKEN_KEY, "tok").await.unwrap();
    store.set(CODE_VERIFIER_KEY, "ver").await.unwrap();
    assert_eq!(store.get(TOKEN_KEY).await.unwrap().as_deref(), Some("tok"));

    store.remove(CODE_VERIFIER_KEY).await.unwrap();
    assert!(store.get(CODE_VERIFIER_KEY).await.unwrap().is_none());
    assert_eq!(store.get(TOKEN_KEY).await.unwrap().as_deref(), Some("tok"));

    // survives a fresh handle on the same file
    let reopened = FileStore::new(&path);
    assert_eq!(reopened.get(TOKEN_KEY).await.unwrap().as_deref(), Some("tok"));

    let raw = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["spotify_token"], "tok");
}

#[tokio::test]
async fn test_file_store_overwrites_value() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("storage.json"));

    store.set(CODE_VERIFIER_KEY, "first").await.unwrap();
    store.set(CODE_VERIFIER_KEY, "second").await.unwrap();

    assert_eq!(
        store.get(CODE_VERIFIER_KEY).await.unwrap().as_deref(),
        Some("second")
    );
}

#[tokio::test]
async fn test_file_store_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{ not json").unwrap();
    let store = FileStore::new(&path);

    assert!(store.get(TOKEN_KEY).await.is_err());
}

#[tokio::test]
async fn test_session_treats_corrupt_store_as_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{ not json").unwrap();
    let session = AuthSession::new(
        earlywrapped::config::Config::defaults(),
        FileStore::new(&path),
    );

    assert!(session.current_token().await.is_none());
    assert_eq!(session.state().await, AuthState::Unauthenticated);
}

#[tokio::test]
async fn test_memory_store_remove_missing_key() {
    let store = MemoryStore::new();
    store.remove(TOKEN_KEY).await.unwrap();
    assert!(store.get(TOKEN_KEY).await.unwrap().is_none());
}
