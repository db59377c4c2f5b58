use mixcli::session::{ArtifactOutcome, CredentialStore, artifact_param, parse_artifact};

fn temp_store() -> (tempfile::TempDir, CredentialStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = CredentialStore::at(dir.path().join("credential"));
    (dir, store)
}

#[test]
fn test_parse_artifact_with_token() {
    let outcome = parse_artifact("access_token=ABC123&token_type=Bearer");
    assert_eq!(outcome, ArtifactOutcome::Token("ABC123".to_string()));

    // Position of the parameter does not matter
    let outcome = parse_artifact("token_type=Bearer&access_token=ABC123&expires_in=3600");
    assert_eq!(outcome, ArtifactOutcome::Token("ABC123".to_string()));
}

#[test]
fn test_parse_artifact_without_token() {
    assert_eq!(parse_artifact(""), ArtifactOutcome::Absent);
    assert_eq!(parse_artifact("   "), ArtifactOutcome::Absent);
    assert_eq!(
        parse_artifact("token_type=Bearer&expires_in=3600"),
        ArtifactOutcome::Absent
    );
}

#[test]
fn test_parse_artifact_malformed() {
    // Segment without a key/value separator
    assert_eq!(parse_artifact("access_token"), ArtifactOutcome::Malformed);
    assert_eq!(
        parse_artifact("access_token=ABC123&garbage"),
        ArtifactOutcome::Malformed
    );

    // Token parameter with an empty value
    assert_eq!(
        parse_artifact("access_token=&token_type=Bearer"),
        ArtifactOutcome::Malformed
    );
}

#[test]
fn test_artifact_param_lookup() {
    let raw = "access_token=ABC123&state=xyzzy&token_type=Bearer";
    assert_eq!(artifact_param(raw, "state"), Some("xyzzy"));
    assert_eq!(artifact_param(raw, "token_type"), Some("Bearer"));
    assert_eq!(artifact_param(raw, "missing"), None);
}

#[tokio::test]
async fn test_resolve_round_trip() {
    let (_dir, store) = temp_store();

    // First resolution extracts the token from the artifact and persists it
    let mut artifact = Some("access_token=ABC123&token_type=Bearer".to_string());
    let resolved = store.resolve(&mut artifact).await.unwrap();
    assert_eq!(resolved.as_deref(), Some("ABC123"));

    // The artifact is consumed so it cannot be re-processed
    assert!(artifact.is_none());

    // Second resolution with no artifact reads durable storage
    let mut artifact = None;
    let resolved = store.resolve(&mut artifact).await.unwrap();
    assert_eq!(resolved.as_deref(), Some("ABC123"));
}

#[tokio::test]
async fn test_resolve_ignores_extra_parameters() {
    let (_dir, store) = temp_store();

    let mut artifact = Some("access_token=XYZ&expires_in=3600".to_string());
    let resolved = store.resolve(&mut artifact).await.unwrap();
    assert_eq!(resolved.as_deref(), Some("XYZ"));
}

#[tokio::test]
async fn test_resolve_without_artifact_or_storage() {
    let (_dir, store) = temp_store();

    let mut artifact = None;
    let resolved = store.resolve(&mut artifact).await.unwrap();
    assert!(resolved.is_none());
}

#[tokio::test]
async fn test_resolve_tokenless_artifact_falls_back_to_storage() {
    let (_dir, store) = temp_store();
    store.persist("STORED").await.unwrap();

    let mut artifact = Some("token_type=Bearer".to_string());
    let resolved = store.resolve(&mut artifact).await.unwrap();
    assert_eq!(resolved.as_deref(), Some("STORED"));
    assert!(artifact.is_none());
}

#[tokio::test]
async fn test_resolve_malformed_artifact_fails_and_stores_nothing() {
    let (_dir, store) = temp_store();

    let mut artifact = Some("access_token".to_string());
    assert!(store.resolve(&mut artifact).await.is_err());

    // Nothing was written to durable storage
    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_clear_is_idempotent() {
    let (_dir, store) = temp_store();
    store.persist("ABC123").await.unwrap();

    store.clear().await.unwrap();
    assert!(store.load().await.unwrap().is_none());

    // Clearing again succeeds even though the file is gone
    store.clear().await.unwrap();
}
