use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tokio::sync::Mutex;

use mixcli::{api, types::AuthHandshake};

type Handshake = Arc<Mutex<Option<AuthHandshake>>>;

async fn serve_callback(state: &str) -> (String, Handshake) {
    let shared: Handshake = Arc::new(Mutex::new(Some(AuthHandshake {
        state: state.to_string(),
        artifact: None,
    })));

    let app = Router::new().route(
        "/callback",
        get(api::callback).layer(Extension(Arc::clone(&shared))),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/callback", addr), shared)
}

#[tokio::test]
async fn test_bare_redirect_serves_the_fragment_relay_page() {
    let (url, shared) = serve_callback("xyzzy").await;

    let body = reqwest::get(&url).await.unwrap().text().await.unwrap();

    // The page must replay the fragment as a query string
    assert!(body.contains("window.location.replace"));
    assert!(shared.lock().await.as_ref().unwrap().artifact.is_none());
}

#[tokio::test]
async fn test_replayed_fragment_is_captured_as_artifact() {
    let (url, shared) = serve_callback("xyzzy").await;

    let full = format!("{}?access_token=ABC123&token_type=Bearer&state=xyzzy", url);
    reqwest::get(&full).await.unwrap();

    let captured = shared.lock().await.as_ref().unwrap().artifact.clone();
    assert_eq!(
        captured.as_deref(),
        Some("access_token=ABC123&token_type=Bearer&state=xyzzy")
    );
}

#[tokio::test]
async fn test_state_mismatch_is_rejected() {
    let (url, shared) = serve_callback("xyzzy").await;

    let full = format!("{}?access_token=ABC123&state=evil", url);
    reqwest::get(&full).await.unwrap();

    assert!(shared.lock().await.as_ref().unwrap().artifact.is_none());
}
