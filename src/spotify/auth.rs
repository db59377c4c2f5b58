use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    config, error, server::start_api_server, session::CredentialStore, success,
    types::AuthHandshake, utils, warning,
};

/// Runs the browser-redirect authorization flow (OAuth implicit grant).
///
/// The flow:
/// 1. **State setup**: generates a random `state` value to verify the
///    redirect belongs to this attempt
/// 2. **Server start**: launches the local HTTP server that captures the
///    redirect artifact
/// 3. **Browser launch**: opens the authorization URL with
///    `response_type=token` in the default browser
/// 4. **User authorization**: the user grants access in their browser and
///    the provider redirects back with the token in the URL fragment
/// 5. **Artifact wait**: polls the shared handshake slot until the callback
///    handler has stored a state-verified artifact
/// 6. **Resolution**: extracts the access token from the artifact and
///    persists it for future invocations
///
/// # Arguments
///
/// * `shared_state` - Thread-safe handshake slot shared with the callback
///   handler
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - A timeout, a `state` mismatch, or an artifact without a token
///   terminates the program with an error message
pub async fn auth(shared_state: Arc<Mutex<Option<AuthHandshake>>>) {
    let state_value = utils::generate_state();

    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&redirect_uri={redirect_uri}&response_type=token&state={state}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        state = state_value,
    );

    // Seed the handshake before the redirect can come back
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(AuthHandshake {
            state: state_value.clone(),
            artifact: None,
        });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let artifact = wait_for_artifact(shared_state).await;

    match artifact {
        Some(raw) => {
            // The callback handler only stores artifacts whose state matched
            let store = CredentialStore::new();
            let mut pending = Some(raw);
            match store.resolve(&mut pending).await {
                Ok(Some(_)) => success!("Authentication successful!"),
                Ok(None) => error!("Authorization response did not carry an access token."),
                Err(e) => error!("Failed to save credential: {}", e),
            }
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Waits for the callback handler to deliver the redirect artifact.
///
/// Polls the shared handshake slot once per second with a 60-second
/// timeout; runs concurrently with the HTTP server that populates it.
async fn wait_for_artifact(shared_state: Arc<Mutex<Option<AuthHandshake>>>) -> Option<String> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(handshake) = lock.as_ref() {
            if let Some(artifact) = &handshake.artifact {
                return Some(artifact.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
