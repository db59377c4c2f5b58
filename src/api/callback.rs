use std::sync::Arc;

use axum::{Extension, extract::RawQuery, response::Html};
use tokio::sync::Mutex;

use crate::{session, types::AuthHandshake};

/// Page served on the bare redirect. The provider puts the token in the
/// URL fragment, which the browser keeps to itself; this script replays
/// the request with the fragment as the query string so the handler can
/// capture it.
const RELAY_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<script>
  var fragment = window.location.hash.substring(1);
  if (fragment) {
    window.location.replace("/callback?" + fragment);
  } else {
    document.body.innerHTML = "<h4>Missing authorization response.</h4>";
  }
</script>
</body>
</html>"#;

pub async fn callback(
    RawQuery(query): RawQuery,
    Extension(shared_state): Extension<Arc<Mutex<Option<AuthHandshake>>>>,
) -> Html<&'static str> {
    let Some(artifact) = query.filter(|q| !q.is_empty()) else {
        return Html(RELAY_PAGE);
    };

    let mut state = shared_state.lock().await;
    let Some(ref mut handshake) = state.as_mut() else {
        return Html("<h4>No authorization in progress.</h4>");
    };

    // The redirect must carry the state value this attempt was seeded with
    if session::artifact_param(&artifact, "state") != Some(handshake.state.as_str()) {
        return Html("<h4>Authorization response carries an unexpected state value.</h4>");
    }

    handshake.artifact = Some(artifact);
    Html("<h2>Authorization received.</h2><p>Close the browser window.</p>")
}
