use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{spotify, types::AuthHandshake};

pub async fn auth(shared_state: Arc<Mutex<Option<AuthHandshake>>>) {
    spotify::auth::auth(shared_state).await;
}
