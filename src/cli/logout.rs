use crate::{error, session::CredentialStore, success};

pub async fn logout() {
    match CredentialStore::new().clear().await {
        Ok(()) => success!("Logged out. Stored credential removed."),
        Err(e) => error!("Failed to remove credential: {}", e),
    }
}
