use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    session::{CredentialStore, Session},
    spotify::search::{CatalogSearchClient, SearchError},
    utils, warning,
};

pub async fn search(query: String) {
    let mut session = Session::init(CredentialStore::new());

    if let Err(e) = session.resolve_credential(None).await {
        error!("Failed to resolve credential: {}", e);
    }
    if !session.is_logged_in() {
        error!("No credential found. Please run mixcli auth");
    }

    let Some(ticket) = session.begin_search(&query) else {
        warning!("Nothing to search for.");
        return;
    };
    let Some(credential) = session.credential().map(str::to_string) else {
        error!("No credential found. Please run mixcli auth");
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Searching catalog...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = CatalogSearchClient::new().search(&query, &credential).await;
    pb.finish_and_clear();

    match result {
        Ok(tracks) => {
            session.apply_search(ticket, tracks);
            if session.search_results().is_empty() {
                info!("No tracks found.");
            } else {
                let rows = utils::track_table_rows(session.search_results());
                println!("{}", Table::new(rows));
            }
        }
        Err(SearchError::Unauthorized) => {
            error!("Credential rejected by the catalog service. Please run mixcli auth");
        }
        Err(e) => {
            error!("Search failed: {}", e);
        }
    }
}
