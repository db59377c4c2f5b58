use std::{io::Write, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    error, info,
    session::{CredentialStore, Session},
    spotify::search::{CatalogSearchClient, SearchError},
    success,
    types::Track,
    utils, warning,
};

/// Runs the interactive playlist-building loop over one live session.
///
/// One command per line, processed to completion before the next is read:
/// `search <query>`, `add <#>`, `remove <#|track-id>`, `results`, `list`,
/// `clear`, `logout`, `help`, `quit`.
pub async fn session() {
    let mut session = Session::init(CredentialStore::new());

    if let Err(e) = session.resolve_credential(None).await {
        error!("Failed to resolve credential: {}", e);
    }
    if !session.is_logged_in() {
        error!("No credential found. Please run mixcli auth");
    }

    let client = CatalogSearchClient::new();
    info!("Session started. Type 'help' for commands, 'quit' to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("mixcli> ");
        let _ = std::io::stdout().flush();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warning!("Failed to read input: {}", e);
                break;
            }
        };

        let input = line.trim();
        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "" => continue,
            "help" => print_help(),
            "search" => run_search(&mut session, &client, rest).await,
            "add" => add_track(&mut session, rest),
            "remove" => remove_track(&mut session, rest),
            "results" => print_results(&session),
            "list" => print_playlist(&session),
            "clear" => {
                session.clear_playlist();
                success!("Playlist cleared.");
            }
            "logout" => {
                match session.logout().await {
                    Ok(()) => success!("Logged out. Session cleared."),
                    Err(e) => warning!("Logout failed: {}", e),
                }
                break;
            }
            "quit" | "exit" => break,
            other => warning!("Unknown command '{}'. Type 'help'.", other),
        }
    }
}

async fn run_search(session: &mut Session, client: &CatalogSearchClient, query: &str) {
    // Blank query: nothing is sent and prior results stay untouched
    let Some(ticket) = session.begin_search(query) else {
        return;
    };
    let Some(credential) = session.credential().map(str::to_string) else {
        warning!("No credential in session. Please run mixcli auth");
        return;
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Searching catalog...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = client.search(query, &credential).await;
    pb.finish_and_clear();

    match result {
        Ok(tracks) => {
            if !session.apply_search(ticket, tracks) {
                return;
            }
            print_results(session);
        }
        Err(SearchError::Unauthorized) => {
            warning!("Credential rejected by the catalog service. Please run mixcli auth");
        }
        Err(e) => {
            warning!("Search failed: {}. Try again.", e);
        }
    }
}

fn add_track(session: &mut Session, arg: &str) {
    let Some(track) = pick(session.search_results(), arg).cloned() else {
        warning!("No search result '{}'. Use the # column of the last search.", arg);
        return;
    };

    let name = track.name.clone();
    if session.add_to_playlist(track) {
        success!("Added '{}' to the playlist.", name);
    } else {
        info!("'{}' is already in the playlist.", name);
    }
}

fn remove_track(session: &mut Session, arg: &str) {
    if arg.is_empty() {
        warning!("Usage: remove <#|track-id>");
        return;
    }

    // A number picks by playlist position, anything else is taken as an id
    let id = match pick(session.playlist(), arg) {
        Some(track) => track.id.clone(),
        None => arg.to_string(),
    };

    if session.remove_from_playlist(&id) {
        success!("Removed track from the playlist.");
    } else {
        info!("No such track in the playlist.");
    }
}

fn pick<'a>(tracks: &'a [Track], arg: &str) -> Option<&'a Track> {
    let position: usize = arg.parse().ok()?;
    position.checked_sub(1).and_then(|i| tracks.get(i))
}

fn print_results(session: &Session) {
    if session.search_results().is_empty() {
        info!("No tracks found.");
        return;
    }
    let rows = utils::track_table_rows(session.search_results());
    println!("{}", Table::new(rows));
}

fn print_playlist(session: &Session) {
    if session.playlist().is_empty() {
        info!("Add some songs to your playlist!");
        return;
    }
    let rows = utils::track_table_rows(session.playlist());
    println!("{}", Table::new(rows));
}

fn print_help() {
    println!("  search <query>     search the catalog for tracks");
    println!("  add <#>            add a search result to the playlist");
    println!("  remove <#|id>      remove a track from the playlist");
    println!("  results            show the last search results");
    println!("  list               show the playlist");
    println!("  clear              empty the playlist");
    println!("  logout             clear the session and the stored credential");
    println!("  quit               leave the session");
}
