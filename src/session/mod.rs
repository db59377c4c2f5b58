//! Session state: the credential lifecycle, the transient search results,
//! and the playlist working set, owned by one explicit [`Session`] value.

mod credentials;
mod playlist;

pub use credentials::{ArtifactOutcome, CredentialError, CredentialStore};
pub use credentials::{artifact_param, parse_artifact};
pub use playlist::PlaylistSet;

use crate::types::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    AwaitingCredential,
    LoggedIn,
}

/// Handle for one issued search. Results may only be applied while the
/// ticket is still the most recently issued one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// One user session: resolves and holds the access credential, mediates
/// search-result application, and owns the playlist working set. Nothing in
/// here persists beyond the session except the credential, which lives in
/// the injected [`CredentialStore`] until logout.
pub struct Session {
    store: CredentialStore,
    state: SessionState,
    credential: Option<String>,
    results: Vec<Track>,
    playlist: PlaylistSet,
    search_seq: u64,
}

impl Session {
    pub fn init(store: CredentialStore) -> Self {
        Self {
            store,
            state: SessionState::LoggedOut,
            credential: None,
            results: Vec::new(),
            playlist: PlaylistSet::new(),
            search_seq: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state == SessionState::LoggedIn
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Resolves the active credential from a pending redirect artifact or
    /// from durable storage, and moves the session into `LoggedIn` when one
    /// is found.
    pub async fn resolve_credential(
        &mut self,
        artifact: Option<String>,
    ) -> Result<SessionState, CredentialError> {
        let mut artifact = artifact;
        if artifact.is_some() {
            self.state = SessionState::AwaitingCredential;
        }

        match self.store.resolve(&mut artifact).await {
            Ok(Some(credential)) => {
                self.credential = Some(credential);
                self.state = SessionState::LoggedIn;
            }
            Ok(None) => {
                self.state = SessionState::LoggedOut;
            }
            Err(e) => {
                self.state = SessionState::LoggedOut;
                return Err(e);
            }
        }

        Ok(self.state)
    }

    /// Starts a search. Returns `None` for a blank query, in which case no
    /// remote call should be made and prior results stay untouched. Issuing
    /// a new ticket supersedes any in-flight search.
    pub fn begin_search(&mut self, query: &str) -> Option<SearchTicket> {
        if query.trim().is_empty() {
            return None;
        }
        self.search_seq += 1;
        Some(SearchTicket(self.search_seq))
    }

    /// Applies results for an issued search. Results belonging to a
    /// superseded ticket are dropped (last-sent-wins) and `false` is
    /// returned.
    pub fn apply_search(&mut self, ticket: SearchTicket, tracks: Vec<Track>) -> bool {
        if ticket.0 != self.search_seq {
            return false;
        }
        self.results = tracks;
        true
    }

    pub fn search_results(&self) -> &[Track] {
        &self.results
    }

    pub fn add_to_playlist(&mut self, track: Track) -> bool {
        self.playlist.add(track)
    }

    pub fn remove_from_playlist(&mut self, id: &str) -> bool {
        self.playlist.remove(id)
    }

    pub fn playlist(&self) -> &[Track] {
        self.playlist.list()
    }

    pub fn clear_playlist(&mut self) {
        self.playlist.clear();
    }

    /// Drives the session back to `LoggedOut`: removes the durable
    /// credential and clears the search results and the playlist. The
    /// search sequence is bumped so an in-flight search cannot repopulate
    /// the cleared session.
    pub async fn logout(&mut self) -> Result<(), CredentialError> {
        self.store.clear().await?;
        self.credential = None;
        self.results.clear();
        self.playlist.clear();
        self.search_seq += 1;
        self.state = SessionState::LoggedOut;
        Ok(())
    }
}
