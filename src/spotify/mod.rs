//! # Spotify Integration Module
//!
//! Integration layer between mixcli and the Spotify Web API. It covers the
//! two remote concerns the application has: obtaining an access credential
//! through the OAuth implicit grant, and searching the track catalog.
//!
//! ## Submodules
//!
//! - [`auth`] - Browser-redirect authorization flow: constructs the
//!   authorization URL, launches the browser, waits for the redirect
//!   artifact captured by the local callback server, and resolves the
//!   credential out of it.
//! - [`search`] - [`search::CatalogSearchClient`], a thin client for the
//!   `/search` endpoint returning track descriptors in the service's own
//!   ranking.
//!
//! ## Authorization strategy
//!
//! The implicit grant returns the access token in the redirect URL's
//! fragment. Fragments never reach an HTTP server, so the local callback
//! endpoint first serves a relay page whose script re-requests the callback
//! with the fragment as the query string; that second request carries the
//! artifact the credential is extracted from. A random `state` value is
//! sent with the authorization request and verified on the way back.
//!
//! There is no token refresh and no expiry bookkeeping: a credential is
//! valid until the service rejects it, at which point the user re-runs
//! `mixcli auth`.
//!
//! ## Error handling
//!
//! Search failures are typed ([`search::SearchError`]) and never retried
//! here; callers surface them and the user retries the action. A rejected
//! credential (HTTP 401) gets its own variant so the CLI can point the
//! user back to `mixcli auth`.

pub mod auth;
pub mod search;
