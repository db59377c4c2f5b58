//! # CLI Module
//!
//! User-facing command implementations for mixcli. Each command wires the
//! session layer, the Spotify integration, and console output together:
//!
//! - [`auth`] - Browser-redirect authorization flow (implicit grant)
//! - [`search`] - One-shot catalog search rendered as a table
//! - [`session`] - Interactive playlist-building loop over one live
//!   [`crate::session::Session`]
//! - [`logout`] - Removes the durable credential
//!
//! Presentation rules live here, not in the library layers: a failed search
//! is a warning and the session keeps going, an empty result set is an
//! empty-state message, a missing preview is an inline notice in the track
//! table, and a missing credential routes the user to `mixcli auth`.

mod auth;
mod logout;
mod search;
mod session;

pub use auth::auth;
pub use logout::logout;
pub use search::search;
pub use session::session;
