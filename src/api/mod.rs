//! # API Module
//!
//! HTTP endpoints for the local callback server that backs the
//! browser-redirect authorization flow.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the authorization redirect. The implicit grant
//!   returns the access token in the URL fragment, which browsers never
//!   send to a server; the handler therefore first serves a small relay
//!   page that re-requests the endpoint with the fragment as the query
//!   string, and on that second request stores the raw artifact into the
//!   shared handshake slot for the waiting auth flow.
//! - [`health`] - Health check returning application status and version.
//!
//! Built on [Axum](https://docs.rs/axum); each endpoint is an async
//! function plugged into the router in [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
