//! Relay metadata resolution.
//!
//! Turns a relay address (`ws://` / `wss://`) into the relay's self-reported
//! metadata document: translate the scheme to HTTP(S), issue one GET with
//! `Accept: application/nostr+json`, decode the JSON body permissively.
//! Every failure comes back as a typed [`RelayInfoError`]; nothing is
//! retried or cached.

mod address;
mod client;
mod error;
mod metadata;

pub use address::metadata_url;
pub use client::{FetchOptions, RelayInfoClient, NOSTR_JSON_MIME};
pub use error::RelayInfoError;
pub use metadata::RelayMetadata;
