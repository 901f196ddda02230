use std::time::Duration;

use reqwest::header;
use tracing::debug;

use crate::address::metadata_url;
use crate::error::RelayInfoError;
use crate::metadata::RelayMetadata;

/// MIME type a relay expects before it serves its metadata document.
pub const NOSTR_JSON_MIME: &str = "application/nostr+json";

/// Knobs for a fetch. The defaults preserve the permissive behavior
/// existing clients ship: no timeout beyond the transport default, and no
/// status-code inspection.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,

    /// Turn non-2xx responses into [`RelayInfoError::Status`] instead of
    /// attempting to decode their body.
    pub reject_error_status: bool,
}

/// Fetches relay metadata documents.
///
/// Holds a shared connection pool plus the fetch options; cloning is cheap
/// and calls are fully independent, so one client can serve any number of
/// concurrent fetches. Dropping the future returned by
/// [`fetch_metadata`](Self::fetch_metadata) aborts the in-flight request.
#[derive(Debug, Clone, Default)]
pub struct RelayInfoClient {
    http: reqwest::Client,
    options: FetchOptions,
}

impl RelayInfoClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FetchOptions) -> Self {
        Self {
            http: reqwest::Client::new(),
            options,
        }
    }

    /// Reuse an existing connection pool.
    pub fn with_http_client(http: reqwest::Client, options: FetchOptions) -> Self {
        Self { http, options }
    }

    /// Resolve `relay` to its metadata document.
    ///
    /// One GET, one decode; no retries, no caching. See [`RelayInfoError`]
    /// for the failure taxonomy.
    pub async fn fetch_metadata(&self, relay: &str) -> Result<RelayMetadata, RelayInfoError> {
        let url = metadata_url(relay)?;
        debug!(%url, "fetching relay metadata");

        let mut request = self.http.get(url.clone()).header(header::ACCEPT, NOSTR_JSON_MIME);
        if let Some(timeout) = self.options.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;

        let status = response.status();
        if self.options.reject_error_status && !status.is_success() {
            debug!(%url, %status, "relay rejected metadata request");
            return Err(RelayInfoError::Status(status));
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(RelayInfoError::NoData);
        }

        let metadata: RelayMetadata = serde_json::from_slice(&body)?;
        Ok(metadata)
    }
}
