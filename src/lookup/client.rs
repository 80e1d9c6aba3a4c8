use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;

use super::record::LookupRecord;

/// Failures surfaced by a lookup request.
///
/// The UI collapses all of these into a single error banner; the variants
/// exist so that logs can tell transport problems apart from bad payloads.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("lookup returned HTTP {status}")]
    Status { status: StatusCode },
    #[error("lookup response was not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Blocking HTTP client for the identifier-lookup endpoint.
#[derive(Debug, Clone)]
pub struct LookupClient {
    http: Client,
    endpoint: String,
}

impl LookupClient {
    /// Build a client for `endpoint` with the given request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let http = Client::builder().timeout(timeout).build()?;
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Ok(Self { http, endpoint })
    }

    /// Fetch the record for `identifier`.
    ///
    /// The identifier is substituted into the path verbatim; a value that
    /// produces an unusable URL fails like any other transport error. Non-2xx
    /// responses are errors and their bodies are not parsed.
    pub fn fetch(&self, identifier: &str) -> Result<LookupRecord, LookupError> {
        let url = format!("{}/user/{}", self.endpoint, identifier);
        tracing::debug!(%url, "issuing lookup request");

        let response = self.http.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status { status });
        }

        let body = response.text()?;
        let record = serde_json::from_str(&body)?;
        Ok(record)
    }
}
