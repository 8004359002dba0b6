//! Better BibTeX client
//!
//! Talks to the BBT endpoints exposed by a locally running Zotero:
//! - `cayw?probe=probe` - readiness probe (plain text)
//! - `cayw` - interactive citation picker (plain text)
//! - `json-rpc` - `item.search` and `item.bibliography` (JSON-RPC batch)
//!
//! Everything is synchronous and blocking; an unreachable service surfaces
//! as `ServiceNotRunning`. No retries.

pub mod types;

use std::env;

use serde_json::json;
use tracing::debug;

use crate::citekey::Citekey;
use crate::error::{RefnoteError, Result};
pub use types::{Candidate, Name};
use types::{RpcRequest, RpcResponse};

/// Fixed local BBT base address
pub const DEFAULT_BASE_URL: &str = "http://localhost:23119/better-bibtex";

/// Environment override for the base address (used by tests)
const BASE_URL_ENV_VAR: &str = "REFNOTE_BBT_URL";

/// Literal body the probe endpoint returns once BBT is up
const READY_TOKEN: &str = "ready";

/// Source of rendered bibliography lines, used for candidate disambiguation
pub trait BibliographySource {
    fn bibliography(&self, citekey: &str) -> Result<String>;
}

/// Synchronous client for the Better BibTeX endpoints
pub struct BetterBibtex {
    agent: ureq::Agent,
    base_url: String,
    style: String,
}

impl BetterBibtex {
    /// Build a client and verify the service is reachable and ready
    pub fn connect(style: &str) -> Result<Self> {
        let client = Self::new(style);
        if !client.probe() {
            return Err(RefnoteError::ServiceNotRunning);
        }
        Ok(client)
    }

    fn new(style: &str) -> Self {
        let base_url = env::var(BASE_URL_ENV_VAR)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // Status codes are branched on explicitly below.
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();

        Self {
            agent: ureq::Agent::new_with_config(config),
            base_url,
            style: style.to_string(),
        }
    }

    /// Check whether Zotero with BBT is up
    fn probe(&self) -> bool {
        let url = format!("{}/cayw?probe=probe", self.base_url);
        match self.agent.get(&url).call() {
            Ok(response) => response
                .into_body()
                .read_to_string()
                .map(|body| body.trim() == READY_TOKEN)
                .unwrap_or(false),
            Err(error) => {
                debug!(%error, "bbt_probe_failed");
                false
            }
        }
    }

    /// Launch the Zotero citation picker and wait for the user's choice.
    /// Returns `None` when the picker is dismissed without a selection.
    pub fn citation_picker(&self) -> Result<Option<String>> {
        let url = format!("{}/cayw", self.base_url);
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| RefnoteError::Http(e.to_string()))?;
        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| RefnoteError::Http(e.to_string()))?;

        let picked = body.trim();
        if picked.is_empty() {
            Ok(None)
        } else {
            Ok(Some(picked.to_string()))
        }
    }

    /// Search the library for a citekey. Returns the raw candidate list
    /// unchanged; zero hits is an empty list, not an error.
    pub fn search(&self, citekey: &Citekey) -> Result<Vec<Candidate>> {
        let request = RpcRequest::new("item.search", json!([citekey.as_str()]));
        let response: RpcResponse<Vec<Candidate>> = self.call_rpc(&request)?;

        if let Some(error) = response.error {
            return Err(RefnoteError::BadRequest(error.message));
        }
        let candidates = response.result.unwrap_or_default();
        debug!(citekey = %citekey, count = candidates.len(), "bbt_search");
        Ok(candidates)
    }

    fn call_rpc<T: serde::de::DeserializeOwned + Default>(&self, request: &RpcRequest) -> Result<RpcResponse<T>> {
        let url = format!("{}/json-rpc", self.base_url);
        let payload = serde_json::to_string(&[request])?;

        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(payload.as_str())
            .map_err(|e| RefnoteError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(RefnoteError::SearchFailed(status));
        }

        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| RefnoteError::Http(e.to_string()))?;

        let mut responses: Vec<RpcResponse<T>> = serde_json::from_str(&body)?;
        if responses.is_empty() {
            return Err(RefnoteError::BadRequest("empty RPC response".to_string()));
        }
        Ok(responses.remove(0))
    }
}

impl BibliographySource for BetterBibtex {
    /// Render one bibliography line for a citekey in the configured style
    fn bibliography(&self, citekey: &str) -> Result<String> {
        let style_id = format!("http://www.zotero.org/styles/{}", self.style);
        let request = RpcRequest::new("item.bibliography", json!([[citekey], { "id": style_id }]));
        let response: RpcResponse<String> = self.call_rpc(&request)?;

        if let Some(error) = response.error {
            return Err(RefnoteError::BadRequest(error.message));
        }
        response
            .result
            .map(|line| line.trim().to_string())
            .ok_or_else(|| RefnoteError::BadRequest("missing bibliography result".to_string()))
    }
}
