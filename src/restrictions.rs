//! Lookup of banned and restricted cards from the external deck service.
//!
//! Ban lists change over time, so they are never hardcoded here. The
//! orchestrator asks a [`RestrictionClient`] once per cycle; the default
//! implementation talks to the deck backend over HTTP.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;

use crate::error::{LegalityError, Result};
use crate::models::RestrictionReport;

/// Source of per-card format restrictions for a saved deck.
pub trait RestrictionClient: Send + Sync {
    /// Ask whether any card of `deck_id` is banned or restricted in `format`.
    fn lookup(&self, deck_id: &str, format: &str) -> Result<RestrictionReport>;
}

impl<T: RestrictionClient + ?Sized> RestrictionClient for Box<T> {
    fn lookup(&self, deck_id: &str, format: &str) -> Result<RestrictionReport> {
        (**self).lookup(deck_id, format)
    }
}

// ---------------------------------------------------------------------------
// HttpRestrictionClient
// ---------------------------------------------------------------------------

/// Blocking HTTP client for `GET {base}/decks/{id}/legality?format=...`.
pub struct HttpRestrictionClient {
    base_url: String,
    base: Url,
    auth_token: Option<String>,
    client: Client,
}

impl HttpRestrictionClient {
    /// Create a client for the service rooted at `base_url`.
    ///
    /// `timeout` bounds the whole request; an unresponsive service surfaces
    /// as an HTTP error instead of hanging the cycle.
    pub fn new(base_url: &str, auth_token: Option<String>, timeout: Duration) -> Result<Self> {
        if base_url.trim().is_empty() {
            return Err(LegalityError::InvalidArgument(
                "restriction service base URL is empty".into(),
            ));
        }
        let base_url = base_url.trim_end_matches('/');
        let base = Url::parse(base_url).map_err(|e| {
            LegalityError::InvalidArgument(format!(
                "invalid restriction service URL {base_url}: {e}"
            ))
        })?;
        if base.cannot_be_a_base() {
            return Err(LegalityError::InvalidArgument(format!(
                "restriction service URL {base_url} cannot carry a path"
            )));
        }
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.to_string(),
            base,
            auth_token,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/decks/{deck_id}/legality`, with the id percent-encoded as a
    /// single path segment.
    fn legality_url(&self, deck_id: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("decks")
                .push(deck_id)
                .push("legality");
        }
        url
    }
}

impl RestrictionClient for HttpRestrictionClient {
    fn lookup(&self, deck_id: &str, format: &str) -> Result<RestrictionReport> {
        let mut req = self
            .client
            .get(self.legality_url(deck_id))
            .query(&[("format", format)]);
        if let Some(ref token) = self.auth_token {
            req = req.bearer_auth(token);
        }

        let resp = req.send()?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(LegalityError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let report: RestrictionReport = resp.json()?;
        Ok(report)
    }
}
