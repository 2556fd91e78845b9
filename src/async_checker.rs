//! Async wrapper around [`LegalityChecker`] for use in async runtimes (Tokio, etc.).
//!
//! Each cycle runs on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], since the restriction lookup uses a
//! blocking HTTP client. Overlapping cycles follow the same last-started-wins
//! rule as the sync checker.
//!
//! # Example
//!
//! ```no_run
//! use deck_legality::{AsyncLegalityChecker, DeckSnapshot};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let checker = AsyncLegalityChecker::builder()
//!         .api_base("https://decks.example.com/api")
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     let deck = DeckSnapshot::new(Some("deck-42"), "modern", Vec::new());
//!     if let Some(verdict) = checker.evaluate(deck).await.unwrap() {
//!         println!("{}", verdict.summary());
//!     }
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::checker::LegalityChecker;
use crate::error::{LegalityError, Result};
use crate::models::{DeckSnapshot, LegalityVerdict};
use crate::restrictions::{HttpRestrictionClient, RestrictionClient};
use crate::LegalityCheckerBuilder;

// ---------------------------------------------------------------------------
// AsyncLegalityCheckerBuilder
// ---------------------------------------------------------------------------

/// Builder for an [`AsyncLegalityChecker`] backed by the HTTP restriction client.
#[derive(Default)]
pub struct AsyncLegalityCheckerBuilder {
    inner: LegalityCheckerBuilder,
}

impl AsyncLegalityCheckerBuilder {
    pub fn api_base(mut self, url: &str) -> Self {
        self.inner = self.inner.api_base(url);
        self
    }

    pub fn auth_token(mut self, token: &str) -> Self {
        self.inner = self.inner.auth_token(token);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.inner = self.inner.offline(offline);
        self
    }

    pub fn count_commanders_in_deck_size(mut self, include: bool) -> Self {
        self.inner = self.inner.count_commanders_in_deck_size(include);
        self
    }

    /// Build the checker on the blocking pool, where the blocking HTTP
    /// client may be constructed.
    pub async fn build(self) -> Result<AsyncLegalityChecker> {
        tokio::task::spawn_blocking(move || {
            let checker = self.inner.build()?;
            Ok(AsyncLegalityChecker {
                inner: Arc::new(checker),
            })
        })
        .await
        .map_err(|e| LegalityError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncLegalityChecker
// ---------------------------------------------------------------------------

pub struct AsyncLegalityChecker<C = HttpRestrictionClient> {
    inner: Arc<LegalityChecker<C>>,
}

impl AsyncLegalityChecker<HttpRestrictionClient> {
    pub fn builder() -> AsyncLegalityCheckerBuilder {
        AsyncLegalityCheckerBuilder::default()
    }
}

impl<C: RestrictionClient + 'static> AsyncLegalityChecker<C> {
    /// Wrap an already built checker.
    pub fn new(checker: LegalityChecker<C>) -> Self {
        Self {
            inner: Arc::new(checker),
        }
    }

    /// Run one cycle on the blocking pool.
    ///
    /// Resolves to `Ok(None)` when a newer cycle superseded this one.
    pub async fn evaluate(&self, deck: DeckSnapshot) -> Result<Option<LegalityVerdict>> {
        let checker = self.inner.clone();
        tokio::task::spawn_blocking(move || checker.evaluate(&deck))
            .await
            .map_err(|e| LegalityError::InvalidArgument(format!("Task join error: {e}")))
    }

    /// The latest published verdict.
    pub fn verdict(&self) -> LegalityVerdict {
        self.inner.verdict()
    }

    /// Release the checker on the blocking pool.
    ///
    /// The blocking HTTP client must not be dropped on an async worker
    /// thread, so prefer this over letting the value fall out of scope.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(|e| LegalityError::InvalidArgument(format!("Task join error: {e}")))
    }
}

impl<C> Clone for AsyncLegalityChecker<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
