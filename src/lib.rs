//! Format legality checks for Magic: The Gathering decks.
//!
//! Decides whether a deck is legal in a named format: deck size, copy
//! limits, Commander and Oathbreaker command-zone rules, and color identity.
//! Ban and restriction lists change over time, so for saved decks the
//! checker also asks an external deck service which cards are currently
//! banned or restricted.
//!
//! # Quick start
//!
//! ```no_run
//! use deck_legality::{CardLegalityInfo, DeckSnapshot, LegalityChecker};
//!
//! let checker = LegalityChecker::builder()
//!     .api_base("https://decks.example.com/api")
//!     .build()
//!     .unwrap();
//!
//! let cards = vec![CardLegalityInfo::new("printing-1", "Lightning Bolt", 4)];
//! let deck = DeckSnapshot::new(Some("deck-42"), "modern", cards);
//! if let Some(verdict) = checker.evaluate(&deck) {
//!     for issue in &verdict.issues {
//!         println!("{issue}");
//!     }
//! }
//! ```
//!
//! The structural checks are plain functions in [`checks`] and can be used
//! without a checker at all.

#[cfg(feature = "async")]
pub mod async_checker;
pub mod checker;
pub mod checks;
pub mod config;
pub mod debounce;
pub mod error;
pub mod models;
pub mod predicates;
pub mod restrictions;

#[cfg(feature = "async")]
pub use async_checker::AsyncLegalityChecker;
pub use checker::LegalityChecker;
pub use debounce::Debouncer;
pub use error::{LegalityError, Result};
pub use models::{
    CardLegalityInfo, DeckSnapshot, LegalityStatus, LegalityVerdict, RestrictedCard,
    RestrictionReport,
};
pub use restrictions::{HttpRestrictionClient, RestrictionClient};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// LegalityCheckerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`LegalityChecker`].
///
/// Use [`LegalityChecker::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](LegalityCheckerBuilder::build) to create the
/// checker.
#[derive(Clone)]
pub struct LegalityCheckerBuilder {
    api_base: String,
    auth_token: Option<String>,
    timeout: Duration,
    offline: bool,
    count_commanders_in_deck_size: bool,
}

impl Default for LegalityCheckerBuilder {
    fn default() -> Self {
        Self {
            api_base: config::DEFAULT_API_BASE.to_string(),
            auth_token: None,
            timeout: config::DEFAULT_TIMEOUT,
            offline: false,
            count_commanders_in_deck_size: true,
        }
    }
}

impl LegalityCheckerBuilder {
    /// Set the base URL of the deck service that answers restriction lookups.
    ///
    /// Defaults to [`config::DEFAULT_API_BASE`].
    pub fn api_base(mut self, url: &str) -> Self {
        self.api_base = url.to_string();
        self
    }

    /// Bearer token forwarded on every restriction lookup.
    pub fn auth_token(mut self, token: &str) -> Self {
        self.auth_token = Some(token.to_string());
        self
    }

    /// Set the restriction lookup timeout.
    ///
    /// Defaults to 10 seconds. A timed-out lookup is reported as an issue.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, saved decks are only checked locally and the verdict
    /// carries an issue saying restrictions were not verified. Defaults to
    /// `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Whether command-zone cards count toward the deck-size total.
    ///
    /// Defaults to `true`, so a Commander deck is 99 cards plus its commander.
    pub fn count_commanders_in_deck_size(mut self, include: bool) -> Self {
        self.count_commanders_in_deck_size = include;
        self
    }

    /// Build a checker that talks to the deck service over HTTP.
    pub fn build(self) -> Result<LegalityChecker> {
        let client = HttpRestrictionClient::new(&self.api_base, self.auth_token, self.timeout)?;
        Ok(LegalityChecker::from_parts(
            client,
            self.offline,
            self.count_commanders_in_deck_size,
        ))
    }

    /// Build a checker around any [`RestrictionClient`].
    ///
    /// The base URL, token and timeout settings are ignored.
    pub fn build_with_client<C: RestrictionClient>(self, client: C) -> LegalityChecker<C> {
        LegalityChecker::from_parts(client, self.offline, self.count_commanders_in_deck_size)
    }
}

impl fmt::Display for LegalityCheckerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LegalityCheckerBuilder(api_base={}, timeout={:?}, offline={}, auth={})",
            self.api_base,
            self.timeout,
            self.offline,
            if self.auth_token.is_some() { "set" } else { "none" }
        )
    }
}

impl LegalityChecker {
    /// Create a new builder for configuring the checker.
    pub fn builder() -> LegalityCheckerBuilder {
        LegalityCheckerBuilder::default()
    }
}
