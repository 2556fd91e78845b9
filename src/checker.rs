//! The legality orchestrator.
//!
//! A [`LegalityChecker`] runs one evaluation cycle per call to
//! [`evaluate`](LegalityChecker::evaluate): the structural checks against the
//! deck snapshot, then (for saved decks) a single restriction lookup, merged
//! into a fresh [`LegalityVerdict`]. Calls are expected to be debounced by the
//! caller, see [`Debouncer`](crate::debounce::Debouncer).

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, MutexGuard};

use crate::checks::run_local_checks;
use crate::config::{normalize_format, CUSTOM_FORMAT};
use crate::models::{DeckSnapshot, LegalityVerdict, RestrictionReport};
use crate::restrictions::{HttpRestrictionClient, RestrictionClient};

pub const UNSAVED_DECK_ISSUE: &str = "Deck must be saved to check full legality.";
pub const UNSAVED_CUSTOM_ISSUE: &str =
    "Individual card restrictions will be verified once the deck is saved.";
pub const OFFLINE_ISSUE: &str = "Card restrictions were not checked because the checker is offline.";

struct CycleState {
    generation: u64,
    fingerprint: Option<u64>,
    verdict: LegalityVerdict,
}

/// Evaluates deck legality and holds the most recent verdict.
///
/// Safe to share between threads. When cycles overlap, the one started last
/// wins; earlier cycles finish their work but their results are dropped.
pub struct LegalityChecker<C = HttpRestrictionClient> {
    client: C,
    offline: bool,
    count_commanders_in_deck_size: bool,
    state: Mutex<CycleState>,
}

impl<C: RestrictionClient> LegalityChecker<C> {
    pub(crate) fn from_parts(client: C, offline: bool, count_commanders_in_deck_size: bool) -> Self {
        Self {
            client,
            offline,
            count_commanders_in_deck_size,
            state: Mutex::new(CycleState {
                generation: 0,
                fingerprint: None,
                verdict: LegalityVerdict::default(),
            }),
        }
    }

    /// The latest published verdict. `Checking` while a cycle is in flight.
    pub fn verdict(&self) -> LegalityVerdict {
        self.lock().verdict.clone()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Run one full cycle for `deck`.
    ///
    /// Returns the committed verdict, or `None` if a newer cycle started
    /// while this one was waiting on the restriction service.
    pub fn evaluate(&self, deck: &DeckSnapshot) -> Option<LegalityVerdict> {
        let fingerprint = deck_fingerprint(deck);
        let format = deck.format.trim().to_string();
        let is_custom = normalize_format(&format) == CUSTOM_FORMAT;

        if deck.deck_id.is_none() && !is_custom {
            let verdict = LegalityVerdict::unknown(UNSAVED_DECK_ISSUE);
            let mut state = self.lock();
            state.generation += 1;
            state.fingerprint = Some(fingerprint);
            state.verdict = verdict.clone();
            return Some(verdict);
        }

        let generation = {
            let mut state = self.lock();
            state.generation += 1;
            state.fingerprint = Some(fingerprint);
            state.verdict = LegalityVerdict::checking();
            state.generation
        };

        let mut issues = run_local_checks(deck, self.count_commanders_in_deck_size);
        let mut remote_checked_format = None;

        match deck.deck_id.as_deref() {
            Some(_) if self.offline => issues.push(OFFLINE_ISSUE.to_string()),
            Some(deck_id) => {
                match self.client.lookup(deck_id, &format) {
                    Ok(report) => issues.extend(restriction_issues(&report, &format)),
                    Err(e) => {
                        eprintln!("Restriction lookup for deck {} failed: {}", deck_id, e);
                        issues.push(format!("Could not verify card restrictions: {e}"));
                    }
                }
                remote_checked_format = Some(format.clone());
            }
            None => issues.push(UNSAVED_CUSTOM_ISSUE.to_string()),
        }

        let verdict = LegalityVerdict::resolved(issues, Some(format), remote_checked_format);

        let mut state = self.lock();
        if state.generation != generation || state.fingerprint != Some(fingerprint) {
            eprintln!("Discarding superseded legality result for format {}", deck.format);
            return None;
        }
        state.verdict = verdict.clone();
        Some(verdict)
    }

    fn lock(&self) -> MutexGuard<'_, CycleState> {
        // A panic mid-cycle leaves a stale verdict, not a broken one.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Issue strings for every card the restriction service flagged.
///
/// A report marked not legal with no cards listed still yields one issue.
pub fn restriction_issues(report: &RestrictionReport, format: &str) -> Vec<String> {
    let mut issues: Vec<String> = report
        .illegal_cards
        .iter()
        .map(|c| format!("{} is {} in {}.", c.name, c.status_label(), format))
        .collect();
    if !report.is_legal && issues.is_empty() {
        issues.push(format!(
            "The deck service reports this deck is not legal in {format}."
        ));
    }
    issues
}

/// Hash of everything a cycle's result depends on: deck id, format, and
/// every card line in order.
pub fn deck_fingerprint(deck: &DeckSnapshot) -> u64 {
    let mut hasher = DefaultHasher::new();
    deck.deck_id.hash(&mut hasher);
    normalize_format(&deck.format).hash(&mut hasher);
    deck.cards.hash(&mut hasher);
    hasher.finish()
}
