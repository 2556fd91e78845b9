//! The structural checkers.
//!
//! Each checker is a pure function from deck lines to a list of issue
//! strings; an empty list means the deck passes that rule. They share no
//! state and may run concurrently.

pub mod commander;
pub mod deck_size;
pub mod max_copies;
pub mod oathbreaker;

pub use commander::check_commander_rules;
pub use deck_size::check_deck_size;
pub use max_copies::check_max_copies;
pub use oathbreaker::check_oathbreaker_rules;

use crate::config::{normalize_format, COMMANDER_FORMAT, OATHBREAKER_FORMAT};
use crate::models::DeckSnapshot;

/// Run every checker that applies to the snapshot's format, in order:
/// deck size, copy limits, then the format's command-zone rules.
pub fn run_local_checks(deck: &DeckSnapshot, count_commanders_in_deck_size: bool) -> Vec<String> {
    let mut issues = check_deck_size(
        &deck.format,
        deck.mainboard_count(count_commanders_in_deck_size),
    );
    issues.extend(check_max_copies(&deck.format, &deck.cards));

    match normalize_format(&deck.format).as_str() {
        COMMANDER_FORMAT => issues.extend(check_commander_rules(&deck.cards)),
        OATHBREAKER_FORMAT => issues.extend(check_oathbreaker_rules(&deck.cards)),
        _ => {}
    }

    issues
}
