use std::collections::HashMap;

use crate::config;
use crate::models::CardLegalityInfo;
use crate::predicates::{grants_unlimited_copies, is_basic_land_name};

struct NameTally<'a> {
    name: &'a str,
    total: u32,
    unlimited: bool,
}

/// Check that no card name exceeds the format's copy limit.
///
/// Quantities are summed per trimmed canonical name across every zone.
/// Basic lands and cards whose rules text lifts the limit for their own name
/// are exempt. Issues come out in order of each name's first appearance.
/// Totals saturate at `u32::MAX`.
pub fn check_max_copies(format: &str, cards: &[CardLegalityInfo]) -> Vec<String> {
    let Some(limit) = config::max_copies(format) else {
        return Vec::new();
    };

    let mut tallies: Vec<NameTally<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for card in cards {
        let name = card.canonical_name.trim();
        if name.is_empty() {
            eprintln!(
                "Skipping card {} with an empty name while counting copies",
                card.id
            );
            continue;
        }
        if is_basic_land_name(name) {
            continue;
        }
        match index.get(name) {
            Some(&i) => tallies[i].total = tallies[i].total.saturating_add(card.quantity),
            None => {
                index.insert(name, tallies.len());
                tallies.push(NameTally {
                    name,
                    total: card.quantity,
                    unlimited: grants_unlimited_copies(name, &card.oracle_text),
                });
            }
        }
    }

    tallies
        .iter()
        .filter(|t| !t.unlimited && t.total > limit)
        .map(|t| {
            format!(
                "Too many copies of {}: max {} allowed, found {}.",
                t.name, limit, t.total
            )
        })
        .collect()
}
