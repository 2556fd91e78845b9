use crate::models::CardLegalityInfo;
use crate::predicates::{
    format_identity, has_partner_ability, identity_union, is_commander_eligible,
    is_identity_subset,
};

/// Check command-zone and color-identity rules for the Commander format.
///
/// An empty command zone yields a single issue and nothing else, since every
/// later rule needs at least one commander to compare against.
pub fn check_commander_rules(cards: &[CardLegalityInfo]) -> Vec<String> {
    let mut issues = Vec::new();
    let (commanders, others): (Vec<&CardLegalityInfo>, Vec<&CardLegalityInfo>) =
        cards.iter().partition(|c| c.is_commander);

    if commanders.is_empty() {
        issues.push("Deck must have a commander.".to_string());
        return issues;
    }

    for commander in &commanders {
        if !is_commander_eligible(commander) {
            issues.push(format!(
                "{} is not a legal commander (must be a legendary creature or planeswalker, or say it can be your commander).",
                commander.canonical_name
            ));
        }
        if commander.quantity > 1 {
            issues.push(format!(
                "Commander {} must be a single copy (found {}).",
                commander.canonical_name, commander.quantity
            ));
        }
    }

    match commanders.len() {
        1 => {}
        2 => {
            if !commanders.iter().all(|c| has_partner_ability(c)) {
                issues.push(
                    "Two commanders are only allowed if both have Partner, Partner with, or Friends forever."
                        .to_string(),
                );
            }
        }
        n => issues.push(format!(
            "Deck cannot have more than two commanders (found {n})."
        )),
    }

    let commander_identity = identity_union(commanders.iter().copied());
    for card in others {
        if !is_identity_subset(&card.color_identity, &commander_identity) {
            issues.push(format!(
                "{} has color identity {}, outside the commander's color identity {}.",
                card.canonical_name,
                format_identity(&card.color_identity),
                format_identity(&commander_identity)
            ));
        }
    }

    issues
}
