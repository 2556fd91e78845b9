use crate::models::CardLegalityInfo;
use crate::predicates::{format_identity, is_identity_subset, type_line_contains};

/// Check command-zone and color-identity rules for the Oathbreaker format.
///
/// The command zone holds one planeswalker (the Oathbreaker) and one instant
/// or sorcery (the Signature Spell). Only the Oathbreaker's identity bounds
/// the rest of the deck.
pub fn check_oathbreaker_rules(cards: &[CardLegalityInfo]) -> Vec<String> {
    let mut issues = Vec::new();
    let command_zone: Vec<&CardLegalityInfo> = cards.iter().filter(|c| c.is_commander).collect();

    let overfull = command_zone.len() > 2;
    if overfull {
        issues.push(format!(
            "Command zone must contain at most one Oathbreaker and one Signature Spell (found {} cards).",
            command_zone.len()
        ));
    }

    let oathbreaker = command_zone
        .iter()
        .copied()
        .find(|c| type_line_contains(c, "planeswalker"));
    let signature_spell = command_zone
        .iter()
        .copied()
        .find(|c| type_line_contains(c, "instant") || type_line_contains(c, "sorcery"));

    if oathbreaker.is_none() {
        issues.push(
            "Deck must have an Oathbreaker (a planeswalker in the command zone).".to_string(),
        );
    }
    if signature_spell.is_none() {
        issues.push(
            "Deck must have a Signature Spell (an instant or sorcery in the command zone)."
                .to_string(),
        );
    }

    if let (Some(oathbreaker), Some(spell)) = (oathbreaker, signature_spell) {
        for card in [oathbreaker, spell] {
            if card.quantity > 1 {
                issues.push(format!(
                    "{} must be a single copy in the command zone (found {}).",
                    card.canonical_name, card.quantity
                ));
            }
        }

        if oathbreaker.id == spell.id {
            issues.push(format!(
                "Oathbreaker and Signature Spell must be different cards ({}).",
                oathbreaker.canonical_name
            ));
        }

        if !is_identity_subset(&spell.color_identity, &oathbreaker.color_identity) {
            issues.push(format!(
                "Signature Spell {} has color identity {}, outside Oathbreaker {}'s color identity {}.",
                spell.canonical_name,
                format_identity(&spell.color_identity),
                oathbreaker.canonical_name,
                format_identity(&oathbreaker.color_identity)
            ));
        }

        for card in cards.iter().filter(|c| !c.is_commander) {
            if !is_identity_subset(&card.color_identity, &oathbreaker.color_identity) {
                issues.push(format!(
                    "{} has color identity {}, outside the Oathbreaker's color identity {}.",
                    card.canonical_name,
                    format_identity(&card.color_identity),
                    format_identity(&oathbreaker.color_identity)
                ));
            }
        }
    }

    // The zone-size issue alone does not hide cards that fill no role.
    let structural_issues = issues.len() - usize::from(overfull);
    if !command_zone.is_empty() && structural_issues == 0 {
        let stray = command_zone
            .iter()
            .any(|c| !is_same_line(c, oathbreaker) && !is_same_line(c, signature_spell));
        if stray {
            issues.push("Invalid card(s) designated for the command zone.".to_string());
        }
    }

    issues
}

fn is_same_line(card: &CardLegalityInfo, other: Option<&CardLegalityInfo>) -> bool {
    other.is_some_and(|o| std::ptr::eq(card, o))
}
