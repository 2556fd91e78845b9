//! Yes/no questions about a single card, plus color-identity helpers shared
//! by the commander and oathbreaker checks.

use crate::config::{BASIC_LAND_NAMES, COLOR_ORDER};
use crate::models::CardLegalityInfo;

const UNLIMITED_COPIES_PREFIX: &str = "A deck can have any number of cards named ";
const PARTNER_WITH: &str = "Partner with ";
const FRIENDS_FOREVER: &str = "Friends forever";
const COMMANDER_MARKER: &str = "can be your commander";

/// True iff the trimmed name is exactly one of the basic land names.
///
/// Case-sensitive: `"island"` is not a basic land name.
pub fn is_basic_land_name(name: &str) -> bool {
    let name = name.trim();
    BASIC_LAND_NAMES.contains(&name)
}

/// True iff `oracle_text` contains the literal clause
/// `A deck can have any number of cards named <name>.`
///
/// Matching is exact and case-sensitive. Empty inputs never match.
pub fn grants_unlimited_copies(name: &str, oracle_text: &str) -> bool {
    let name = name.trim();
    if name.is_empty() || oracle_text.trim().is_empty() {
        return false;
    }
    let clause = format!("{UNLIMITED_COPIES_PREFIX}{name}.");
    oracle_text.contains(&clause)
}

/// True if the card has Partner, "Partner with <Name>", or Friends forever.
///
/// The "Partner with" form is recognized heuristically: the phrase must be
/// followed by a capital letter and at least one more name character.
pub fn has_partner_ability(card: &CardLegalityInfo) -> bool {
    if card
        .keywords
        .iter()
        .any(|k| k.trim().eq_ignore_ascii_case("partner"))
    {
        return true;
    }
    has_partner_with_clause(&card.oracle_text) || card.oracle_text.contains(FRIENDS_FOREVER)
}

fn has_partner_with_clause(text: &str) -> bool {
    text.match_indices(PARTNER_WITH).any(|(idx, _)| {
        let mut rest = text[idx + PARTNER_WITH.len()..].chars();
        let first_is_capital = rest.next().is_some_and(|c| c.is_ascii_uppercase());
        let continues_name = rest.next().is_some_and(is_partner_name_char);
        first_is_capital && continues_name
    })
}

fn is_partner_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || matches!(c, ',' | '\'' | '-')
}

/// True if the card is allowed to lead a Commander deck by type or by an
/// explicit "can be your commander" marker.
pub fn is_commander_eligible(card: &CardLegalityInfo) -> bool {
    let type_line = card.type_line.to_lowercase();
    type_line.contains("legendary creature")
        || type_line.contains("legendary planeswalker")
        || card
            .keywords
            .iter()
            .any(|k| k.trim().eq_ignore_ascii_case(COMMANDER_MARKER))
}

/// Case-insensitive substring test against the card's type line.
pub fn type_line_contains(card: &CardLegalityInfo, keyword: &str) -> bool {
    card.type_line
        .to_lowercase()
        .contains(&keyword.to_lowercase())
}

// ---------------------------------------------------------------------------
// Color identity
// ---------------------------------------------------------------------------

/// Union of the color identities of `cards`, duplicates collapsed.
pub fn identity_union<'a, I>(cards: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a CardLegalityInfo>,
{
    let mut union: Vec<String> = Vec::new();
    for card in cards {
        for color in &card.color_identity {
            if !union.contains(color) {
                union.push(color.clone());
            }
        }
    }
    union
}

/// True if every color of `identity` appears in `allowed`.
pub fn is_identity_subset(identity: &[String], allowed: &[String]) -> bool {
    identity.iter().all(|c| allowed.contains(c))
}

/// Render an identity as its color codes in WUBRG order, or `"C"` if empty.
///
/// Codes outside the five colors are appended in their original order.
pub fn format_identity(identity: &[String]) -> String {
    if identity.is_empty() {
        return "C".to_string();
    }
    let mut out: String = COLOR_ORDER
        .iter()
        .filter(|c| identity.iter().any(|i| i == *c))
        .copied()
        .collect();
    for code in identity {
        if !COLOR_ORDER.contains(&code.as_str()) && !out.contains(code.as_str()) {
            out.push_str(code);
        }
    }
    out
}
