use crate::config;

/// Check the mainboard total against the format's size rule.
///
/// `mainboard_count` is assembled by the caller; whether command-zone cards
/// are part of it is the caller's decision. Formats without a size rule
/// produce no issues.
pub fn check_deck_size(format: &str, mainboard_count: u32) -> Vec<String> {
    let mut issues = Vec::new();
    let Some(rule) = config::format_rule(format) else {
        return issues;
    };

    if let Some(exact) = rule.exact_size.filter(|&n| n != mainboard_count) {
        issues.push(format!(
            "Deck must have exactly {exact} cards (currently {mainboard_count})."
        ));
    } else if let Some(min) = rule.min_size.filter(|&n| mainboard_count < n) {
        issues.push(format!(
            "Deck must have at least {min} cards (currently {mainboard_count})."
        ));
    }

    issues
}
