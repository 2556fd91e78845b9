use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Quiet period callers should wait after the last deck edit before
/// starting a legality cycle.
pub const DEBOUNCE_QUIET_PERIOD: Duration = Duration::from_millis(1000);

/// The unconstrained format: no size table entry and no copy limit.
pub const CUSTOM_FORMAT: &str = "custom";
pub const COMMANDER_FORMAT: &str = "commander";
pub const OATHBREAKER_FORMAT: &str = "oathbreaker";

/// Copy limit for formats absent from [`max_copies_rules`].
pub const DEFAULT_MAX_COPIES: u32 = 4;

// ---------------------------------------------------------------------------
// FormatRule — deck-size constraints for one format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatRule {
    pub exact_size: Option<u32>,
    pub min_size: Option<u32>,
    /// Part of the table schema; no checker reads it yet.
    pub sideboard_max: Option<u32>,
}

impl FormatRule {
    const fn exact(size: u32) -> Self {
        Self {
            exact_size: Some(size),
            min_size: None,
            sideboard_max: None,
        }
    }

    const fn constructed(min: u32) -> Self {
        Self {
            exact_size: None,
            min_size: Some(min),
            sideboard_max: Some(15),
        }
    }
}

pub fn format_rules() -> HashMap<&'static str, FormatRule> {
    HashMap::from([
        // Singleton command-zone formats
        ("commander", FormatRule::exact(100)),
        ("oathbreaker", FormatRule::exact(60)),
        ("brawl", FormatRule::exact(60)),
        ("historicbrawl", FormatRule::exact(100)),
        // 60-card constructed
        ("standard", FormatRule::constructed(60)),
        ("pioneer", FormatRule::constructed(60)),
        ("modern", FormatRule::constructed(60)),
        ("legacy", FormatRule::constructed(60)),
        ("vintage", FormatRule::constructed(60)),
        ("pauper", FormatRule::constructed(60)),
        ("historic", FormatRule::constructed(60)),
        ("explorer", FormatRule::constructed(60)),
        ("timeless", FormatRule::constructed(60)),
        ("alchemy", FormatRule::constructed(60)),
    ])
}

/// Per-format copy limits. A `None` entry means the format has no limit.
pub fn max_copies_rules() -> HashMap<&'static str, Option<u32>> {
    HashMap::from([
        ("commander", Some(1)),
        ("oathbreaker", Some(1)),
        ("brawl", Some(1)),
        ("historicbrawl", Some(1)),
        (CUSTOM_FORMAT, None),
    ])
}

/// Look up the deck-size rule for a format, ignoring case and surrounding
/// whitespace.
pub fn format_rule(format: &str) -> Option<FormatRule> {
    format_rules().get(normalize_format(format).as_str()).copied()
}

/// Resolve the copy limit for a format, falling back to
/// [`DEFAULT_MAX_COPIES`] for unlisted formats.
pub fn max_copies(format: &str) -> Option<u32> {
    max_copies_rules()
        .get(normalize_format(format).as_str())
        .copied()
        .unwrap_or(Some(DEFAULT_MAX_COPIES))
}

pub fn normalize_format(format: &str) -> String {
    format.trim().to_lowercase()
}

/// The five basic land types, their snow-covered versions, and Wastes.
pub const BASIC_LAND_NAMES: [&str; 11] = [
    "Plains",
    "Island",
    "Swamp",
    "Mountain",
    "Forest",
    "Snow-Covered Plains",
    "Snow-Covered Island",
    "Snow-Covered Swamp",
    "Snow-Covered Mountain",
    "Snow-Covered Forest",
    "Wastes",
];

/// Color codes in canonical WUBRG order.
pub const COLOR_ORDER: [&str; 5] = ["W", "U", "B", "R", "G"];
