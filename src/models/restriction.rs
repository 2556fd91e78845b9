use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RestrictionReport — response of the remote banned/restricted lookup
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictionReport {
    pub is_legal: bool,
    /// Cards explicitly flagged for the format. Unlisted cards are not flagged.
    #[serde(default)]
    pub illegal_cards: Vec<RestrictedCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictedCard {
    pub name: String,
    #[serde(default)]
    pub printing_id: Option<String>,
    /// e.g. `"banned"`, `"restricted"`, `"not_legal"`.
    pub status: String,
}

impl RestrictedCard {
    /// Status with underscores turned into spaces, e.g. `not_legal` -> `not legal`.
    pub fn status_label(&self) -> String {
        self.status.replace('_', " ").to_lowercase()
    }
}
