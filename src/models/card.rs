use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LegalityError, Result};

// ---------------------------------------------------------------------------
// CardLegalityInfo — one deck line as seen by the structural checkers
// ---------------------------------------------------------------------------

/// A single line item of a deck being validated.
///
/// Lines sharing a `canonical_name` are counted together by the copy-limit
/// check regardless of printing or zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardLegalityInfo {
    /// Identifier of the specific printing.
    pub id: String,
    pub canonical_name: String,
    pub quantity: u32,
    #[serde(default)]
    pub is_commander: bool,
    #[serde(default)]
    pub is_sideboard: bool,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub color_identity: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub oracle_text: String,
}

impl CardLegalityInfo {
    /// Create a mainboard line with no type, colors, keywords or rules text.
    pub fn new(id: impl Into<String>, canonical_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            canonical_name: canonical_name.into(),
            quantity,
            is_commander: false,
            is_sideboard: false,
            type_line: String::new(),
            color_identity: Vec::new(),
            keywords: Vec::new(),
            oracle_text: String::new(),
        }
    }

    /// Move this line into the command zone.
    pub fn commander(mut self) -> Self {
        self.is_commander = true;
        self.is_sideboard = false;
        self
    }

    /// Move this line into the sideboard.
    pub fn sideboard(mut self) -> Self {
        self.is_sideboard = true;
        self.is_commander = false;
        self
    }

    pub fn with_type_line(mut self, type_line: impl Into<String>) -> Self {
        self.type_line = type_line.into();
        self
    }

    /// Set the color identity. Duplicate codes are collapsed.
    pub fn with_color_identity(mut self, colors: &[&str]) -> Self {
        let mut identity: Vec<String> = Vec::with_capacity(colors.len());
        for c in colors {
            if !identity.iter().any(|existing| existing == c) {
                identity.push(c.to_string());
            }
        }
        self.color_identity = identity;
        self
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn with_oracle_text(mut self, text: impl Into<String>) -> Self {
        self.oracle_text = text.into();
        self
    }

    /// True for lines that are neither in the sideboard nor the command zone.
    pub fn is_mainboard(&self) -> bool {
        !self.is_commander && !self.is_sideboard
    }

    /// Build a line from Scryfall-shaped card JSON.
    ///
    /// Multi-faced cards carry their rules text and type lines on
    /// `card_faces`; when the top-level field is missing the face values are
    /// joined with `" // "` (type line) or a blank line (oracle text). Image
    /// and price fields are ignored.
    pub fn from_card_json(
        card: &Value,
        quantity: u32,
        is_commander: bool,
        is_sideboard: bool,
    ) -> Result<Self> {
        if quantity == 0 {
            return Err(LegalityError::InvalidArgument(
                "deck line quantity must be at least 1".into(),
            ));
        }

        let id = str_field(card, "id").ok_or_else(|| {
            LegalityError::InvalidArgument("card JSON is missing \"id\"".into())
        })?;
        let name = str_field(card, "name").ok_or_else(|| {
            LegalityError::InvalidArgument(format!("card {} is missing \"name\"", id))
        })?;

        let faces: &[Value] = card
            .get("card_faces")
            .and_then(|v| v.as_array())
            .map(|a| a.as_slice())
            .unwrap_or(&[]);

        let type_line = str_field(card, "type_line")
            .map(|s| s.to_string())
            .unwrap_or_else(|| join_faces(faces, "type_line", " // "));
        let oracle_text = str_field(card, "oracle_text")
            .map(|s| s.to_string())
            .unwrap_or_else(|| join_faces(faces, "oracle_text", "\n\n"));

        Ok(Self {
            id: id.to_string(),
            canonical_name: name.to_string(),
            quantity,
            is_commander,
            is_sideboard: is_sideboard && !is_commander,
            type_line,
            color_identity: str_list(card, "color_identity"),
            keywords: str_list(card, "keywords"),
            oracle_text,
        })
    }
}

// ---------------------------------------------------------------------------
// DeckSnapshot — the input of one legality cycle
// ---------------------------------------------------------------------------

/// An immutable view of a deck at the moment a legality cycle starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSnapshot {
    /// Persisted deck identifier, `None` until the deck has been saved.
    pub deck_id: Option<String>,
    pub format: String,
    #[serde(default)]
    pub cards: Vec<CardLegalityInfo>,
}

impl DeckSnapshot {
    pub fn new(deck_id: Option<&str>, format: &str, cards: Vec<CardLegalityInfo>) -> Self {
        Self {
            deck_id: deck_id.map(|s| s.to_string()),
            format: format.to_string(),
            cards,
        }
    }

    /// Total quantity of non-sideboard lines.
    ///
    /// Command-zone lines are included only when `include_commanders` is set.
    pub fn mainboard_count(&self, include_commanders: bool) -> u32 {
        self.cards
            .iter()
            .filter(|c| !c.is_sideboard)
            .filter(|c| include_commanders || !c.is_commander)
            .fold(0u32, |total, c| total.saturating_add(c.quantity))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(|v| v.as_str())
}

fn str_list(value: &Value, key: &str) -> Vec<String> {
    match value.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(|s| s.to_string())
            .collect(),
        // Some exports flatten lists to "W, U"
        Some(Value::String(s)) => s
            .split(',')
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(|p| p.to_string())
            .collect(),
        _ => Vec::new(),
    }
}

fn join_faces(faces: &[Value], key: &str, sep: &str) -> String {
    faces
        .iter()
        .filter_map(|f| str_field(f, key))
        .collect::<Vec<_>>()
        .join(sep)
}
