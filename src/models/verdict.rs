use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::normalize_format;

// ---------------------------------------------------------------------------
// LegalityStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegalityStatus {
    #[default]
    Unknown,
    Checking,
    Legal,
    Illegal,
}

impl fmt::Display for LegalityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LegalityStatus::Unknown => "unknown",
            LegalityStatus::Checking => "checking",
            LegalityStatus::Legal => "legal",
            LegalityStatus::Illegal => "illegal",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// LegalityVerdict
// ---------------------------------------------------------------------------

/// The merged result of one legality cycle.
///
/// Rebuilt from scratch on every cycle; consumers should replace their copy
/// rather than patch it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalityVerdict {
    pub status: LegalityStatus,
    pub issues: Vec<String>,
    /// Format the structural checks last ran against.
    pub local_checked_format: Option<String>,
    /// Format the restriction service was last asked about.
    pub remote_checked_format: Option<String>,
}

impl LegalityVerdict {
    /// A verdict for a deck that cannot be checked yet.
    pub fn unknown(advisory: impl Into<String>) -> Self {
        Self {
            status: LegalityStatus::Unknown,
            issues: vec![advisory.into()],
            local_checked_format: None,
            remote_checked_format: None,
        }
    }

    /// The placeholder published while a cycle is in flight.
    pub fn checking() -> Self {
        Self {
            status: LegalityStatus::Checking,
            ..Self::default()
        }
    }

    /// Resolve the final status from the merged issue list.
    pub fn resolved(
        issues: Vec<String>,
        local_checked_format: Option<String>,
        remote_checked_format: Option<String>,
    ) -> Self {
        let status = if issues.is_empty() {
            LegalityStatus::Legal
        } else {
            LegalityStatus::Illegal
        };
        Self {
            status,
            issues,
            local_checked_format,
            remote_checked_format,
        }
    }

    pub fn is_legal(&self) -> bool {
        self.status == LegalityStatus::Legal
    }

    /// True when `format` differs from what this verdict was computed for.
    ///
    /// A verdict that never finished a local pass is always stale.
    pub fn is_stale(&self, format: &str) -> bool {
        let format = normalize_format(format);
        let local_matches = self
            .local_checked_format
            .as_deref()
            .map(|f| normalize_format(f) == format)
            .unwrap_or(false);
        let remote_matches = self
            .remote_checked_format
            .as_deref()
            .map(|f| normalize_format(f) == format)
            .unwrap_or(true);
        !(local_matches && remote_matches)
    }

    /// One-line description suitable for a status badge.
    pub fn summary(&self) -> String {
        match self.status {
            LegalityStatus::Legal => "Legal".to_string(),
            LegalityStatus::Checking => "Checking legality...".to_string(),
            LegalityStatus::Unknown => "Legality unknown".to_string(),
            LegalityStatus::Illegal => match self.issues.len() {
                1 => "Not legal (1 issue)".to_string(),
                n => format!("Not legal ({n} issues)"),
            },
        }
    }
}
