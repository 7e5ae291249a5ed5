use serde::{Deserialize, Serialize};
use shared_types::{ExtractedField, FieldCategory};

/// Value reported for a reference field that no extracted field matched
pub const NOT_FOUND: &str = "(not found)";

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Extracted fields for one uploaded document.
///
/// `fields` is `None` while the document's extraction has not produced
/// anything yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFields {
    pub document_id: String,
    #[serde(default)]
    pub fields: Option<Vec<ExtractedField>>,
}

impl DocumentFields {
    pub fn new(document_id: impl Into<String>, fields: Vec<ExtractedField>) -> Self {
        Self {
            document_id: document_id.into(),
            fields: Some(fields),
        }
    }

    pub fn pending(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            fields: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStatus {
    Match,
    Warning,
    Error,
    PendingNoData,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Match => write!(f, "match"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::PendingNoData => write!(f, "pending-no-data"),
        }
    }
}

/// How one document fared against one reference field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentOutcome {
    pub document_id: String,
    pub value: String,
    pub status: MatchStatus,
}

/// All document outcomes for one reference field, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationResult {
    pub key: String,
    pub reference_value: String,
    pub category: FieldCategory,
    pub outcomes: Vec<DocumentOutcome>,
    pub has_error: bool,
    /// Set only when no outcome is an error
    pub has_warning: bool,
}

impl ReconciliationResult {
    pub fn is_pending(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| o.status == MatchStatus::PendingNoData)
    }
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconSummary {
    pub match_count: usize,
    pub warning_count: usize,
    pub error_count: usize,
    pub pending_count: usize,
    pub total_count: usize,
    pub all_pass: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconReport {
    pub summary: ReconSummary,
    /// Sorted for review: errors, then warnings, then the rest
    pub results: Vec<ReconciliationResult>,
}
