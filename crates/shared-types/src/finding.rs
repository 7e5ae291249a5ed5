//! Review findings
//!
//! Three structurally different kinds of finding reach the review surface:
//! rule-based lexicon hits, free-form suggestions from an external model, and
//! deterministic structural checks. They share a small interface so that
//! ordering and counting are written once.

use serde::{Deserialize, Serialize};

use crate::types::{Confidence, Issue, IssueSeverity};

/// Common view over every finding variant
pub trait ReviewFinding {
    fn id(&self) -> &str;

    fn severity(&self) -> IssueSeverity;

    /// One-line description of what is wrong
    fn description(&self) -> &str;

    /// Surrounding text, if the finding is anchored in the scanned text
    fn context(&self) -> Option<&str>;

    fn confidence(&self) -> Confidence;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AiSuggestionKind {
    AiSuggestion,
}

/// Issue proposed by an external model. Never certain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AiSuggestionKind,
    pub original: String,
    pub problem: String,
    pub suggestion: String,
    pub severity: IssueSeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl AiSuggestion {
    pub fn new(
        id: impl Into<String>,
        original: impl Into<String>,
        problem: impl Into<String>,
        suggestion: impl Into<String>,
        severity: IssueSeverity,
    ) -> Self {
        Self {
            id: id.into(),
            kind: AiSuggestionKind::AiSuggestion,
            original: original.into(),
            problem: problem.into(),
            suggestion: suggestion.into(),
            severity,
            location: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeterministicKind {
    Deterministic,
}

/// Result of a structural check such as bracket pairing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeterministicFinding {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DeterministicKind,
    pub check: String, // e.g., "bracket-pairing"
    pub description: String,
    pub severity: IssueSeverity,
    pub position: usize,
    pub context: String,
}

/// Closed set of finding variants shown on the review surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Finding {
    Lexicon(Issue),
    AiSuggestion(AiSuggestion),
    Deterministic(DeterministicFinding),
}

impl ReviewFinding for Issue {
    fn id(&self) -> &str {
        &self.id
    }

    fn severity(&self) -> IssueSeverity {
        self.severity
    }

    fn description(&self) -> &str {
        &self.problem
    }

    fn context(&self) -> Option<&str> {
        Some(&self.context)
    }

    fn confidence(&self) -> Confidence {
        self.confidence
    }
}

impl ReviewFinding for AiSuggestion {
    fn id(&self) -> &str {
        &self.id
    }

    fn severity(&self) -> IssueSeverity {
        self.severity
    }

    fn description(&self) -> &str {
        &self.problem
    }

    fn context(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn confidence(&self) -> Confidence {
        Confidence::NeedsConfirmation
    }
}

impl ReviewFinding for DeterministicFinding {
    fn id(&self) -> &str {
        &self.id
    }

    fn severity(&self) -> IssueSeverity {
        self.severity
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn context(&self) -> Option<&str> {
        Some(&self.context)
    }

    fn confidence(&self) -> Confidence {
        Confidence::Certain
    }
}

impl Finding {
    fn inner(&self) -> &dyn ReviewFinding {
        match self {
            Finding::Lexicon(issue) => issue,
            Finding::AiSuggestion(suggestion) => suggestion,
            Finding::Deterministic(finding) => finding,
        }
    }
}

impl ReviewFinding for Finding {
    fn id(&self) -> &str {
        self.inner().id()
    }

    fn severity(&self) -> IssueSeverity {
        self.inner().severity()
    }

    fn description(&self) -> &str {
        self.inner().description()
    }

    fn context(&self) -> Option<&str> {
        self.inner().context()
    }

    fn confidence(&self) -> Confidence {
        self.inner().confidence()
    }
}

impl From<Issue> for Finding {
    fn from(issue: Issue) -> Self {
        Finding::Lexicon(issue)
    }
}

impl From<AiSuggestion> for Finding {
    fn from(suggestion: AiSuggestion) -> Self {
        Finding::AiSuggestion(suggestion)
    }
}

impl From<DeterministicFinding> for Finding {
    fn from(finding: DeterministicFinding) -> Self {
        Finding::Deterministic(finding)
    }
}

/// Order findings high severity first; equal severities keep their order.
pub fn sort_findings(findings: &mut [Finding]) {
    findings.sort_by_key(|f| f.severity());
}

/// Counts shown above the finding list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingSummary {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub certain: usize,
    pub needs_confirmation: usize,
}

impl FindingSummary {
    pub fn from_findings<F: ReviewFinding>(findings: &[F]) -> Self {
        let mut summary = Self::default();
        for finding in findings {
            summary.total += 1;
            match finding.severity() {
                IssueSeverity::High => summary.high += 1,
                IssueSeverity::Medium => summary.medium += 1,
                IssueSeverity::Low => summary.low += 1,
            }
            match finding.confidence() {
                Confidence::Certain => summary.certain += 1,
                Confidence::NeedsConfirmation => summary.needs_confirmation += 1,
            }
        }
        summary
    }
}
