pub mod finding;
pub mod types;

pub use finding::{
    sort_findings, AiSuggestion, AiSuggestionKind, DeterministicFinding, DeterministicKind,
    Finding, FindingSummary, ReviewFinding,
};
pub use types::{
    Confidence, ExtractedField, FieldCategory, FieldRecord, Issue, IssueKind, IssueSeverity,
    ReferenceField,
};
