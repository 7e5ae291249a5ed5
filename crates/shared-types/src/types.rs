use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    High,
    Medium,
    Low,
}

impl IssueSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueSeverity::High => "high",
            IssueSeverity::Medium => "medium",
            IssueSeverity::Low => "low",
        }
    }
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far a finding can be trusted without a human looking at it.
///
/// Rule-based and deterministic findings are always `Certain`; anything
/// produced by a model is `NeedsConfirmation`. Downstream code tells the two
/// apart by this field alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Confidence {
    Certain,
    NeedsConfirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Lexicon,
}

/// Display-ready record for one lexicon hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub rule_id: String,
    pub original: String, // Matched text as it appears in the scanned text
    pub problem: String,
    pub suggestion: String,
    pub severity: IssueSeverity,
    pub confidence: Confidence,
    pub position: usize, // Character offset into the scanned text
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldCategory {
    #[default]
    Content,
    Compliance,
    Specs,
}

/// A key/value/category triple, either authoritative (reference) or
/// recognised from one uploaded document (extracted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub category: FieldCategory,
}

impl FieldRecord {
    pub fn new(key: impl Into<String>, value: impl Into<String>, category: FieldCategory) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            category,
        }
    }
}

pub type ReferenceField = FieldRecord;
pub type ExtractedField = FieldRecord;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_orders_high_first() {
        let mut severities = vec![IssueSeverity::Low, IssueSeverity::High, IssueSeverity::Medium];
        severities.sort();
        assert_eq!(
            severities,
            vec![IssueSeverity::High, IssueSeverity::Medium, IssueSeverity::Low]
        );
    }

    #[test]
    fn test_confidence_wire_names() {
        assert_eq!(
            serde_json::to_string(&Confidence::NeedsConfirmation).unwrap(),
            "\"needs-confirmation\""
        );
        assert_eq!(serde_json::to_string(&Confidence::Certain).unwrap(), "\"certain\"");
    }

    #[test]
    fn test_field_category_defaults_to_content() {
        let field: FieldRecord =
            serde_json::from_str(r#"{"key":"净含量","value":"500g"}"#).unwrap();
        assert_eq!(field.category, FieldCategory::Content);
        assert_eq!(field.key, "净含量");
    }

    #[test]
    fn test_issue_serializes_type_tag() {
        let issue = Issue {
            id: "lexicon-r1-0".to_string(),
            kind: IssueKind::Lexicon,
            rule_id: "r1".to_string(),
            original: "cure".to_string(),
            problem: "Medical claim".to_string(),
            suggestion: "Remove".to_string(),
            severity: IssueSeverity::High,
            confidence: Confidence::Certain,
            position: 0,
            context: "cure acne...".to_string(),
            source: None,
            source_url: None,
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "lexicon");
        assert_eq!(json["ruleId"], "r1");
        assert!(json.get("sourceUrl").is_none());
    }
}
