//! Issue formatter: turns resolved hits into display-ready issues

use shared_types::{Confidence, Issue, IssueKind, IssueSeverity};

use crate::catalog::RuleSeverity;
use crate::matcher::Hit;

impl From<RuleSeverity> for IssueSeverity {
    fn from(severity: RuleSeverity) -> Self {
        match severity {
            RuleSeverity::P0 => IssueSeverity::High,
            RuleSeverity::P1 => IssueSeverity::Medium,
            RuleSeverity::P2 => IssueSeverity::Low,
        }
    }
}

/// Build the issue for one hit. Lexicon issues are always `Certain`.
pub fn format_issue(hit: &Hit<'_>) -> Issue {
    Issue {
        id: format!("lexicon-{}-{}", hit.rule.id, hit.position),
        kind: IssueKind::Lexicon,
        rule_id: hit.rule.id.clone(),
        original: hit.matched_text.clone(),
        problem: hit.rule.reason.clone(),
        suggestion: hit.rule.suggestion.clone(),
        severity: hit.rule.severity.into(),
        confidence: Confidence::Certain,
        position: hit.position,
        context: hit.context.clone(),
        source: hit.rule.source.clone(),
        source_url: hit.rule.source_url.clone(),
    }
}

pub fn format_issues(hits: &[Hit<'_>]) -> Vec<Issue> {
    hits.iter().map(format_issue).collect()
}
