pub mod catalog;
pub mod error;
pub mod formatter;
pub mod matcher;
pub mod patterns;
pub mod resolver;
pub mod scope;
pub mod structural;

pub use catalog::{
    CatalogLoad, PatternKind, RejectedRule, Rule, RuleCatalog, RuleSeverity, RuleSpec,
};
pub use error::CatalogError;
pub use matcher::{match_text, Hit};
pub use resolver::{resolve_hits, OverlapPolicy};
pub use scope::{Domain, Market};

use serde::{Deserialize, Serialize};
use shared_types::{Finding, Issue};

/// Per-call scan settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOptions {
    #[serde(default)]
    pub domain: Option<Domain>,
    #[serde(default)]
    pub market: Option<Market>,
    #[serde(default)]
    pub overlap_policy: OverlapPolicy,
}

/// LexiconEngine entry point
pub struct LexiconEngine<'c> {
    catalog: &'c RuleCatalog,
}

impl<'c> LexiconEngine<'c> {
    pub fn new(catalog: &'c RuleCatalog) -> Self {
        Self { catalog }
    }

    /// Engine over the built-in catalog
    pub fn builtin() -> LexiconEngine<'static> {
        LexiconEngine::new(RuleCatalog::builtin())
    }

    pub fn catalog(&self) -> &'c RuleCatalog {
        self.catalog
    }

    /// Match, resolve and format: one issue per surviving hit, by offset
    pub fn check_text(&self, text: &str, options: &ScanOptions) -> Vec<Issue> {
        let hits = match_text(self.catalog, text, options.domain, options.market);
        let resolved = resolve_hits(hits, options.overlap_policy);
        formatter::format_issues(&resolved)
    }

    /// Lexicon issues followed by structural findings
    pub fn review_text(&self, text: &str, options: &ScanOptions) -> Vec<Finding> {
        let mut findings: Vec<Finding> = self
            .check_text(text, options)
            .into_iter()
            .map(Finding::from)
            .collect();
        findings.extend(
            structural::check_bracket_pairing(text)
                .into_iter()
                .map(Finding::from),
        );
        findings
    }
}

impl Default for LexiconEngine<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}
