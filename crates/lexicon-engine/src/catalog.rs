//! Rule catalog
//!
//! Rules are validated and compiled once, when the catalog is built. A rule
//! that cannot be compiled is rejected here with a warning and never reaches
//! the matcher, so a bad pattern cannot abort a scan.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::{Match, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::patterns::KeywordEdges;
use crate::scope::{in_scope, Domain, Market};

const BUILTIN_RULES: &str = include_str!("../data/rules.json");

lazy_static! {
    static ref BUILTIN_CATALOG: RuleCatalog = {
        let load = RuleCatalog::from_json_str(BUILTIN_RULES)
            .expect("embedded rule catalog is valid JSON");
        load.catalog
    };
}

/// Rule priority, most severe first (P0 > P1 > P2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuleSeverity {
    P0,
    P1,
    P2,
}

impl RuleSeverity {
    /// Lower rank is more severe
    pub fn rank(&self) -> u8 {
        match self {
            RuleSeverity::P0 => 0,
            RuleSeverity::P1 => 1,
            RuleSeverity::P2 => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Literal phrase matched as a whole word, ignoring case
    #[default]
    Keyword,
    /// Regular expression matched ignoring case
    Regex,
}

/// A rule as declared in a catalog file, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSpec {
    pub id: String,
    pub pattern: String,
    #[serde(default)]
    pub pattern_kind: PatternKind,
    #[serde(default)]
    pub domain: Domain,
    #[serde(default)]
    pub market: Market,
    pub severity: RuleSeverity,
    pub reason: String,
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// A validated rule with its compiled matcher
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: String,
    pub pattern: String,
    pub pattern_kind: PatternKind,
    pub domain: Domain,
    pub market: Market,
    pub severity: RuleSeverity,
    pub reason: String,
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip)]
    matcher: Regex,
    #[serde(skip)]
    edges: Option<KeywordEdges>,
}

impl Rule {
    /// Validate a declared rule and compile its pattern
    pub fn compile(spec: RuleSpec) -> Result<Self, CatalogError> {
        let pattern = spec.pattern.trim();
        if pattern.is_empty() {
            return Err(CatalogError::EmptyPattern(spec.id));
        }

        let (source, edges) = match spec.pattern_kind {
            PatternKind::Keyword => (
                regex::escape(pattern),
                Some(KeywordEdges::for_keyword(pattern)),
            ),
            PatternKind::Regex => (spec.pattern.clone(), None),
        };

        let matcher = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|e| CatalogError::InvalidRegex {
                id: spec.id.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            id: spec.id,
            pattern: spec.pattern,
            pattern_kind: spec.pattern_kind,
            domain: spec.domain,
            market: spec.market,
            severity: spec.severity,
            reason: spec.reason,
            suggestion: spec.suggestion,
            source: spec.source,
            source_url: spec.source_url,
            matcher,
            edges,
        })
    }

    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }

    /// Non-empty, non-overlapping occurrences of the rule in `text`
    ///
    /// A keyword occurrence that runs into a neighbouring word is skipped and
    /// the search resumes one character later.
    pub fn find_matches<'t>(&self, text: &'t str) -> Vec<Match<'t>> {
        let Some(edges) = self.edges else {
            return self
                .matcher
                .find_iter(text)
                .filter(|m| !m.is_empty())
                .collect();
        };

        let mut found = Vec::new();
        let mut start = 0;
        while let Some(m) = self.matcher.find_at(text, start) {
            if m.is_empty() {
                break;
            }
            if edges.admits(text, m.start(), m.end()) {
                start = m.end();
                found.push(m);
            } else {
                let skipped = text[m.start()..].chars().next().map_or(1, char::len_utf8);
                start = m.start() + skipped;
            }
        }
        found
    }

    pub fn applies_to(&self, domain: Option<Domain>, market: Option<Market>) -> bool {
        in_scope(self.domain, self.market, domain, market)
    }
}

/// A rule that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRule {
    pub id: String,
    pub reason: String,
}

/// Outcome of building a catalog: the usable rules plus what was dropped
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    pub catalog: RuleCatalog,
    pub rejected: Vec<RejectedRule>,
}

/// Immutable, ordered set of compiled rules
///
/// Catalog order is significant: it breaks severity ties in the resolver.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Build a catalog, dropping every rule that fails validation
    pub fn load(specs: Vec<RuleSpec>) -> CatalogLoad {
        let mut rules = Vec::with_capacity(specs.len());
        let mut rejected = Vec::new();
        let mut seen = HashSet::new();

        for spec in specs {
            if !seen.insert(spec.id.clone()) {
                let err = CatalogError::DuplicateId(spec.id.clone());
                warn!(rule_id = %spec.id, error = %err, "Rejecting rule");
                rejected.push(RejectedRule {
                    id: spec.id,
                    reason: err.to_string(),
                });
                continue;
            }

            let id = spec.id.clone();
            match Rule::compile(spec) {
                Ok(rule) => rules.push(rule),
                Err(err) => {
                    warn!(rule_id = %id, error = %err, "Rejecting rule");
                    rejected.push(RejectedRule {
                        id,
                        reason: err.to_string(),
                    });
                }
            }
        }

        debug!(
            loaded = rules.len(),
            rejected = rejected.len(),
            "Rule catalog built"
        );

        CatalogLoad {
            catalog: RuleCatalog { rules },
            rejected,
        }
    }

    /// Parse a JSON array of rules
    pub fn from_json_str(json: &str) -> Result<CatalogLoad, CatalogError> {
        let specs: Vec<RuleSpec> = serde_json::from_str(json)?;
        Ok(Self::load(specs))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<CatalogLoad, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Packaging-copy rules shipped with the crate, built on first use
    pub fn builtin() -> &'static RuleCatalog {
        &BUILTIN_CATALOG
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Rules that apply under the given filters, with their catalog index
    pub fn rules_in_scope(
        &self,
        domain: Option<Domain>,
        market: Option<Market>,
    ) -> impl Iterator<Item = (usize, &Rule)> + '_ {
        self.rules
            .iter()
            .enumerate()
            .filter(move |(_, rule)| rule.applies_to(domain, market))
    }
}
