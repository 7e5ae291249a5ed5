//! Lexicon matcher: scans text against every in-scope catalog rule

use tracing::debug;

use crate::catalog::{Rule, RuleCatalog};
use crate::patterns::{extract_context, CharMap};
use crate::scope::{Domain, Market};

/// One occurrence of a rule's pattern in the scanned text
#[derive(Debug, Clone)]
pub struct Hit<'c> {
    pub rule: &'c Rule,
    /// Position of the rule in its catalog, used to break severity ties
    pub rule_index: usize,
    pub matched_text: String,
    /// Character offset of the first matched character
    pub position: usize,
    /// Matched length in characters
    pub length: usize,
    pub context: String,
}

impl Hit<'_> {
    /// Character offset one past the last matched character
    pub fn end(&self) -> usize {
        self.position + self.length
    }
}

/// Find every non-overlapping occurrence of every in-scope rule
///
/// Hits come back grouped by rule in catalog order, then by position. Empty
/// text yields no hits.
pub fn match_text<'c>(
    catalog: &'c RuleCatalog,
    text: &str,
    domain: Option<Domain>,
    market: Option<Market>,
) -> Vec<Hit<'c>> {
    let mut hits = Vec::new();
    if text.is_empty() {
        return hits;
    }

    let map = CharMap::new(text);

    for (rule_index, rule) in catalog.rules_in_scope(domain, market) {
        for m in rule.find_matches(text) {
            let position = map.char_offset(m.start());
            let end = map.char_offset(m.end());
            hits.push(Hit {
                rule,
                rule_index,
                matched_text: m.as_str().to_string(),
                position,
                length: end - position,
                context: extract_context(text, &map, position, end),
            });
        }
    }

    debug!(
        rules = catalog.len(),
        chars = map.len(),
        hits = hits.len(),
        "Lexicon scan complete"
    );

    hits
}
