//! Hit resolver: collapses competing hits so each location reports once

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::matcher::Hit;

/// Which hits compete with each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Only hits starting at the same offset compete. Overlapping spans with
    /// different starts are all kept.
    #[default]
    ExactOffset,
    /// A hit that overlaps the current survivor competes with it; a hit that
    /// only overlapped a displaced one is judged on its own
    MergeOverlapping,
}

/// Severity first, catalog order second
fn precedence(hit: &Hit<'_>) -> (u8, usize) {
    (hit.rule.severity.rank(), hit.rule_index)
}

/// Keep one hit per offset (or per overlapping cluster), the most severe,
/// sorted by offset
pub fn resolve_hits<'c>(hits: Vec<Hit<'c>>, policy: OverlapPolicy) -> Vec<Hit<'c>> {
    let by_offset = collapse_same_offset(hits);
    match policy {
        OverlapPolicy::ExactOffset => by_offset,
        OverlapPolicy::MergeOverlapping => collapse_overlapping(by_offset),
    }
}

fn collapse_same_offset(hits: Vec<Hit<'_>>) -> Vec<Hit<'_>> {
    let mut best: BTreeMap<usize, Hit<'_>> = BTreeMap::new();

    for hit in hits {
        let wins = best
            .get(&hit.position)
            .map_or(true, |current| precedence(&hit) < precedence(current));
        if wins {
            best.insert(hit.position, hit);
        }
    }

    best.into_values().collect()
}

/// Expects hits sorted by offset with unique offsets
fn collapse_overlapping(hits: Vec<Hit<'_>>) -> Vec<Hit<'_>> {
    let mut resolved: Vec<Hit<'_>> = Vec::with_capacity(hits.len());

    for hit in hits {
        let overlaps = resolved
            .last()
            .is_some_and(|winner| hit.position < winner.end());
        if !overlaps {
            resolved.push(hit);
            continue;
        }

        if let Some(winner) = resolved.last_mut() {
            if precedence(&hit) < precedence(winner) {
                *winner = hit;
            }
        }
    }

    resolved
}
