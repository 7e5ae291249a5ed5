//! Deterministic structural checks on extracted text

use shared_types::{DeterministicFinding, DeterministicKind, IssueSeverity};

use crate::patterns::{extract_context, CharMap};

pub const BRACKET_PAIRING: &str = "bracket-pairing";

const BRACKET_PAIRS: &[(char, char)] = &[
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('（', '）'),
    ('【', '】'),
    ('《', '》'),
    ('「', '」'),
    ('『', '』'),
];

fn closer_for(opener: char) -> Option<char> {
    BRACKET_PAIRS
        .iter()
        .find(|(open, _)| *open == opener)
        .map(|(_, close)| *close)
}

fn is_closer(c: char) -> bool {
    BRACKET_PAIRS.iter().any(|(_, close)| *close == c)
}

/// Report every closing bracket without a matching opener and every opener
/// left unclosed, in text order
pub fn check_bracket_pairing(text: &str) -> Vec<DeterministicFinding> {
    let map = CharMap::new(text);
    let mut open: Vec<(char, usize)> = Vec::new();
    let mut findings = Vec::new();

    for (position, c) in text.chars().enumerate() {
        if closer_for(c).is_some() {
            open.push((c, position));
            continue;
        }
        if !is_closer(c) {
            continue;
        }

        let matches_top = open
            .last()
            .and_then(|(opener, _)| closer_for(*opener))
            .is_some_and(|expected| expected == c);

        if matches_top {
            open.pop();
        } else {
            let description = match open.last() {
                Some((opener, _)) => format!("Closing '{}' does not match open '{}'", c, opener),
                None => format!("Closing '{}' has no matching opening bracket", c),
            };
            findings.push(bracket_finding(
                text,
                &map,
                position,
                description,
                IssueSeverity::Medium,
            ));
        }
    }

    for (opener, position) in open {
        findings.push(bracket_finding(
            text,
            &map,
            position,
            format!("Opening '{}' is never closed", opener),
            IssueSeverity::Low,
        ));
    }

    findings.sort_by_key(|f| f.position);
    findings
}

fn bracket_finding(
    text: &str,
    map: &CharMap,
    position: usize,
    description: String,
    severity: IssueSeverity,
) -> DeterministicFinding {
    DeterministicFinding {
        id: format!("deterministic-{}-{}", BRACKET_PAIRING, position),
        kind: DeterministicKind::Deterministic,
        check: BRACKET_PAIRING.to_string(),
        description,
        severity,
        position,
        context: extract_context(text, map, position, position + 1),
    }
}
