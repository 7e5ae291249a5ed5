use shared_types::{ExtractedField, ReferenceField};
use tracing::debug;

use crate::classify::classify_values;
use crate::model::{DocumentFields, DocumentOutcome, MatchStatus, ReconciliationResult, NOT_FOUND};

/// Pick the extracted field that answers a reference key.
///
/// Extraction often rewords labels ("Net Wt." for "Net Weight (oz)"), so a
/// key also matches when either key contains the other. An exact key wins
/// over any containment match; among containment matches the first in
/// document order wins. Blank keys never match.
pub fn find_candidate<'a>(
    reference_key: &str,
    fields: &'a [ExtractedField],
) -> Option<&'a ExtractedField> {
    if reference_key.trim().is_empty() {
        return None;
    }

    let usable = || fields.iter().filter(|f| !f.key.trim().is_empty());

    usable().find(|f| f.key == reference_key).or_else(|| {
        usable().find(|f| reference_key.contains(f.key.as_str()) || f.key.contains(reference_key))
    })
}

fn outcome_for(reference: &ReferenceField, document: &DocumentFields) -> DocumentOutcome {
    let (value, status) = match &document.fields {
        None => (String::new(), MatchStatus::PendingNoData),
        Some(fields) => match find_candidate(&reference.key, fields) {
            None => (NOT_FOUND.to_string(), MatchStatus::Error),
            Some(candidate) => (
                candidate.value.clone(),
                classify_values(&reference.value, &candidate.value),
            ),
        },
    };

    DocumentOutcome {
        document_id: document.document_id.clone(),
        value,
        status,
    }
}

/// Reconcile one reference field against every document
pub fn reconcile_field(
    reference: &ReferenceField,
    documents: &[DocumentFields],
) -> ReconciliationResult {
    let outcomes: Vec<DocumentOutcome> = documents
        .iter()
        .map(|doc| outcome_for(reference, doc))
        .collect();

    let has_error = outcomes.iter().any(|o| o.status == MatchStatus::Error);
    let has_warning = !has_error && outcomes.iter().any(|o| o.status == MatchStatus::Warning);

    ReconciliationResult {
        key: reference.key.clone(),
        reference_value: reference.value.clone(),
        category: reference.category,
        outcomes,
        has_error,
        has_warning,
    }
}

/// One result per reference field, in reference order.
///
/// No reference fields, or no documents, gives no results.
pub fn reconcile(
    reference: &[ReferenceField],
    documents: &[DocumentFields],
) -> Vec<ReconciliationResult> {
    if reference.is_empty() || documents.is_empty() {
        return Vec::new();
    }

    let results: Vec<ReconciliationResult> = reference
        .iter()
        .map(|field| reconcile_field(field, documents))
        .collect();

    debug!(
        reference_fields = reference.len(),
        documents = documents.len(),
        errors = results.iter().filter(|r| r.has_error).count(),
        "Reconciliation complete"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{FieldCategory, FieldRecord};

    fn field(key: &str, value: &str) -> FieldRecord {
        FieldRecord::new(key, value, FieldCategory::Content)
    }

    #[test]
    fn test_exact_key_preferred_over_earlier_substring() {
        let fields = vec![field("Net Weight (oz)", "12oz"), field("Net Weight", "340g")];
        let found = find_candidate("Net Weight", &fields).unwrap();
        assert_eq!(found.value, "340g");
    }

    #[test]
    fn test_substring_match_in_both_directions() {
        let fields = vec![field("Weight", "340g")];
        assert_eq!(find_candidate("Net Weight", &fields).unwrap().value, "340g");

        let fields = vec![field("Net Weight (drained)", "200g")];
        assert_eq!(find_candidate("Net Weight", &fields).unwrap().value, "200g");
    }

    #[test]
    fn test_first_substring_candidate_in_document_order() {
        let fields = vec![field("Brand Name", "Acme"), field("Name", "Acme Coffee")];
        let found = find_candidate("Product Name", &fields).unwrap();
        assert_eq!(found.key, "Name");

        let fields = vec![
            field("Product Name EN", "Acme Coffee"),
            field("Product Name CN", "阿克米咖啡"),
        ];
        let found = find_candidate("Product Name", &fields).unwrap();
        assert_eq!(found.key, "Product Name EN");
    }

    #[test]
    fn test_key_match_is_case_sensitive() {
        let fields = vec![field("net weight", "340g")];
        assert!(find_candidate("Net Weight", &fields).is_none());
    }

    #[test]
    fn test_blank_keys_never_match() {
        let fields = vec![field("", "anything"), field("  ", "else")];
        assert!(find_candidate("Net Weight", &fields).is_none());
        assert!(find_candidate(" ", &[field("Net Weight", "340g")]).is_none());
    }

    #[test]
    fn test_pending_document_outcome() {
        let result = reconcile_field(
            &field("Net Weight", "340g"),
            &[
                DocumentFields::pending("front"),
                DocumentFields::new("back", vec![field("Net Weight", "340g")]),
            ],
        );
        assert_eq!(result.outcomes[0].status, MatchStatus::PendingNoData);
        assert_eq!(result.outcomes[0].value, "");
        assert_eq!(result.outcomes[1].status, MatchStatus::Match);
        assert!(!result.has_error);
        assert!(!result.has_warning);
        assert!(result.is_pending());
    }

    #[test]
    fn test_present_but_empty_document_is_not_found() {
        let result = reconcile_field(
            &field("Net Weight", "340g"),
            &[DocumentFields::new("front", vec![])],
        );
        assert_eq!(result.outcomes[0].value, NOT_FOUND);
        assert_eq!(result.outcomes[0].status, MatchStatus::Error);
        assert!(result.has_error);
    }

    #[test]
    fn test_error_suppresses_warning_flag() {
        let docs = vec![
            DocumentFields::new("a", vec![field("Net Weight", "340g")]),
            DocumentFields::new("b", vec![field("Net Weight", "500g")]),
        ];
        let result = reconcile_field(&field("Net Weight", "340g (12oz)"), &docs);
        assert_eq!(result.outcomes[0].status, MatchStatus::Warning);
        assert_eq!(result.outcomes[1].status, MatchStatus::Error);
        assert!(result.has_error);
        assert!(!result.has_warning);
    }

    #[test]
    fn test_empty_inputs_give_empty_results() {
        let docs = vec![DocumentFields::new("a", vec![field("k", "v")])];
        assert!(reconcile(&[], &docs).is_empty());
        assert!(reconcile(&[field("k", "v")], &[]).is_empty());
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let reference = vec![field("Net Weight", "340g")];
        let docs = vec![DocumentFields::new("a", vec![field("Net Weight", "340G")])];
        let (reference_before, docs_before) = (reference.clone(), docs.clone());
        let _ = reconcile(&reference, &docs);
        assert_eq!(reference, reference_before);
        assert_eq!(docs, docs_before);
    }
}
