use field_recon::{
    build_report, reconcile, sort_for_review, DocumentFields, MatchStatus, NOT_FOUND,
};
use pretty_assertions::assert_eq;
use shared_types::{FieldCategory, FieldRecord};

fn field(key: &str, value: &str, category: FieldCategory) -> FieldRecord {
    FieldRecord::new(key, value, category)
}

#[test]
fn net_content_differing_only_in_case_matches() {
    let reference = vec![field("净含量", "500g", FieldCategory::Specs)];
    let docs = vec![DocumentFields::new(
        "front.png",
        vec![field("净含量", "500G", FieldCategory::Specs)],
    )];

    let results = reconcile(&reference, &docs);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].outcomes[0].status, MatchStatus::Match);
    assert_eq!(results[0].outcomes[0].value, "500G");
    assert!(!results[0].has_error);
    assert!(!results[0].has_warning);
}

#[test]
fn partial_net_weight_is_a_warning() {
    let reference = vec![field("Net Weight", "340g (12oz)", FieldCategory::Specs)];
    let docs = vec![DocumentFields::new(
        "back.png",
        vec![field("Net Weight", "340g", FieldCategory::Specs)],
    )];

    let results = reconcile(&reference, &docs);

    assert_eq!(results[0].outcomes[0].status, MatchStatus::Warning);
    assert!(results[0].has_warning);
    assert!(!results[0].has_error);
}

#[test]
fn missing_ingredients_is_not_found_in_every_document() {
    let reference = vec![field(
        "Ingredients",
        "100% Arabica Coffee Beans",
        FieldCategory::Content,
    )];
    let docs = vec![
        DocumentFields::new("front.png", vec![field("Brand", "Acme", FieldCategory::Content)]),
        DocumentFields::new(
            "side.png",
            vec![field("Net Weight", "340g", FieldCategory::Specs)],
        ),
    ];

    let results = reconcile(&reference, &docs);

    assert_eq!(results[0].outcomes.len(), 2);
    for outcome in &results[0].outcomes {
        assert_eq!(outcome.status, MatchStatus::Error);
        assert_eq!(outcome.value, NOT_FOUND);
    }
    assert!(results[0].has_error);
}

#[test]
fn batch_report_orders_errors_first_and_counts() {
    let reference = vec![
        field("Brand", "Acme", FieldCategory::Content),
        field("Net Weight", "340g (12oz)", FieldCategory::Specs),
        field("Ingredients", "100% Arabica Coffee Beans", FieldCategory::Content),
        field("Recycling", "PP 5", FieldCategory::Compliance),
    ];
    let docs = vec![
        DocumentFields::new(
            "front.png",
            vec![
                field("Brand", "ACME", FieldCategory::Content),
                field("Net Wt", "340g", FieldCategory::Specs),
                field("Recycling Code", "pp 5", FieldCategory::Compliance),
            ],
        ),
        DocumentFields::pending("back.png"),
    ];

    let report = build_report(&reconcile(&reference, &docs));

    // "Net Wt" is not a substring of "Net Weight" (nor the reverse)
    let keys: Vec<&str> = report.results.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["Net Weight", "Ingredients", "Brand", "Recycling"]);

    assert_eq!(report.summary.error_count, 2);
    assert_eq!(report.summary.warning_count, 0);
    assert_eq!(report.summary.pending_count, 2);
    assert_eq!(report.summary.total_count, 4);
    assert!(!report.summary.all_pass);

    let brand = report.results.iter().find(|r| r.key == "Brand").unwrap();
    assert_eq!(brand.outcomes[1].status, MatchStatus::PendingNoData);
}

#[test]
fn rerunning_on_same_input_is_identical() {
    let reference = vec![field("Net Weight", "340g (12oz)", FieldCategory::Specs)];
    let docs = vec![DocumentFields::new(
        "a",
        vec![field("Net Weight", "340g", FieldCategory::Specs)],
    )];
    assert_eq!(reconcile(&reference, &docs), reconcile(&reference, &docs));
    assert_eq!(
        sort_for_review(&reconcile(&reference, &docs)),
        reconcile(&reference, &docs)
    );
}

#[test]
fn report_serializes_with_camel_case_names() {
    let reference = vec![field("Net Weight", "340g", FieldCategory::Specs)];
    let docs = vec![DocumentFields::pending("a")];
    let report = build_report(&reconcile(&reference, &docs));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["summary"]["allPass"], true);
    assert_eq!(json["results"][0]["hasError"], false);
    assert_eq!(json["results"][0]["outcomes"][0]["status"], "pending-no-data");
    assert_eq!(json["results"][0]["category"], "specs");
}
