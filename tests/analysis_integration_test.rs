use record_profiler::{analyze, list_properties, AnalysisOutcome, TypeTag};
use serde_json::{json, Value};
use std::collections::BTreeSet;

#[test]
fn test_property_set_is_first_appearance_union_of_object_records() {
    let input = json!([
        { "id": 1, "name": "first" },
        "scalar in between",
        { "name": "second", "score": 9.5 },
        null,
        { "id": 2, "tags": ["a"] }
    ]);

    let result = analyze(Some(&input));

    assert_eq!(result.length, 5);
    assert_eq!(result.properties, vec!["id", "name", "score", "tags"]);
    assert_eq!(result.properties, list_properties(Some(&input)));
}

#[test]
fn test_property_types_collect_every_observed_tag() {
    let input = json!([
        { "value": "text" },
        { "value": 12 },
        { "value": true },
        { "value": null }
    ]);

    let result = analyze(Some(&input));

    assert_eq!(
        result.property_types["value"],
        BTreeSet::from([
            TypeTag::String,
            TypeTag::Number,
            TypeTag::Boolean,
            TypeTag::Null
        ])
    );
    assert_eq!(result.sample_values["value"], json!("text"));
}

#[test]
fn test_degenerate_inputs_produce_structured_outcomes() {
    let null_result = analyze(None);
    assert!(matches!(
        null_result.outcome,
        Some(AnalysisOutcome::Error(_))
    ));
    assert_eq!(null_result.length, 0);

    let scalar = json!(42);
    let scalar_result = analyze(Some(&scalar));
    assert!(matches!(
        scalar_result.outcome,
        Some(AnalysisOutcome::Error(_))
    ));
    assert_eq!(scalar_result.actual_value, Some(scalar));
    assert_eq!(scalar_result.input_kind, "number");

    let empty_result = analyze(Some(&json!([])));
    assert!(matches!(empty_result.outcome, Some(AnalysisOutcome::Note(_))));
}

#[test]
fn test_analysis_is_deterministic_for_identical_input_order() {
    let input = json!([
        { "z": 1, "a": 2 },
        { "m": 3 }
    ]);

    let first = analyze(Some(&input));
    let second = analyze(Some(&input));

    assert_eq!(first, second);
}

#[test]
fn test_analysis_serialization_uses_spec_field_names() {
    let input = json!([{ "contentId": "content-123", "count": 1 }]);

    let serialized = serde_json::to_value(analyze(Some(&input))).unwrap();

    assert_eq!(serialized["isArray"], json!(true));
    assert_eq!(serialized["inputKind"], json!("array"));
    assert_eq!(serialized["propertyTypes"]["contentId"], json!(["string"]));
    assert_eq!(serialized["sampleValues"]["count"], json!(1));
    // No outcome key for a healthy input.
    assert!(serialized.get("outcome").is_none());
    assert!(serialized.get("actualValue").is_none());
}

#[test]
fn test_top_level_keys_only_no_recursive_traversal() {
    let input = json!([
        { "outer": { "inner": 1, "deep": { "deeper": 2 } } }
    ]);

    let result = analyze(Some(&input));

    assert_eq!(result.properties, vec!["outer"]);
    assert!(!result.property_types.contains_key("inner"));
    assert_eq!(
        result.property_types["outer"],
        BTreeSet::from([TypeTag::Object])
    );
}

#[test]
fn test_analysis_result_round_trips_through_json() {
    let input = json!([{ "a": 1, "b": "x" }, { "a": null }]);
    let result = analyze(Some(&input));

    let serialized = serde_json::to_string(&result).unwrap();
    let restored: record_profiler::AnalysisResult = serde_json::from_str(&serialized).unwrap();

    assert_eq!(restored, result);
}

#[test]
fn test_list_properties_ignores_non_object_items() {
    let input: Value = json!([1, "two", [3], { "only": true }]);

    assert_eq!(list_properties(Some(&input)), vec!["only"]);
}
