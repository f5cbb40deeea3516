use crate::domain::model::{AnalysisOutcome, AnalysisResult, TypeTag};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Scans a collection of loosely-typed records and builds a unified property
/// inventory: every distinct top-level property in first-appearance order, the
/// set of type tags observed per property, and the first-seen sample value.
///
/// Degenerate inputs never fail the call; they come back as an `outcome` on
/// the result. Records that are not objects (scalars, arrays, null) count
/// toward `length` but contribute no properties. Only a record's own top-level
/// keys are inspected; values are never traversed recursively.
pub fn analyze(input: Option<&Value>) -> AnalysisResult {
    let input_kind = match input {
        None => "null",
        Some(value) => TypeTag::of(value).as_str(),
    };
    let mut result = AnalysisResult::empty(matches!(input, Some(Value::Array(_))), input_kind);

    let items = match input {
        None | Some(Value::Null) => {
            result.outcome = Some(AnalysisOutcome::Error(
                "input is null or undefined".to_string(),
            ));
            return result;
        }
        Some(Value::Array(items)) => items,
        Some(other) => {
            result.outcome = Some(AnalysisOutcome::Error("input is not an array".to_string()));
            result.actual_value = Some(other.clone());
            return result;
        }
    };

    if items.is_empty() {
        result.outcome = Some(AnalysisOutcome::Note("input array is empty".to_string()));
        return result;
    }

    result.length = items.len();

    // Local accumulators, threaded through the scan and returned.
    let mut properties: Vec<String> = Vec::new();
    let mut property_types: BTreeMap<String, BTreeSet<TypeTag>> = BTreeMap::new();
    let mut sample_values: BTreeMap<String, Value> = BTreeMap::new();

    for item in items {
        let Value::Object(fields) = item else {
            continue;
        };
        for (name, value) in fields {
            if !property_types.contains_key(name) {
                properties.push(name.clone());
            }
            property_types
                .entry(name.clone())
                .or_default()
                .insert(TypeTag::of(value));
            // First-write-wins: the sample is never overwritten once set.
            sample_values
                .entry(name.clone())
                .or_insert_with(|| value.clone());
        }
    }

    result.properties = properties;
    result.property_types = property_types;
    result.sample_values = sample_values;
    result
}

/// Name-only pass over the same input: returns the deduplicated property-name
/// set in first-appearance order, with a line-per-record diagnostic trace.
/// Degenerate inputs all collapse to an empty result here.
pub fn list_properties(input: Option<&Value>) -> Vec<String> {
    let Some(value) = input else {
        tracing::warn!("input is null or undefined");
        return Vec::new();
    };
    if value.is_null() {
        tracing::warn!("input is null or undefined");
        return Vec::new();
    }
    let Value::Array(items) = value else {
        tracing::warn!("input is not an array");
        return Vec::new();
    };
    if items.is_empty() {
        tracing::warn!("input array is empty");
        return Vec::new();
    }

    tracing::info!("input array length: {}", items.len());

    let mut seen: HashSet<String> = HashSet::new();
    let mut properties: Vec<String> = Vec::new();

    for (index, item) in items.iter().enumerate() {
        tracing::debug!("--- item {} ---", index);

        if let Value::Object(fields) = item {
            let names: Vec<&str> = fields.keys().map(String::as_str).collect();
            tracing::debug!("properties: {:?}", names);

            for (name, value) in fields {
                if seen.insert(name.clone()) {
                    properties.push(name.clone());
                }
                tracing::debug!("{}: {}", name, value);
            }
        } else {
            tracing::debug!("item is not an object: {}", item);
        }
    }

    tracing::info!("all unique properties found: {:?}", properties);
    properties
}
