use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Coarse classification of a value's kind, used for profiling only.
///
/// One tag set serves both analysis passes; `Array` is kept distinct from
/// `Object` rather than folding both into a generic structured tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Null,
}

impl TypeTag {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
            Value::Null => Self::Null,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Null => "null",
        }
    }
}

/// Degenerate-input verdict attached to an analysis. Absent for normal inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "message")]
pub enum AnalysisOutcome {
    Error(String),
    Note(String),
}

/// Unified description of a record collection: which properties exist, what
/// types each takes, and a first-seen sample per property.
///
/// `properties` follows first-appearance order across the scan; the two maps
/// are keyed alphabetically for deterministic serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub is_array: bool,
    pub length: usize,
    pub input_kind: String,
    pub properties: Vec<String>,
    pub property_types: BTreeMap<String, BTreeSet<TypeTag>>,
    pub sample_values: BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<AnalysisOutcome>,
    /// Raw input echoed back for caller inspection, only on the non-array error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_value: Option<Value>,
}

impl AnalysisResult {
    pub fn empty(is_array: bool, input_kind: &str) -> Self {
        Self {
            is_array,
            length: 0,
            input_kind: input_kind.to_string(),
            properties: Vec::new(),
            property_types: BTreeMap::new(),
            sample_values: BTreeMap::new(),
            outcome: None,
            actual_value: None,
        }
    }
}

/// Options accepted by the custom export path. All fields have defaults, so
/// callers can start from `ExportOptions::default()` and override selectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    pub filename: String,
    pub include_metadata: bool,
    pub include_analysis: bool,
    pub add_timestamp: bool,
    pub pretty_print: bool,
    /// Field name the original collection is nested under in the artifact.
    pub data_field: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            filename: "export.json".to_string(),
            include_metadata: true,
            include_analysis: true,
            add_timestamp: true,
            pretty_print: true,
            data_field: "data".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub total_items: usize,
    pub exported_by: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ExportOptions>,
}

/// Self-describing wrapper around an exported collection. Disabled sections
/// are absent from the serialized artifact, not null. The original data sits
/// in `sections` under a caller-chosen field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ExportMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResult>,
    #[serde(flatten)]
    pub sections: serde_json::Map<String, Value>,
}

impl ExportEnvelope {
    pub fn data(&self, field: &str) -> Option<&Value> {
        self.sections.get(field)
    }
}

/// Where a delivered artifact ended up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "destination")]
pub enum DeliveryReceipt {
    File { path: PathBuf },
    Download { filename: String },
}

/// Result handed back to the caller for every export, success or not.
/// Delivery faults never propagate past the engine as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<DeliveryReceipt>,
    #[serde(rename = "errorMessage", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExportOutcome {
    pub fn delivered(receipt: DeliveryReceipt) -> Self {
        Self {
            success: true,
            receipt: Some(receipt),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            receipt: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_tag_of_covers_all_kinds() {
        assert_eq!(TypeTag::of(&json!("x")), TypeTag::String);
        assert_eq!(TypeTag::of(&json!(1.5)), TypeTag::Number);
        assert_eq!(TypeTag::of(&json!(true)), TypeTag::Boolean);
        assert_eq!(TypeTag::of(&json!([1, 2])), TypeTag::Array);
        assert_eq!(TypeTag::of(&json!({"a": 1})), TypeTag::Object);
        assert_eq!(TypeTag::of(&json!(null)), TypeTag::Null);
    }

    #[test]
    fn test_envelope_skips_disabled_sections() {
        let mut envelope = ExportEnvelope::default();
        envelope.sections.insert("data".to_string(), json!([1, 2]));

        let serialized = serde_json::to_value(&envelope).unwrap();
        let object = serialized.as_object().unwrap();
        assert!(!object.contains_key("timestamp"));
        assert!(!object.contains_key("metadata"));
        assert!(!object.contains_key("analysis"));
        assert_eq!(object.get("data"), Some(&json!([1, 2])));
    }

    #[test]
    fn test_outcome_constructors() {
        let ok = ExportOutcome::delivered(DeliveryReceipt::Download {
            filename: "export.json".to_string(),
        });
        assert!(ok.success);
        assert!(ok.error.is_none());

        let failed = ExportOutcome::failed("disk full");
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("disk full"));
        assert!(failed.receipt.is_none());
    }
}
