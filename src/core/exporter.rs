use crate::core::analyzer;
use crate::domain::model::{ExportEnvelope, ExportMetadata, ExportOptions};
use crate::utils::error::Result;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;

pub const EXPORTED_BY: &str = "record-profiler";
pub const SCHEMA_VERSION: &str = "1.0";

fn timestamp_now() -> String {
    // Millisecond precision with a Z suffix, same shape as a JS toISOString.
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn total_items(input: Option<&Value>) -> usize {
    match input {
        Some(Value::Array(items)) => items.len(),
        _ => 0,
    }
}

fn data_section(input: Option<&Value>) -> Value {
    match input {
        Some(value) => value.clone(),
        None => Value::Array(Vec::new()),
    }
}

/// Fixed-shape envelope: timestamp, metadata, analysis, and the original data
/// under a `data` field, all unconditionally present.
pub fn build_simple(input: Option<&Value>) -> ExportEnvelope {
    let mut envelope = ExportEnvelope {
        timestamp: Some(timestamp_now()),
        metadata: Some(ExportMetadata {
            total_items: total_items(input),
            exported_by: EXPORTED_BY.to_string(),
            version: SCHEMA_VERSION.to_string(),
            options: None,
        }),
        analysis: Some(analyzer::analyze(input)),
        ..ExportEnvelope::default()
    };
    envelope
        .sections
        .insert("data".to_string(), data_section(input));
    envelope
}

/// Configurable envelope: each section is included per `options`, and the data
/// is nested under the caller-chosen `data_field`. When metadata is included,
/// the effective options are embedded in it.
pub fn build_custom(input: Option<&Value>, options: &ExportOptions) -> ExportEnvelope {
    let mut envelope = ExportEnvelope::default();

    if options.add_timestamp {
        envelope.timestamp = Some(timestamp_now());
    }

    if options.include_metadata {
        envelope.metadata = Some(ExportMetadata {
            total_items: total_items(input),
            exported_by: EXPORTED_BY.to_string(),
            version: SCHEMA_VERSION.to_string(),
            options: Some(options.clone()),
        });
    }

    if options.include_analysis {
        envelope.analysis = Some(analyzer::analyze(input));
    }

    envelope
        .sections
        .insert(options.data_field.clone(), data_section(input));
    envelope
}

/// Single formatting rule for every JSON artifact the tool emits: 2-space
/// indentation when pretty-printing, compact otherwise.
pub fn serialize(envelope: &ExportEnvelope, pretty_print: bool) -> Result<Vec<u8>> {
    let bytes = if pretty_print {
        serde_json::to_vec_pretty(envelope)?
    } else {
        serde_json::to_vec(envelope)?
    };
    Ok(bytes)
}
