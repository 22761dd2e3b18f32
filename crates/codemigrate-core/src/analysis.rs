//! Boundary decoding of the `analysis` field returned by `/analyze`
//!
//! The backend forwards the model output untouched, so `analysis` arrives
//! either as a JSON object or as a string that may be wrapped in Markdown
//! code fences. Everything downstream works with [`AnalysisPayload`].

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::types::{AnalysisPayload, AnalysisResult};

/// Matches opening (```` ```json ````) and closing (```` ``` ````) fence markers anywhere
static FENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?").expect("Invalid fence regex"));

/// Remove every fence marker from `text`
///
/// Only the markers are removed; surrounding whitespace is kept so that a
/// string which fails to parse is preserved as the backend sent it, minus fences.
pub fn strip_code_fences(text: &str) -> String {
    FENCE_PATTERN.replace_all(text, "").into_owned()
}

/// Normalize the raw `analysis` value into a typed payload
///
/// - object → [`AnalysisPayload::Structured`]
/// - string → fences stripped, then parsed; a JSON object becomes
///   `Structured`, anything else is kept as [`AnalysisPayload::Raw`]
/// - null → an empty structured analysis (all fallbacks apply)
/// - other scalars/arrays → `Raw` with their JSON text
pub fn decode_analysis(value: Value) -> AnalysisPayload {
    match value {
        Value::Object(map) => AnalysisPayload::Structured(result_from_object(&map)),
        Value::String(text) => decode_analysis_str(&text),
        Value::Null => AnalysisPayload::Structured(AnalysisResult::default()),
        other => AnalysisPayload::Raw(other.to_string()),
    }
}

/// Decode an analysis delivered as text
pub fn decode_analysis_str(text: &str) -> AnalysisPayload {
    let stripped = strip_code_fences(text);

    match serde_json::from_str::<Value>(stripped.trim()) {
        Ok(Value::Object(map)) => AnalysisPayload::Structured(result_from_object(&map)),
        Ok(other) => {
            debug!("analysis text parsed to non-object JSON ({}), keeping raw", kind(&other));
            AnalysisPayload::Raw(stripped)
        }
        Err(e) => {
            debug!("analysis text is not JSON, keeping raw: {}", e);
            AnalysisPayload::Raw(stripped)
        }
    }
}

/// Field-by-field extraction so one mistyped field does not discard the rest
fn result_from_object(map: &Map<String, Value>) -> AnalysisResult {
    AnalysisResult {
        language: string_field(map, "language"),
        complexity: string_field(map, "complexity"),
        summary: string_field(map, "summary"),
        risks: list_field(map, "risks"),
        modernization_suggestions: list_field(map, "modernization_suggestions"),
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn list_field(map: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    match map.get(key)? {
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        ),
        Value::String(s) => Some(vec![s.clone()]),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
