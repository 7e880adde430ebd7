//! Parse raw input documents (pattern JSON, PR JSON, commit log text) into engine types.
//!
//! Shape problems at the container level are errors; ragged individual
//! records are normalized instead.

use serde_json::Value;

use crate::error::EngineError;
use crate::types::{PatternDefinition, PatternFile, PrRecord};

/// Pattern set shipped with the engine, used when no pattern file is given.
pub const DEFAULT_PATTERNS: &str = include_str!("../patterns.json");

/// Parse a `{"patterns": [...]}` document.
pub fn parse_patterns(json: &str) -> Result<Vec<PatternDefinition>, EngineError> {
  let raw: Value = serde_json::from_str(json)?;
  if !raw.is_object() {
    return Err(EngineError::data_format(
      "patterns",
      "top level must be an object with a \"patterns\" list",
    ));
  }
  let file: PatternFile =
    serde_json::from_value(raw).map_err(|e| EngineError::data_format("patterns", e.to_string()))?;
  Ok(file.patterns)
}

/// Parse a PR export: a JSON array of PR objects.
pub fn parse_prs(json: &str) -> Result<Vec<PrRecord>, EngineError> {
  let raw: Value = serde_json::from_str(json)?;
  prs_from_value(&raw)
}

/// Convert an already-parsed JSON value into PR records.
pub fn prs_from_value(raw: &Value) -> Result<Vec<PrRecord>, EngineError> {
  let items = raw
    .as_array()
    .ok_or_else(|| EngineError::data_format("prs", "PR JSON must be a list of PR objects"))?;

  items
    .iter()
    .enumerate()
    .map(|(i, item)| {
      let obj = item
        .as_object()
        .ok_or_else(|| EngineError::data_format(&format!("prs[{}]", i), "must be an object"))?;
      Ok(PrRecord {
        title: loose_text(obj.get("title")),
        body: loose_text(obj.get("body")),
        number: obj.get("number").and_then(integer),
      })
    })
    .collect()
}

/// Split a commit log into non-blank, trimmed lines.
pub fn parse_commit_log(text: &str) -> Vec<String> {
  text
    .lines()
    .map(str::trim)
    .filter(|l| !l.is_empty())
    .map(str::to_string)
    .collect()
}

/// Strings pass through; absent or falsy values (null, false, 0, empty
/// containers) become empty; anything else uses its JSON text.
fn loose_text(value: Option<&Value>) -> String {
  match value {
    None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
    Some(Value::String(s)) => s.clone(),
    Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
    Some(Value::Array(a)) if a.is_empty() => String::new(),
    Some(Value::Object(o)) if o.is_empty() => String::new(),
    Some(other) => other.to_string(),
  }
}

/// Only JSON integers identify a PR; floats, strings and booleans don't.
fn integer(value: &Value) -> Option<i64> {
  match value {
    Value::Number(n) => n.as_i64(),
    _ => None,
  }
}
