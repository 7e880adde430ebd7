//! Structured error types for the pattern engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("pattern {pattern_id}: invalid regex: {source}")]
  PatternCompilation {
    pattern_id: String,
    #[source]
    source: regex::Error,
  },

  #[error("data format: {what}: {reason}")]
  DataFormat { what: String, reason: String },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineError {
  pub fn pattern_compilation(pattern_id: &str, source: regex::Error) -> Self {
    Self::PatternCompilation {
      pattern_id: pattern_id.to_string(),
      source,
    }
  }

  pub fn data_format(what: &str, reason: impl Into<String>) -> Self {
    Self::DataFormat {
      what: what.to_string(),
      reason: reason.into(),
    }
  }
}
