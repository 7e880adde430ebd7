//! Core types for the pattern engine (JSON contracts + internal models).

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

use crate::matcher::Matcher;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// Top-level pattern definition document: `{"patterns": [...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatternFile {
  #[serde(default)]
  pub patterns: Vec<PatternDefinition>,
}

/// One declarative rule. Unknown fields are silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatternDefinition {
  pub id: String,
  #[serde(default)]
  pub label: String,
  #[serde(default)]
  pub issue: String,
  #[serde(default)]
  pub recommended_check: String,
  /// Opaque tag, carried through to the export untouched.
  #[serde(default)]
  pub severity: String,
  #[serde(default, deserialize_with = "strings_skipping_nulls")]
  pub keywords: Vec<String>,
  #[serde(default, deserialize_with = "strings_skipping_nulls")]
  pub regexes: Vec<String>,
}

/// Matcher lists tolerate `null`, both for the list and for its entries.
fn strings_skipping_nulls<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
  Ok(raw.unwrap_or_default().into_iter().flatten().collect())
}

/// A PR record after loose normalization of the raw JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrRecord {
  pub title: String,
  pub body: String,
  /// `None` when the source had no integer `number`; the record is still
  /// scanned but can't be attributed.
  pub number: Option<i64>,
}

impl PrRecord {
  pub fn new(number: Option<i64>, title: impl Into<String>, body: impl Into<String>) -> Self {
    Self {
      title: title.into(),
      body: body.into(),
      number,
    }
  }

  /// Text searched by the matchers: title and body separated by a newline.
  pub fn search_text(&self) -> String {
    format!("{}\n{}", self.title, self.body)
  }
}

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

/// A pattern definition with its matchers compiled.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
  pub id: String,
  pub label: String,
  pub issue: String,
  pub recommended_check: String,
  pub severity: String,
  pub matchers: Vec<Matcher>,
}

impl CompiledPattern {
  /// True when any matcher hits anywhere in `text`. No matchers, no match.
  pub fn is_match(&self, text: &str) -> bool {
    self.matchers.iter().any(|m| m.matches(text))
  }
}

// ---------------------------------------------------------------------------
// Per-pattern stats
// ---------------------------------------------------------------------------

/// Evidence accumulated for one pattern over a whole run.
///
/// PR numbers and commit hashes are kept in ordered sets so every
/// consumer sees them deduplicated and sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternStats {
  pub id: String,
  pub label: String,
  pub issue: String,
  pub recommended_check: String,
  pub severity: String,
  pub pr_numbers: BTreeSet<i64>,
  pub commit_hashes: BTreeSet<String>,
}

impl PatternStats {
  pub fn new(pattern: &CompiledPattern) -> Self {
    Self {
      id: pattern.id.clone(),
      label: pattern.label.clone(),
      issue: pattern.issue.clone(),
      recommended_check: pattern.recommended_check.clone(),
      severity: pattern.severity.clone(),
      pr_numbers: BTreeSet::new(),
      commit_hashes: BTreeSet::new(),
    }
  }

  /// PR and commit evidence are independent pools; they are summed, never merged.
  pub fn total_matches(&self) -> usize {
    self.pr_numbers.len() + self.commit_hashes.len()
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternSummary {
  pub id: String,
  pub label: String,
  pub issue: String,
  pub recommended_check: String,
  pub severity: String,
  pub pr_numbers: Vec<i64>,
  pub commit_hashes: Vec<String>,
  pub total_matches: usize,
}

impl From<&PatternStats> for PatternSummary {
  fn from(stats: &PatternStats) -> Self {
    Self {
      id: stats.id.clone(),
      label: stats.label.clone(),
      issue: stats.issue.clone(),
      recommended_check: stats.recommended_check.clone(),
      severity: stats.severity.clone(),
      pr_numbers: stats.pr_numbers.iter().copied().collect(),
      commit_hashes: stats.commit_hashes.iter().cloned().collect(),
      total_matches: stats.total_matches(),
    }
  }
}

/// Structured export: every pattern, matched or not, in definition order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
  pub generated_at: String,
  pub recurring_threshold: usize,
  pub patterns: Vec<PatternSummary>,
}
