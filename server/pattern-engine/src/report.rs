//! Render the text report and the structured export.
//!
//! Every collection is sorted before formatting, so the text report is
//! byte-identical for identical inputs.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::classify::Classification;
use crate::types::{PatternStats, PatternSummary, ReportExport};

const HEADER: &str = "Pattern analysis summary";
const NO_EXAMPLES: &str = "No examples captured";

/// Plain-text report, lines joined by `\n` with no trailing newline.
pub fn render_text(classified: &Classification<'_>, max_examples: usize) -> String {
  let mut lines: Vec<String> = Vec::new();
  lines.push(HEADER.to_string());
  lines.push("-".repeat(HEADER.len()));

  lines.push("Recurring issues".to_string());
  if classified.recurring.is_empty() {
    lines.push("- None detected".to_string());
  } else {
    for item in &classified.recurring {
      lines.push(pattern_line(item, max_examples));
    }
  }

  if !classified.edge_cases.is_empty() {
    lines.push(String::new());
    lines.push("Edge cases".to_string());
    for item in &classified.edge_cases {
      lines.push(pattern_line(item, max_examples));
    }
  }

  lines.push(String::new());
  lines.push("Suggested custom checks".to_string());
  if classified.suggested_checks.is_empty() {
    lines.push("- None suggested (no recurring issues detected)".to_string());
  } else {
    for check in &classified.suggested_checks {
      lines.push(format!("- {}", check));
    }
  }

  lines.join("\n")
}

/// `- <label> (<n> matches) :: <issue>. <detail>`
pub fn pattern_line(item: &PatternStats, max_examples: usize) -> String {
  format!(
    "- {} ({} matches) :: {}. {}",
    item.label,
    item.total_matches(),
    item.issue,
    detail(item, max_examples)
  )
}

fn detail(item: &PatternStats, max_examples: usize) -> String {
  let prs: Vec<String> = item.pr_numbers.iter().map(|n| format!("#{}", n)).collect();
  let commits: Vec<String> = item.commit_hashes.iter().cloned().collect();

  let mut parts = Vec::new();
  if let Some(text) = format_examples(&prs, max_examples) {
    parts.push(format!("PRs: {}", text));
  }
  if let Some(text) = format_examples(&commits, max_examples) {
    parts.push(format!("Commits: {}", text));
  }

  if parts.is_empty() {
    NO_EXAMPLES.to_string()
  } else {
    parts.join("; ")
  }
}

/// First `max` items joined by `, `, plus ` (+k more)` when clipped.
/// `None` for an empty list.
pub fn format_examples(items: &[String], max: usize) -> Option<String> {
  if items.is_empty() {
    return None;
  }
  let shown = items[..items.len().min(max)].join(", ");
  if items.len() > max {
    Some(format!("{} (+{} more)", shown, items.len() - max))
  } else {
    Some(shown)
  }
}

/// Structured export covering every pattern, including zero-match ones.
pub fn build_export(
  stats: &[PatternStats],
  recurring_threshold: usize,
  generated_at: DateTime<Utc>,
) -> ReportExport {
  ReportExport {
    generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
    recurring_threshold,
    patterns: stats.iter().map(PatternSummary::from).collect(),
  }
}
