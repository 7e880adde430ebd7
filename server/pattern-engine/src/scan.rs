//! Record scanning: attribute PRs and commits to the patterns they match.

use tracing::{debug, info};

use crate::types::{CompiledPattern, PatternStats, PrRecord};

/// Per-pattern evidence for one run.
///
/// Owns the compiled patterns and their stats side by side, in definition
/// order. Stats only ever grow, so PR and commit passes commute.
#[derive(Debug, Clone)]
pub struct Tally {
  patterns: Vec<CompiledPattern>,
  stats: Vec<PatternStats>,
}

impl Tally {
  pub fn new(patterns: Vec<CompiledPattern>) -> Self {
    let stats = patterns.iter().map(PatternStats::new).collect();
    Self { patterns, stats }
  }

  /// Scan every PR's `title + "\n" + body`.
  ///
  /// PRs without a number are still matched against but add no evidence.
  pub fn scan_prs(&mut self, prs: &[PrRecord]) {
    let mut attributed = 0usize;
    for pr in prs {
      let text = pr.search_text();
      for idx in self.matching(&text) {
        match pr.number {
          Some(n) => {
            if self.stats[idx].pr_numbers.insert(n) {
              attributed += 1;
            }
          }
          None => debug!(pattern_id = %self.patterns[idx].id, "PR without number matched; not counted"),
        }
      }
    }
    info!(prs = prs.len(), attributed, "scanned PRs");
  }

  /// Scan `<hash> <subject>` lines; only the subject is matched.
  pub fn scan_commits<S: AsRef<str>>(&mut self, lines: &[S]) {
    let mut attributed = 0usize;
    for line in lines {
      let line: &str = line.as_ref();
      let Some((hash, subject)) = split_commit_line(line) else {
        debug!(line, "commit line has no subject; skipped");
        continue;
      };
      for idx in self.matching(subject) {
        if self.stats[idx].commit_hashes.insert(hash.to_string()) {
          attributed += 1;
        }
      }
    }
    info!(commits = lines.len(), attributed, "scanned commits");
  }

  pub fn stats(&self) -> &[PatternStats] {
    &self.stats
  }

  pub fn into_stats(self) -> Vec<PatternStats> {
    self.stats
  }

  fn matching(&self, text: &str) -> Vec<usize> {
    self
      .patterns
      .iter()
      .enumerate()
      .filter(|(_, p)| p.is_match(text))
      .map(|(i, _)| i)
      .collect()
  }
}

/// Split a commit line into (hash, subject). `None` for a bare hash.
pub fn split_commit_line(line: &str) -> Option<(&str, &str)> {
  let line = line.trim();
  let (hash, rest) = line.split_once(char::is_whitespace)?;
  let subject = rest.trim_start();
  if subject.is_empty() {
    return None;
  }
  Some((hash, subject))
}
