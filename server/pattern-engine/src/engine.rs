//! Core engine: compiles patterns once, scans inputs, produces the report.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::classify::{classify, Classification};
use crate::compile::compile_patterns;
use crate::config::Config;
use crate::error::EngineError;
use crate::report;
use crate::scan::Tally;
use crate::types::*;

/// The pattern analysis engine. Holds per-run state across scan passes.
pub struct Engine {
  config: Config,
  tally: Tally,
}

/// Both renderings of one finished run.
#[derive(Debug, Clone)]
pub struct Report {
  pub text: String,
  pub export: ReportExport,
}

impl Engine {
  /// Compile `definitions`; fails before any scanning if a pattern is broken.
  pub fn new(config: Config, definitions: &[PatternDefinition]) -> Result<Self, EngineError> {
    if config.recurring_threshold == 0 {
      warn!("recurring threshold is 0; every matched pattern will be reported as recurring");
    }
    let patterns = compile_patterns(definitions)?;
    Ok(Self {
      config,
      tally: Tally::new(patterns),
    })
  }

  pub fn with_defaults(definitions: &[PatternDefinition]) -> Result<Self, EngineError> {
    Self::new(Config::default(), definitions)
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn scan_prs(&mut self, prs: &[PrRecord]) {
    self.tally.scan_prs(prs);
  }

  pub fn scan_commits<S: AsRef<str>>(&mut self, lines: &[S]) {
    self.tally.scan_commits(lines);
  }

  pub fn stats(&self) -> &[PatternStats] {
    self.tally.stats()
  }

  pub fn classify(&self) -> Classification<'_> {
    classify(self.tally.stats(), self.config.recurring_threshold)
  }

  pub fn render_text(&self) -> String {
    report::render_text(&self.classify(), self.config.max_examples)
  }

  /// Structured export stamped with `generated_at`.
  pub fn export_at(&self, generated_at: DateTime<Utc>) -> ReportExport {
    report::build_export(self.tally.stats(), self.config.recurring_threshold, generated_at)
  }

  pub fn report(&self) -> Report {
    Report {
      text: self.render_text(),
      export: self.export_at(Utc::now()),
    }
  }
}
