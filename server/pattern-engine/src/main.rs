//! Binary entrypoint: load pattern, PR and commit files, print the report.
//!
//! Logs go to stderr (RUST_LOG=debug for per-record detail) so stdout only
//! carries the report.

use anyhow::Context;
use clap::Parser;
use pattern_engine::{input, Config, Engine};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Analyze PRs and commits for recurring bug patterns.
#[derive(Parser, Debug)]
#[command(name = "pattern-engine")]
struct Args {
  /// Path to PR JSON (a list of PR objects)
  #[arg(long)]
  pr_json: Option<PathBuf>,

  /// Path to a commit log, one `<hash> <subject>` per line
  #[arg(long)]
  commit_log: Option<PathBuf>,

  /// Pattern definition JSON (defaults to the pattern set shipped with the engine)
  #[arg(long)]
  patterns: Option<PathBuf>,

  /// Matches needed for a pattern to count as recurring
  #[arg(long, default_value_t = 3)]
  recurring_threshold: usize,

  /// Max PR numbers / commit hashes listed per pattern
  #[arg(long, default_value_t = 5)]
  max_examples: usize,

  /// Write the JSON report to this path
  #[arg(long)]
  json_out: Option<PathBuf>,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();
  if args.pr_json.is_none() && args.commit_log.is_none() {
    let _ = writeln!(io::stderr(), "Provide --pr-json, --commit-log, or both.");
    std::process::exit(1);
  }

  if let Err(e) = run_binary(&args) {
    let _ = writeln!(io::stderr(), "pattern-engine error: {:#}", e);
    std::process::exit(1);
  }
}

fn run_binary(args: &Args) -> anyhow::Result<()> {
  let definitions = match &args.patterns {
    Some(path) => input::parse_patterns(&read(path)?)
      .with_context(|| format!("loading patterns from {}", path.display()))?,
    None => input::parse_patterns(input::DEFAULT_PATTERNS).context("loading built-in patterns")?,
  };

  let config = Config {
    recurring_threshold: args.recurring_threshold,
    max_examples: args.max_examples,
  };
  let mut engine = Engine::new(config, &definitions)?;

  if let Some(path) = &args.pr_json {
    let prs = input::parse_prs(&read(path)?)
      .with_context(|| format!("loading PRs from {}", path.display()))?;
    engine.scan_prs(&prs);
  }
  if let Some(path) = &args.commit_log {
    let lines = input::parse_commit_log(&read(path)?);
    engine.scan_commits(&lines);
  }

  let report = engine.report();
  let mut out = io::stdout().lock();
  writeln!(out, "{}", report.text)?;
  out.flush()?;

  if let Some(path) = &args.json_out {
    let json = serde_json::to_string_pretty(&report.export)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
  }

  Ok(())
}

fn read(path: &Path) -> anyhow::Result<String> {
  fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}
