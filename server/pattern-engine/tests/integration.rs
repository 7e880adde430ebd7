//! Integration tests for the pattern engine.

use chrono::{TimeZone, Utc};
use pattern_engine::{input, Config, Engine, EngineError};

fn fixture_patterns() -> &'static str {
  r#"{
    "patterns": [
      {
        "id": "flaky",
        "label": "Flaky tests",
        "issue": "Tests fail intermittently",
        "recommended_check": "timeout-check",
        "severity": "medium",
        "keywords": ["flaky"],
        "regexes": ["intermittent(ly)?"]
      },
      {
        "id": "race",
        "label": "Race conditions",
        "issue": "Unsynchronized shared state",
        "recommended_check": "lock-check",
        "severity": "high",
        "keywords": ["race condition"],
        "regexes": []
      },
      {
        "id": "tz",
        "label": "Timezone bugs",
        "issue": "Local time used instead of UTC",
        "recommended_check": "utc-check",
        "severity": "low",
        "keywords": ["timezone"]
      },
      {
        "id": "dead",
        "label": "Dead pattern",
        "issue": "Never matches",
        "recommended_check": "",
        "severity": "low",
        "keywords": ["", "  "],
        "regexes": []
      }
    ]
  }"#
}

fn fixture_prs() -> &'static str {
  r#"[
    {"number": 1, "title": "Fix flaky login test", "body": "It failed intermittently on CI"},
    {"number": 2, "title": "Fix race condition in cache", "body": null},
    {"number": 3, "title": "Another flaky test", "body": ""},
    {"number": 4, "title": "Docs", "body": "no patterns here"},
    {"title": "flaky without a number"},
    {"number": "5", "title": "flaky with a string number"}
  ]"#
}

fn fixture_commits() -> &'static str {
  "aaa111 retry flaky upload test\n\
   bbb222 handle timezone offset\n\
   ccc333\n\
   \n\
   ddd444 fix race condition in worker\n\
   eee555 race condition again\n\
   aaa111 retry flaky upload test\n"
}

fn run(config: Config) -> Engine {
  let defs = input::parse_patterns(fixture_patterns()).unwrap();
  let mut engine = Engine::new(config, &defs).unwrap();
  engine.scan_prs(&input::parse_prs(fixture_prs()).unwrap());
  engine.scan_commits(&input::parse_commit_log(fixture_commits()));
  engine
}

#[test]
fn full_run_produces_expected_report() {
  let engine = run(Config::default());

  let expected = "Pattern analysis summary\n\
    ------------------------\n\
    Recurring issues\n\
    - Flaky tests (3 matches) :: Tests fail intermittently. PRs: #1, #3; Commits: aaa111\n\
    - Race conditions (3 matches) :: Unsynchronized shared state. PRs: #2; Commits: ddd444, eee555\n\
    \n\
    Edge cases\n\
    - Timezone bugs (1 matches) :: Local time used instead of UTC. Commits: bbb222\n\
    \n\
    Suggested custom checks\n\
    - lock-check\n\
    - timeout-check";
  assert_eq!(engine.render_text(), expected);
}

#[test]
fn deterministic_output_across_runs() {
  let at = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();

  let e1 = run(Config::default());
  let e2 = run(Config::default());

  assert_eq!(e1.render_text(), e2.render_text());
  let json1 = serde_json::to_string(&e1.export_at(at)).unwrap();
  let json2 = serde_json::to_string(&e2.export_at(at)).unwrap();
  assert_eq!(json1, json2, "Same inputs must produce identical JSON output");
}

#[test]
fn export_includes_zero_match_patterns() {
  let engine = run(Config::default());
  let export = engine.report().export;

  let ids: Vec<_> = export.patterns.iter().map(|p| p.id.as_str()).collect();
  assert_eq!(ids, vec!["flaky", "race", "tz", "dead"]);
  assert_eq!(export.recurring_threshold, 3);

  let dead = &export.patterns[3];
  assert_eq!(dead.total_matches, 0);
  assert!(dead.pr_numbers.is_empty());
  assert!(dead.commit_hashes.is_empty());

  let value = serde_json::to_value(&export).unwrap();
  assert_eq!(value["patterns"][0]["pr_numbers"], serde_json::json!([1, 3]));
  assert_eq!(value["patterns"][1]["commit_hashes"], serde_json::json!(["ddd444", "eee555"]));
  assert_eq!(value["patterns"][0]["severity"], "medium");
}

#[test]
fn truncation_with_small_max_examples() {
  let defs = input::parse_patterns(
    r#"{"patterns": [{"id": "p", "label": "P", "issue": "I", "keywords": ["bug"]}]}"#,
  )
  .unwrap();
  let mut engine = Engine::new(
    Config {
      recurring_threshold: 1,
      max_examples: 2,
    },
    &defs,
  )
  .unwrap();
  let prs = input::parse_prs(
    r#"[
      {"number": 5, "title": "bug"}, {"number": 3, "title": "bug"},
      {"number": 1, "title": "bug"}, {"number": 4, "title": "bug"},
      {"number": 2, "title": "bug"}
    ]"#,
  )
  .unwrap();
  engine.scan_prs(&prs);

  assert!(engine
    .render_text()
    .contains("- P (5 matches) :: I. PRs: #1, #2 (+3 more)\n"));
}

#[test]
fn threshold_controls_partition() {
  let engine = run(Config {
    recurring_threshold: 4,
    ..Config::default()
  });
  let text = engine.render_text();
  assert!(text.contains("Recurring issues\n- None detected\n"));
  assert!(text.contains("Edge cases\n- Flaky tests"));
  assert!(text.ends_with("- None suggested (no recurring issues detected)"));
}

#[test]
fn no_matches_renders_empty_report() {
  let defs = input::parse_patterns(fixture_patterns()).unwrap();
  let mut engine = Engine::with_defaults(&defs).unwrap();
  engine.scan_prs(&input::parse_prs(r#"[{"number": 9, "title": "docs only"}]"#).unwrap());
  engine.scan_commits(&["fff000 bump version"]);

  let text = engine.render_text();
  assert!(text.contains("Recurring issues\n- None detected"));
  assert!(!text.contains("Edge cases"));
  assert!(text.ends_with("Suggested custom checks\n- None suggested (no recurring issues detected)"));
}

#[test]
fn malformed_regex_is_fatal() {
  let defs = input::parse_patterns(
    r#"{"patterns": [{"id": "bad", "regexes": ["(unclosed"]}]}"#,
  )
  .unwrap();
  let err = Engine::with_defaults(&defs).err().unwrap();
  assert!(matches!(err, EngineError::PatternCompilation { .. }));
  assert!(err.to_string().contains("bad"), "Error should name the pattern: {}", err);
}

#[test]
fn pr_json_must_be_a_list() {
  let err = input::parse_prs(r#"{"prs": []}"#).unwrap_err();
  assert!(matches!(err, EngineError::DataFormat { .. }));
}
