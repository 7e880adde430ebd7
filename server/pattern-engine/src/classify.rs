//! Partition pattern stats into recurring issues and edge cases.

use std::collections::BTreeSet;

use crate::types::PatternStats;

/// Classified view over a finished tally. Both lists keep definition order.
#[derive(Debug, Clone)]
pub struct Classification<'a> {
  pub recurring: Vec<&'a PatternStats>,
  pub edge_cases: Vec<&'a PatternStats>,
  /// Non-empty recommended checks of recurring patterns, deduplicated and sorted.
  pub suggested_checks: Vec<String>,
}

/// `total >= threshold` is recurring; `0 < total < threshold` is an edge case;
/// zero-match patterns are dropped.
pub fn classify(stats: &[PatternStats], recurring_threshold: usize) -> Classification<'_> {
  let mut recurring = Vec::new();
  let mut edge_cases = Vec::new();

  for item in stats {
    let total = item.total_matches();
    if total == 0 {
      continue;
    }
    if total >= recurring_threshold {
      recurring.push(item);
    } else {
      edge_cases.push(item);
    }
  }

  let suggested_checks = recurring
    .iter()
    .filter(|s| !s.recommended_check.is_empty())
    .map(|s| s.recommended_check.clone())
    .collect::<BTreeSet<_>>()
    .into_iter()
    .collect();

  Classification {
    recurring,
    edge_cases,
    suggested_checks,
  }
}
