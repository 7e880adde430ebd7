//! Engine configuration with sane defaults.

/// Tunables for classification and report rendering.
#[derive(Debug, Clone)]
pub struct Config {
  /// Minimum deduplicated match count for a pattern to be reported as recurring.
  pub recurring_threshold: usize,
  /// Max PR numbers (and, separately, commit hashes) listed per report line.
  pub max_examples: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      recurring_threshold: 3,
      max_examples: 5,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_cli_defaults() {
    let config = Config::default();
    assert_eq!(config.recurring_threshold, 3);
    assert_eq!(config.max_examples, 5);
  }
}
