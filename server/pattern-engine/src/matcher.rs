//! Case-insensitive text matchers: literal keywords and raw regexes.

use regex::{Regex, RegexBuilder};

/// One compiled test applied to a text blob. Existence-only: a matcher
/// either hits somewhere in the text or it doesn't.
#[derive(Debug, Clone)]
pub enum Matcher {
  /// Literal substring; metacharacters in the source keyword are escaped.
  Keyword(Regex),
  /// Raw regular expression as written in the definition.
  Regex(Regex),
}

impl Matcher {
  pub fn keyword(keyword: &str) -> Result<Self, regex::Error> {
    case_insensitive(&regex::escape(keyword)).map(Self::Keyword)
  }

  pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
    case_insensitive(pattern).map(Self::Regex)
  }

  pub fn matches(&self, text: &str) -> bool {
    match self {
      Self::Keyword(re) | Self::Regex(re) => re.is_match(text),
    }
  }
}

fn case_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
  RegexBuilder::new(pattern).case_insensitive(true).build()
}
