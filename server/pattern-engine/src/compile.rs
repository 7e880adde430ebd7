//! Compile declarative pattern definitions into ready-to-search matchers.

use std::collections::HashSet;

use tracing::debug;

use crate::error::EngineError;
use crate::matcher::Matcher;
use crate::types::{CompiledPattern, PatternDefinition};

/// Compile every definition, keeping definition order.
///
/// Keywords come first, then regexes. Blank entries are skipped. Any bad
/// regex fails the whole set; there are no partial pattern sets.
pub fn compile_patterns(defs: &[PatternDefinition]) -> Result<Vec<CompiledPattern>, EngineError> {
  let mut seen: HashSet<&str> = HashSet::new();
  let mut compiled = Vec::with_capacity(defs.len());

  for def in defs {
    if def.id.trim().is_empty() {
      return Err(EngineError::data_format("patterns[].id", "must not be empty"));
    }
    if !seen.insert(def.id.as_str()) {
      return Err(EngineError::data_format(
        "patterns[].id",
        format!("duplicate pattern id {:?}", def.id),
      ));
    }
    compiled.push(compile_one(def)?);
  }

  Ok(compiled)
}

fn compile_one(def: &PatternDefinition) -> Result<CompiledPattern, EngineError> {
  let mut matchers = Vec::with_capacity(def.keywords.len() + def.regexes.len());

  for keyword in def.keywords.iter().filter(|k| !k.trim().is_empty()) {
    let m = Matcher::keyword(keyword).map_err(|e| EngineError::pattern_compilation(&def.id, e))?;
    matchers.push(m);
  }
  for regex in def.regexes.iter().filter(|r| !r.trim().is_empty()) {
    let m = Matcher::regex(regex).map_err(|e| EngineError::pattern_compilation(&def.id, e))?;
    matchers.push(m);
  }

  if matchers.is_empty() {
    debug!(pattern_id = %def.id, "pattern has no matchers and will never match");
  }

  Ok(CompiledPattern {
    id: def.id.clone(),
    label: def.label.clone(),
    issue: def.issue.clone(),
    recommended_check: def.recommended_check.clone(),
    severity: def.severity.clone(),
    matchers,
  })
}
