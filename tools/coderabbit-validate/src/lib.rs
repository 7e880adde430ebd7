//! Checks for `.coderabbit.yaml`: custom pre-merge check limits plus a few
//! settings that change review behavior in surprising ways.

use serde_yaml::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Config must be a YAML mapping at the top level.")]
    NotMapping,
}

/// Limits enforced on `reviews.pre_merge_checks.custom_checks`.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub max_checks: usize,
    pub max_name_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_checks: 5,
            max_name_length: 50,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Findings {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Findings {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse YAML text; the top level must be a mapping.
pub fn load_config(text: &str) -> Result<Value, ConfigError> {
    let value: Value = serde_yaml::from_str(text)?;
    if !value.is_mapping() {
        return Err(ConfigError::NotMapping);
    }
    Ok(value)
}

/// Validate custom checks and collect warnings. Sections that are missing
/// or not mappings are treated as empty.
pub fn validate(config: &Value, limits: Limits) -> Findings {
    let mut findings = Findings::default();

    let reviews = section(config, "reviews");
    let custom_checks = section(reviews, "pre_merge_checks").get("custom_checks");

    match custom_checks {
        None | Some(Value::Null) => {}
        Some(Value::Sequence(checks)) => check_entries(checks, limits, &mut findings.errors),
        Some(_) => {
            findings
                .errors
                .push("reviews.pre_merge_checks.custom_checks must be a list.".to_string());
            return findings;
        }
    }

    if let Some(Value::Sequence(labels)) = section(reviews, "auto_review").get("labels") {
        if !labels.is_empty() {
            findings.warnings.push(
                "auto_review.labels is set. CodeRabbit will require at least one label on each PR."
                    .to_string(),
            );
        }
    }

    if let Some(Value::Bool(true)) = reviews.get("review_status") {
        findings.warnings.push(
            "reviews.review_status is true. CodeRabbit will post review status messages."
                .to_string(),
        );
    }

    findings
}

fn check_entries(checks: &[Value], limits: Limits, errors: &mut Vec<String>) {
    if checks.len() > limits.max_checks {
        errors.push(format!(
            "custom_checks has {} entries (max {}).",
            checks.len(),
            limits.max_checks
        ));
    }

    for (index, check) in checks.iter().enumerate().map(|(i, c)| (i + 1, c)) {
        if !check.is_mapping() {
            errors.push(format!("custom_checks[{}] must be a mapping.", index));
            continue;
        }
        let name = match check.get("name").and_then(Value::as_str) {
            Some(n) if !n.trim().is_empty() => n,
            _ => {
                errors.push(format!("custom_checks[{}] is missing a name.", index));
                continue;
            }
        };
        let length = name.chars().count();
        if length > limits.max_name_length {
            errors.push(format!(
                "custom_checks[{}] name is {} characters (max {}).",
                index, length, limits.max_name_length
            ));
        }
    }
}

static EMPTY: Value = Value::Null;

/// `parent[key]` when it is a mapping, otherwise an empty stand-in.
fn section<'a>(parent: &'a Value, key: &str) -> &'a Value {
    match parent.get(key) {
        Some(v) if v.is_mapping() => v,
        _ => &EMPTY,
    }
}
