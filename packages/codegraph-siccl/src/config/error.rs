//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required name field is empty
    #[error("Field '{field}' must not be empty. {hint}")]
    EmptyField { field: String, hint: String },

    /// Acquire and release resolve to the same method name
    #[error("Lock methods collide: acquire and release are both '{method}'. Use distinct method names.")]
    MethodCollision { method: String },

    /// Unknown policy / criterion value
    #[error("Unknown {kind} '{value}'. {suggestion}")]
    UnknownVariant {
        kind: String,
        value: String,
        suggestion: String,
        valid_values: Vec<String>,
    },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create an empty field error with a hint
    pub fn empty_field(field: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
            hint: hint.into(),
        }
    }

    /// Create an unknown variant error with the closest valid value as suggestion
    pub fn unknown_variant_with_suggestion(
        kind: impl Into<String>,
        value: impl Into<String>,
        valid_values: &[&str],
    ) -> Self {
        let value = value.into();
        let valid_values: Vec<String> = valid_values.iter().map(|v| v.to_string()).collect();
        let suggestion = find_closest_match(&value, &valid_values);

        Self::UnknownVariant {
            kind: kind.into(),
            value,
            suggestion,
            valid_values,
        }
    }
}

/// Find closest match using simple edit distance
fn find_closest_match(target: &str, candidates: &[String]) -> String {
    match candidates
        .iter()
        .min_by_key(|candidate| levenshtein_distance(target, candidate))
    {
        Some(closest) => format!("Did you mean '{}'?", closest),
        None => "No valid values available".to_string(),
    }
}

/// Simple Levenshtein distance implementation
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();
    let mut prev: Vec<usize> = (0..=s2.len()).collect();
    let mut curr = vec![0; s2.len() + 1];

    for (i, c1) in s1.iter().enumerate() {
        curr[0] = i + 1;
        for (j, c2) in s2.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[s2.len()]
}
