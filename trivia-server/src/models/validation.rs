//! Validation error types and field rules

use std::fmt;

use serde::Deserialize;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is absent or blank
    Missing { field: &'static str },

    /// Field is present but not an integer
    NotAnInteger { field: &'static str, value: String },

    /// Integer field outside its allowed range
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::NotAnInteger { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::NotAnInteger { field, value } => {
                write!(f, "{} must be an integer, got '{}'", field, value)
            }
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "{} must be between {} and {}, got {}",
                field, min, max, value
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Integer that clients may send either as a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Text(String),
}

impl IntOrString {
    /// Parse into an integer, reporting `field` on failure.
    pub fn to_int(&self, field: &'static str) -> Result<i64, ValidationError> {
        match self {
            Self::Int(n) => Ok(*n),
            Self::Text(s) => s.trim().parse().map_err(|_| ValidationError::NotAnInteger {
                field,
                value: s.clone(),
            }),
        }
    }
}

impl From<i64> for IntOrString {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

/// Inclusive integer range rule for a named field.
#[derive(Debug, Clone, Copy)]
pub struct IntRule {
    pub field: &'static str,
    pub min: i64,
    pub max: i64,
}

impl IntRule {
    /// Require the field, parse it, and check it lies in `min..=max`.
    pub fn check(&self, value: Option<&IntOrString>) -> Result<i64, ValidationError> {
        let value = value.ok_or(ValidationError::Missing { field: self.field })?;
        let n = value.to_int(self.field)?;
        if (self.min..=self.max).contains(&n) {
            Ok(n)
        } else {
            Err(ValidationError::OutOfRange {
                field: self.field,
                value: n,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Require a non-blank text field.
pub fn require_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(ValidationError::Missing { field }),
    }
}
