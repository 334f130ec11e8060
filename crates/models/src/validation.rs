use std::fmt;

use serde::Serialize;

use crate::errors::ModelError;

/// One failed rule on one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Every rule a payload failed, in field declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldViolation { field, message: message.into() });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    /// True when at least one violation was reported for `field`.
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    pub fn into_result(self) -> Result<(), ModelError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ModelError::Validation(self))
        }
    }

    pub fn into_vec(self) -> Vec<FieldViolation> {
        self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&v.message)?;
        }
        Ok(())
    }
}

/// Field-shape and range checks for an incoming payload.
pub trait Validate {
    fn violations(&self) -> Violations;

    fn validate(&self) -> Result<(), ModelError> {
        self.violations().into_result()
    }
}

pub(crate) fn not_empty(out: &mut Violations, field: &'static str, value: &str) {
    if value.is_empty() {
        out.push(field, format!("{field} should not be empty"));
    }
}

/// Length is counted in characters, not bytes.
pub(crate) fn min_length(out: &mut Violations, field: &'static str, value: &str, min: usize) {
    if value.chars().count() < min {
        out.push(
            field,
            format!("{field} must be longer than or equal to {min} characters"),
        );
    }
}

pub(crate) fn in_range(out: &mut Violations, field: &'static str, value: i32, min: i32, max: i32) {
    if value < min {
        out.push(field, format!("{field} must not be less than {min}"));
    } else if value > max {
        out.push(field, format!("{field} must not be greater than {max}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_violations_pass() {
        assert!(Violations::new().into_result().is_ok());
    }

    #[test]
    fn display_joins_messages() {
        let mut v = Violations::new();
        min_length(&mut v, "model", "Ci", 3);
        in_range(&mut v, "year", 1800, 1900, 2025);
        assert_eq!(v.len(), 2);
        assert_eq!(
            v.to_string(),
            "model must be longer than or equal to 3 characters, year must not be less than 1900"
        );
        let err = v.into_result().unwrap_err();
        assert!(err.violations().has("model"));
        assert!(err.violations().has("year"));
    }

    #[test]
    fn min_length_counts_chars() {
        let mut v = Violations::new();
        min_length(&mut v, "model", "Añø", 3);
        assert!(v.is_empty());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let mut v = Violations::new();
        in_range(&mut v, "year", 1900, 1900, 2025);
        in_range(&mut v, "year", 2025, 1900, 2025);
        assert!(v.is_empty());
        in_range(&mut v, "year", 2026, 1900, 2025);
        assert_eq!(v.iter().next().unwrap().message, "year must not be greater than 2025");
    }
}
