//! Structured pass/fail produced by a calculator's validation helper.
//!
//! There is deliberately no rule engine here: each calculator states its
//! rules inline with the small helpers on [`ValidationReport`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// One failed rule, attributed to the input field a host should highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered list of validation failures. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// Messages in the order the rules failed
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    /// Messages joined with ", ", the form hosts show next to a form
    pub fn joined(&self) -> String {
        self.messages().join(", ")
    }

    /// Record a failure unconditionally.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Record `message` against `field` unless `condition` holds.
    pub fn require(&mut self, condition: bool, field: &str, message: impl Into<String>) -> &mut Self {
        if !condition {
            self.push(field, message);
        }
        self
    }

    /// `value > 0`
    pub fn positive(&mut self, field: &str, label: &str, value: f64) -> &mut Self {
        self.require(
            value.is_finite() && value > 0.0,
            field,
            format!("{label} must be greater than 0"),
        )
    }

    /// `value >= 0`
    pub fn non_negative(&mut self, field: &str, label: &str, value: f64) -> &mut Self {
        self.require(
            value.is_finite() && value >= 0.0,
            field,
            format!("{label} cannot be negative"),
        )
    }

    /// `lo <= value <= hi`
    pub fn within(&mut self, field: &str, label: &str, value: f64, lo: f64, hi: f64) -> &mut Self {
        self.require(
            value.is_finite() && value >= lo && value <= hi,
            field,
            format!("{label} must be between {lo} and {hi}"),
        )
    }

    /// Cross-field ordering: `smaller < larger`. Reported against `smaller_field`.
    pub fn less_than(
        &mut self,
        smaller_field: &str,
        smaller_label: &str,
        smaller: f64,
        larger_label: &str,
        larger: f64,
    ) -> &mut Self {
        self.require(
            smaller.is_finite() && larger.is_finite() && smaller < larger,
            smaller_field,
            format!("{smaller_label} must be less than {larger_label}"),
        )
    }

    /// Append every failure of `other`, keeping order.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "valid")
        } else {
            write!(f, "{}", self.joined())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::new();
        assert!(report.is_valid());
        assert_eq!(report.to_string(), "valid");
    }

    #[test]
    fn test_rules_keep_order() {
        let mut report = ValidationReport::new();
        report
            .positive("amount", "Amount", -100.0)
            .non_negative("fee", "Fee", 5.0)
            .within("rate", "Rate", 150.0, 0.0, 100.0)
            .less_than("start", "Start period", 10.0, "end period", 5.0);

        assert_eq!(
            report.messages(),
            vec![
                "Amount must be greater than 0",
                "Rate must be between 0 and 100",
                "Start period must be less than end period",
            ]
        );
        assert_eq!(report.errors()[1].field, "rate");
    }

    #[test]
    fn test_non_finite_fails_numeric_rules() {
        let mut report = ValidationReport::new();
        report
            .non_negative("a", "A", f64::NAN)
            .positive("b", "B", f64::INFINITY)
            .within("c", "C", f64::NAN, 0.0, 1.0);
        assert_eq!(report.errors().len(), 3);
    }
}
