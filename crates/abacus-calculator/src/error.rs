//! Error types for calculators and the catalog.
//!
//! Validation problems and arithmetic problems are kept apart: a
//! [`CalculatorError::ValidationFailure`] means the caller should fix the
//! inputs and try again, a [`CalculatorError::Formula`] means the inputs were
//! acceptable but the formula has no finite answer for them.

use crate::validation::FieldError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias for calculator operations
pub type CalcResult<T> = Result<T, CalculatorError>;

/// Error surfaced at the `calculate` boundary.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum CalculatorError {
    /// One or more domain rules rejected the inputs
    #[error("Validation failed for '{calculator}': {}", join_messages(.errors))]
    ValidationFailure {
        calculator: String,
        errors: Vec<FieldError>,
    },

    /// The formula could not produce a finite result
    #[error("Calculation failed for '{calculator}': {source}")]
    Formula {
        calculator: String,
        source: FormulaError,
    },
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl CalculatorError {
    /// Create a ValidationFailure error
    pub fn validation(calculator: impl Into<String>, errors: Vec<FieldError>) -> Self {
        CalculatorError::ValidationFailure {
            calculator: calculator.into(),
            errors,
        }
    }

    /// Create a Formula error
    pub fn formula(calculator: impl Into<String>, source: FormulaError) -> Self {
        CalculatorError::Formula {
            calculator: calculator.into(),
            source,
        }
    }

    /// Id of the calculator that raised the error
    pub fn calculator(&self) -> &str {
        match self {
            CalculatorError::ValidationFailure { calculator, .. }
            | CalculatorError::Formula { calculator, .. } => calculator,
        }
    }

    /// Human-readable messages, in the order they were raised
    pub fn messages(&self) -> Vec<String> {
        match self {
            CalculatorError::ValidationFailure { errors, .. } => {
                errors.iter().map(|e| e.message.clone()).collect()
            }
            CalculatorError::Formula { source, .. } => vec![source.to_string()],
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalculatorError::ValidationFailure { .. } => "VALIDATION_FAILURE",
            CalculatorError::Formula { .. } => "FORMULA_ERROR",
        }
    }
}

/// Arithmetic failure inside a formula function.
///
/// Every formula returns `Result<f64, FormulaError>` instead of leaking
/// NaN, infinity or a silent zero.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum FormulaError {
    #[error("division by zero computing {quantity}")]
    DivisionByZero { quantity: String },

    #[error("{quantity} = {value} is out of domain: {reason}")]
    OutOfDomain {
        quantity: String,
        value: f64,
        reason: String,
    },

    #[error("no convergence after {iterations} iterations")]
    NoConvergence { iterations: usize },

    #[error("{quantity} is not a finite number")]
    NonFinite { quantity: String },
}

impl FormulaError {
    pub fn division_by_zero(quantity: impl Into<String>) -> Self {
        FormulaError::DivisionByZero {
            quantity: quantity.into(),
        }
    }

    pub fn out_of_domain(quantity: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        FormulaError::OutOfDomain {
            quantity: quantity.into(),
            value,
            reason: reason.into(),
        }
    }

    pub fn non_finite(quantity: impl Into<String>) -> Self {
        FormulaError::NonFinite {
            quantity: quantity.into(),
        }
    }
}

/// Registration failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("calculator id must not be empty")]
    EmptyId,

    #[error("calculator '{id}' is already registered")]
    DuplicateId { id: String },
}

impl CatalogError {
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::EmptyId => "EMPTY_ID",
            CatalogError::DuplicateId { .. } => "DUPLICATE_ID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_joins_messages() {
        let error = CalculatorError::validation(
            "roi",
            vec![
                FieldError::new("investment", "Investment must be greater than 0"),
                FieldError::new("costs", "Costs cannot be negative"),
            ],
        );
        assert_eq!(
            error.to_string(),
            "Validation failed for 'roi': Investment must be greater than 0, Costs cannot be negative"
        );
        assert_eq!(error.messages().len(), 2);
        assert_eq!(error.calculator(), "roi");
    }

    #[test]
    fn test_error_serialization() {
        let error = CalculatorError::formula("bmi", FormulaError::division_by_zero("height squared"));
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalculatorError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalculatorError::validation("x", vec![]).error_code(),
            "VALIDATION_FAILURE"
        );
        assert_eq!(
            CatalogError::DuplicateId { id: "x".into() }.error_code(),
            "DUPLICATE_ID"
        );
    }
}
