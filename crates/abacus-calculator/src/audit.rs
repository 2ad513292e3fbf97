//! Worked-example audit.
//!
//! Every calculator may ship a few examples with known answers. [`audit`]
//! runs all of them through the public `calculate` path and reports which
//! ones drifted, so a catalog can be checked in one call at start-up or in CI.

use crate::catalog::Catalog;
use crate::inputs::CalculatorInputs;
use abacus_types::{InputRecord, InputValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// An input record together with the result it must produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkedExample {
    pub title: String,
    pub inputs: InputRecord,
    pub expected_result: f64,
    /// Absolute tolerance
    pub tolerance: f64,
}

impl WorkedExample {
    pub fn new(title: &str, inputs: &[(&str, InputValue)], expected_result: f64) -> Self {
        Self {
            title: title.to_string(),
            inputs: inputs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            expected_result,
            tolerance: 0.01,
        }
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn matches(&self, actual: f64) -> bool {
        (actual - self.expected_result).abs() <= self.tolerance
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ExampleStatus {
    Pass,
    Mismatch { actual: f64 },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleOutcome {
    pub calculator: String,
    pub example: String,
    pub expected: f64,
    #[serde(flatten)]
    pub status: ExampleStatus,
}

impl ExampleOutcome {
    pub fn passed(&self) -> bool {
        matches!(self.status, ExampleStatus::Pass)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub generated_at: DateTime<Utc>,
    pub calculators: usize,
    pub outcomes: Vec<ExampleOutcome>,
}

impl AuditReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExampleOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

/// Run every worked example of every calculator in `catalog`.
pub fn audit(catalog: &Catalog) -> AuditReport {
    let mut outcomes = Vec::new();

    for calculator in catalog.list() {
        for example in calculator.examples() {
            let status = match calculator.calculate(&CalculatorInputs::new(&example.inputs)) {
                Ok(calc) if example.matches(calc.result) => ExampleStatus::Pass,
                Ok(calc) => ExampleStatus::Mismatch {
                    actual: calc.result,
                },
                Err(e) => ExampleStatus::Error {
                    message: e.to_string(),
                },
            };

            if !matches!(status, ExampleStatus::Pass) {
                warn!(
                    calculator = calculator.id(),
                    example = %example.title,
                    expected = example.expected_result,
                    ?status,
                    "Worked example failed"
                );
            }

            outcomes.push(ExampleOutcome {
                calculator: calculator.id().to_string(),
                example: example.title,
                expected: example.expected_result,
                status,
            });
        }
    }

    let report = AuditReport {
        generated_at: Utc::now(),
        calculators: catalog.len(),
        outcomes,
    };
    info!(
        calculators = report.calculators,
        examples = report.outcomes.len(),
        passed = report.passed(),
        failed = report.failed(),
        "Audit complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_tolerance() {
        let example = WorkedExample::new("t", &[("a", InputValue::Integer(1))], 10.0);
        assert!(example.matches(10.005));
        assert!(!example.matches(10.02));
        assert!(example.clone().tolerance(0.5).matches(10.4));
        assert_eq!(example.inputs["a"], InputValue::Integer(1));
    }

    #[test]
    fn test_outcome_serialization_is_flat() {
        let outcome = ExampleOutcome {
            calculator: "roi".into(),
            example: "Business Investment".into(),
            expected: 100.0,
            status: ExampleStatus::Mismatch { actual: 90.0 },
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "mismatch");
        assert_eq!(json["actual"], 90.0);
    }

    #[test]
    fn test_empty_catalog_is_clean() {
        let report = audit(&Catalog::new());
        assert!(report.is_clean());
        assert_eq!(report.calculators, 0);
    }
}
