//! The uniform calculator contract.
//!
//! [`Calculator`] is the object-safe surface the catalog and hosts work with.
//! [`Formula`] is the typed half every built-in implements; a blanket
//! implementation turns any `Formula` into a `Calculator`, so reading,
//! validating and computing always happen in the same order.

use crate::audit::WorkedExample;
use crate::error::{CalcResult, CalculatorError, FormulaError};
use crate::inputs::CalculatorInputs;
use crate::result::Calculation;
use crate::schema::FormSchema;
use crate::validation::ValidationReport;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Catalog section a calculator is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Finance,
    Business,
    Legal,
    Health,
    Construction,
    Lifestyle,
    Math,
    Insurance,
    Career,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Finance,
        Category::Business,
        Category::Legal,
        Category::Health,
        Category::Construction,
        Category::Lifestyle,
        Category::Math,
        Category::Insurance,
        Category::Career,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Finance => "finance",
            Category::Business => "business",
            Category::Legal => "legal",
            Category::Health => "health",
            Category::Construction => "construction",
            Category::Lifestyle => "lifestyle",
            Category::Math => "math",
            Category::Insurance => "insurance",
            Category::Career => "career",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// Identity of a calculator. Built-ins keep one in a `static`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorInfo {
    /// Unique, stable key in the catalog (kebab-case)
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub tags: &'static [&'static str],
}

/// A named, self-contained unit exposing `validate` / `calculate` over a
/// domain-specific input record.
///
/// Implementations must be pure: the same inputs always give the same
/// report and the same result, and inputs are never mutated.
pub trait Calculator: Send + Sync {
    fn info(&self) -> &CalculatorInfo;

    fn id(&self) -> &str {
        self.info().id
    }

    fn name(&self) -> &str {
        self.info().name
    }

    fn description(&self) -> &str {
        self.info().description
    }

    fn category(&self) -> Category {
        self.info().category
    }

    fn tags(&self) -> &[&'static str] {
        self.info().tags
    }

    /// The validation helper: every problem with `inputs`, in order.
    fn check(&self, inputs: &CalculatorInputs<'_>) -> ValidationReport;

    /// Whether `inputs` are acceptable.
    fn validate(&self, inputs: &CalculatorInputs<'_>) -> bool {
        self.check(inputs).is_valid()
    }

    /// Validate, then compute. Invalid inputs never produce a number; they
    /// surface as [`CalculatorError::ValidationFailure`].
    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalcResult<Calculation>;

    /// Optional form metadata for hosts that render input forms.
    fn form_schema(&self) -> Option<FormSchema> {
        None
    }

    /// Worked examples with known answers, used by the audit.
    fn examples(&self) -> Vec<WorkedExample> {
        Vec::new()
    }
}

/// Typed implementation of a calculator.
pub trait Formula: Send + Sync {
    /// Typed view of the input record
    type Input;

    fn meta(&self) -> &'static CalculatorInfo;

    /// Pull typed fields out of the record; missing or mistyped fields fail here.
    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<Self::Input, ValidationReport>;

    /// Domain rules over an input that was read successfully.
    fn rules(&self, input: &Self::Input, report: &mut ValidationReport);

    /// Primary result plus analysis. Only called with inputs that passed `rules`.
    fn compute(&self, input: &Self::Input) -> Result<Calculation, FormulaError>;

    fn schema(&self) -> Option<FormSchema> {
        None
    }

    fn worked_examples(&self) -> Vec<WorkedExample> {
        Vec::new()
    }
}

impl<F: Formula> Calculator for F {
    fn info(&self) -> &CalculatorInfo {
        self.meta()
    }

    fn check(&self, inputs: &CalculatorInputs<'_>) -> ValidationReport {
        match self.read(inputs) {
            Ok(input) => {
                let mut report = ValidationReport::new();
                self.rules(&input, &mut report);
                report
            }
            Err(report) => report,
        }
    }

    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalcResult<Calculation> {
        let id = self.meta().id;
        let input = self
            .read(inputs)
            .map_err(|report| CalculatorError::validation(id, report.into_errors()))?;

        let mut report = ValidationReport::new();
        self.rules(&input, &mut report);
        if !report.is_valid() {
            debug!(calculator = id, errors = %report, "Rejected inputs");
            return Err(CalculatorError::validation(id, report.into_errors()));
        }

        let calculation = self
            .compute(&input)
            .map_err(|source| CalculatorError::formula(id, source))?;
        debug!(calculator = id, result = calculation.result, "Calculated");
        Ok(calculation)
    }

    fn form_schema(&self) -> Option<FormSchema> {
        self.schema()
    }

    fn examples(&self) -> Vec<WorkedExample> {
        self.worked_examples()
    }
}

/// `numerator / denominator`, refusing a zero or non-finite outcome.
pub(crate) fn checked_div(numerator: f64, denominator: f64, quantity: &str) -> Result<f64, FormulaError> {
    if denominator == 0.0 {
        return Err(FormulaError::division_by_zero(quantity));
    }
    finite(numerator / denominator, quantity)
}

/// Pass `value` through if it is finite.
pub(crate) fn finite(value: f64, quantity: &str) -> Result<f64, FormulaError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormulaError::non_finite(quantity))
    }
}
