//! Summary statistics for a list of numbers.
//!
//! The primary result is the arithmetic mean. Spread is judged by the
//! coefficient of variation, so the risk reading is unit-free.

use crate::audit::WorkedExample;
use crate::contract::{CalculatorInfo, Category, Formula, checked_div};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::schema::{FieldSpec, FormSchema};
use crate::validation::ValidationReport;
use abacus_types::InputValue;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "descriptive-statistics",
    name: "Descriptive Statistics Calculator",
    description: "Mean, median, standard deviation and range of a data set",
    category: Category::Math,
    tags: &["statistics", "mean", "median", "standard deviation"],
};

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation; zero for a single value
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Default)]
pub struct DescriptiveStatisticsCalculator;

impl Formula for DescriptiveStatisticsCalculator {
    type Input = Sample;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<Sample, ValidationReport> {
        let mut fields = inputs.reader();
        let values = fields.numbers("values", "Values");
        fields.finish(Sample { values })
    }

    fn rules(&self, input: &Sample, report: &mut ValidationReport) {
        report
            .require(!input.values.is_empty(), "values", "Values must contain at least one number")
            .require(
                input.values.iter().all(|v| v.is_finite()),
                "values",
                "Values must all be finite numbers",
            );
    }

    fn compute(&self, input: &Sample) -> Result<Calculation, FormulaError> {
        let summary = summarize(&input.values)?;
        Ok(Calculation::new(summary.mean)
            .with_analysis(analyze(&summary))
            .with_metric("count", summary.count as f64)
            .with_metric("median", summary.median)
            .with_metric("standardDeviation", summary.std_dev)
            .with_metric("min", summary.min)
            .with_metric("max", summary.max)
            .with_metric("range", summary.max - summary.min))
    }

    fn schema(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![
            FieldSpec::text("values", "Values").help("Comma-separated list of numbers"),
        ]))
    }

    fn worked_examples(&self) -> Vec<WorkedExample> {
        vec![WorkedExample::new(
            "Small sample",
            &[(
                "values",
                InputValue::from(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]),
            )],
            5.0,
        )]
    }
}

pub fn summarize(values: &[f64]) -> Result<Summary, FormulaError> {
    let count = values.len();
    let n = count as f64;
    let mean = checked_div(values.iter().sum(), n, "mean")?;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    let std_dev = if count > 1 {
        let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (squares / (n - 1.0)).sqrt()
    } else {
        0.0
    };

    Ok(Summary {
        count,
        mean,
        median,
        std_dev,
        min: sorted[0],
        max: sorted[count - 1],
    })
}

pub fn analyze(summary: &Summary) -> Analysis {
    if summary.std_dev == 0.0 {
        return Analysis::new("All values are identical", RiskLevel::Low);
    }
    let cv = if summary.mean == 0.0 {
        f64::INFINITY
    } else {
        summary.std_dev / summary.mean.abs()
    };
    if cv > 1.0 {
        Analysis::new(
            "Highly dispersed data; the mean is a poor summary, prefer the median",
            RiskLevel::High,
        )
    } else if cv > 0.5 {
        Analysis::new("Moderately dispersed data", RiskLevel::Medium)
    } else {
        Analysis::new("Values cluster closely around the mean", RiskLevel::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let summary = summarize(&[9.0, 2.0, 4.0, 4.0, 5.0, 4.0, 7.0, 5.0]).unwrap();
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.median, 4.5);
        assert_eq!((summary.min, summary.max), (2.0, 9.0));
        assert!((summary.std_dev - 2.138).abs() < 1e-3);
        assert_eq!(analyze(&summary).risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_single_value() {
        let summary = summarize(&[3.0]).unwrap();
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn test_empty_is_an_error() {
        assert!(summarize(&[]).is_err());
    }

    #[test]
    fn test_dispersion_around_zero() {
        let summary = summarize(&[-1.0, 1.0]).unwrap();
        assert_eq!(analyze(&summary).risk_level, RiskLevel::High);
    }
}
