use crate::contract::{CalculatorInfo, Category, Formula, checked_div, finite};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::validation::ValidationReport;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "compound-annual-growth-rate",
    name: "Compound Annual Growth Rate Calculator",
    description: "Smoothed yearly growth rate between a beginning and an ending value",
    category: Category::Finance,
    tags: &["cagr", "growth", "returns", "investing"],
};

#[derive(Debug, Clone, PartialEq)]
pub struct CagrInputs {
    pub beginning_value: f64,
    pub ending_value: f64,
    pub years: f64,
}

#[derive(Debug, Default)]
pub struct CagrCalculator;

impl Formula for CagrCalculator {
    type Input = CagrInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<CagrInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = CagrInputs {
            beginning_value: fields.number("beginningValue", "Beginning value"),
            ending_value: fields.number("endingValue", "Ending value"),
            years: fields.number("years", "Number of years"),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &CagrInputs, report: &mut ValidationReport) {
        report
            .positive("beginningValue", "Beginning value", input.beginning_value)
            .non_negative("endingValue", "Ending value", input.ending_value)
            .positive("years", "Number of years", input.years);
    }

    fn compute(&self, input: &CagrInputs) -> Result<Calculation, FormulaError> {
        let rate = cagr(input.beginning_value, input.ending_value, input.years)?;
        Ok(Calculation::new(rate)
            .with_analysis(analyze(rate))
            .with_metric("totalGrowth", (input.ending_value / input.beginning_value - 1.0) * 100.0))
    }
}

/// CAGR in percent.
pub fn cagr(beginning_value: f64, ending_value: f64, years: f64) -> Result<f64, FormulaError> {
    let multiple = checked_div(ending_value, beginning_value, "growth multiple")?;
    let exponent = checked_div(1.0, years, "growth exponent")?;
    finite((multiple.powf(exponent) - 1.0) * 100.0, "compound annual growth rate")
}

pub fn analyze(rate: f64) -> Analysis {
    if rate < 0.0 {
        Analysis::new("Value declined over the period", RiskLevel::High)
    } else if rate < 5.0 {
        Analysis::new(
            "Modest growth, roughly in line with inflation",
            RiskLevel::Medium,
        )
    } else {
        Analysis::new("Strong compound growth", RiskLevel::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubling_in_five_years() {
        let rate = cagr(10_000.0, 20_000.0, 5.0).unwrap();
        assert!((rate - 14.8698).abs() < 1e-3);
        assert_eq!(analyze(rate).risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_total_loss() {
        assert_eq!(cagr(100.0, 0.0, 3.0).unwrap(), -100.0);
        assert_eq!(analyze(-100.0).risk_level, RiskLevel::High);
    }
}
