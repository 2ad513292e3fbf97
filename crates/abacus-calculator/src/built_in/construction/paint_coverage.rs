use crate::contract::{CalculatorInfo, Category, Formula, checked_div};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::validation::ValidationReport;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "paint-coverage",
    name: "Paint Coverage Calculator",
    description: "Gallons of paint needed to cover a surface",
    category: Category::Construction,
    tags: &["paint", "coverage", "gallons", "renovation"],
};

/// Square feet per gallon for typical interior latex
const DEFAULT_COVERAGE: f64 = 350.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PaintInputs {
    /// Square feet
    pub area: f64,
    pub coats: f64,
    /// Square feet per gallon
    pub coverage_rate: f64,
}

#[derive(Debug, Default)]
pub struct PaintCoverageCalculator;

impl Formula for PaintCoverageCalculator {
    type Input = PaintInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<PaintInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = PaintInputs {
            area: fields.number("area", "Area"),
            coats: fields.optional_number("coats", "Number of coats").unwrap_or(2.0),
            coverage_rate: fields
                .optional_number("coverageRate", "Coverage rate")
                .unwrap_or(DEFAULT_COVERAGE),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &PaintInputs, report: &mut ValidationReport) {
        report
            .positive("area", "Area", input.area)
            .within("coats", "Number of coats", input.coats, 1.0, 10.0)
            .positive("coverageRate", "Coverage rate", input.coverage_rate);
    }

    fn compute(&self, input: &PaintInputs) -> Result<Calculation, FormulaError> {
        let gallons = checked_div(input.area * input.coats, input.coverage_rate, "paint gallons")?;
        Ok(Calculation::new(gallons)
            .with_analysis(analyze(gallons))
            .with_metric("gallonsToBuy", gallons.ceil()))
    }
}

pub fn analyze(gallons: f64) -> Analysis {
    if gallons > 50.0 {
        Analysis::new("Contractor-scale job; buy in 5-gallon buckets", RiskLevel::High)
    } else if gallons > 20.0 {
        Analysis::new("Sizable job; check batch numbers match", RiskLevel::Medium)
    } else {
        Analysis::new("Typical room or small exterior job", RiskLevel::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_coats() {
        let calc = PaintCoverageCalculator
            .compute(&PaintInputs {
                area: 700.0,
                coats: 2.0,
                coverage_rate: 350.0,
            })
            .unwrap();
        assert_eq!(calc.result, 4.0);
        assert_eq!(calc.metric("gallonsToBuy"), Some(4.0));
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(analyze(51.0).risk_level, RiskLevel::High);
        assert_eq!(analyze(20.5).risk_level, RiskLevel::Medium);
        assert_eq!(analyze(20.0).risk_level, RiskLevel::Low);
    }
}
