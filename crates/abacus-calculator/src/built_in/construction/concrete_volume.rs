use crate::contract::{CalculatorInfo, Category, Formula, finite};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::validation::ValidationReport;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "concrete-volume",
    name: "Concrete Volume Calculator",
    description: "Cubic yards of concrete to order for a slab, including a waste allowance",
    category: Category::Construction,
    tags: &["concrete", "slab", "volume", "cubic yards"],
};

const DEFAULT_WASTE_FACTOR: f64 = 1.1;

#[derive(Debug, Clone, PartialEq)]
pub struct ConcreteInputs {
    /// Feet
    pub length: f64,
    /// Feet
    pub width: f64,
    /// Inches
    pub thickness: f64,
    pub waste_factor: f64,
    pub cost_per_cubic_yard: Option<f64>,
}

#[derive(Debug, Default)]
pub struct ConcreteVolumeCalculator;

impl Formula for ConcreteVolumeCalculator {
    type Input = ConcreteInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<ConcreteInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = ConcreteInputs {
            length: fields.number("length", "Length"),
            width: fields.number("width", "Width"),
            thickness: fields.number("thickness", "Thickness"),
            waste_factor: fields
                .optional_number("wasteFactor", "Waste factor")
                .unwrap_or(DEFAULT_WASTE_FACTOR),
            cost_per_cubic_yard: fields.optional_number("costPerCubicYard", "Cost per cubic yard"),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &ConcreteInputs, report: &mut ValidationReport) {
        report
            .positive("length", "Length", input.length)
            .positive("width", "Width", input.width)
            .positive("thickness", "Thickness", input.thickness)
            .within("wasteFactor", "Waste factor", input.waste_factor, 1.0, 2.0);
        if let Some(cost) = input.cost_per_cubic_yard {
            report.non_negative("costPerCubicYard", "Cost per cubic yard", cost);
        }
    }

    fn compute(&self, input: &ConcreteInputs) -> Result<Calculation, FormulaError> {
        let yards = cubic_yards(input)?;
        let mut calc = Calculation::new(yards)
            .with_analysis(analyze(yards))
            .with_metric("cubicFeet", yards * 27.0);
        if let Some(cost) = input.cost_per_cubic_yard {
            calc = calc.with_metric("estimatedCost", yards * cost);
        }
        Ok(calc)
    }
}

pub fn cubic_yards(input: &ConcreteInputs) -> Result<f64, FormulaError> {
    finite(
        input.length * input.width * (input.thickness / 12.0) / 27.0 * input.waste_factor,
        "concrete volume",
    )
}

pub fn analyze(yards: f64) -> Analysis {
    if yards > 100.0 {
        Analysis::new(
            "Commercial-scale pour; schedule multiple trucks and a pump",
            RiskLevel::High,
        )
    } else if yards > 50.0 {
        Analysis::new("Large pour; coordinate delivery in advance", RiskLevel::Medium)
    } else {
        Analysis::new("Standard residential pour", RiskLevel::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slab_with_waste() {
        let calc = ConcreteVolumeCalculator
            .compute(&ConcreteInputs {
                length: 20.0,
                width: 10.0,
                thickness: 4.0,
                waste_factor: 1.1,
                cost_per_cubic_yard: Some(150.0),
            })
            .unwrap();
        assert!((calc.result - 2.716).abs() < 1e-3);
        assert!((calc.metric("estimatedCost").unwrap() - 407.41).abs() < 0.01);
        assert_eq!(calc.risk_level(), Some(RiskLevel::Low));
    }
}
