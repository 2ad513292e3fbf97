//! Raised garden bed: soil to fill it and fencing around it.
//!
//! Bed dimensions and fence height are in feet, soil depth in inches. Soil
//! is priced per cubic yard, fencing per square foot of fence face.

use crate::audit::WorkedExample;
use crate::contract::{CalculatorInfo, Category, Formula, finite};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel, round_to};
use crate::schema::{FieldSpec, FormSchema};
use crate::validation::ValidationReport;
use abacus_types::InputValue;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "garden-cost",
    name: "Garden Cost Calculator",
    description: "Cost of soil and fencing for a rectangular garden bed",
    category: Category::Construction,
    tags: &["garden", "soil", "fence", "landscaping"],
};

const CUBIC_FEET_PER_CUBIC_YARD: f64 = 27.0;
const INCHES_PER_FOOT: f64 = 12.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GardenInputs {
    pub length: f64,
    pub width: f64,
    pub soil_depth: f64,
    pub fence_height: f64,
    pub soil_cost_per_cubic_yard: f64,
    pub fence_cost_per_square_foot: f64,
}

#[derive(Debug, Default)]
pub struct GardenCostCalculator;

impl Formula for GardenCostCalculator {
    type Input = GardenInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<GardenInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = GardenInputs {
            length: fields.number("length", "Length"),
            width: fields.number("width", "Width"),
            soil_depth: fields.number("soilDepth", "Soil depth"),
            fence_height: fields.number("fenceHeight", "Fence height"),
            soil_cost_per_cubic_yard: fields.number("soilCostPerCubicYard", "Soil cost per cubic yard"),
            fence_cost_per_square_foot: fields
                .number("fenceCostPerSquareFoot", "Fence cost per square foot"),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &GardenInputs, report: &mut ValidationReport) {
        report
            .positive("length", "Length", input.length)
            .positive("width", "Width", input.width)
            .positive("soilDepth", "Soil depth", input.soil_depth)
            .non_negative("fenceHeight", "Fence height", input.fence_height)
            .non_negative(
                "soilCostPerCubicYard",
                "Soil cost per cubic yard",
                input.soil_cost_per_cubic_yard,
            )
            .non_negative(
                "fenceCostPerSquareFoot",
                "Fence cost per square foot",
                input.fence_cost_per_square_foot,
            );
    }

    fn compute(&self, input: &GardenInputs) -> Result<Calculation, FormulaError> {
        let yards = soil_cubic_yards(input)?;
        let area = fence_area(input)?;
        let soil_cost = yards * input.soil_cost_per_cubic_yard;
        let fence_cost = area * input.fence_cost_per_square_foot;
        let total = round_to(finite(soil_cost + fence_cost, "garden cost")?, 2);

        Ok(Calculation::new(total)
            .with_analysis(analyze(total))
            .with_metric("soilCubicYards", yards)
            .with_metric("soilCost", round_to(soil_cost, 2))
            .with_metric("fenceArea", area)
            .with_metric("fenceCost", round_to(fence_cost, 2)))
    }

    fn schema(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![
            FieldSpec::number("length", "Bed Length (ft)").min(0.0),
            FieldSpec::number("width", "Bed Width (ft)").min(0.0),
            FieldSpec::number("soilDepth", "Soil Depth (in)").min(0.0),
            FieldSpec::number("fenceHeight", "Fence Height (ft)")
                .min(0.0)
                .help("Use 0 for an unfenced bed"),
            FieldSpec::currency("soilCostPerCubicYard", "Soil Cost ($ per cubic yard)"),
            FieldSpec::currency("fenceCostPerSquareFoot", "Fence Cost ($ per square foot)"),
        ]))
    }

    fn worked_examples(&self) -> Vec<WorkedExample> {
        vec![WorkedExample::new(
            "Fenced ten-foot square bed",
            &[
                ("length", InputValue::from(10)),
                ("width", InputValue::from(10)),
                ("soilDepth", InputValue::from(6)),
                ("fenceHeight", InputValue::from(4)),
                ("soilCostPerCubicYard", InputValue::from(30)),
                ("fenceCostPerSquareFoot", InputValue::from(5)),
            ],
            855.56,
        )
        .tolerance(0.001)]
    }
}

pub fn soil_cubic_yards(input: &GardenInputs) -> Result<f64, FormulaError> {
    finite(
        input.length * input.width * (input.soil_depth / INCHES_PER_FOOT) / CUBIC_FEET_PER_CUBIC_YARD,
        "soil volume",
    )
}

/// Face area of a fence running the full perimeter.
pub fn fence_area(input: &GardenInputs) -> Result<f64, FormulaError> {
    finite(
        2.0 * (input.length + input.width) * input.fence_height,
        "fence area",
    )
}

pub fn analyze(total: f64) -> Analysis {
    if total > 5000.0 {
        Analysis::new(
            "Large project; get quotes from several suppliers",
            RiskLevel::High,
        )
    } else if total > 1000.0 {
        Analysis::new("Mid-sized project; buying in bulk may save money", RiskLevel::Medium)
    } else {
        Analysis::new("Small, budget-friendly project", RiskLevel::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bed() -> GardenInputs {
        GardenInputs {
            length: 10.0,
            width: 10.0,
            soil_depth: 6.0,
            fence_height: 4.0,
            soil_cost_per_cubic_yard: 30.0,
            fence_cost_per_square_foot: 5.0,
        }
    }

    #[test]
    fn test_total_is_rounded() {
        let calc = GardenCostCalculator.compute(&bed()).unwrap();
        assert_eq!(calc.result, 855.56);
        assert_eq!(calc.metric("fenceArea"), Some(160.0));
        assert_eq!(calc.metric("fenceCost"), Some(800.0));
        assert_eq!(calc.metric("soilCost"), Some(55.56));
        assert_eq!(calc.risk_level(), Some(RiskLevel::Low));
    }

    #[test]
    fn test_unfenced_bed() {
        let input = GardenInputs {
            fence_height: 0.0,
            ..bed()
        };
        let calc = GardenCostCalculator.compute(&input).unwrap();
        assert_eq!(calc.result, 55.56);
    }
}
