//! Break-even point in units.
//!
//! The selling price must exceed the variable cost per unit, otherwise every
//! sale deepens the loss and there is no break-even point to report.

use crate::audit::WorkedExample;
use crate::contract::{CalculatorInfo, Category, Formula, checked_div};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::validation::ValidationReport;
use abacus_types::InputValue;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "break-even-point",
    name: "Break-Even Point Calculator",
    description: "Units that must be sold before revenue covers fixed and variable costs",
    category: Category::Business,
    tags: &["break even", "contribution margin", "pricing", "costs"],
};

#[derive(Debug, Clone, PartialEq)]
pub struct BreakEvenInputs {
    pub fixed_costs: f64,
    pub variable_cost_per_unit: f64,
    pub selling_price_per_unit: f64,
}

#[derive(Debug, Default)]
pub struct BreakEvenCalculator;

impl Formula for BreakEvenCalculator {
    type Input = BreakEvenInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<BreakEvenInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = BreakEvenInputs {
            fixed_costs: fields.number("fixedCosts", "Fixed costs"),
            variable_cost_per_unit: fields.number("variableCostPerUnit", "Variable cost per unit"),
            selling_price_per_unit: fields.number("sellingPricePerUnit", "Selling price per unit"),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &BreakEvenInputs, report: &mut ValidationReport) {
        report
            .non_negative("fixedCosts", "Fixed costs", input.fixed_costs)
            .non_negative(
                "variableCostPerUnit",
                "Variable cost per unit",
                input.variable_cost_per_unit,
            )
            .positive(
                "sellingPricePerUnit",
                "Selling price per unit",
                input.selling_price_per_unit,
            )
            .less_than(
                "variableCostPerUnit",
                "Variable cost per unit",
                input.variable_cost_per_unit,
                "selling price per unit",
                input.selling_price_per_unit,
            );
    }

    fn compute(&self, input: &BreakEvenInputs) -> Result<Calculation, FormulaError> {
        let margin = input.selling_price_per_unit - input.variable_cost_per_unit;
        let units = checked_div(input.fixed_costs, margin, "break-even units")?;
        let margin_ratio = checked_div(margin, input.selling_price_per_unit, "contribution margin ratio")?;

        Ok(Calculation::new(units)
            .with_analysis(analyze(margin_ratio))
            .with_metric("breakEvenRevenue", units * input.selling_price_per_unit)
            .with_metric("contributionMargin", margin)
            .with_metric("contributionMarginRatio", margin_ratio * 100.0))
    }

    fn worked_examples(&self) -> Vec<WorkedExample> {
        vec![WorkedExample::new(
            "Product launch",
            &[
                ("fixedCosts", InputValue::from(50_000)),
                ("variableCostPerUnit", InputValue::from(30)),
                ("sellingPricePerUnit", InputValue::from(80)),
            ],
            1000.0,
        )]
    }
}

/// `margin_ratio` is a fraction of the selling price.
pub fn analyze(margin_ratio: f64) -> Analysis {
    if margin_ratio < 0.2 {
        Analysis::new(
            "Thin contribution margin; small cost increases push break-even far out",
            RiskLevel::High,
        )
    } else if margin_ratio < 0.4 {
        Analysis::new("Reasonable margin; watch variable costs", RiskLevel::Medium)
    } else {
        Analysis::new("Healthy margin; break-even is quickly reached", RiskLevel::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Calculator;
    use abacus_types::InputRecord;

    #[test]
    fn test_units_and_margin() {
        let calc = BreakEvenCalculator
            .compute(&BreakEvenInputs {
                fixed_costs: 50_000.0,
                variable_cost_per_unit: 30.0,
                selling_price_per_unit: 80.0,
            })
            .unwrap();
        assert_eq!(calc.result, 1000.0);
        assert_eq!(calc.metric("breakEvenRevenue"), Some(80_000.0));
        assert_eq!(calc.metric("contributionMarginRatio"), Some(62.5));
        assert_eq!(calc.risk_level(), Some(RiskLevel::Low));
    }

    #[test]
    fn test_price_below_cost_is_invalid() {
        let data = InputRecord::from([
            ("fixedCosts".to_string(), InputValue::from(1000)),
            ("variableCostPerUnit".to_string(), InputValue::from(50)),
            ("sellingPricePerUnit".to_string(), InputValue::from(50)),
        ]);
        let err = BreakEvenCalculator
            .calculate(&CalculatorInputs::new(&data))
            .unwrap_err();
        assert_eq!(
            err.messages(),
            vec!["Variable cost per unit must be less than selling price per unit"]
        );
    }
}
