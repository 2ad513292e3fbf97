//! Return on investment.

use crate::audit::WorkedExample;
use crate::contract::{CalculatorInfo, Category, Formula, checked_div};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::schema::{FieldSpec, FormSchema};
use crate::validation::ValidationReport;
use abacus_types::InputValue;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "roi",
    name: "Return on Investment Calculator",
    description: "Net profit of an investment as a percentage of the amount invested",
    category: Category::Business,
    tags: &["roi", "profit", "investment", "returns"],
};

#[derive(Debug, Clone, PartialEq)]
pub struct RoiInputs {
    pub investment: f64,
    pub revenue: f64,
    pub costs: f64,
}

#[derive(Debug, Default)]
pub struct RoiCalculator;

impl Formula for RoiCalculator {
    type Input = RoiInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<RoiInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = RoiInputs {
            investment: fields.number("investment", "Investment"),
            revenue: fields.number("revenue", "Revenue"),
            costs: fields.number("costs", "Costs"),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &RoiInputs, report: &mut ValidationReport) {
        report
            .positive("investment", "Investment", input.investment)
            .non_negative("revenue", "Revenue", input.revenue)
            .non_negative("costs", "Costs", input.costs);
    }

    fn compute(&self, input: &RoiInputs) -> Result<Calculation, FormulaError> {
        let net_profit = input.revenue - input.costs;
        let roi = roi(net_profit, input.investment)?;
        Ok(Calculation::new(roi)
            .with_analysis(analyze(roi))
            .with_metric("netProfit", net_profit))
    }

    fn schema(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![
            FieldSpec::currency("investment", "Initial Investment ($)"),
            FieldSpec::currency("revenue", "Total Revenue ($)"),
            FieldSpec::currency("costs", "Operating Costs ($)"),
        ]))
    }

    fn worked_examples(&self) -> Vec<WorkedExample> {
        vec![WorkedExample::new(
            "Business investment",
            &[
                ("investment", InputValue::from(50_000)),
                ("revenue", InputValue::from(80_000)),
                ("costs", InputValue::from(30_000)),
            ],
            100.0,
        )]
    }
}

pub fn roi(net_profit: f64, investment: f64) -> Result<f64, FormulaError> {
    Ok(checked_div(net_profit, investment, "return on investment")? * 100.0)
}

pub fn analyze(roi: f64) -> Analysis {
    let recommendation = if roi >= 15.0 {
        "Strong return; worth pursuing"
    } else if roi >= 0.0 {
        "Positive but thin return; compare against alternatives"
    } else {
        "Investment loses money at these figures"
    };
    let risk = if roi < 10.0 {
        RiskLevel::High
    } else if roi < 20.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };
    Analysis::new(recommendation, risk)
}
