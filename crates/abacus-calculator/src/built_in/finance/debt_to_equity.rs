//! Debt-to-equity ratio: how much of the business is financed by creditors
//! for every unit financed by owners.

use crate::audit::WorkedExample;
use crate::contract::{CalculatorInfo, Category, Formula, checked_div};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::schema::{FieldSpec, FormSchema};
use crate::validation::ValidationReport;
use abacus_types::InputValue;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "debt-to-equity-ratio",
    name: "Debt-to-Equity Ratio Calculator",
    description: "Compares total liabilities with shareholder equity to gauge financial leverage",
    category: Category::Finance,
    tags: &["leverage", "ratio", "balance sheet", "debt"],
};

#[derive(Debug, Clone, PartialEq)]
pub struct DebtToEquityInputs {
    pub total_debt: f64,
    pub total_equity: f64,
}

#[derive(Debug, Default)]
pub struct DebtToEquityCalculator;

impl Formula for DebtToEquityCalculator {
    type Input = DebtToEquityInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<DebtToEquityInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = DebtToEquityInputs {
            total_debt: fields.number("totalDebt", "Total debt"),
            total_equity: fields.number("totalEquity", "Total equity"),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &DebtToEquityInputs, report: &mut ValidationReport) {
        report
            .non_negative("totalDebt", "Total debt", input.total_debt)
            .positive("totalEquity", "Total equity", input.total_equity);
    }

    fn compute(&self, input: &DebtToEquityInputs) -> Result<Calculation, FormulaError> {
        let ratio = debt_to_equity(input.total_debt, input.total_equity)?;
        let debt_ratio = checked_div(
            input.total_debt,
            input.total_debt + input.total_equity,
            "debt ratio",
        )?;

        Ok(Calculation::new(ratio)
            .with_analysis(analyze(ratio))
            .with_metric("debtRatio", debt_ratio)
            .with_metric("totalCapital", input.total_debt + input.total_equity))
    }

    fn schema(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![
            FieldSpec::currency("totalDebt", "Total Debt ($)").help("Short and long term liabilities"),
            FieldSpec::currency("totalEquity", "Total Equity ($)"),
        ]))
    }

    fn worked_examples(&self) -> Vec<WorkedExample> {
        vec![WorkedExample::new(
            "Highly leveraged company",
            &[
                ("totalDebt", InputValue::from(500_000)),
                ("totalEquity", InputValue::from(250_000)),
            ],
            2.0,
        )]
    }
}

pub fn debt_to_equity(total_debt: f64, total_equity: f64) -> Result<f64, FormulaError> {
    checked_div(total_debt, total_equity, "debt-to-equity ratio")
}

pub fn analyze(ratio: f64) -> Analysis {
    if ratio >= 2.0 {
        Analysis::new(
            "Highly leveraged; consider paying down debt or raising equity",
            RiskLevel::High,
        )
    } else if ratio >= 1.0 {
        Analysis::new(
            "Moderate leverage; monitor debt levels and interest coverage",
            RiskLevel::Medium,
        )
    } else {
        Analysis::new("Conservative capital structure", RiskLevel::Low)
    }
}
