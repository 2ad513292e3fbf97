//! Loan-to-cost ratio for construction and development financing.

use crate::contract::{CalculatorInfo, Category, Formula, checked_div};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::validation::ValidationReport;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "loan-to-cost",
    name: "Loan-to-Cost Calculator",
    description: "Share of a project's total cost that is financed by the loan",
    category: Category::Finance,
    tags: &["ltc", "construction loan", "real estate", "lending"],
};

#[derive(Debug, Clone, PartialEq)]
pub struct LoanToCostInputs {
    pub loan_amount: f64,
    pub total_cost: f64,
}

#[derive(Debug, Default)]
pub struct LoanToCostCalculator;

impl Formula for LoanToCostCalculator {
    type Input = LoanToCostInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<LoanToCostInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = LoanToCostInputs {
            loan_amount: fields.number("loanAmount", "Loan amount"),
            total_cost: fields.number("totalCost", "Total project cost"),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &LoanToCostInputs, report: &mut ValidationReport) {
        report
            .non_negative("loanAmount", "Loan amount", input.loan_amount)
            .positive("totalCost", "Total project cost", input.total_cost);
    }

    fn compute(&self, input: &LoanToCostInputs) -> Result<Calculation, FormulaError> {
        let ltc = loan_to_cost(input.loan_amount, input.total_cost)?;
        Ok(Calculation::new(ltc)
            .with_analysis(analyze(ltc))
            .with_metric("equityRequired", (input.total_cost - input.loan_amount).max(0.0)))
    }
}

/// Percent of cost covered by the loan.
pub fn loan_to_cost(loan_amount: f64, total_cost: f64) -> Result<f64, FormulaError> {
    Ok(checked_div(loan_amount, total_cost, "loan-to-cost ratio")? * 100.0)
}

pub fn analyze(ltc: f64) -> Analysis {
    if ltc > 80.0 {
        Analysis::new(
            "Above typical lender limits; expect higher rates or added equity requirements",
            RiskLevel::High,
        )
    } else if ltc > 75.0 {
        Analysis::new("Near the upper range lenders accept", RiskLevel::Medium)
    } else {
        Analysis::new("Within standard lending guidelines", RiskLevel::Low)
    }
}
