//! Compound growth of a lump sum, with optional monthly contributions.

use crate::audit::WorkedExample;
use crate::contract::{CalculatorInfo, Category, Formula, finite};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::schema::{FieldSpec, FormSchema};
use crate::validation::ValidationReport;
use abacus_types::InputValue;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "investment-growth",
    name: "Investment Growth Calculator",
    description: "Future value of an investment under compound interest",
    category: Category::Finance,
    tags: &["compound interest", "future value", "investing", "savings"],
};

const DEFAULT_COMPOUNDING: f64 = 12.0;

#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentGrowthInputs {
    pub initial_investment: f64,
    /// Annual return, percent
    pub annual_return: f64,
    /// Years
    pub investment_period: f64,
    /// Compounding periods per year
    pub compounding_frequency: f64,
    pub monthly_contribution: f64,
}

#[derive(Debug, Default)]
pub struct InvestmentGrowthCalculator;

impl Formula for InvestmentGrowthCalculator {
    type Input = InvestmentGrowthInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<InvestmentGrowthInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = InvestmentGrowthInputs {
            initial_investment: fields.number("initialInvestment", "Initial investment"),
            annual_return: fields.number("annualReturn", "Annual return"),
            investment_period: fields.number("investmentPeriod", "Investment period"),
            compounding_frequency: fields
                .optional_number("compoundingFrequency", "Compounding frequency")
                .unwrap_or(DEFAULT_COMPOUNDING),
            monthly_contribution: fields
                .optional_number("monthlyContribution", "Monthly contribution")
                .unwrap_or(0.0),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &InvestmentGrowthInputs, report: &mut ValidationReport) {
        report
            .non_negative("initialInvestment", "Initial investment", input.initial_investment)
            .within("annualReturn", "Annual return", input.annual_return, -50.0, 50.0)
            .within("investmentPeriod", "Investment period", input.investment_period, 0.0, 100.0)
            .within(
                "compoundingFrequency",
                "Compounding frequency",
                input.compounding_frequency,
                1.0,
                365.0,
            )
            .non_negative("monthlyContribution", "Monthly contribution", input.monthly_contribution)
            .require(
                input.initial_investment > 0.0 || input.monthly_contribution > 0.0,
                "initialInvestment",
                "Initial investment or monthly contribution must be greater than 0",
            );
    }

    fn compute(&self, input: &InvestmentGrowthInputs) -> Result<Calculation, FormulaError> {
        let principal_value = compound(
            input.initial_investment,
            input.annual_return,
            input.compounding_frequency,
            input.investment_period,
        )?;
        let contribution_value = contributions_value(
            input.monthly_contribution,
            input.annual_return,
            input.investment_period,
        )?;
        let future_value = principal_value + contribution_value;
        let invested = input.initial_investment + input.monthly_contribution * 12.0 * input.investment_period;

        Ok(Calculation::new(future_value)
            .with_analysis(analyze(future_value))
            .with_metric("totalInvested", invested)
            .with_metric("totalEarnings", future_value - invested))
    }

    fn schema(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![
            FieldSpec::currency("initialInvestment", "Initial Investment ($)"),
            FieldSpec::percentage("annualReturn", "Expected Annual Return (%)").min(-50.0).max(50.0),
            FieldSpec::number("investmentPeriod", "Investment Period (years)").min(0.0).max(100.0),
            FieldSpec::number("compoundingFrequency", "Compounding Periods per Year")
                .min(1.0)
                .max(365.0)
                .optional(),
            FieldSpec::currency("monthlyContribution", "Monthly Contribution ($)").optional(),
        ]))
    }

    fn worked_examples(&self) -> Vec<WorkedExample> {
        vec![
            WorkedExample::new(
                "Lump sum over twenty years",
                &[
                    ("initialInvestment", InputValue::from(10_000)),
                    ("annualReturn", InputValue::from(7)),
                    ("investmentPeriod", InputValue::from(20)),
                ],
                40_387.39,
            ),
            WorkedExample::new(
                "Lump sum plus monthly saving",
                &[
                    ("initialInvestment", InputValue::from(10_000)),
                    ("annualReturn", InputValue::from(7)),
                    ("investmentPeriod", InputValue::from(20)),
                    ("monthlyContribution", InputValue::from(500)),
                ],
                300_850.72,
            ),
        ]
    }
}

/// `principal · (1 + r/n)^(n·t)` with `annual_rate` in percent.
pub fn compound(principal: f64, annual_rate: f64, periods_per_year: f64, years: f64) -> Result<f64, FormulaError> {
    let rate = annual_rate / 100.0 / periods_per_year;
    finite(
        principal * (1.0 + rate).powf(periods_per_year * years),
        "future value",
    )
}

/// Future value of a level monthly deposit made at the end of each month.
pub fn contributions_value(monthly: f64, annual_rate: f64, years: f64) -> Result<f64, FormulaError> {
    let months = years * 12.0;
    let rate = annual_rate / 100.0 / 12.0;
    if rate == 0.0 {
        return Ok(monthly * months);
    }
    finite(
        monthly * ((1.0 + rate).powf(months) - 1.0) / rate,
        "contribution value",
    )
}

pub fn analyze(future_value: f64) -> Analysis {
    if future_value > 1_000_000.0 {
        Analysis::new(
            "Substantial projected balance; diversify and review tax treatment",
            RiskLevel::High,
        )
    } else if future_value > 100_000.0 {
        Analysis::new("Solid growth; keep contributing consistently", RiskLevel::Medium)
    } else {
        Analysis::new(
            "Modest projected balance; longer horizons or contributions help compounding",
            RiskLevel::Low,
        )
    }
}
