use crate::contract::{CalculatorInfo, Category, Formula, checked_div, finite};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::validation::ValidationReport;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "retirement-savings",
    name: "Retirement Savings Calculator",
    description: "Projected nest egg at retirement from current savings and monthly contributions",
    category: Category::Finance,
    tags: &["retirement", "401k", "savings", "pension"],
};

#[derive(Debug, Clone, PartialEq)]
pub struct RetirementInputs {
    pub current_savings: f64,
    pub monthly_contribution: f64,
    /// Annual return, percent
    pub expected_return: f64,
    pub years_to_retirement: f64,
    /// Desired balance at retirement
    pub target_amount: Option<f64>,
}

#[derive(Debug, Default)]
pub struct RetirementSavingsCalculator;

impl Formula for RetirementSavingsCalculator {
    type Input = RetirementInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<RetirementInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = RetirementInputs {
            current_savings: fields.number("currentSavings", "Current savings"),
            monthly_contribution: fields.number("monthlyContribution", "Monthly contribution"),
            expected_return: fields.number("expectedReturn", "Expected return"),
            years_to_retirement: fields.number("yearsToRetirement", "Years to retirement"),
            target_amount: fields.optional_number("targetAmount", "Target amount"),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &RetirementInputs, report: &mut ValidationReport) {
        report
            .non_negative("currentSavings", "Current savings", input.current_savings)
            .non_negative("monthlyContribution", "Monthly contribution", input.monthly_contribution)
            .within("expectedReturn", "Expected return", input.expected_return, 0.0, 20.0)
            .within("yearsToRetirement", "Years to retirement", input.years_to_retirement, 1.0, 70.0);
        if let Some(target) = input.target_amount {
            report.positive("targetAmount", "Target amount", target);
        }
    }

    fn compute(&self, input: &RetirementInputs) -> Result<Calculation, FormulaError> {
        let balance = projected_balance(input)?;
        let mut calc = Calculation::new(balance)
            .with_analysis(analyze(balance))
            .with_metric(
                "totalContributions",
                input.current_savings + input.monthly_contribution * 12.0 * input.years_to_retirement,
            );
        if let Some(target) = input.target_amount {
            calc = calc.with_metric("requiredMonthlyContribution", required_contribution(input, target)?);
        }
        Ok(calc)
    }
}

fn monthly_rate(input: &RetirementInputs) -> f64 {
    input.expected_return / 100.0 / 12.0
}

/// Growth factor of one unit over the whole horizon, and the future value
/// of one unit deposited monthly.
fn factors(input: &RetirementInputs) -> (f64, f64) {
    let months = input.years_to_retirement * 12.0;
    let rate = monthly_rate(input);
    if rate == 0.0 {
        return (1.0, months);
    }
    let growth = (1.0 + rate).powf(months);
    (growth, (growth - 1.0) / rate)
}

pub fn projected_balance(input: &RetirementInputs) -> Result<f64, FormulaError> {
    let (growth, annuity) = factors(input);
    finite(
        input.current_savings * growth + input.monthly_contribution * annuity,
        "projected balance",
    )
}

/// Monthly deposit needed to reach `target`; zero when savings alone get there.
pub fn required_contribution(input: &RetirementInputs, target: f64) -> Result<f64, FormulaError> {
    let (growth, annuity) = factors(input);
    let shortfall = target - input.current_savings * growth;
    if shortfall <= 0.0 {
        return Ok(0.0);
    }
    checked_div(shortfall, annuity, "required monthly contribution")
}

pub fn analyze(balance: f64) -> Analysis {
    if balance < 500_000.0 {
        Analysis::new(
            "Projected savings may fall short; consider raising contributions",
            RiskLevel::High,
        )
    } else if balance < 1_000_000.0 {
        Analysis::new(
            "On a reasonable path; small increases compound significantly",
            RiskLevel::Medium,
        )
    } else {
        Analysis::new("Well positioned for retirement", RiskLevel::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> RetirementInputs {
        RetirementInputs {
            current_savings: 50_000.0,
            monthly_contribution: 1000.0,
            expected_return: 6.0,
            years_to_retirement: 30.0,
            target_amount: None,
        }
    }

    #[test]
    fn test_projection() {
        let balance = projected_balance(&plan()).unwrap();
        assert!((balance - 1_305_643.80).abs() < 0.01);
        assert_eq!(analyze(balance).risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_zero_return() {
        let input = RetirementInputs {
            expected_return: 0.0,
            ..plan()
        };
        assert_eq!(projected_balance(&input).unwrap(), 50_000.0 + 360_000.0);
    }

    #[test]
    fn test_required_contribution_reaches_target() {
        let input = plan();
        let monthly = required_contribution(&input, 2_000_000.0).unwrap();
        let reached = projected_balance(&RetirementInputs {
            monthly_contribution: monthly,
            ..input.clone()
        })
        .unwrap();
        assert!((reached - 2_000_000.0).abs() < 1e-6);
        assert_eq!(required_contribution(&input, 10_000.0).unwrap(), 0.0);
    }
}
