use crate::audit::WorkedExample;
use crate::built_in::amortized_payment;
use crate::contract::{CalculatorInfo, Category, Formula};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::schema::{FieldSpec, FormSchema};
use crate::validation::ValidationReport;
use abacus_types::InputValue;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "mortgage-payment",
    name: "Mortgage Payment Calculator",
    description: "Monthly principal and interest payment on a fixed-rate mortgage",
    category: Category::Finance,
    tags: &["mortgage", "home loan", "amortization", "real estate"],
};

#[derive(Debug, Clone, PartialEq)]
pub struct MortgageInputs {
    pub loan_amount: f64,
    /// Annual rate, percent
    pub interest_rate: f64,
    /// Years
    pub loan_term: f64,
}

impl MortgageInputs {
    fn months(&self) -> u32 {
        (self.loan_term * 12.0).round() as u32
    }
}

#[derive(Debug, Default)]
pub struct MortgagePaymentCalculator;

impl Formula for MortgagePaymentCalculator {
    type Input = MortgageInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<MortgageInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = MortgageInputs {
            loan_amount: fields.number("loanAmount", "Loan amount"),
            interest_rate: fields.number("interestRate", "Interest rate"),
            loan_term: fields.number("loanTerm", "Loan term"),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &MortgageInputs, report: &mut ValidationReport) {
        report
            .positive("loanAmount", "Loan amount", input.loan_amount)
            .within("interestRate", "Interest rate", input.interest_rate, 0.0, 30.0)
            .within("loanTerm", "Loan term", input.loan_term, 1.0, 50.0);
    }

    fn compute(&self, input: &MortgageInputs) -> Result<Calculation, FormulaError> {
        let months = input.months();
        let payment = amortized_payment(input.loan_amount, input.interest_rate, months)?;
        let total_payment = payment * f64::from(months);

        Ok(Calculation::new(payment)
            .with_analysis(analyze(payment))
            .with_metric("totalPayment", total_payment)
            .with_metric("totalInterest", total_payment - input.loan_amount))
    }

    fn schema(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![
            FieldSpec::currency("loanAmount", "Loan Amount ($)"),
            FieldSpec::percentage("interestRate", "Interest Rate (%)").min(0.0).max(30.0),
            FieldSpec::number("loanTerm", "Loan Term (years)").min(1.0).max(50.0),
        ]))
    }

    fn worked_examples(&self) -> Vec<WorkedExample> {
        vec![WorkedExample::new(
            "30-year fixed",
            &[
                ("loanAmount", InputValue::from(300_000)),
                ("interestRate", InputValue::from(6.5)),
                ("loanTerm", InputValue::from(30)),
            ],
            1896.20,
        )]
    }
}

pub fn analyze(monthly_payment: f64) -> Analysis {
    if monthly_payment > 5000.0 {
        Analysis::new(
            "High monthly payment; make sure it stays within 28% of gross income",
            RiskLevel::High,
        )
    } else if monthly_payment > 2000.0 {
        Analysis::new(
            "Moderate payment; budget for taxes and insurance on top",
            RiskLevel::Medium,
        )
    } else {
        Analysis::new("Affordable payment for most household budgets", RiskLevel::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirty_year_loan() {
        let calc = MortgagePaymentCalculator
            .compute(&MortgageInputs {
                loan_amount: 300_000.0,
                interest_rate: 6.5,
                loan_term: 30.0,
            })
            .unwrap();
        assert!((calc.result - 1896.20).abs() < 0.01);
        assert!((calc.metric("totalInterest").unwrap() - 382_633.47).abs() < 0.5);
        assert_eq!(calc.risk_level(), Some(RiskLevel::Low));
    }

    #[test]
    fn test_interest_free() {
        let calc = MortgagePaymentCalculator
            .compute(&MortgageInputs {
                loan_amount: 120_000.0,
                interest_rate: 0.0,
                loan_term: 10.0,
            })
            .unwrap();
        assert_eq!(calc.result, 1000.0);
        assert_eq!(calc.metric("totalInterest"), Some(0.0));
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(analyze(5000.01).risk_level, RiskLevel::High);
        assert_eq!(analyze(5000.0).risk_level, RiskLevel::Medium);
        assert_eq!(analyze(2000.0).risk_level, RiskLevel::Low);
    }
}
