use crate::built_in::amortized_payment;
use crate::contract::{CalculatorInfo, Category, Formula};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::schema::{FieldSpec, FormSchema};
use crate::validation::ValidationReport;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "car-payment",
    name: "Car Payment Calculator",
    description: "Monthly payment on an auto loan after the down payment",
    category: Category::Lifestyle,
    tags: &["car", "auto loan", "vehicle", "payment"],
};

#[derive(Debug, Clone, PartialEq)]
pub struct CarLoanInputs {
    pub vehicle_price: f64,
    pub down_payment: f64,
    /// Annual rate, percent
    pub interest_rate: f64,
    pub loan_term_months: f64,
}

#[derive(Debug, Default)]
pub struct CarPaymentCalculator;

impl Formula for CarPaymentCalculator {
    type Input = CarLoanInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<CarLoanInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = CarLoanInputs {
            vehicle_price: fields.number("vehiclePrice", "Vehicle price"),
            down_payment: fields.optional_number("downPayment", "Down payment").unwrap_or(0.0),
            interest_rate: fields.number("interestRate", "Interest rate"),
            loan_term_months: fields.number("loanTermMonths", "Loan term"),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &CarLoanInputs, report: &mut ValidationReport) {
        report
            .positive("vehiclePrice", "Vehicle price", input.vehicle_price)
            .non_negative("downPayment", "Down payment", input.down_payment)
            .less_than(
                "downPayment",
                "Down payment",
                input.down_payment,
                "vehicle price",
                input.vehicle_price,
            )
            .within("interestRate", "Interest rate", input.interest_rate, 0.0, 30.0)
            .within("loanTermMonths", "Loan term", input.loan_term_months, 1.0, 120.0);
    }

    fn compute(&self, input: &CarLoanInputs) -> Result<Calculation, FormulaError> {
        let principal = input.vehicle_price - input.down_payment;
        let months = input.loan_term_months.round() as u32;
        let payment = amortized_payment(principal, input.interest_rate, months)?;
        let total_paid = payment * f64::from(months);

        Ok(Calculation::new(payment)
            .with_analysis(analyze(payment))
            .with_metric("loanAmount", principal)
            .with_metric("totalInterest", total_paid - principal))
    }

    fn schema(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![
            FieldSpec::currency("vehiclePrice", "Vehicle Price ($)"),
            FieldSpec::currency("downPayment", "Down Payment ($)").optional(),
            FieldSpec::percentage("interestRate", "APR (%)").min(0.0).max(30.0),
            FieldSpec::number("loanTermMonths", "Loan Term (months)").min(1.0).max(120.0),
        ]))
    }
}

pub fn analyze(payment: f64) -> Analysis {
    if payment > 1000.0 {
        Analysis::new(
            "Payment is high; a larger down payment or cheaper vehicle would help",
            RiskLevel::High,
        )
    } else if payment > 500.0 {
        Analysis::new("Manageable if it stays under 15% of take-home pay", RiskLevel::Medium)
    } else {
        Analysis::new("Affordable car payment", RiskLevel::Low)
    }
}
