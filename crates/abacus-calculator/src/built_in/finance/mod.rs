//! Personal and corporate finance.

use crate::contract::Calculator;

pub mod bond_yield;
pub mod cagr;
pub mod debt_to_equity;
pub mod investment_growth;
pub mod loan_to_cost;
pub mod mortgage_payment;
pub mod retirement_savings;

pub fn all() -> Vec<Box<dyn Calculator>> {
    vec![
        Box::new(bond_yield::BondYieldCalculator),
        Box::new(debt_to_equity::DebtToEquityCalculator),
        Box::new(mortgage_payment::MortgagePaymentCalculator),
        Box::new(loan_to_cost::LoanToCostCalculator),
        Box::new(investment_growth::InvestmentGrowthCalculator),
        Box::new(retirement_savings::RetirementSavingsCalculator),
        Box::new(cagr::CagrCalculator),
    ]
}
