//! Business performance and planning.

use crate::contract::Calculator;

pub mod break_even;
pub mod business_valuation;
pub mod conversion_rate;
pub mod customer_lifetime_value;
pub mod roi;

pub fn all() -> Vec<Box<dyn Calculator>> {
    vec![
        Box::new(roi::RoiCalculator),
        Box::new(break_even::BreakEvenCalculator),
        Box::new(customer_lifetime_value::CustomerLifetimeValueCalculator),
        Box::new(conversion_rate::ConversionRateCalculator),
        Box::new(business_valuation::BusinessValuationCalculator),
    ]
}
