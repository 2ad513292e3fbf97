//! Built-in calculators shipped with Abacus.
//!
//! One file per calculator, grouped by catalog section. Each file owns its
//! typed inputs, its rules, its formula and its risk thresholds; nothing is
//! shared between calculators except [`amortized_payment`].

use crate::contract::{Calculator, checked_div, finite};
use crate::error::FormulaError;

pub mod business;
pub mod career;
pub mod construction;
pub mod finance;
pub mod health;
pub mod insurance;
pub mod legal;
pub mod lifestyle;
pub mod math;

/// Every built-in calculator, in catalog order.
pub fn all() -> Vec<Box<dyn Calculator>> {
    let mut calculators = Vec::new();
    calculators.extend(finance::all());
    calculators.extend(business::all());
    calculators.extend(construction::all());
    calculators.extend(health::all());
    calculators.extend(legal::all());
    calculators.extend(lifestyle::all());
    calculators.extend(math::all());
    calculators.extend(insurance::all());
    calculators.extend(career::all());
    calculators
}

/// Level monthly payment that retires `principal` over `months` at
/// `annual_rate` percent. A zero rate gives `principal / months`.
pub fn amortized_payment(principal: f64, annual_rate: f64, months: u32) -> Result<f64, FormulaError> {
    if months == 0 {
        return Err(FormulaError::division_by_zero("monthly payment"));
    }
    let monthly_rate = annual_rate / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        return checked_div(principal, f64::from(months), "monthly payment");
    }
    let growth = (1.0 + monthly_rate).powi(months as i32);
    let payment = checked_div(principal * monthly_rate * growth, growth - 1.0, "monthly payment")?;
    finite(payment, "monthly payment")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_ids_are_unique() {
        let calculators = all();
        let ids: HashSet<&str> = calculators.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), calculators.len());
    }

    #[test]
    fn test_amortized_payment() {
        let payment = amortized_payment(300_000.0, 6.5, 360).unwrap();
        assert!((payment - 1896.20).abs() < 0.01);
        assert_eq!(amortized_payment(12_000.0, 0.0, 48).unwrap(), 250.0);
        assert!(amortized_payment(1.0, 5.0, 0).is_err());
    }
}
