//! Insurance pricing.

use crate::contract::Calculator;

pub mod life_insurance;

pub fn all() -> Vec<Box<dyn Calculator>> {
    vec![Box::new(life_insurance::LifeInsuranceCalculator)]
}
