//! Legal claims and settlements.

use crate::contract::Calculator;

pub mod personal_injury;
pub mod workers_compensation;

pub fn all() -> Vec<Box<dyn Calculator>> {
    vec![
        Box::new(personal_injury::PersonalInjuryCalculator),
        Box::new(workers_compensation::WorkersCompensationCalculator),
    ]
}
