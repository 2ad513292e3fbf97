//! Pay and career planning.

use crate::contract::Calculator;

pub mod developer_salary;

pub fn all() -> Vec<Box<dyn Calculator>> {
    vec![Box::new(developer_salary::DeveloperSalaryCalculator)]
}
