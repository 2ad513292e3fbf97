//! Health and fitness.

use crate::contract::Calculator;

pub mod bmi;
pub mod daily_calories;

pub fn all() -> Vec<Box<dyn Calculator>> {
    vec![
        Box::new(bmi::BmiCalculator),
        Box::new(daily_calories::DailyCaloriesCalculator),
    ]
}
