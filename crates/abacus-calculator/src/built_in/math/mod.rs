//! General mathematics.

use crate::contract::Calculator;

pub mod descriptive_statistics;

pub fn all() -> Vec<Box<dyn Calculator>> {
    vec![Box::new(descriptive_statistics::DescriptiveStatisticsCalculator)]
}
