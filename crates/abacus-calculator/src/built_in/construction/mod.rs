//! Construction and home projects.

use crate::contract::Calculator;

pub mod concrete_volume;
pub mod garden_cost;
pub mod paint_coverage;

pub fn all() -> Vec<Box<dyn Calculator>> {
    vec![
        Box::new(garden_cost::GardenCostCalculator),
        Box::new(concrete_volume::ConcreteVolumeCalculator),
        Box::new(paint_coverage::PaintCoverageCalculator),
    ]
}
