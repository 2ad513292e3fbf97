//! Everyday purchases and household budgeting.

use crate::contract::Calculator;

pub mod car_payment;

pub fn all() -> Vec<Box<dyn Calculator>> {
    vec![Box::new(car_payment::CarPaymentCalculator)]
}
