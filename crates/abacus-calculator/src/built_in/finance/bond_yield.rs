//! Bond yield to maturity.
//!
//! Solves for the periodic discount rate that prices the bond's coupons and
//! principal at `currentPrice`, then annualizes it. Price falls strictly as
//! the rate rises, so bisection on a bracketing interval always converges.
//!
//! Inputs:
//!   * `parValue` face value repaid at maturity
//!   * `couponRate` annual coupon, percent of par
//!   * `yearsToMaturity` at most 100
//!   * `currentPrice` market price
//!   * `paymentsPerYear` (optional) coupon frequency: 1, 2, 4 or 12; defaults to 2

use crate::audit::WorkedExample;
use crate::contract::{CalculatorInfo, Category, Formula};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::schema::{FieldSpec, FormSchema};
use crate::validation::ValidationReport;
use abacus_types::InputValue;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "bond-yield-to-maturity",
    name: "Bond Yield to Maturity Calculator",
    description: "Annual yield earned by holding a bond bought at its current price until maturity",
    category: Category::Finance,
    tags: &["bond", "yield", "ytm", "fixed income"],
};

const DEFAULT_PAYMENTS_PER_YEAR: f64 = 2.0;
const MAX_YEARS_TO_MATURITY: f64 = 100.0;
const FREQUENCIES: [f64; 4] = [1.0, 2.0, 4.0, 12.0];
const MAX_ITERATIONS: usize = 200;
const TOLERANCE: f64 = 1e-10;
/// Lowest periodic rate tried; keeps `1 + rate` positive.
const RATE_FLOOR: f64 = -0.99;
const RATE_CEILING: f64 = 1e6;

#[derive(Debug, Clone, PartialEq)]
pub struct BondYieldInputs {
    pub par_value: f64,
    pub coupon_rate: f64,
    pub years_to_maturity: f64,
    pub current_price: f64,
    pub payments_per_year: f64,
}

impl BondYieldInputs {
    fn periods(&self) -> u32 {
        (self.years_to_maturity * self.payments_per_year).round() as u32
    }

    fn coupon(&self) -> f64 {
        self.par_value * self.coupon_rate / 100.0 / self.payments_per_year
    }
}

#[derive(Debug, Default)]
pub struct BondYieldCalculator;

impl Formula for BondYieldCalculator {
    type Input = BondYieldInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<BondYieldInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = BondYieldInputs {
            par_value: fields.number("parValue", "Par value"),
            coupon_rate: fields.number("couponRate", "Coupon rate"),
            years_to_maturity: fields.number("yearsToMaturity", "Years to maturity"),
            current_price: fields.number("currentPrice", "Current price"),
            payments_per_year: fields
                .optional_number("paymentsPerYear", "Payments per year")
                .unwrap_or(DEFAULT_PAYMENTS_PER_YEAR),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &BondYieldInputs, report: &mut ValidationReport) {
        report
            .positive("parValue", "Par value", input.par_value)
            .within("couponRate", "Coupon rate", input.coupon_rate, 0.0, 100.0)
            .within(
                "yearsToMaturity",
                "Years to maturity",
                input.years_to_maturity,
                0.0,
                MAX_YEARS_TO_MATURITY,
            )
            .positive("currentPrice", "Current price", input.current_price)
            .require(
                FREQUENCIES.contains(&input.payments_per_year),
                "paymentsPerYear",
                "Payments per year must be 1, 2, 4 or 12",
            );
        if report.is_valid() {
            report.require(
                input.periods() >= 1,
                "yearsToMaturity",
                "Bond must have at least one coupon period left",
            );
        }
    }

    fn compute(&self, input: &BondYieldInputs) -> Result<Calculation, FormulaError> {
        let ytm = yield_to_maturity(input)?;
        let current_yield = input.coupon() * input.payments_per_year / input.current_price * 100.0;

        Ok(Calculation::new(ytm)
            .with_analysis(analyze(ytm))
            .with_metric("currentYield", current_yield)
            .with_metric("periods", f64::from(input.periods())))
    }

    fn schema(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![
            FieldSpec::currency("parValue", "Par Value ($)"),
            FieldSpec::percentage("couponRate", "Coupon Rate (%)").min(0.0).max(100.0),
            FieldSpec::number("yearsToMaturity", "Years to Maturity")
                .min(0.0)
                .max(MAX_YEARS_TO_MATURITY),
            FieldSpec::currency("currentPrice", "Current Price ($)"),
            FieldSpec::select("paymentsPerYear", "Coupon Payments per Year", &["1", "2", "4", "12"])
                .optional()
                .help("Defaults to semi-annual"),
        ]))
    }

    fn worked_examples(&self) -> Vec<WorkedExample> {
        vec![
            WorkedExample::new(
                "Discount bond",
                &[
                    ("parValue", InputValue::from(1000)),
                    ("couponRate", InputValue::from(5)),
                    ("yearsToMaturity", InputValue::from(10)),
                    ("currentPrice", InputValue::from(950)),
                ],
                5.6617,
            ),
            WorkedExample::new(
                "Bond at par",
                &[
                    ("parValue", InputValue::from(1000)),
                    ("couponRate", InputValue::from(6)),
                    ("yearsToMaturity", InputValue::from(5)),
                    ("currentPrice", InputValue::from(1000)),
                ],
                6.0,
            ),
        ]
    }
}

/// Price of the bond discounted at `periodic_rate` per coupon period.
///
/// Coupons are valued as a level annuity, so the cost does not depend on
/// the number of periods.
pub fn price_at(periodic_rate: f64, coupon: f64, par_value: f64, periods: u32) -> f64 {
    let n = f64::from(periods);
    if periodic_rate == 0.0 {
        return coupon * n + par_value;
    }
    let discount = (1.0 + periodic_rate).powf(-n);
    let coupons = if coupon == 0.0 {
        0.0
    } else {
        coupon * (1.0 - discount) / periodic_rate
    };
    coupons + par_value * discount
}

/// Annual yield to maturity in percent.
pub fn yield_to_maturity(input: &BondYieldInputs) -> Result<f64, FormulaError> {
    let periods = input.periods();
    let coupon = input.coupon();
    let target = input.current_price;
    let price = |rate: f64| price_at(rate, coupon, input.par_value, periods);

    let mut lo = RATE_FLOOR;
    if price(lo) < target {
        return Err(FormulaError::out_of_domain(
            "currentPrice",
            target,
            "price exceeds the value of every cash flow at any yield",
        ));
    }

    let mut hi = 1.0;
    while price(hi) > target {
        hi *= 2.0;
        if hi > RATE_CEILING {
            return Err(FormulaError::out_of_domain(
                "currentPrice",
                target,
                "price is too small to bracket a yield",
            ));
        }
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (lo + hi) / 2.0;
        if price(mid) > target {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo < TOLERANCE {
            return Ok((lo + hi) / 2.0 * input.payments_per_year * 100.0);
        }
    }
    Err(FormulaError::NoConvergence {
        iterations: MAX_ITERATIONS,
    })
}

pub fn analyze(ytm: f64) -> Analysis {
    if ytm < 3.0 {
        Analysis::new(
            "Low yield bond, suitable for conservative investors seeking capital preservation",
            RiskLevel::Low,
        )
    } else if ytm < 7.0 {
        Analysis::new(
            "Moderate yield bond offering a balance of income and risk",
            RiskLevel::Medium,
        )
    } else {
        Analysis::new(
            "High yield bond; review the issuer's credit quality before buying",
            RiskLevel::High,
        )
    }
}
