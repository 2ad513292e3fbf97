//! Term life insurance premium.
//!
//! Priced per $1,000 of coverage from an age band, then adjusted for sex,
//! health class and tobacco use. The policy has to end by age 100.

use crate::audit::WorkedExample;
use crate::contract::{CalculatorInfo, Category, Formula, finite};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::schema::{FieldSpec, FormSchema};
use crate::validation::ValidationReport;
use abacus_types::InputValue;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "life-insurance",
    name: "Life Insurance Premium Calculator",
    description: "Annual premium for a level term life policy",
    category: Category::Insurance,
    tags: &["life insurance", "term life", "premium", "coverage"],
};

const SEXES: [&str; 2] = ["male", "female"];
const HEALTH_CLASSES: [(&str, f64); 5] = [
    ("excellent", 0.7),
    ("very-good", 0.85),
    ("good", 1.0),
    ("fair", 1.5),
    ("poor", 2.5),
];
const SMOKING: [(&str, f64); 3] = [
    ("non-smoker", 1.0),
    ("former-smoker", 1.3),
    ("smoker", 2.5),
];
const FEMALE_DISCOUNT: f64 = 0.8;
const DEFAULT_TERM_YEARS: f64 = 20.0;
const MAX_AGE_AT_EXPIRY: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct LifeInsuranceInputs {
    pub coverage_amount: f64,
    pub age: f64,
    pub female: bool,
    pub health_multiplier: f64,
    pub smoking_multiplier: f64,
    pub term_years: f64,
}

#[derive(Debug, Default)]
pub struct LifeInsuranceCalculator;

fn options(table: &[(&'static str, f64)]) -> Vec<&'static str> {
    table.iter().map(|(key, _)| *key).collect()
}

fn multiplier(table: &[(&str, f64)], key: &str) -> f64 {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(1.0, |(_, m)| *m)
}

impl Formula for LifeInsuranceCalculator {
    type Input = LifeInsuranceInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<LifeInsuranceInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let coverage_amount = fields.number("coverageAmount", "Coverage amount");
        let age = fields.number("age", "Age");
        let female = fields.choice("gender", "Gender", &SEXES) == "female";
        let health = fields.choice("healthStatus", "Health status", &options(&HEALTH_CLASSES));
        let smoking = fields.choice("smokingStatus", "Smoking status", &options(&SMOKING));
        let term_years = fields
            .optional_number("policyTerm", "Policy term")
            .unwrap_or(DEFAULT_TERM_YEARS);

        fields.finish(LifeInsuranceInputs {
            coverage_amount,
            age,
            female,
            health_multiplier: multiplier(&HEALTH_CLASSES, &health),
            smoking_multiplier: multiplier(&SMOKING, &smoking),
            term_years,
        })
    }

    fn rules(&self, input: &LifeInsuranceInputs, report: &mut ValidationReport) {
        report
            .within("coverageAmount", "Coverage amount", input.coverage_amount, 10_000.0, 50_000_000.0)
            .within("age", "Age", input.age, 18.0, 85.0)
            .within("policyTerm", "Policy term", input.term_years, 5.0, 40.0);
        if report.is_valid() {
            report.require(
                input.age + input.term_years <= MAX_AGE_AT_EXPIRY,
                "policyTerm",
                "Policy must expire by age 100",
            );
        }
    }

    fn compute(&self, input: &LifeInsuranceInputs) -> Result<Calculation, FormulaError> {
        let rate = rate_per_thousand(input);
        let annual = annual_premium(input.coverage_amount, rate)?;

        Ok(Calculation::new(annual)
            .with_analysis(analyze(rate))
            .with_metric("ratePerThousand", rate)
            .with_metric("monthlyPremium", annual / 12.0)
            .with_metric("totalPremiums", annual * input.term_years))
    }

    fn schema(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![
            FieldSpec::currency("coverageAmount", "Coverage Amount ($)")
                .min(10_000.0)
                .max(50_000_000.0),
            FieldSpec::number("age", "Age").min(18.0).max(85.0),
            FieldSpec::select("gender", "Gender", &SEXES),
            FieldSpec::select("healthStatus", "Health Status", &options(&HEALTH_CLASSES)),
            FieldSpec::select("smokingStatus", "Smoking Status", &options(&SMOKING)),
            FieldSpec::number("policyTerm", "Policy Term (years)")
                .min(5.0)
                .max(40.0)
                .optional()
                .help("Defaults to 20 years"),
        ]))
    }

    fn worked_examples(&self) -> Vec<WorkedExample> {
        vec![
            WorkedExample::new(
                "Healthy 35-year-old",
                &[
                    ("coverageAmount", InputValue::from(500_000)),
                    ("age", InputValue::from(35)),
                    ("gender", InputValue::from("male")),
                    ("healthStatus", InputValue::from("good")),
                    ("smokingStatus", InputValue::from("non-smoker")),
                ],
                400.0,
            ),
            WorkedExample::new(
                "Smoker in their fifties",
                &[
                    ("coverageAmount", InputValue::from(1_000_000)),
                    ("age", InputValue::from(55)),
                    ("gender", InputValue::from("male")),
                    ("healthStatus", InputValue::from("fair")),
                    ("smokingStatus", InputValue::from("smoker")),
                    ("policyTerm", InputValue::from(10)),
                ],
                11_250.0,
            ),
        ]
    }
}

/// Base rate per $1,000 of coverage for an age.
pub fn age_rate(age: f64) -> f64 {
    match age {
        a if a < 30.0 => 0.5,
        a if a < 40.0 => 0.8,
        a if a < 50.0 => 1.5,
        a if a < 60.0 => 3.0,
        a if a < 70.0 => 6.0,
        _ => 12.0,
    }
}

pub fn rate_per_thousand(input: &LifeInsuranceInputs) -> f64 {
    let sex = if input.female { FEMALE_DISCOUNT } else { 1.0 };
    age_rate(input.age) * sex * input.health_multiplier * input.smoking_multiplier
}

pub fn annual_premium(coverage_amount: f64, rate_per_thousand: f64) -> Result<f64, FormulaError> {
    finite(coverage_amount / 1000.0 * rate_per_thousand, "annual premium")
}

/// Risk from the rate per $1,000.
pub fn analyze(rate: f64) -> Analysis {
    if rate >= 3.0 {
        Analysis::new(
            "Rated as a high-risk applicant; shop several insurers and revisit after health changes",
            RiskLevel::High,
        )
    } else if rate >= 1.0 {
        Analysis::new(
            "Standard pricing; locking in a level term now avoids higher rates later",
            RiskLevel::Medium,
        )
    } else {
        Analysis::new("Preferred pricing for this coverage", RiskLevel::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Calculator;
    use abacus_types::InputRecord;

    fn applicant(age: f64, female: bool) -> LifeInsuranceInputs {
        LifeInsuranceInputs {
            coverage_amount: 500_000.0,
            age,
            female,
            health_multiplier: 1.0,
            smoking_multiplier: 1.0,
            term_years: 20.0,
        }
    }

    #[test]
    fn test_age_bands() {
        assert_eq!(age_rate(29.9), 0.5);
        assert_eq!(age_rate(30.0), 0.8);
        assert_eq!(age_rate(59.0), 3.0);
        assert_eq!(age_rate(70.0), 12.0);
    }

    #[test]
    fn test_standard_premium() {
        let calc = LifeInsuranceCalculator.compute(&applicant(35.0, false)).unwrap();
        assert!((calc.result - 400.0).abs() < 1e-9);
        assert!((calc.metric("monthlyPremium").unwrap() - 400.0 / 12.0).abs() < 1e-9);
        assert!((calc.metric("totalPremiums").unwrap() - 8000.0).abs() < 1e-9);
        assert_eq!(calc.risk_level(), Some(RiskLevel::Low));
    }

    #[test]
    fn test_female_preferred_health() {
        let mut input = applicant(25.0, true);
        input.coverage_amount = 250_000.0;
        input.health_multiplier = multiplier(&HEALTH_CLASSES, "excellent");
        let calc = LifeInsuranceCalculator.compute(&input).unwrap();
        assert!((calc.result - 70.0).abs() < 1e-6);
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(analyze(0.99).risk_level, RiskLevel::Low);
        assert_eq!(analyze(1.0).risk_level, RiskLevel::Medium);
        assert_eq!(analyze(3.0).risk_level, RiskLevel::High);
    }

    #[test]
    fn test_smoker_record() {
        let data = InputRecord::from([
            ("coverageAmount".to_string(), InputValue::from(1_000_000)),
            ("age".to_string(), InputValue::from(55)),
            ("gender".to_string(), InputValue::from("male")),
            ("healthStatus".to_string(), InputValue::from("fair")),
            ("smokingStatus".to_string(), InputValue::from("smoker")),
            ("policyTerm".to_string(), InputValue::from(10)),
        ]);
        let calc = LifeInsuranceCalculator
            .calculate(&CalculatorInputs::new(&data))
            .unwrap();
        assert!((calc.result - 11_250.0).abs() < 1e-6);
        assert_eq!(calc.risk_level(), Some(RiskLevel::High));
    }

    #[test]
    fn test_policy_must_end_by_one_hundred() {
        let mut input = applicant(80.0, false);
        input.term_years = 25.0;
        let mut report = ValidationReport::new();
        LifeInsuranceCalculator.rules(&input, &mut report);
        assert_eq!(report.messages(), vec!["Policy must expire by age 100"]);
    }

    #[test]
    fn test_unknown_smoking_status() {
        let data = InputRecord::from([
            ("coverageAmount".to_string(), InputValue::from(100_000)),
            ("age".to_string(), InputValue::from(40)),
            ("gender".to_string(), InputValue::from("female")),
            ("healthStatus".to_string(), InputValue::from("good")),
            ("smokingStatus".to_string(), InputValue::from("vaper")),
        ]);
        let report = LifeInsuranceCalculator.check(&CalculatorInputs::new(&data));
        assert_eq!(
            report.messages(),
            vec!["Smoking status must be one of non-smoker, former-smoker, smoker, got 'vaper'"]
        );
    }
}
