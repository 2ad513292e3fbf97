//! Software developer salary estimate.
//!
//! A market base salary for the location is scaled by role, experience and
//! employer multipliers, then lifted by small bonuses for leadership and
//! certifications. Bonus, equity and benefits are fixed shares of the base
//! that depend on the kind of employer.

use crate::audit::WorkedExample;
use crate::contract::{CalculatorInfo, Category, Formula, finite};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::schema::{FieldSpec, FormSchema};
use crate::validation::ValidationReport;
use abacus_types::InputValue;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "developer-salary",
    name: "Developer Salary Calculator",
    description: "Estimated base salary and total compensation for a software developer",
    category: Category::Career,
    tags: &["salary", "compensation", "developer", "engineer", "career"],
};

/// Market base salary by location.
const LOCATIONS: [(&str, f64); 14] = [
    ("san-francisco", 140_000.0),
    ("new-york", 130_000.0),
    ("seattle", 125_000.0),
    ("austin", 110_000.0),
    ("boston", 120_000.0),
    ("los-angeles", 115_000.0),
    ("chicago", 100_000.0),
    ("denver", 105_000.0),
    ("atlanta", 90_000.0),
    ("miami", 95_000.0),
    ("toronto", 85_000.0),
    ("london", 110_000.0),
    ("berlin", 80_000.0),
    ("remote", 110_000.0),
];

const ROLES: [(&str, f64); 18] = [
    ("software-engineer", 1.0),
    ("senior-engineer", 1.4),
    ("staff-engineer", 1.8),
    ("principal-engineer", 2.2),
    ("engineering-manager", 1.6),
    ("senior-manager", 2.0),
    ("director", 2.5),
    ("vp-engineering", 3.2),
    ("frontend-developer", 0.95),
    ("backend-developer", 1.05),
    ("fullstack-developer", 1.0),
    ("devops-engineer", 1.15),
    ("data-engineer", 1.2),
    ("ml-engineer", 1.3),
    ("security-engineer", 1.25),
    ("mobile-developer", 1.1),
    ("qa-engineer", 0.9),
    ("architect", 2.0),
];

const EXPERIENCE: [(&str, f64); 5] = [
    ("entry", 0.7),
    ("mid", 1.0),
    ("senior", 1.4),
    ("lead", 1.8),
    ("expert", 2.1),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Employer {
    pub salary_multiplier: f64,
    pub equity_multiplier: f64,
    /// Share of base paid as annual bonus
    pub bonus_share: f64,
    /// Share of base paid as benefits
    pub benefits_share: f64,
}

const fn employer(salary: f64, equity: f64, bonus: f64, benefits: f64) -> Employer {
    Employer {
        salary_multiplier: salary,
        equity_multiplier: equity,
        bonus_share: bonus,
        benefits_share: benefits,
    }
}

const COMPANY_SIZES: [(&str, Employer); 7] = [
    ("startup", employer(0.85, 2.0, 0.10, 0.15)),
    ("small", employer(0.95, 1.5, 0.15, 0.20)),
    ("medium", employer(1.0, 1.0, 0.15, 0.20)),
    ("large", employer(1.15, 0.8, 0.15, 0.20)),
    ("faang", employer(1.4, 1.2, 0.20, 0.25)),
    ("unicorn", employer(1.2, 2.5, 0.15, 0.20)),
    ("consulting", employer(1.1, 0.2, 0.15, 0.20)),
];

const LEADERSHIP_BONUS: f64 = 0.05;
const BONUS_PER_CERTIFICATION: f64 = 0.02;
const MAX_CERTIFICATION_BONUS: f64 = 0.10;
const MAX_CERTIFICATIONS: f64 = 50.0;
const EQUITY_SHARE: f64 = 0.25;
const HOURS_PER_YEAR: f64 = 40.0 * 52.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DeveloperSalaryInputs {
    pub market_base: f64,
    pub role_multiplier: f64,
    pub experience_multiplier: f64,
    pub employer: Employer,
    pub certifications: f64,
    pub leadership: bool,
}

#[derive(Debug, Default)]
pub struct DeveloperSalaryCalculator;

fn keys<T>(table: &[(&'static str, T)]) -> Vec<&'static str> {
    table.iter().map(|(key, _)| *key).collect()
}

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

impl Formula for DeveloperSalaryCalculator {
    type Input = DeveloperSalaryInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<DeveloperSalaryInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let location = fields.choice("location", "Location", &keys(&LOCATIONS));
        let role = fields.choice("role", "Role", &keys(&ROLES));
        let experience = fields.choice("experience", "Experience", &keys(&EXPERIENCE));
        let company = fields.choice("companySize", "Company size", &keys(&COMPANY_SIZES));

        // An unknown key has already been reported by `choice`.
        let input = DeveloperSalaryInputs {
            market_base: lookup(&LOCATIONS, &location).unwrap_or(0.0),
            role_multiplier: lookup(&ROLES, &role).unwrap_or(0.0),
            experience_multiplier: lookup(&EXPERIENCE, &experience).unwrap_or(0.0),
            employer: lookup(&COMPANY_SIZES, &company).unwrap_or(COMPANY_SIZES[2].1),
            certifications: fields
                .optional_number("certifications", "Certifications")
                .unwrap_or(0.0),
            leadership: fields
                .optional_flag("leadershipExperience", "Leadership experience")
                .unwrap_or(false),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &DeveloperSalaryInputs, report: &mut ValidationReport) {
        report.within(
            "certifications",
            "Certifications",
            input.certifications,
            0.0,
            MAX_CERTIFICATIONS,
        );
    }

    fn compute(&self, input: &DeveloperSalaryInputs) -> Result<Calculation, FormulaError> {
        let base = base_salary(input)?;
        let employer = &input.employer;
        let bonus = (base * employer.bonus_share).round();
        let equity = (base * EQUITY_SHARE * employer.equity_multiplier).round();
        let benefits = (base * employer.benefits_share).round();
        let total = base + bonus + equity + benefits;
        let percentile = market_percentile(total);

        Ok(Calculation::new(base)
            .with_analysis(analyze(percentile))
            .with_metric("bonus", bonus)
            .with_metric("equity", equity)
            .with_metric("benefits", benefits)
            .with_metric("totalCompensation", total)
            .with_metric("hourlyRate", (base / HOURS_PER_YEAR).round())
            .with_metric("marketPercentile", percentile.round()))
    }

    fn schema(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![
            FieldSpec::select("location", "Location", &keys(&LOCATIONS)),
            FieldSpec::select("role", "Role", &keys(&ROLES)),
            FieldSpec::select("experience", "Experience Level", &keys(&EXPERIENCE)),
            FieldSpec::select("companySize", "Company Size", &keys(&COMPANY_SIZES)),
            FieldSpec::number("certifications", "Certifications")
                .min(0.0)
                .max(MAX_CERTIFICATIONS)
                .optional(),
            FieldSpec::boolean("leadershipExperience", "Leadership Experience").optional(),
        ]))
    }

    fn worked_examples(&self) -> Vec<WorkedExample> {
        vec![
            WorkedExample::new(
                "Mid-level engineer in Chicago",
                &[
                    ("location", InputValue::from("chicago")),
                    ("role", InputValue::from("software-engineer")),
                    ("experience", InputValue::from("mid")),
                    ("companySize", InputValue::from("medium")),
                ],
                100_000.0,
            ),
            WorkedExample::new(
                "Senior engineer at an Austin startup",
                &[
                    ("location", InputValue::from("austin")),
                    ("role", InputValue::from("senior-engineer")),
                    ("experience", InputValue::from("senior")),
                    ("companySize", InputValue::from("startup")),
                    ("certifications", InputValue::from(2)),
                    ("leadershipExperience", InputValue::from(true)),
                ],
                199_753.0,
            ),
        ]
    }
}

/// Annual base salary, rounded to whole currency units.
pub fn base_salary(input: &DeveloperSalaryInputs) -> Result<f64, FormulaError> {
    let certification_bonus =
        (input.certifications * BONUS_PER_CERTIFICATION).min(MAX_CERTIFICATION_BONUS);
    let leadership_bonus = if input.leadership { LEADERSHIP_BONUS } else { 0.0 };
    let salary = input.market_base
        * input.role_multiplier
        * input.experience_multiplier
        * input.employer.salary_multiplier
        * (1.0 + leadership_bonus + certification_bonus);
    finite(salary.round(), "base salary")
}

/// Rough market percentile of a total package, clamped to 5..=95.
pub fn market_percentile(total_compensation: f64) -> f64 {
    (50.0 + (total_compensation - 150_000.0) / 5_000.0).clamp(5.0, 95.0)
}

pub fn analyze(percentile: f64) -> Analysis {
    if percentile >= 75.0 {
        Analysis::new(
            "Top-quartile package; negotiate on equity and scope rather than base",
            RiskLevel::Low,
        )
    } else if percentile >= 40.0 {
        Analysis::new(
            "Around the market median; certifications or a leadership track move it up",
            RiskLevel::Medium,
        )
    } else {
        Analysis::new(
            "Below market; benchmark against other offers before accepting",
            RiskLevel::High,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Calculator;
    use abacus_types::InputRecord;

    fn chicago_engineer() -> DeveloperSalaryInputs {
        DeveloperSalaryInputs {
            market_base: 100_000.0,
            role_multiplier: 1.0,
            experience_multiplier: 1.0,
            employer: COMPANY_SIZES[2].1,
            certifications: 0.0,
            leadership: false,
        }
    }

    #[test]
    fn test_package_breakdown() {
        let calc = DeveloperSalaryCalculator.compute(&chicago_engineer()).unwrap();
        assert_eq!(calc.result, 100_000.0);
        assert_eq!(calc.metric("bonus"), Some(15_000.0));
        assert_eq!(calc.metric("equity"), Some(25_000.0));
        assert_eq!(calc.metric("benefits"), Some(20_000.0));
        assert_eq!(calc.metric("totalCompensation"), Some(160_000.0));
        assert_eq!(calc.metric("hourlyRate"), Some(48.0));
        assert_eq!(calc.metric("marketPercentile"), Some(52.0));
        assert_eq!(calc.risk_level(), Some(RiskLevel::Medium));
    }

    #[test]
    fn test_certification_bonus_is_capped() {
        let mut input = chicago_engineer();
        input.certifications = 5.0;
        assert_eq!(base_salary(&input).unwrap(), 110_000.0);
        input.certifications = 40.0;
        assert_eq!(base_salary(&input).unwrap(), 110_000.0);
        input.leadership = true;
        assert_eq!(base_salary(&input).unwrap(), 115_000.0);
    }

    #[test]
    fn test_percentile_thresholds() {
        assert_eq!(market_percentile(1_000_000.0), 95.0);
        assert_eq!(market_percentile(0.0), 20.0);
        assert_eq!(analyze(75.0).risk_level, RiskLevel::Low);
        assert_eq!(analyze(40.0).risk_level, RiskLevel::Medium);
        assert_eq!(analyze(39.9).risk_level, RiskLevel::High);
    }

    #[test]
    fn test_startup_package() {
        let data = InputRecord::from([
            ("location".to_string(), InputValue::from("austin")),
            ("role".to_string(), InputValue::from("senior-engineer")),
            ("experience".to_string(), InputValue::from("senior")),
            ("companySize".to_string(), InputValue::from("startup")),
            ("certifications".to_string(), InputValue::from(2)),
            ("leadershipExperience".to_string(), InputValue::from(true)),
        ]);
        let calc = DeveloperSalaryCalculator
            .calculate(&CalculatorInputs::new(&data))
            .unwrap();
        assert_eq!(calc.result, 199_753.0);
        assert_eq!(calc.metric("bonus"), Some(19_975.0));
        assert_eq!(calc.metric("hourlyRate"), Some(96.0));
        assert_eq!(calc.risk_level(), Some(RiskLevel::Low));
    }

    #[test]
    fn test_unknown_options_are_reported() {
        let data = InputRecord::from([
            ("location".to_string(), InputValue::from("paris")),
            ("role".to_string(), InputValue::from("software-engineer")),
            ("experience".to_string(), InputValue::from("mid")),
        ]);
        let report = DeveloperSalaryCalculator.check(&CalculatorInputs::new(&data));
        let messages = report.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("Location must be one of san-francisco"));
        assert!(messages[0].ends_with("got 'paris'"));
        assert_eq!(messages[1], "Company size is required");
    }

    #[test]
    fn test_negative_certifications_rejected() {
        let mut input = chicago_engineer();
        input.certifications = -1.0;
        let mut report = ValidationReport::new();
        DeveloperSalaryCalculator.rules(&input, &mut report);
        assert_eq!(
            report.messages(),
            vec!["Certifications must be between 0 and 50"]
        );
    }
}
