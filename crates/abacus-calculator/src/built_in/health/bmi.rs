//! Body mass index.

use crate::audit::WorkedExample;
use crate::contract::{CalculatorInfo, Category, Formula, checked_div};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::schema::{FieldSpec, FormSchema};
use crate::validation::ValidationReport;
use abacus_types::InputValue;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "bmi",
    name: "BMI Calculator",
    description: "Body mass index from weight and height, with the healthy weight range",
    category: Category::Health,
    tags: &["bmi", "weight", "fitness", "body mass"],
};

const HEALTHY_LOW: f64 = 18.5;
const HEALTHY_HIGH: f64 = 24.9;

#[derive(Debug, Clone, PartialEq)]
pub struct BmiInputs {
    pub weight_kg: f64,
    pub height_cm: f64,
}

#[derive(Debug, Default)]
pub struct BmiCalculator;

impl Formula for BmiCalculator {
    type Input = BmiInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<BmiInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = BmiInputs {
            weight_kg: fields.number("weight", "Weight"),
            height_cm: fields.number("height", "Height"),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &BmiInputs, report: &mut ValidationReport) {
        report
            .within("weight", "Weight", input.weight_kg, 20.0, 500.0)
            .within("height", "Height", input.height_cm, 50.0, 300.0);
    }

    fn compute(&self, input: &BmiInputs) -> Result<Calculation, FormulaError> {
        let bmi = bmi(input.weight_kg, input.height_cm)?;
        let height_m = input.height_cm / 100.0;
        Ok(Calculation::new(bmi)
            .with_analysis(analyze(bmi))
            .with_metric("healthyWeightMin", HEALTHY_LOW * height_m * height_m)
            .with_metric("healthyWeightMax", HEALTHY_HIGH * height_m * height_m))
    }

    fn schema(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![
            FieldSpec::number("weight", "Weight (kg)").min(20.0).max(500.0),
            FieldSpec::number("height", "Height (cm)").min(50.0).max(300.0),
        ]))
    }

    fn worked_examples(&self) -> Vec<WorkedExample> {
        vec![WorkedExample::new(
            "Average adult",
            &[
                ("weight", InputValue::from(70)),
                ("height", InputValue::from(175)),
            ],
            22.86,
        )]
    }
}

pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64, FormulaError> {
    let height_m = height_cm / 100.0;
    checked_div(weight_kg, height_m * height_m, "body mass index")
}

pub fn category(bmi: f64) -> &'static str {
    if bmi < HEALTHY_LOW {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal weight"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}

pub fn analyze(bmi: f64) -> Analysis {
    let risk = if !(HEALTHY_LOW..=30.0).contains(&bmi) {
        RiskLevel::High
    } else if bmi > 25.0 || bmi < 20.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };
    let advice = match risk {
        RiskLevel::High => "talk to a healthcare provider about a weight plan",
        RiskLevel::Medium => "small lifestyle changes can move you into the healthy range",
        RiskLevel::Low => "keep up your current habits",
    };
    Analysis::new(format!("{}: {advice}", category(bmi)), risk)
}
