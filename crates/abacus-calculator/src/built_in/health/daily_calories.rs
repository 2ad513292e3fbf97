//! Daily calorie needs from the Mifflin-St Jeor equation.
//!
//! Basal metabolic rate is scaled by an activity multiplier to total daily
//! energy expenditure. A weight goal then shifts the daily target by 500 kcal.

use crate::contract::{CalculatorInfo, Category, Formula, finite};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::schema::{FieldSpec, FormSchema};
use crate::validation::ValidationReport;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "daily-calorie-needs",
    name: "Daily Calorie Needs Calculator",
    description: "Calories per day to maintain, lose or gain weight",
    category: Category::Health,
    tags: &["calories", "bmr", "tdee", "nutrition", "diet"],
};

const SEXES: [&str; 2] = ["male", "female"];
const ACTIVITY_LEVELS: [&str; 5] = ["sedentary", "light", "moderate", "active", "very_active"];
const GOALS: [&str; 3] = ["maintain", "lose", "gain"];
const GOAL_ADJUSTMENT: f64 = 500.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CalorieInputs {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: f64,
    pub male: bool,
    pub activity_multiplier: f64,
    pub goal_adjustment: f64,
}

#[derive(Debug, Default)]
pub struct DailyCaloriesCalculator;

impl Formula for DailyCaloriesCalculator {
    type Input = CalorieInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<CalorieInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let weight_kg = fields.number("weight", "Weight");
        let height_cm = fields.number("height", "Height");
        let age = fields.number("age", "Age");
        let male = fields.choice("gender", "Gender", &SEXES) == "male";
        let activity = match fields.optional_text("activityLevel", "Activity level") {
            Some(level) => activity_multiplier(&level),
            None => Some(1.2),
        };
        let goal = match fields.optional_text("goal", "Goal").as_deref() {
            None | Some("maintain") => Some(0.0),
            Some("lose") => Some(-GOAL_ADJUSTMENT),
            Some("gain") => Some(GOAL_ADJUSTMENT),
            Some(_) => None,
        };

        let mut report = ValidationReport::new();
        if activity.is_none() {
            report.push(
                "activityLevel",
                format!("Activity level must be one of {}", ACTIVITY_LEVELS.join(", ")),
            );
        }
        if goal.is_none() {
            report.push("goal", format!("Goal must be one of {}", GOALS.join(", ")));
        }

        let input = CalorieInputs {
            weight_kg,
            height_cm,
            age,
            male,
            activity_multiplier: activity.unwrap_or(1.2),
            goal_adjustment: goal.unwrap_or(0.0),
        };
        match fields.finish(input) {
            Ok(input) if report.is_valid() => Ok(input),
            Ok(_) => Err(report),
            Err(mut errors) => {
                errors.merge(report);
                Err(errors)
            }
        }
    }

    fn rules(&self, input: &CalorieInputs, report: &mut ValidationReport) {
        report
            .within("weight", "Weight", input.weight_kg, 20.0, 500.0)
            .within("height", "Height", input.height_cm, 50.0, 300.0)
            .within("age", "Age", input.age, 15.0, 120.0);
    }

    fn compute(&self, input: &CalorieInputs) -> Result<Calculation, FormulaError> {
        let bmr = bmr(input)?;
        let tdee = finite(bmr * input.activity_multiplier, "daily energy expenditure")?;
        Ok(Calculation::new(tdee)
            .with_analysis(analyze(tdee))
            .with_metric("bmr", bmr)
            .with_metric("targetCalories", tdee + input.goal_adjustment))
    }

    fn schema(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![
            FieldSpec::number("weight", "Weight (kg)").min(20.0).max(500.0),
            FieldSpec::number("height", "Height (cm)").min(50.0).max(300.0),
            FieldSpec::number("age", "Age").min(15.0).max(120.0),
            FieldSpec::select("gender", "Gender", &SEXES),
            FieldSpec::select("activityLevel", "Activity Level", &ACTIVITY_LEVELS).optional(),
            FieldSpec::select("goal", "Goal", &GOALS).optional(),
        ]))
    }
}

pub fn activity_multiplier(level: &str) -> Option<f64> {
    match level {
        "sedentary" => Some(1.2),
        "light" => Some(1.375),
        "moderate" => Some(1.55),
        "active" => Some(1.725),
        "very_active" => Some(1.9),
        _ => None,
    }
}

/// Mifflin-St Jeor basal metabolic rate, kcal/day.
pub fn bmr(input: &CalorieInputs) -> Result<f64, FormulaError> {
    let offset = if input.male { 5.0 } else { -161.0 };
    finite(
        10.0 * input.weight_kg + 6.25 * input.height_cm - 5.0 * input.age + offset,
        "basal metabolic rate",
    )
}

pub fn analyze(tdee: f64) -> Analysis {
    if !(1200.0..=4000.0).contains(&tdee) {
        Analysis::new(
            "Unusual energy requirement; consult a dietitian before changing intake",
            RiskLevel::High,
        )
    } else if !(1500.0..=3000.0).contains(&tdee) {
        Analysis::new(
            "Outside the common range; adjust gradually and track results",
            RiskLevel::Medium,
        )
    } else {
        Analysis::new("Typical daily energy requirement", RiskLevel::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Calculator;
    use abacus_types::{InputRecord, InputValue};

    fn adult() -> CalorieInputs {
        CalorieInputs {
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 30.0,
            male: true,
            activity_multiplier: 1.55,
            goal_adjustment: -500.0,
        }
    }

    #[test]
    fn test_mifflin_st_jeor() {
        assert_eq!(bmr(&adult()).unwrap(), 1648.75);
        let female = CalorieInputs {
            male: false,
            ..adult()
        };
        assert_eq!(bmr(&female).unwrap(), 1482.75);
    }

    #[test]
    fn test_goal_shifts_target() {
        let calc = DailyCaloriesCalculator.compute(&adult()).unwrap();
        assert!((calc.result - 2555.5625).abs() < 1e-9);
        assert!((calc.metric("targetCalories").unwrap() - 2055.5625).abs() < 1e-9);
        assert_eq!(calc.risk_level(), Some(RiskLevel::Low));
    }

    #[test]
    fn test_unknown_activity_level() {
        let data = InputRecord::from([
            ("weight".to_string(), InputValue::from(70)),
            ("height".to_string(), InputValue::from(175)),
            ("age".to_string(), InputValue::from(30)),
            ("gender".to_string(), InputValue::from("female")),
            ("activityLevel".to_string(), InputValue::from("couch")),
        ]);
        let report = DailyCaloriesCalculator.check(&CalculatorInputs::new(&data));
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.errors()[0].field, "activityLevel");
    }
}
