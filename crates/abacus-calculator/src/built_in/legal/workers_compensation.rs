use crate::contract::{CalculatorInfo, Category, Formula, finite};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::validation::ValidationReport;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "workers-compensation",
    name: "Workers' Compensation Calculator",
    description: "Total disability benefit from weekly wage, disability rating and benefit weeks",
    category: Category::Legal,
    tags: &["workers comp", "disability", "workplace injury", "benefits"],
};

#[derive(Debug, Clone, PartialEq)]
pub struct CompensationInputs {
    pub weekly_wage: f64,
    /// Percent
    pub disability_percentage: f64,
    pub weeks: f64,
}

#[derive(Debug, Default)]
pub struct WorkersCompensationCalculator;

impl Formula for WorkersCompensationCalculator {
    type Input = CompensationInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<CompensationInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = CompensationInputs {
            weekly_wage: fields.number("weeklyWage", "Weekly wage"),
            disability_percentage: fields.number("disabilityPercentage", "Disability percentage"),
            weeks: fields.number("weeksOfCompensation", "Weeks of compensation"),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &CompensationInputs, report: &mut ValidationReport) {
        report
            .positive("weeklyWage", "Weekly wage", input.weekly_wage)
            .within(
                "disabilityPercentage",
                "Disability percentage",
                input.disability_percentage,
                0.0,
                100.0,
            )
            .positive("disabilityPercentage", "Disability percentage", input.disability_percentage)
            .positive("weeksOfCompensation", "Weeks of compensation", input.weeks);
    }

    fn compute(&self, input: &CompensationInputs) -> Result<Calculation, FormulaError> {
        let weekly_benefit = input.weekly_wage * input.disability_percentage / 100.0;
        let total = finite(weekly_benefit * input.weeks, "total compensation")?;
        Ok(Calculation::new(total)
            .with_analysis(analyze(total))
            .with_metric("weeklyBenefit", weekly_benefit))
    }
}

pub fn analyze(total: f64) -> Analysis {
    if total > 250_000.0 {
        Analysis::new(
            "Large claim; an attorney review of the rating is advisable",
            RiskLevel::High,
        )
    } else if total > 50_000.0 {
        Analysis::new("Moderate claim; keep medical records current", RiskLevel::Medium)
    } else {
        Analysis::new("Routine claim", RiskLevel::Low)
    }
}
