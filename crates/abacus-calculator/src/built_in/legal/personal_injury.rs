//! Personal injury settlement estimate.
//!
//! Damages are summed, then reduced to the defendant's share of fault. The
//! low/high metrics give a negotiation range around that figure.

use crate::audit::WorkedExample;
use crate::contract::{CalculatorInfo, Category, Formula, finite};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::schema::{FieldSpec, FormSchema};
use crate::validation::ValidationReport;
use abacus_types::InputValue;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "personal-injury-settlement",
    name: "Personal Injury Settlement Calculator",
    description: "Estimated settlement from economic, non-economic and punitive damages",
    category: Category::Legal,
    tags: &["personal injury", "settlement", "damages", "lawsuit"],
};

const RANGE_LOW: f64 = 0.7;
const RANGE_HIGH: f64 = 1.3;

#[derive(Debug, Clone, PartialEq)]
pub struct InjuryInputs {
    pub medical_expenses: f64,
    pub lost_wages: f64,
    pub pain_and_suffering: f64,
    pub future_earnings_loss: f64,
    pub punitive_damages: f64,
    /// Defendant's share of fault, percent
    pub liability_percentage: f64,
}

#[derive(Debug, Default)]
pub struct PersonalInjuryCalculator;

impl Formula for PersonalInjuryCalculator {
    type Input = InjuryInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<InjuryInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = InjuryInputs {
            medical_expenses: fields.number("medicalExpenses", "Medical expenses"),
            lost_wages: fields.number("lostWages", "Lost wages"),
            pain_and_suffering: fields.number("painAndSuffering", "Pain and suffering"),
            future_earnings_loss: fields
                .optional_number("futureEarningsLoss", "Future earnings loss")
                .unwrap_or(0.0),
            punitive_damages: fields
                .optional_number("punitiveDamages", "Punitive damages")
                .unwrap_or(0.0),
            liability_percentage: fields
                .optional_number("liabilityPercentage", "Liability percentage")
                .unwrap_or(100.0),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &InjuryInputs, report: &mut ValidationReport) {
        report
            .non_negative("medicalExpenses", "Medical expenses", input.medical_expenses)
            .non_negative("lostWages", "Lost wages", input.lost_wages)
            .non_negative("painAndSuffering", "Pain and suffering", input.pain_and_suffering)
            .non_negative("futureEarningsLoss", "Future earnings loss", input.future_earnings_loss)
            .non_negative("punitiveDamages", "Punitive damages", input.punitive_damages)
            .within(
                "liabilityPercentage",
                "Liability percentage",
                input.liability_percentage,
                0.0,
                100.0,
            );
    }

    fn compute(&self, input: &InjuryInputs) -> Result<Calculation, FormulaError> {
        let economic = input.medical_expenses + input.lost_wages + input.future_earnings_loss;
        let total = finite(
            (economic + input.pain_and_suffering + input.punitive_damages)
                * input.liability_percentage
                / 100.0,
            "settlement",
        )?;

        Ok(Calculation::new(total)
            .with_analysis(analyze(total))
            .with_metric("economicDamages", economic)
            .with_metric("settlementLow", total * RANGE_LOW)
            .with_metric("settlementHigh", total * RANGE_HIGH))
    }

    fn schema(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![
            FieldSpec::currency("medicalExpenses", "Medical Expenses ($)"),
            FieldSpec::currency("lostWages", "Lost Wages ($)"),
            FieldSpec::currency("painAndSuffering", "Pain and Suffering ($)"),
            FieldSpec::currency("futureEarningsLoss", "Future Earnings Loss ($)").optional(),
            FieldSpec::currency("punitiveDamages", "Punitive Damages ($)").optional(),
            FieldSpec::percentage("liabilityPercentage", "Defendant Liability (%)")
                .min(0.0)
                .max(100.0)
                .optional()
                .help("Defaults to 100%"),
        ]))
    }

    fn worked_examples(&self) -> Vec<WorkedExample> {
        vec![WorkedExample::new(
            "Shared fault",
            &[
                ("medicalExpenses", InputValue::from(40_000)),
                ("lostWages", InputValue::from(20_000)),
                ("painAndSuffering", InputValue::from(90_000)),
                ("liabilityPercentage", InputValue::from(80)),
            ],
            120_000.0,
        )]
    }
}

pub fn analyze(settlement: f64) -> Analysis {
    if settlement > 1_000_000.0 {
        Analysis::new(
            "High-value claim; expect vigorous defense and consider trial counsel",
            RiskLevel::High,
        )
    } else if settlement > 100_000.0 {
        Analysis::new(
            "Significant claim; document damages thoroughly before negotiating",
            RiskLevel::Medium,
        )
    } else {
        Analysis::new("Likely to settle through negotiation", RiskLevel::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liability_reduces_award() {
        let calc = PersonalInjuryCalculator
            .compute(&InjuryInputs {
                medical_expenses: 40_000.0,
                lost_wages: 20_000.0,
                pain_and_suffering: 90_000.0,
                future_earnings_loss: 0.0,
                punitive_damages: 0.0,
                liability_percentage: 80.0,
            })
            .unwrap();
        assert_eq!(calc.result, 120_000.0);
        assert_eq!(calc.metric("economicDamages"), Some(60_000.0));
        assert_eq!(calc.risk_level(), Some(RiskLevel::Medium));
    }
}
