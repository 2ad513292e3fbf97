use crate::contract::{CalculatorInfo, Category, Formula, checked_div};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::validation::ValidationReport;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "conversion-rate",
    name: "Conversion Rate Calculator",
    description: "Share of visitors who complete a desired action",
    category: Category::Business,
    tags: &["conversion", "marketing", "ecommerce", "funnel"],
};

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionInputs {
    pub visitors: f64,
    pub conversions: f64,
}

#[derive(Debug, Default)]
pub struct ConversionRateCalculator;

impl Formula for ConversionRateCalculator {
    type Input = ConversionInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<ConversionInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = ConversionInputs {
            visitors: fields.number("visitors", "Visitors"),
            conversions: fields.number("conversions", "Conversions"),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &ConversionInputs, report: &mut ValidationReport) {
        report
            .positive("visitors", "Visitors", input.visitors)
            .non_negative("conversions", "Conversions", input.conversions)
            .require(
                input.conversions <= input.visitors,
                "conversions",
                "Conversions cannot exceed visitors",
            );
    }

    fn compute(&self, input: &ConversionInputs) -> Result<Calculation, FormulaError> {
        let rate = checked_div(input.conversions, input.visitors, "conversion rate")? * 100.0;
        Ok(Calculation::new(rate).with_analysis(analyze(rate)))
    }
}

pub fn analyze(rate: f64) -> Analysis {
    if rate < 1.0 {
        Analysis::new(
            "Well below typical benchmarks; review targeting and landing pages",
            RiskLevel::High,
        )
    } else if rate < 3.0 {
        Analysis::new("Around the industry average", RiskLevel::Medium)
    } else {
        Analysis::new("Above-average conversion", RiskLevel::Low)
    }
}
