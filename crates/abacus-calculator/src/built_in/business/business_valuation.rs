//! Business valuation by one of three methods.
//!
//! * `asset`: total assets less total liabilities
//! * `earnings`: annual earnings times an earnings multiple
//! * `market`: annual revenue times an industry multiple
//!
//! Only the fields the chosen method uses are required.

use crate::contract::{CalculatorInfo, Category, Formula, finite};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::schema::{FieldSpec, FormSchema};
use crate::validation::ValidationReport;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "business-valuation",
    name: "Business Valuation Calculator",
    description: "Estimated value of a business by the asset, earnings or market method",
    category: Category::Business,
    tags: &["valuation", "acquisition", "multiples", "small business"],
};

const METHODS: [&str; 3] = ["asset", "earnings", "market"];
const DEFAULT_EARNINGS_MULTIPLE: f64 = 3.0;
const DEFAULT_INDUSTRY_MULTIPLE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuationMethod {
    Asset,
    Earnings,
    Market,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValuationInputs {
    pub method: ValuationMethod,
    pub total_assets: Option<f64>,
    pub total_liabilities: Option<f64>,
    pub annual_earnings: Option<f64>,
    pub earnings_multiple: f64,
    pub annual_revenue: Option<f64>,
    pub industry_multiple: f64,
}

#[derive(Debug, Default)]
pub struct BusinessValuationCalculator;

impl Formula for BusinessValuationCalculator {
    type Input = ValuationInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<ValuationInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let method = match fields.choice("valuationMethod", "Valuation method", &METHODS).as_str() {
            "earnings" => ValuationMethod::Earnings,
            "market" => ValuationMethod::Market,
            _ => ValuationMethod::Asset,
        };
        let input = ValuationInputs {
            method,
            total_assets: fields.optional_number("totalAssets", "Total assets"),
            total_liabilities: fields.optional_number("totalLiabilities", "Total liabilities"),
            annual_earnings: fields.optional_number("annualEarnings", "Annual earnings"),
            earnings_multiple: fields
                .optional_number("earningsMultiple", "Earnings multiple")
                .unwrap_or(DEFAULT_EARNINGS_MULTIPLE),
            annual_revenue: fields.optional_number("annualRevenue", "Annual revenue"),
            industry_multiple: fields
                .optional_number("industryMultiple", "Industry multiple")
                .unwrap_or(DEFAULT_INDUSTRY_MULTIPLE),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &ValuationInputs, report: &mut ValidationReport) {
        match input.method {
            ValuationMethod::Asset => {
                required_non_negative(report, "totalAssets", "Total assets", input.total_assets);
                required_non_negative(
                    report,
                    "totalLiabilities",
                    "Total liabilities",
                    input.total_liabilities,
                );
            }
            ValuationMethod::Earnings => {
                required_non_negative(report, "annualEarnings", "Annual earnings", input.annual_earnings);
                report.positive("earningsMultiple", "Earnings multiple", input.earnings_multiple);
            }
            ValuationMethod::Market => {
                required_non_negative(report, "annualRevenue", "Annual revenue", input.annual_revenue);
                report.positive("industryMultiple", "Industry multiple", input.industry_multiple);
            }
        }
    }

    fn compute(&self, input: &ValuationInputs) -> Result<Calculation, FormulaError> {
        let value = valuation(input)?;
        Ok(Calculation::new(value).with_analysis(analyze(value)))
    }

    fn schema(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![
            FieldSpec::select("valuationMethod", "Valuation Method", &METHODS),
            FieldSpec::currency("totalAssets", "Total Assets ($)").optional(),
            FieldSpec::currency("totalLiabilities", "Total Liabilities ($)").optional(),
            FieldSpec::currency("annualEarnings", "Annual Earnings ($)").optional(),
            FieldSpec::number("earningsMultiple", "Earnings Multiple").min(0.0).optional(),
            FieldSpec::currency("annualRevenue", "Annual Revenue ($)").optional(),
            FieldSpec::number("industryMultiple", "Industry Multiple").min(0.0).optional(),
        ]))
    }
}

fn required_non_negative(report: &mut ValidationReport, field: &str, label: &str, value: Option<f64>) {
    match value {
        Some(v) => {
            report.non_negative(field, label, v);
        }
        None => report.push(field, format!("{label} is required for this valuation method")),
    }
}

pub fn valuation(input: &ValuationInputs) -> Result<f64, FormulaError> {
    let value = match input.method {
        ValuationMethod::Asset => {
            input.total_assets.unwrap_or(0.0) - input.total_liabilities.unwrap_or(0.0)
        }
        ValuationMethod::Earnings => input.annual_earnings.unwrap_or(0.0) * input.earnings_multiple,
        ValuationMethod::Market => input.annual_revenue.unwrap_or(0.0) * input.industry_multiple,
    };
    finite(value, "business valuation")
}

pub fn analyze(value: f64) -> Analysis {
    if value > 10_000_000.0 {
        Analysis::new(
            "Large valuation; commission a professional appraisal",
            RiskLevel::High,
        )
    } else if value > 1_000_000.0 {
        Analysis::new(
            "Mid-market valuation; verify with comparable transactions",
            RiskLevel::Medium,
        )
    } else {
        Analysis::new("Small business valuation", RiskLevel::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(method: ValuationMethod) -> ValuationInputs {
        ValuationInputs {
            method,
            total_assets: Some(2_000_000.0),
            total_liabilities: Some(500_000.0),
            annual_earnings: Some(400_000.0),
            earnings_multiple: 3.0,
            annual_revenue: Some(5_000_000.0),
            industry_multiple: 1.5,
        }
    }

    #[test]
    fn test_each_method() {
        assert_eq!(valuation(&inputs(ValuationMethod::Asset)).unwrap(), 1_500_000.0);
        assert_eq!(valuation(&inputs(ValuationMethod::Earnings)).unwrap(), 1_200_000.0);
        assert_eq!(valuation(&inputs(ValuationMethod::Market)).unwrap(), 7_500_000.0);
    }

    #[test]
    fn test_method_fields_are_required() {
        let mut input = inputs(ValuationMethod::Earnings);
        input.annual_earnings = None;
        let mut report = ValidationReport::new();
        BusinessValuationCalculator.rules(&input, &mut report);
        assert_eq!(
            report.messages(),
            vec!["Annual earnings is required for this valuation method"]
        );
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(analyze(10_000_001.0).risk_level, RiskLevel::High);
        assert_eq!(analyze(1_000_000.0).risk_level, RiskLevel::Low);
    }
}
