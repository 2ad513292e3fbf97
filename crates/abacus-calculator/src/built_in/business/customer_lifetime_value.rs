use crate::contract::{CalculatorInfo, Category, Formula, checked_div, finite};
use crate::error::FormulaError;
use crate::inputs::CalculatorInputs;
use crate::result::{Analysis, Calculation, RiskLevel};
use crate::schema::{FieldSpec, FormSchema};
use crate::validation::ValidationReport;

static INFO: CalculatorInfo = CalculatorInfo {
    id: "customer-lifetime-value",
    name: "Customer Lifetime Value Calculator",
    description: "Profit a customer is expected to generate over the whole relationship",
    category: Category::Business,
    tags: &["clv", "ltv", "marketing", "retention", "cac"],
};

#[derive(Debug, Clone, PartialEq)]
pub struct ClvInputs {
    pub average_order_value: f64,
    /// Purchases per year
    pub purchase_frequency: f64,
    /// Years
    pub customer_lifespan: f64,
    /// Percent of revenue kept as profit
    pub profit_margin: f64,
    pub acquisition_cost: Option<f64>,
}

#[derive(Debug, Default)]
pub struct CustomerLifetimeValueCalculator;

impl Formula for CustomerLifetimeValueCalculator {
    type Input = ClvInputs;

    fn meta(&self) -> &'static CalculatorInfo {
        &INFO
    }

    fn read(&self, inputs: &CalculatorInputs<'_>) -> Result<ClvInputs, ValidationReport> {
        let mut fields = inputs.reader();
        let input = ClvInputs {
            average_order_value: fields.number("averageOrderValue", "Average order value"),
            purchase_frequency: fields.number("purchaseFrequency", "Purchase frequency"),
            customer_lifespan: fields.number("customerLifespan", "Customer lifespan"),
            profit_margin: fields.number("profitMargin", "Profit margin"),
            acquisition_cost: fields.optional_number("customerAcquisitionCost", "Customer acquisition cost"),
        };
        fields.finish(input)
    }

    fn rules(&self, input: &ClvInputs, report: &mut ValidationReport) {
        report
            .positive("averageOrderValue", "Average order value", input.average_order_value)
            .positive("purchaseFrequency", "Purchase frequency", input.purchase_frequency)
            .positive("customerLifespan", "Customer lifespan", input.customer_lifespan)
            .within("profitMargin", "Profit margin", input.profit_margin, 0.0, 100.0);
        if let Some(cac) = input.acquisition_cost {
            report.positive("customerAcquisitionCost", "Customer acquisition cost", cac);
        }
    }

    fn compute(&self, input: &ClvInputs) -> Result<Calculation, FormulaError> {
        let clv = lifetime_value(input)?;
        let mut calc = Calculation::new(clv).with_metric(
            "annualRevenue",
            input.average_order_value * input.purchase_frequency,
        );
        let analysis = match input.acquisition_cost {
            Some(cac) => {
                let ratio = checked_div(clv, cac, "CLV to CAC ratio")?;
                calc = calc.with_metric("clvToCacRatio", ratio);
                analyze(ratio)
            }
            None => Analysis::new(
                "Add the customer acquisition cost to judge whether this value pays back",
                RiskLevel::Medium,
            ),
        };
        Ok(calc.with_analysis(analysis))
    }

    fn schema(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![
            FieldSpec::currency("averageOrderValue", "Average Order Value ($)"),
            FieldSpec::number("purchaseFrequency", "Purchases per Year").min(0.0),
            FieldSpec::number("customerLifespan", "Customer Lifespan (years)").min(0.0),
            FieldSpec::percentage("profitMargin", "Profit Margin (%)").min(0.0).max(100.0),
            FieldSpec::currency("customerAcquisitionCost", "Acquisition Cost ($)").optional(),
        ]))
    }
}

pub fn lifetime_value(input: &ClvInputs) -> Result<f64, FormulaError> {
    finite(
        input.average_order_value
            * input.purchase_frequency
            * input.customer_lifespan
            * input.profit_margin
            / 100.0,
        "customer lifetime value",
    )
}

/// Risk from the CLV:CAC ratio.
pub fn analyze(ratio: f64) -> Analysis {
    if ratio < 1.0 {
        Analysis::new(
            "Customers cost more to acquire than they return",
            RiskLevel::High,
        )
    } else if ratio < 3.0 {
        Analysis::new(
            "Below the common 3:1 benchmark; improve retention or lower acquisition cost",
            RiskLevel::Medium,
        )
    } else {
        Analysis::new("Healthy unit economics", RiskLevel::Low)
    }
}
