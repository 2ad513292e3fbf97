//! Text and JSON rendering of command results.

use abacus_calculator::{
    AuditReport, Calculation, Calculator, CalculatorError, Category, FieldError, FieldKind,
    FormSchema, ValidationReport,
};
use serde::Serialize;
use std::fmt::Write;

/// Listing entry.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub category: Category,
    pub description: &'a str,
    pub tags: &'a [&'static str],
}

impl<'a> Summary<'a> {
    pub fn of(calculator: &'a dyn Calculator) -> Self {
        Self {
            id: calculator.id(),
            name: calculator.name(),
            category: calculator.category(),
            description: calculator.description(),
            tags: calculator.tags(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Details<'a> {
    #[serde(flatten)]
    pub summary: Summary<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormSchema>,
    pub worked_examples: usize,
}

#[derive(Debug, Serialize)]
pub struct ValidationOutcome<'a> {
    pub calculator: &'a str,
    pub valid: bool,
    pub errors: &'a [FieldError],
}

pub fn list_text(calculators: &[&dyn Calculator]) -> String {
    let width = calculators.iter().map(|c| c.id().len()).max().unwrap_or(0);
    let mut out = String::new();
    for calculator in calculators {
        let _ = writeln!(
            out,
            "{:<width$}  {:<12}  {}",
            calculator.id(),
            calculator.category(),
            calculator.name()
        );
    }
    let _ = writeln!(out, "{} calculator(s)", calculators.len());
    out
}

pub fn details_text(details: &Details<'_>) -> String {
    let summary = &details.summary;
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", summary.name, summary.id);
    let _ = writeln!(out, "Category: {}", summary.category);
    let _ = writeln!(out, "{}", summary.description);
    if !summary.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", summary.tags.join(", "));
    }
    if let Some(form) = &details.form {
        let _ = writeln!(out, "Inputs:");
        for field in &form.fields {
            let requirement = if field.required { "required" } else { "optional" };
            let _ = write!(out, "  {:<24} {} [{}, {}]", field.id, field.label, kind_name(&field.kind), requirement);
            if let Some(help) = &field.help {
                let _ = write!(out, " - {help}");
            }
            out.push('\n');
        }
    }
    let _ = writeln!(out, "Worked examples: {}", details.worked_examples);
    out
}

fn kind_name(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Number => "number".to_string(),
        FieldKind::Currency => "currency".to_string(),
        FieldKind::Percentage => "percentage".to_string(),
        FieldKind::Text => "text".to_string(),
        FieldKind::Boolean => "boolean".to_string(),
        FieldKind::Select { options } => format!("one of {}", options.join("|")),
    }
}

pub fn validation_text(id: &str, report: &ValidationReport) -> String {
    if report.is_valid() {
        return format!("{id}: inputs are valid\n");
    }
    let mut out = format!("{id}: inputs are invalid\n");
    for error in report.errors() {
        let _ = writeln!(out, "  {}: {}", error.field, error.message);
    }
    out
}

pub fn calculation_text(id: &str, calc: &Calculation, precision: usize) -> String {
    let mut out = format!("{id}: {:.precision$}\n", calc.result);
    if let Some(analysis) = &calc.analysis {
        let _ = writeln!(out, "Risk: {}", analysis.risk_level);
        let _ = writeln!(out, "{}", analysis.recommendation);
    }
    for (name, value) in &calc.metrics {
        let _ = writeln!(out, "  {name}: {value:.precision$}");
    }
    out
}

pub fn error_text(error: &CalculatorError) -> String {
    let mut out = format!("{} [{}]\n", error, error.error_code());
    if let CalculatorError::ValidationFailure { errors, .. } = error {
        for e in errors {
            let _ = writeln!(out, "  {}: {}", e.field, e.message);
        }
    }
    out
}

pub fn audit_text(report: &AuditReport) -> String {
    let mut out = String::new();
    for failure in report.failures() {
        let _ = writeln!(
            out,
            "FAIL {} / {} (expected {}): {:?}",
            failure.calculator, failure.example, failure.expected, failure.status
        );
    }
    let _ = writeln!(
        out,
        "{} calculators, {} examples: {} passed, {} failed",
        report.calculators,
        report.outcomes.len(),
        report.passed(),
        report.failed()
    );
    out
}

pub fn json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value).map(|mut s| {
        s.push('\n');
        s
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_calculator::{Analysis, RiskLevel};

    #[test]
    fn test_calculation_text_uses_precision() {
        let calc = Calculation::new(5.661_689)
            .with_analysis(Analysis::new("Moderate", RiskLevel::Medium))
            .with_metric("periods", 20.0);
        let text = calculation_text("bond-yield-to-maturity", &calc, 2);
        assert!(text.starts_with("bond-yield-to-maturity: 5.66\n"));
        assert!(text.contains("Risk: Medium"));
        assert!(text.contains("  periods: 20.00"));
    }

    #[test]
    fn test_validation_text_lists_fields() {
        let mut report = ValidationReport::new();
        report.positive("totalEquity", "Total equity", 0.0);
        let text = validation_text("debt-to-equity-ratio", &report);
        assert!(text.contains("invalid"));
        assert!(text.contains("totalEquity: Total equity must be greater than 0"));
    }
}
