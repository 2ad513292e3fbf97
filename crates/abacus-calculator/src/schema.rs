//! Form metadata a host can use to render input forms.
//!
//! This is presentation configuration only. Validation and calculation never
//! consult it; a calculator that offers no schema still works everywhere.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
    Number,
    Currency,
    Percentage,
    Text,
    Boolean,
    Select { options: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl FieldSpec {
    fn new(id: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            required: true,
            min: None,
            max: None,
            help: None,
        }
    }

    pub fn number(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Number)
    }

    pub fn currency(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Currency).min(0.0)
    }

    pub fn percentage(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Percentage)
    }

    pub fn text(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Text)
    }

    pub fn boolean(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Boolean)
    }

    pub fn select(id: &str, label: &str, options: &[&str]) -> Self {
        Self::new(
            id,
            label,
            FieldKind::Select {
                options: options.iter().map(|o| o.to_string()).collect(),
            },
        )
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn required_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter(|f| f.required).map(|f| f.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_lookup() {
        let schema = FormSchema::new(vec![
            FieldSpec::currency("totalDebt", "Total Debt ($)"),
            FieldSpec::percentage("rate", "Rate (%)").min(0.0).max(100.0).optional(),
        ]);
        assert_eq!(schema.field("totalDebt").unwrap().min, Some(0.0));
        assert_eq!(schema.required_ids().collect::<Vec<_>>(), vec!["totalDebt"]);
    }

    #[test]
    fn test_select_serialization() {
        let spec = FieldSpec::select("method", "Method", &["asset", "earnings"]);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["kind"]["type"], "select");
        assert_eq!(json["kind"]["options"][1], "earnings");
    }
}
