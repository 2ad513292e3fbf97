use crate::validation::ValidationReport;
use abacus_types::{InputRecord, InputValue};

/// Provides a safe interface for calculators to access input variables.
#[derive(Debug, Clone, Copy)]
pub struct CalculatorInputs<'a> {
    variables: &'a InputRecord,
}

impl<'a> CalculatorInputs<'a> {
    /// Creates a new `CalculatorInputs`.
    pub fn new(variables: &'a InputRecord) -> Self {
        Self { variables }
    }

    /// Raw access to a field.
    pub fn get(&self, name: &str) -> Option<&'a InputValue> {
        self.variables.get(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Start reading typed fields, collecting every problem instead of
    /// stopping at the first one.
    pub fn reader(&self) -> FieldReader<'a> {
        FieldReader {
            variables: self.variables,
            report: ValidationReport::new(),
        }
    }
}

impl<'a> From<&'a InputRecord> for CalculatorInputs<'a> {
    fn from(variables: &'a InputRecord) -> Self {
        Self::new(variables)
    }
}

/// Reads typed fields out of an input record.
///
/// A missing or mistyped field is recorded in the report and a neutral
/// placeholder is returned, so a calculator can build its typed input in one
/// expression and call [`FieldReader::finish`] at the end.
#[derive(Debug)]
pub struct FieldReader<'a> {
    variables: &'a InputRecord,
    report: ValidationReport,
}

impl<'a> FieldReader<'a> {
    /// Required numeric field. `Null` counts as missing.
    pub fn number(&mut self, field: &str, label: &str) -> f64 {
        match self.variables.get(field) {
            Some(value) if !value.is_null() => match value.as_number() {
                Some(n) => n,
                None => {
                    self.report.push(
                        field,
                        format!("{label} must be a number, got {}", value.type_name()),
                    );
                    0.0
                }
            },
            _ => {
                self.report.push(field, format!("{label} is required"));
                0.0
            }
        }
    }

    /// Optional numeric field. Absent or `Null` gives `None`.
    pub fn optional_number(&mut self, field: &str, label: &str) -> Option<f64> {
        match self.variables.get(field) {
            None | Some(InputValue::Null) => None,
            Some(value) => match value.as_number() {
                Some(n) => Some(n),
                None => {
                    self.report.push(
                        field,
                        format!("{label} must be a number, got {}", value.type_name()),
                    );
                    None
                }
            },
        }
    }

    /// Optional text field.
    pub fn optional_text(&mut self, field: &str, label: &str) -> Option<String> {
        match self.variables.get(field) {
            None | Some(InputValue::Null) => None,
            Some(InputValue::String(s)) => Some(s.clone()),
            Some(other) => {
                self.report.push(
                    field,
                    format!("{label} must be text, got {}", other.type_name()),
                );
                None
            }
        }
    }

    /// Required text field restricted to a fixed set of options.
    pub fn choice(&mut self, field: &str, label: &str, options: &[&str]) -> String {
        match self.variables.get(field) {
            Some(InputValue::String(s)) if options.contains(&s.as_str()) => s.clone(),
            Some(InputValue::String(s)) => {
                self.report.push(
                    field,
                    format!("{label} must be one of {}, got '{s}'", options.join(", ")),
                );
                String::new()
            }
            Some(other) if !other.is_null() => {
                self.report.push(
                    field,
                    format!("{label} must be text, got {}", other.type_name()),
                );
                String::new()
            }
            _ => {
                self.report.push(field, format!("{label} is required"));
                String::new()
            }
        }
    }

    /// Optional boolean field.
    pub fn optional_flag(&mut self, field: &str, label: &str) -> Option<bool> {
        match self.variables.get(field) {
            None | Some(InputValue::Null) => None,
            Some(InputValue::Boolean(b)) => Some(*b),
            Some(other) => {
                self.report.push(
                    field,
                    format!("{label} must be true or false, got {}", other.type_name()),
                );
                None
            }
        }
    }

    /// Required list of numbers.
    pub fn numbers(&mut self, field: &str, label: &str) -> Vec<f64> {
        match self.variables.get(field) {
            Some(InputValue::Array(items)) => {
                let parsed: Option<Vec<f64>> = items.iter().map(InputValue::as_number).collect();
                match parsed {
                    Some(values) => values,
                    None => {
                        self.report
                            .push(field, format!("{label} must contain only numbers"));
                        Vec::new()
                    }
                }
            }
            Some(other) if !other.is_null() => {
                self.report.push(
                    field,
                    format!("{label} must be a list of numbers, got {}", other.type_name()),
                );
                Vec::new()
            }
            _ => {
                self.report.push(field, format!("{label} is required"));
                Vec::new()
            }
        }
    }

    /// Return the typed input, or the report if any field was unusable.
    pub fn finish<T>(self, input: T) -> Result<T, ValidationReport> {
        if self.report.is_valid() {
            Ok(input)
        } else {
            Err(self.report)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, InputValue)]) -> InputRecord {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_reader_coerces_and_collects() {
        let data = record(&[
            ("a", InputValue::Integer(42)),
            ("b", InputValue::from("oops")),
            ("method", InputValue::from("earnings")),
            ("series", InputValue::from(vec![1.0, 2.0])),
        ]);
        let inputs = CalculatorInputs::new(&data);
        let mut fields = inputs.reader();

        assert_eq!(fields.number("a", "A"), 42.0);
        assert_eq!(fields.number("b", "B"), 0.0);
        assert_eq!(fields.number("missing", "Missing"), 0.0);
        assert_eq!(fields.optional_number("absent", "Absent"), None);
        assert_eq!(fields.choice("method", "Method", &["asset", "earnings"]), "earnings");
        assert_eq!(fields.numbers("series", "Series"), vec![1.0, 2.0]);

        let report = fields.finish(()).unwrap_err();
        assert_eq!(
            report.messages(),
            vec!["B must be a number, got string", "Missing is required"]
        );
    }

    #[test]
    fn test_null_counts_as_missing() {
        let data = record(&[("a", InputValue::Null)]);
        let mut fields = CalculatorInputs::new(&data).reader();
        fields.number("a", "A");
        assert_eq!(fields.finish(()).unwrap_err().messages(), vec!["A is required"]);
    }

    #[test]
    fn test_clean_read_finishes_ok() {
        let data = record(&[("a", InputValue::Float(1.5))]);
        let mut fields = CalculatorInputs::new(&data).reader();
        let a = fields.number("a", "A");
        assert_eq!(fields.finish(a), Ok(1.5));
    }
}
