use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A calculator input record: field name to value. Created per invocation.
pub type InputRecord = HashMap<String, InputValue>;

/// Possible values of a single calculator input field.
///
/// Serialized untagged, so plain JSON (`{"parValue": 1000, "bond": true}`)
/// maps directly onto an [`InputRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum InputValue {
    /// JSON `null`, or an explicitly blank form field
    Null,
    /// `true` / `false`
    Boolean(bool),
    /// Whole number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Free text or a select option value
    String(String),
    /// List input, e.g. a data series
    Array(Vec<InputValue>),
    /// Nested group of fields
    Object(HashMap<String, InputValue>),
}

impl InputValue {
    /// Numeric view of the value. `Integer` and `Float` both qualify.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            InputValue::Integer(i) => Some(*i as f64),
            InputValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// String view of the value, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            InputValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean view of the value, if it is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            InputValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Array view of the value, if it is an array.
    pub fn as_array(&self) -> Option<&[InputValue]> {
        match self {
            InputValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Whether this is the `Null` variant.
    pub fn is_null(&self) -> bool {
        matches!(self, InputValue::Null)
    }

    /// Short type name used in validation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            InputValue::Null => "null",
            InputValue::Boolean(_) => "boolean",
            InputValue::Integer(_) => "integer",
            InputValue::Float(_) => "float",
            InputValue::String(_) => "string",
            InputValue::Array(_) => "array",
            InputValue::Object(_) => "object",
        }
    }

    /// Interpret command-line text as the most specific value it spells.
    ///
    /// `true`/`false` become booleans, whole numbers become integers, other
    /// numbers become floats, a comma separated list of numbers becomes an
    /// array and everything else stays a string.
    pub fn parse_literal(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return InputValue::Null;
        }
        match trimmed {
            "true" => return InputValue::Boolean(true),
            "false" => return InputValue::Boolean(false),
            _ => {}
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return InputValue::Integer(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return InputValue::Float(f);
        }
        if trimmed.contains(',') {
            let parts: Vec<InputValue> = trimmed.split(',').map(InputValue::parse_literal).collect();
            if parts.iter().all(|p| p.as_number().is_some()) {
                return InputValue::Array(parts);
            }
        }
        InputValue::String(trimmed.to_string())
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Null => write!(f, "null"),
            InputValue::Boolean(b) => write!(f, "{b}"),
            InputValue::Integer(i) => write!(f, "{i}"),
            InputValue::Float(fl) => write!(f, "{fl}"),
            InputValue::String(s) => write!(f, "\"{s}\""),
            InputValue::Array(items) => {
                let items: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            InputValue::Object(obj) => {
                let mut pairs: Vec<String> =
                    obj.iter().map(|(k, v)| format!("\"{k}\": {v}")).collect();
                pairs.sort();
                write!(f, "{{{}}}", pairs.join(", "))
            }
        }
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        InputValue::Float(value)
    }
}

impl From<i64> for InputValue {
    fn from(value: i64) -> Self {
        InputValue::Integer(value)
    }
}

impl From<i32> for InputValue {
    fn from(value: i32) -> Self {
        InputValue::Integer(i64::from(value))
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        InputValue::Boolean(value)
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::String(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        InputValue::String(value)
    }
}

impl From<Vec<InputValue>> for InputValue {
    fn from(value: Vec<InputValue>) -> Self {
        InputValue::Array(value)
    }
}

impl From<Vec<f64>> for InputValue {
    fn from(value: Vec<f64>) -> Self {
        InputValue::Array(value.into_iter().map(InputValue::Float).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(InputValue::Integer(42).as_number(), Some(42.0));
        assert_eq!(InputValue::Float(1.5).as_number(), Some(1.5));
        assert_eq!(InputValue::from("42").as_number(), None);
        assert_eq!(InputValue::Null.as_number(), None);
    }

    #[test]
    fn test_untagged_json_record() {
        let record: InputRecord = serde_json::from_str(
            r#"{"parValue": 1000, "couponRate": 5.5, "name": "x", "active": true, "series": [1, 2.5], "note": null}"#,
        )
        .unwrap();

        assert_eq!(record["parValue"], InputValue::Integer(1000));
        assert_eq!(record["couponRate"], InputValue::Float(5.5));
        assert_eq!(record["name"], InputValue::String("x".to_string()));
        assert_eq!(record["active"], InputValue::Boolean(true));
        assert_eq!(
            record["series"],
            InputValue::Array(vec![InputValue::Integer(1), InputValue::Float(2.5)])
        );
        assert!(record["note"].is_null());
    }

    #[test]
    fn test_parse_literal() {
        assert_eq!(InputValue::parse_literal("true"), InputValue::Boolean(true));
        assert_eq!(InputValue::parse_literal(" 950 "), InputValue::Integer(950));
        assert_eq!(InputValue::parse_literal("5.25"), InputValue::Float(5.25));
        assert_eq!(InputValue::parse_literal("-100"), InputValue::Integer(-100));
        assert_eq!(
            InputValue::parse_literal("1,2.5,3"),
            InputValue::Array(vec![
                InputValue::Integer(1),
                InputValue::Float(2.5),
                InputValue::Integer(3)
            ])
        );
        assert_eq!(
            InputValue::parse_literal("earnings"),
            InputValue::String("earnings".to_string())
        );
        assert_eq!(InputValue::parse_literal(""), InputValue::Null);
    }

    #[test]
    fn test_display() {
        assert_eq!(InputValue::from(vec![1.0, 2.5]).to_string(), "[1, 2.5]");
        assert_eq!(InputValue::from("a").to_string(), "\"a\"");
    }
}
