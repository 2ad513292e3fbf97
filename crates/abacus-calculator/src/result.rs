use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Coarse three-valued classification attached to an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Human-readable reading of a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub recommendation: String,
    pub risk_level: RiskLevel,
}

impl Analysis {
    pub fn new(recommendation: impl Into<String>, risk_level: RiskLevel) -> Self {
        Self {
            recommendation: recommendation.into(),
            risk_level,
        }
    }
}

/// Output of a successful `calculate` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// The primary figure
    pub result: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    /// Secondary figures, keyed by camelCase name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metrics: BTreeMap<String, f64>,
}

impl Calculation {
    pub fn new(result: f64) -> Self {
        Self {
            result,
            analysis: None,
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_analysis(mut self, analysis: Analysis) -> Self {
        self.analysis = Some(analysis);
        self
    }

    pub fn with_metric(mut self, name: &str, value: f64) -> Self {
        self.metrics.insert(name.to_string(), value);
        self
    }

    pub fn risk_level(&self) -> Option<RiskLevel> {
        self.analysis.as_ref().map(|a| a.risk_level)
    }

    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(855.5555, 2), 855.56);
        assert_eq!(round_to(2.0, 2), 2.0);
        assert_eq!(round_to(-1.005, 1), -1.0);
    }

    #[test]
    fn test_calculation_json_shape() {
        let calc = Calculation::new(2.0)
            .with_analysis(Analysis::new("Highly leveraged", RiskLevel::High))
            .with_metric("totalDebt", 500_000.0);
        let json = serde_json::to_value(&calc).unwrap();
        assert_eq!(json["result"], 2.0);
        assert_eq!(json["analysis"]["riskLevel"], "High");
        assert_eq!(json["metrics"]["totalDebt"], 500_000.0);

        let bare = serde_json::to_value(Calculation::new(1.0)).unwrap();
        assert!(bare.get("analysis").is_none());
        assert!(bare.get("metrics").is_none());
    }
}
