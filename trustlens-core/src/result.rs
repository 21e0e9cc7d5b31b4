//! Analysis results - the only output shape presentation layers may
//! depend on
//!
//! Field names follow the wire contract consumed by UI/report layers:
//! `trustScore`, `verdict`, `breakdown`, `warnings`.

use serde::{Deserialize, Serialize};

/// A signal mapped onto the common [0,1] scale, with its base weight
/// attached. Derived once per analysis run, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSignal {
    pub name: String,
    /// Normalized value in [0,1]
    pub value: f64,
    /// Base weight from the profile
    pub weight: f64,
}

/// One line of the ranked explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub name: String,

    /// Weighted impact on the final score (`normalized * effective_weight
    /// * 100`); absent for signals excluded from the round
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contribution: Option<f64>,

    /// Whether the signal participated in scoring
    pub available: bool,
}

impl BreakdownEntry {
    pub fn scored(name: &str, contribution: f64) -> Self {
        Self {
            name: name.to_string(),
            contribution: Some(contribution),
            available: true,
        }
    }

    pub fn excluded(name: &str) -> Self {
        Self {
            name: name.to_string(),
            contribution: None,
            available: false,
        }
    }
}

/// Composite result of one analysis run; owned by the caller, immutable
/// after return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Bounded trust score in [0,100]
    pub trust_score: u8,

    /// Categorical verdict from the profile's threshold table
    pub verdict: String,

    /// Signals ranked by weighted impact, excluded signals listed last
    pub breakdown: Vec<BreakdownEntry>,

    /// Human-readable degradation notes (excluded signals, insufficient
    /// data)
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_wire_shape() {
        let result = AnalysisResult {
            trust_score: 83,
            verdict: "Trustworthy".to_string(),
            breakdown: vec![
                BreakdownEntry::scored("https_valid", 23.5),
                BreakdownEntry::excluded("dns_security_score"),
            ],
            warnings: vec!["dns_security_score: unavailable".to_string()],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["trustScore"], 83);
        assert_eq!(json["verdict"], "Trustworthy");
        assert_eq!(json["breakdown"][0]["name"], "https_valid");
        assert_eq!(json["breakdown"][1]["available"], false);
        // Excluded signals carry no numeric contribution at all
        assert!(json["breakdown"][1].get("contribution").is_none());
    }

    #[test]
    fn test_result_round_trip() {
        let result = AnalysisResult {
            trust_score: 50,
            verdict: "Indeterminate".to_string(),
            breakdown: vec![BreakdownEntry::excluded("bias_score")],
            warnings: vec!["insufficient data".to_string()],
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
