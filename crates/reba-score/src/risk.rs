//! Final score risk classification

use serde::{Deserialize, Serialize};

/// REBA risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[default]
    Negligible,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Classify a final REBA score
    pub fn from_score(score: i32) -> Self {
        match score {
            i32::MIN..=1 => RiskLevel::Negligible,
            2..=3 => RiskLevel::Low,
            4..=7 => RiskLevel::Medium,
            8..=10 => RiskLevel::High,
            _ => RiskLevel::VeryHigh,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Negligible => "negligible",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
