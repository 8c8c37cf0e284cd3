//! Qualitative risk classification of an outbreak probability.
//!
//! A pure, stateless mapping from a posterior probability to a three-tier
//! label, consumed by reporting layers downstream of the inference engine.

use std::fmt;

/// The qualitative risk tier for an outbreak probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    /// `p < 0.20`
    Low,
    /// `0.20 <= p <= 0.60`
    Medium,
    /// `p > 0.60` (strictly above the boundary)
    High,
}

impl RiskLevel {
    /// Classifies a probability against the fixed thresholds.
    pub fn from_probability(p: f64) -> Self {
        if p < 0.20 {
            RiskLevel::Low
        } else if p <= 0.60 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_partition_the_unit_interval() {
        assert_eq!(RiskLevel::from_probability(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.19), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.20), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.45), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.60), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.601), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(1.0), RiskLevel::High);
    }

    #[test]
    fn upper_boundary_is_strict() {
        // Exactly 0.60 stays Medium; only strictly above is High.
        assert_eq!(RiskLevel::from_probability(0.60), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.60 + 1e-9), RiskLevel::High);
    }

    #[test]
    fn display_matches_reporting_labels() {
        assert_eq!(RiskLevel::Low.to_string(), "Low");
        assert_eq!(RiskLevel::Medium.to_string(), "Medium");
        assert_eq!(RiskLevel::High.to_string(), "High");
    }
}
