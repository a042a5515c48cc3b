use serde::{Deserialize, Serialize};

/// Severity of a sun advisory, ordered INFO < WARNING < CRITICAL
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleSeverity {
    Info,
    Warning,
    Critical,
}

impl RuleSeverity {
    pub fn icon(&self) -> &'static str {
        match self {
            RuleSeverity::Info => "ℹ️",
            RuleSeverity::Warning => "⚠️",
            RuleSeverity::Critical => "🚨",
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            RuleSeverity::Info => "Info",
            RuleSeverity::Warning => "Warning",
            RuleSeverity::Critical => "Critical",
        }
    }
}

/// One explainable advisory emitted by a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunAdvisory {
    pub rule_id: String,     // "full_sun_in_shade", "seasonal_variability", ...
    pub severity: RuleSeverity,
    pub title: String,
    pub explanation: String,
    pub suggested_action: String,
    pub affected_gardens: Vec<i64>,
    pub affected_trees: Vec<i64>,
}

/// A plant's light requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SunRequirement {
    FullSun,
    PartialSun,
    Shade,
}

impl SunRequirement {
    /// Case-insensitive: anything mentioning "full" is full sun, then "shade",
    /// everything else partial sun
    pub fn parse(requirement: &str) -> Self {
        let lower = requirement.to_lowercase();
        if lower.contains("full") {
            SunRequirement::FullSun
        } else if lower.contains("shade") {
            SunRequirement::Shade
        } else {
            SunRequirement::PartialSun
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_requirement() {
        assert_eq!(SunRequirement::parse("full_sun"), SunRequirement::FullSun);
        assert_eq!(SunRequirement::parse("FULL SUN"), SunRequirement::FullSun);
        assert_eq!(SunRequirement::parse("Shade"), SunRequirement::Shade);
        assert_eq!(SunRequirement::parse("partial_sun"), SunRequirement::PartialSun);
    }

    #[test]
    fn test_severity_order() {
        assert!(RuleSeverity::Critical > RuleSeverity::Warning);
        assert!(RuleSeverity::Warning > RuleSeverity::Info);
        assert_eq!(serde_json::to_string(&RuleSeverity::Critical).unwrap(), "\"CRITICAL\"");
    }
}
