use crate::rules::types::{RuleSeverity, SunAdvisory, SunRequirement};
use crate::service::ExposureResult;
use crate::shading::ExposureCategory;

/// Match a plant's light requirement against a garden's headline exposure
///
/// Returns nothing when exposure is unavailable.
pub fn check_plant_fit(exposure: &ExposureResult, plant_sun: Option<&str>) -> Vec<SunAdvisory> {
    let Some(category) = exposure.exposure_category else {
        return Vec::new();
    };
    let requirement = plant_sun.map(SunRequirement::parse);

    [
        check_full_sun_in_shade(exposure, category, requirement),
        check_full_sun_in_partial_sun(exposure, category, requirement),
        check_shade_plant_in_full_sun(exposure, category, requirement),
        check_general_shade(exposure, category, requirement),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn check_full_sun_in_shade(
    exposure: &ExposureResult,
    category: ExposureCategory,
    requirement: Option<SunRequirement>,
) -> Option<SunAdvisory> {
    if requirement != Some(SunRequirement::FullSun) || category != ExposureCategory::Shade {
        return None;
    }
    Some(SunAdvisory {
        rule_id: "full_sun_in_shade".to_string(),
        severity: RuleSeverity::Critical,
        title: "Full-sun plant in a shaded garden".to_string(),
        explanation: format!(
            "This garden is classified as Shade in its shadiest season{}. Full-sun plants \
             will grow leggy, flower poorly and yield little here.",
            score_suffix(exposure)
        ),
        suggested_action: "Move this plant to a Full Sun garden or choose a shade-tolerant alternative"
            .to_string(),
        affected_gardens: vec![exposure.garden_id],
        affected_trees: exposure.shading_sources.clone(),
    })
}

fn check_full_sun_in_partial_sun(
    exposure: &ExposureResult,
    category: ExposureCategory,
    requirement: Option<SunRequirement>,
) -> Option<SunAdvisory> {
    if requirement != Some(SunRequirement::FullSun) || category != ExposureCategory::PartialSun {
        return None;
    }
    Some(SunAdvisory {
        rule_id: "full_sun_in_partial_sun".to_string(),
        severity: RuleSeverity::Warning,
        title: "Full-sun plant in partial sun".to_string(),
        explanation: format!(
            "This garden receives partial sun in its shadiest season{}. Expect slower growth \
             and reduced harvests.",
            score_suffix(exposure)
        ),
        suggested_action: "Plant in the sunniest part of the bed, or prune the shading trees".to_string(),
        affected_gardens: vec![exposure.garden_id],
        affected_trees: exposure.shading_sources.clone(),
    })
}

fn check_shade_plant_in_full_sun(
    exposure: &ExposureResult,
    category: ExposureCategory,
    requirement: Option<SunRequirement>,
) -> Option<SunAdvisory> {
    if requirement != Some(SunRequirement::Shade) || category != ExposureCategory::FullSun {
        return None;
    }
    Some(SunAdvisory {
        rule_id: "shade_plant_in_full_sun".to_string(),
        severity: RuleSeverity::Warning,
        title: "Shade plant in full sun".to_string(),
        explanation: "This garden is in full sun all year. Shade-loving plants may scorch \
                      and dry out quickly."
            .to_string(),
        suggested_action: "Provide shade cloth in summer or move the plant to a shadier garden"
            .to_string(),
        affected_gardens: vec![exposure.garden_id],
        affected_trees: Vec::new(),
    })
}

fn check_general_shade(
    exposure: &ExposureResult,
    category: ExposureCategory,
    requirement: Option<SunRequirement>,
) -> Option<SunAdvisory> {
    if requirement.is_some() || category != ExposureCategory::Shade {
        return None;
    }
    Some(SunAdvisory {
        rule_id: "general_shade_advisory".to_string(),
        severity: RuleSeverity::Info,
        title: "Shaded garden".to_string(),
        explanation: format!(
            "This garden is heavily shaded in at least one season{}.",
            score_suffix(exposure)
        ),
        suggested_action: "Favour leafy greens, herbs and other shade-tolerant crops".to_string(),
        affected_gardens: vec![exposure.garden_id],
        affected_trees: exposure.shading_sources.clone(),
    })
}

fn score_suffix(exposure: &ExposureResult) -> String {
    exposure
        .seasonal_exposure_score
        .map(|s| format!(" (exposure score {:.2})", s))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exposure(category: Option<ExposureCategory>) -> ExposureResult {
        ExposureResult {
            garden_id: 4,
            seasonal_exposure_score: category.map(|_| 0.5),
            seasonal_shading: None,
            exposure_category: category,
            shading_sources: vec![9],
            structure_sources: Vec::new(),
            hemisphere: None,
            warnings: Vec::new(),
        }
    }

    fn rule_ids(advisories: &[SunAdvisory]) -> Vec<&str> {
        advisories.iter().map(|a| a.rule_id.as_str()).collect()
    }

    #[test]
    fn test_full_sun_plant_in_shade_is_critical() {
        let advisories = check_plant_fit(&exposure(Some(ExposureCategory::Shade)), Some("full_sun"));
        assert_eq!(rule_ids(&advisories), vec!["full_sun_in_shade"]);
        assert_eq!(advisories[0].severity, RuleSeverity::Critical);
        assert_eq!(advisories[0].affected_trees, vec![9]);
        assert_eq!(advisories[0].affected_gardens, vec![4]);
    }

    #[test]
    fn test_full_sun_plant_in_partial_sun_is_warning() {
        let advisories = check_plant_fit(&exposure(Some(ExposureCategory::PartialSun)), Some("Full Sun"));
        assert_eq!(rule_ids(&advisories), vec!["full_sun_in_partial_sun"]);
        assert_eq!(advisories[0].severity, RuleSeverity::Warning);
    }

    #[test]
    fn test_shade_plant_in_full_sun_is_warning() {
        let advisories = check_plant_fit(&exposure(Some(ExposureCategory::FullSun)), Some("shade"));
        assert_eq!(rule_ids(&advisories), vec!["shade_plant_in_full_sun"]);
    }

    #[test]
    fn test_no_requirement_in_shade_is_info() {
        let advisories = check_plant_fit(&exposure(Some(ExposureCategory::Shade)), None);
        assert_eq!(rule_ids(&advisories), vec!["general_shade_advisory"]);
        assert_eq!(advisories[0].severity, RuleSeverity::Info);
    }

    #[test]
    fn test_matching_plants_get_no_advisory() {
        assert!(check_plant_fit(&exposure(Some(ExposureCategory::FullSun)), Some("full_sun")).is_empty());
        assert!(check_plant_fit(&exposure(Some(ExposureCategory::Shade)), Some("shade")).is_empty());
        assert!(check_plant_fit(&exposure(Some(ExposureCategory::PartialSun)), Some("partial_sun")).is_empty());
        assert!(check_plant_fit(&exposure(None), Some("full_sun")).is_empty());
    }
}
