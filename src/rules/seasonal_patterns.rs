use crate::models::Season;
use crate::rules::types::{RuleSeverity, SunAdvisory};
use crate::service::ExposureResult;

/// Winter shading above this is flagged as heavy
pub const HEAVY_WINTER_SHADING: f64 = 75.0;
/// Summer shading in this range is welcome relief for heat-sensitive crops
pub const BENEFICIAL_SUMMER_SHADE: (f64, f64) = (30.0, 60.0);
/// Max minus min shading across seasons above this is flagged as variable
pub const SEASONAL_VARIABILITY: f64 = 50.0;

/// Seasonal pattern rules; independent of what is planted
pub fn check_seasonal_patterns(exposure: &ExposureResult) -> Vec<SunAdvisory> {
    [
        check_heavy_winter_shading(exposure),
        check_beneficial_summer_shade(exposure),
        check_seasonal_variability(exposure),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn check_heavy_winter_shading(exposure: &ExposureResult) -> Option<SunAdvisory> {
    let winter = exposure.shaded_percentage(Season::Winter)?;
    if winter <= HEAVY_WINTER_SHADING {
        return None;
    }
    Some(SunAdvisory {
        rule_id: "heavy_winter_shading".to_string(),
        severity: RuleSeverity::Info,
        title: "Heavy winter shading".to_string(),
        explanation: format!(
            "{:.0}% of the garden is shaded at the low winter sun angle.",
            winter
        ),
        suggested_action: "Plan winter crops elsewhere or use this bed for overwintering cover crops"
            .to_string(),
        affected_gardens: vec![exposure.garden_id],
        affected_trees: exposure.shading_sources.clone(),
    })
}

fn check_beneficial_summer_shade(exposure: &ExposureResult) -> Option<SunAdvisory> {
    let summer = exposure.shaded_percentage(Season::Summer)?;
    let (low, high) = BENEFICIAL_SUMMER_SHADE;
    if !(low..=high).contains(&summer) {
        return None;
    }
    Some(SunAdvisory {
        rule_id: "beneficial_summer_shade".to_string(),
        severity: RuleSeverity::Info,
        title: "Summer partial shade".to_string(),
        explanation: format!(
            "{:.0}% summer shading gives relief from midday heat.",
            summer
        ),
        suggested_action: "Good spot for lettuce, spinach and other crops that bolt in heat".to_string(),
        affected_gardens: vec![exposure.garden_id],
        affected_trees: exposure.shading_sources.clone(),
    })
}

fn check_seasonal_variability(exposure: &ExposureResult) -> Option<SunAdvisory> {
    let shading = exposure.seasonal_shading.as_ref()?;
    let values: Vec<f64> = shading.values().map(|s| s.shaded_percentage).collect();
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let spread = max - min;
    if spread <= SEASONAL_VARIABILITY {
        return None;
    }
    Some(SunAdvisory {
        rule_id: "seasonal_variability".to_string(),
        severity: RuleSeverity::Warning,
        title: "Sun exposure varies strongly by season".to_string(),
        explanation: format!(
            "Shading ranges from {:.0}% to {:.0}% across the year ({:.0} point spread).",
            min, max, spread
        ),
        suggested_action: "Rotate crops with the seasons: sun-lovers when shading is low, \
                           shade-tolerant crops when it is high"
            .to_string(),
        affected_gardens: vec![exposure.garden_id],
        affected_trees: exposure.shading_sources.clone(),
    })
}
