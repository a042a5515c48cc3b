//! Garden Shading Calculator
//!
//! Aggregates shadow rectangles against a garden footprint.
//!
//! Overlapping shadows are summed independently, so a patch covered by two
//! shadows counts twice. The total is clamped to the garden area, which keeps the
//! percentage within 0-100 but leaves the estimate biased toward more shade.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::SunError;
use crate::geometry::{project_structure_shadow, project_tree_shadow, ShadowRectangle};
use crate::models::{GardenGeometry, Season, StructureGeometry, TreeGeometry};

/// Below this shaded percentage a garden is "Full Sun"
pub const PARTIAL_SUN_THRESHOLD: f64 = 25.0;
/// At or above this shaded percentage a garden is "Shade"
pub const SHADE_THRESHOLD: f64 = 60.0;

/// Shading of one garden by a set of shadows
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShadingInfo {
    pub total_shaded_area: f64,
    pub shaded_percentage: f64,
    pub affected_by_count: usize,
}

impl ShadingInfo {
    pub fn exposure_category(&self) -> ExposureCategory {
        exposure_category(self.shaded_percentage)
    }
}

/// Shading per season bucket
pub type SeasonalShading = BTreeMap<Season, ShadingInfo>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExposureCategory {
    #[serde(rename = "Full Sun")]
    FullSun,
    #[serde(rename = "Partial Sun")]
    PartialSun,
    #[serde(rename = "Shade")]
    Shade,
}

impl ExposureCategory {
    pub fn display_text(&self) -> &'static str {
        match self {
            ExposureCategory::FullSun => "Full Sun",
            ExposureCategory::PartialSun => "Partial Sun",
            ExposureCategory::Shade => "Shade",
        }
    }
}

/// Half-open thresholds; boundary values belong to the shadier category
pub fn exposure_category(shaded_percentage: f64) -> ExposureCategory {
    if shaded_percentage < PARTIAL_SUN_THRESHOLD {
        ExposureCategory::FullSun
    } else if shaded_percentage < SHADE_THRESHOLD {
        ExposureCategory::PartialSun
    } else {
        ExposureCategory::Shade
    }
}

/// Shaded area, percentage and contributor count of a garden under `shadows`
pub fn calculate_garden_shading(
    garden_x: f64,
    garden_y: f64,
    garden_width: f64,
    garden_height: f64,
    shadows: &[ShadowRectangle],
) -> ShadingInfo {
    let garden = ShadowRectangle::new(garden_x, garden_y, garden_width, garden_height);
    let garden_area = garden.area();
    if garden_area <= 0.0 {
        return ShadingInfo::default();
    }

    let mut total = 0.0_f64;
    let mut affected_by_count = 0;
    for shadow in shadows {
        let overlap = garden.intersection_area(shadow);
        if overlap > 0.0 {
            total += overlap;
            affected_by_count += 1;
        }
    }

    let total_shaded_area = total.min(garden_area);
    let shaded_percentage = (total_shaded_area / garden_area * 100.0).clamp(0.0, 100.0);

    ShadingInfo {
        total_shaded_area,
        shaded_percentage,
        affected_by_count,
    }
}

/// Tree shadow rectangles for one season, in input order
pub(crate) fn tree_shadows(
    trees: &[TreeGeometry],
    latitude: f64,
    season: Season,
) -> Result<Vec<ShadowRectangle>, SunError> {
    trees
        .iter()
        .map(|t| project_tree_shadow(t.x, t.y, t.height, t.canopy_radius, latitude, season))
        .collect()
}

/// Structure shadow rectangles for one season, in input order
pub(crate) fn structure_shadows(
    structures: &[StructureGeometry],
    latitude: f64,
    season: Season,
) -> Result<Vec<ShadowRectangle>, SunError> {
    structures
        .iter()
        .map(|s| project_structure_shadow(s.x, s.y, s.width, s.depth, s.height, latitude, season))
        .collect()
}

/// Run [`calculate_garden_shading`] once per season for all trees combined
pub fn calculate_seasonal_garden_shading(
    garden: &GardenGeometry,
    trees: &[TreeGeometry],
    latitude: f64,
) -> Result<SeasonalShading, SunError> {
    calculate_seasonal_shading_with_structures(garden, trees, &[], latitude)
}

/// Seasonal shading from trees and structures combined
pub fn calculate_seasonal_shading_with_structures(
    garden: &GardenGeometry,
    trees: &[TreeGeometry],
    structures: &[StructureGeometry],
    latitude: f64,
) -> Result<SeasonalShading, SunError> {
    let mut seasonal = SeasonalShading::new();
    for season in Season::ALL {
        let mut shadows = tree_shadows(trees, latitude, season)?;
        shadows.extend(structure_shadows(structures, latitude, season)?);
        let info = calculate_garden_shading(garden.x, garden.y, garden.width, garden.height, &shadows);
        seasonal.insert(season, info);
    }
    Ok(seasonal)
}

/// Mean of (100 - shaded%) / 100 over the seasons, in [0, 1]
pub fn seasonal_exposure_score(seasonal_shading: &SeasonalShading) -> f64 {
    if seasonal_shading.is_empty() {
        return 1.0;
    }
    let sum: f64 = seasonal_shading
        .values()
        .map(|info| (100.0 - info.shaded_percentage) / 100.0)
        .sum();
    (sum / seasonal_shading.len() as f64).clamp(0.0, 1.0)
}

/// Season with the highest shaded percentage (ties go to the earlier season)
pub fn worst_season(seasonal_shading: &SeasonalShading) -> Option<(Season, ShadingInfo)> {
    seasonal_shading
        .iter()
        .fold(None, |worst: Option<(Season, ShadingInfo)>, (season, info)| match worst {
            Some((_, w)) if w.shaded_percentage >= info.shaded_percentage => worst,
            _ => Some((*season, *info)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn uniform(pct: f64) -> SeasonalShading {
        Season::ALL
            .iter()
            .map(|s| {
                (
                    *s,
                    ShadingInfo {
                        total_shaded_area: pct,
                        shaded_percentage: pct,
                        affected_by_count: 1,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_no_shadows_means_no_shade() {
        let info = calculate_garden_shading(0.0, 0.0, 5.0, 5.0, &[]);
        assert_eq!(info, ShadingInfo::default());
    }

    #[test]
    fn test_zero_area_garden() {
        let shadow = ShadowRectangle::new(0.0, 0.0, 10.0, 10.0);
        let info = calculate_garden_shading(1.0, 1.0, 0.0, 5.0, &[shadow]);
        assert_eq!(info, ShadingInfo { total_shaded_area: 0.0, shaded_percentage: 0.0, affected_by_count: 0 });
    }

    #[test]
    fn test_exact_cover_is_full_shade() {
        let shadow = ShadowRectangle::new(2.0, 3.0, 4.0, 5.0);
        let info = calculate_garden_shading(2.0, 3.0, 4.0, 5.0, &[shadow]);
        assert_relative_eq!(info.shaded_percentage, 100.0, epsilon = 0.01);
        assert_eq!(info.affected_by_count, 1);
    }

    #[test]
    fn test_overlapping_shadows_double_count_then_clamp() {
        // Two shadows each covering the left 60% of the garden
        let a = ShadowRectangle::new(0.0, 0.0, 6.0, 10.0);
        let b = ShadowRectangle::new(0.0, 0.0, 6.0, 10.0);
        let info = calculate_garden_shading(0.0, 0.0, 10.0, 10.0, &[a, b]);
        // True union is 60%, summed estimate is 120% clamped to 100%
        assert_relative_eq!(info.shaded_percentage, 100.0);
        assert_relative_eq!(info.total_shaded_area, 100.0);
        assert_eq!(info.affected_by_count, 2);
    }

    #[test]
    fn test_touching_shadow_does_not_count() {
        let shadow = ShadowRectangle::new(5.0, 0.0, 5.0, 5.0);
        let info = calculate_garden_shading(0.0, 0.0, 5.0, 5.0, &[shadow]);
        assert_eq!(info.affected_by_count, 0);
        assert_eq!(info.shaded_percentage, 0.0);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(exposure_category(24.9), ExposureCategory::FullSun);
        assert_eq!(exposure_category(25.0), ExposureCategory::PartialSun);
        assert_eq!(exposure_category(59.9), ExposureCategory::PartialSun);
        assert_eq!(exposure_category(60.0), ExposureCategory::Shade);
        assert_eq!(exposure_category(60.0).display_text(), "Shade");
    }

    #[test]
    fn test_exposure_score_extremes() {
        assert_relative_eq!(seasonal_exposure_score(&uniform(0.0)), 1.0);
        assert_relative_eq!(seasonal_exposure_score(&uniform(100.0)), 0.0);
        assert_relative_eq!(seasonal_exposure_score(&uniform(40.0)), 0.6);
    }

    #[test]
    fn test_seasonal_shading_from_southern_tree() {
        let garden = GardenGeometry { x: 10.0, y: 15.0, width: 5.0, height: 5.0 };
        let tree = TreeGeometry { x: 10.0, y: 5.0, height: 10.0, canopy_radius: 2.0 };
        let seasonal = calculate_seasonal_garden_shading(&garden, &[tree], 40.0).unwrap();
        assert_eq!(seasonal.len(), 3);
        // Winter shadow reaches y = 3 + 17.32 + 4; overlap 2 x 5 = 10 of 25
        assert_relative_eq!(seasonal[&Season::Winter].shaded_percentage, 40.0, epsilon = 1e-6);
        assert_eq!(seasonal[&Season::Summer].shaded_percentage, 0.0);
        assert_eq!(worst_season(&seasonal).map(|(s, _)| s), Some(Season::Winter));
    }

    #[test]
    fn test_structure_shadows_are_included() {
        let garden = GardenGeometry { x: 0.0, y: 4.0, width: 4.0, height: 4.0 };
        let shed = StructureGeometry { x: 0.0, y: 0.0, width: 4.0, depth: 3.0, height: 3.0 };
        let seasonal = calculate_seasonal_shading_with_structures(&garden, &[], &[shed], 40.0).unwrap();
        // Winter shadow: 3 / tan(30°) = 5.2, reaching y = 8.2 and covering the whole garden
        assert_relative_eq!(seasonal[&Season::Winter].shaded_percentage, 100.0, epsilon = 1e-6);
        assert!(seasonal[&Season::Summer].shaded_percentage < 25.0);
    }

    #[test]
    fn test_worst_season_prefers_earliest_on_tie() {
        assert_eq!(worst_season(&uniform(10.0)).map(|(s, _)| s), Some(Season::Winter));
        assert!(worst_season(&SeasonalShading::new()).is_none());
    }
}
