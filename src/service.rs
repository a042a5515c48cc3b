//! Sun Exposure Service
//!
//! Orchestrates the engine for one garden, tree or structure at a time: resolves
//! the land, collects shade casters with complete geometry, computes seasonal
//! shading and classifies the result.
//!
//! Exposure is advisory. Missing data never raises; it produces a result with
//! `None` fields and an explanatory warning instead.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::SunError;
use crate::geometry::{project_structure_shadow, project_tree_shadow, ShadowRectangle};
use crate::models::{
    Garden, GardenGeometry, Hemisphere, Land, Season, Structure, StructureGeometry, Tree,
    TreeGeometry,
};
use crate::shading::{
    calculate_garden_shading, exposure_category, seasonal_exposure_score, structure_shadows,
    tree_shadows, worst_season, ExposureCategory, SeasonalShading, PARTIAL_SUN_THRESHOLD,
    SHADE_THRESHOLD,
};
use crate::store::{LandLookup, ShadeCasterLookup};
use crate::sun_position::{hemisphere, DEFAULT_LATITUDE};

/// Scores below this trigger the "significant seasonal shading" warning
pub const LOW_EXPOSURE_SCORE: f64 = 0.4;

/// Per-season summary exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonExposure {
    pub shaded_percentage: f64,
    pub exposure_category: ExposureCategory,
    pub affected_by_count: usize,
}

/// Sun exposure of a single garden
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureResult {
    pub garden_id: i64,
    pub seasonal_exposure_score: Option<f64>,
    pub seasonal_shading: Option<BTreeMap<Season, SeasonExposure>>,
    /// Category of the shadiest season
    pub exposure_category: Option<ExposureCategory>,
    /// Tree ids whose shadow reaches the garden in any season
    pub shading_sources: Vec<i64>,
    /// Structure ids whose shadow reaches the garden in any season
    pub structure_sources: Vec<i64>,
    pub hemisphere: Option<Hemisphere>,
    pub warnings: Vec<String>,
}

impl ExposureResult {
    pub fn unavailable(garden_id: i64, warning: impl Into<String>) -> Self {
        Self {
            garden_id,
            seasonal_exposure_score: None,
            seasonal_shading: None,
            exposure_category: None,
            shading_sources: Vec::new(),
            structure_sources: Vec::new(),
            hemisphere: None,
            warnings: vec![warning.into()],
        }
    }

    pub fn is_available(&self) -> bool {
        self.seasonal_exposure_score.is_some()
    }

    pub fn shaded_percentage(&self, season: Season) -> Option<f64> {
        self.seasonal_shading
            .as_ref()
            .and_then(|s| s.get(&season))
            .map(|s| s.shaded_percentage)
    }
}

/// Shadow footprint of a tree or structure across the season buckets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowExtent {
    pub seasonal_shadows: Option<BTreeMap<Season, ShadowRectangle>>,
    pub max_shadow_length: Option<f64>,
}

impl ShadowExtent {
    fn unavailable() -> Self {
        Self {
            seasonal_shadows: None,
            max_shadow_length: None,
        }
    }

    fn from_shadows(seasonal_shadows: BTreeMap<Season, ShadowRectangle>) -> Self {
        let max_shadow_length = seasonal_shadows
            .values()
            .map(ShadowRectangle::longest_side)
            .fold(0.0, f64::max);
        Self {
            seasonal_shadows: Some(seasonal_shadows),
            max_shadow_length: Some(max_shadow_length),
        }
    }
}

/// Exposure of every garden on one land
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandExposureSurvey {
    pub land_id: i64,
    /// Ascending score, unavailable gardens last
    pub gardens: Vec<ExposureResult>,
    pub category_counts: BTreeMap<ExposureCategory, usize>,
    pub unavailable_count: usize,
}

// ============================================================================
// Shade casters
// ============================================================================

/// Casters on a land with complete geometry; partial rows are dropped
struct Casters {
    tree_ids: Vec<i64>,
    trees: Vec<TreeGeometry>,
    structure_ids: Vec<i64>,
    structures: Vec<StructureGeometry>,
}

impl Casters {
    fn collect<C: ShadeCasterLookup + ?Sized>(land_id: i64, lookup: &C) -> Self {
        let (tree_ids, trees) = lookup
            .trees_on_land(land_id)
            .iter()
            .filter_map(|t| t.complete_geometry().map(|g| (t.id, g)))
            .unzip();
        let (structure_ids, structures) = lookup
            .structures_on_land(land_id)
            .iter()
            .filter_map(|s| s.complete_geometry().map(|g| (s.id, g)))
            .unzip();
        Self {
            tree_ids,
            trees,
            structure_ids,
            structures,
        }
    }

    /// Seasonal shading of `garden` plus the ids of casters that reach it
    fn shade(
        &self,
        garden: &GardenGeometry,
        latitude: f64,
    ) -> Result<(SeasonalShading, BTreeSet<i64>, BTreeSet<i64>), SunError> {
        let garden_rect = ShadowRectangle::new(garden.x, garden.y, garden.width, garden.height);
        let mut seasonal = SeasonalShading::new();
        let mut tree_sources = BTreeSet::new();
        let mut structure_sources = BTreeSet::new();

        for season in Season::ALL {
            let tree_rects = tree_shadows(&self.trees, latitude, season)?;
            let structure_rects = structure_shadows(&self.structures, latitude, season)?;
            tree_sources.extend(reaching(&self.tree_ids, &tree_rects, &garden_rect));
            structure_sources.extend(reaching(&self.structure_ids, &structure_rects, &garden_rect));

            let mut shadows = tree_rects;
            shadows.extend(structure_rects);
            let info = calculate_garden_shading(garden.x, garden.y, garden.width, garden.height, &shadows);
            seasonal.insert(season, info);
        }

        Ok((seasonal, tree_sources, structure_sources))
    }
}

/// Ids whose shadow overlaps `garden`
fn reaching<'a>(
    ids: &'a [i64],
    shadows: &'a [ShadowRectangle],
    garden: &'a ShadowRectangle,
) -> impl Iterator<Item = i64> + 'a {
    ids.iter()
        .zip(shadows)
        .filter(|(_, shadow)| shadow.intersects(garden))
        .map(|(id, _)| *id)
}

// ============================================================================
// Garden exposure
// ============================================================================

/// Seasonal sun exposure of a placed garden.
///
/// Returns an unavailable result (never an error) when the garden is unplaced,
/// has no land, or its land does not exist.
pub fn get_garden_sun_exposure<L, C>(garden: &Garden, lands: &L, casters: &C) -> ExposureResult
where
    L: LandLookup + ?Sized,
    C: ShadeCasterLookup + ?Sized,
{
    let Some(geometry) = garden.geometry() else {
        return ExposureResult::unavailable(
            garden.id,
            "Garden is not placed on the land map; sun exposure cannot be calculated",
        );
    };
    let Some(land_id) = garden.land_id else {
        return ExposureResult::unavailable(
            garden.id,
            "Garden is not assigned to a land; sun exposure cannot be calculated",
        );
    };
    let Some(land) = lands.land(land_id) else {
        return ExposureResult::unavailable(
            garden.id,
            format!("Land {} not found; sun exposure cannot be calculated", land_id),
        );
    };

    let latitude = land.latitude.unwrap_or(DEFAULT_LATITUDE);
    let casters = Casters::collect(land_id, casters);

    let (seasonal, tree_sources, structure_sources) = match casters.shade(&geometry, latitude) {
        Ok(shaded) => shaded,
        Err(e) => {
            tracing::warn!("Garden {}: {}", garden.id, e);
            return ExposureResult::unavailable(garden.id, format!("Sun exposure unavailable: {}", e));
        }
    };

    let score = seasonal_exposure_score(&seasonal);
    let headline = worst_season(&seasonal).map(|(_, info)| info.exposure_category());

    tracing::debug!(
        "Garden {} on land {}: score {:.3}, {} tree(s) and {} structure(s) considered",
        garden.id,
        land_id,
        score,
        casters.trees.len(),
        casters.structures.len()
    );

    let mut warnings = Vec::new();
    if score < LOW_EXPOSURE_SCORE {
        warnings.push(format!(
            "Garden receives significant seasonal shading (exposure score {:.2})",
            score
        ));
    }
    if !tree_sources.is_empty() {
        warnings.push(format!(
            "Shaded by {} tree(s) in at least one season: {}",
            tree_sources.len(),
            join_ids(&tree_sources)
        ));
    }
    if !structure_sources.is_empty() {
        warnings.push(format!(
            "Shaded by {} structure(s) in at least one season: {}",
            structure_sources.len(),
            join_ids(&structure_sources)
        ));
    }

    let seasonal_shading = seasonal
        .iter()
        .map(|(season, info)| {
            (
                *season,
                SeasonExposure {
                    shaded_percentage: info.shaded_percentage,
                    exposure_category: info.exposure_category(),
                    affected_by_count: info.affected_by_count,
                },
            )
        })
        .collect();

    ExposureResult {
        garden_id: garden.id,
        seasonal_exposure_score: Some(score),
        seasonal_shading: Some(seasonal_shading),
        exposure_category: headline,
        shading_sources: tree_sources.into_iter().collect(),
        structure_sources: structure_sources.into_iter().collect(),
        hemisphere: Some(hemisphere(latitude)),
        warnings,
    }
}

/// Exposure of every garden on a land, computed in parallel
pub fn survey_land_exposure<L, C>(
    land_id: i64,
    gardens: &[Garden],
    lands: &L,
    casters: &C,
) -> LandExposureSurvey
where
    L: LandLookup + Sync + ?Sized,
    C: ShadeCasterLookup + Sync + ?Sized,
{
    let mut results: Vec<ExposureResult> = gardens
        .par_iter()
        .filter(|g| g.land_id == Some(land_id))
        .map(|g| get_garden_sun_exposure(g, lands, casters))
        .collect();

    results.sort_by(|a, b| match (a.seasonal_exposure_score, b.seasonal_exposure_score) {
        (Some(x), Some(y)) => x.total_cmp(&y).then(a.garden_id.cmp(&b.garden_id)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.garden_id.cmp(&b.garden_id),
    });

    let mut category_counts = BTreeMap::new();
    let mut unavailable_count = 0;
    for result in &results {
        match result.exposure_category {
            Some(category) => *category_counts.entry(category).or_insert(0) += 1,
            None => unavailable_count += 1,
        }
    }

    LandExposureSurvey {
        land_id,
        gardens: results,
        category_counts,
        unavailable_count,
    }
}

// ============================================================================
// Shadow extents
// ============================================================================

/// Seasonal shadow rectangles of a tree.
///
/// `hour` is accepted for API compatibility; shadows are always midday shadows.
pub fn get_tree_shadow_extent(tree: &Tree, latitude: Option<f64>, hour: Option<u8>) -> ShadowExtent {
    let Some(t) = tree.complete_geometry() else {
        return ShadowExtent::unavailable();
    };
    if let Some(hour) = hour {
        tracing::debug!("Tree {}: hour {} ignored, using midday shadows", tree.id, hour);
    }
    let latitude = latitude.unwrap_or(DEFAULT_LATITUDE);

    let shadows: Result<BTreeMap<Season, ShadowRectangle>, SunError> = Season::ALL
        .iter()
        .map(|season| {
            project_tree_shadow(t.x, t.y, t.height, t.canopy_radius, latitude, *season)
                .map(|rect| (*season, rect))
        })
        .collect();

    match shadows {
        Ok(shadows) => ShadowExtent::from_shadows(shadows),
        Err(e) => {
            tracing::warn!("Tree {}: {}", tree.id, e);
            ShadowExtent::unavailable()
        }
    }
}

/// Seasonal shadow rectangles of a structure. `hour` is inert, as for trees.
pub fn get_structure_shadow_extent(
    structure: &Structure,
    latitude: Option<f64>,
    hour: Option<u8>,
) -> ShadowExtent {
    let Some(s) = structure.complete_geometry() else {
        return ShadowExtent::unavailable();
    };
    if let Some(hour) = hour {
        tracing::debug!("Structure {}: hour {} ignored, using midday shadows", structure.id, hour);
    }
    let latitude = latitude.unwrap_or(DEFAULT_LATITUDE);

    let shadows: Result<BTreeMap<Season, ShadowRectangle>, SunError> = Season::ALL
        .iter()
        .map(|season| {
            project_structure_shadow(s.x, s.y, s.width, s.depth, s.height, latitude, *season)
                .map(|rect| (*season, rect))
        })
        .collect();

    match shadows {
        Ok(shadows) => ShadowExtent::from_shadows(shadows),
        Err(e) => {
            tracing::warn!("Structure {}: {}", structure.id, e);
            ShadowExtent::unavailable()
        }
    }
}

// ============================================================================
// Placement check
// ============================================================================

/// Non-blocking warnings for placing a garden at `proposed` on `land`
pub fn check_placement_warnings<C>(proposed: &GardenGeometry, land: &Land, casters: &C) -> Vec<String>
where
    C: ShadeCasterLookup + ?Sized,
{
    if proposed.width <= 0.0 || proposed.height <= 0.0 {
        return vec!["Proposed garden has no area; shading cannot be checked".to_string()];
    }

    let mut warnings = Vec::new();
    if proposed.x < 0.0
        || proposed.y < 0.0
        || proposed.x + proposed.width > land.width
        || proposed.y + proposed.height > land.height
    {
        warnings.push(format!(
            "Proposed garden extends beyond the land boundary ({} x {})",
            land.width, land.height
        ));
    }

    let latitude = land.latitude.unwrap_or(DEFAULT_LATITUDE);
    let casters = Casters::collect(land.id, casters);
    let seasonal = match casters.shade(proposed, latitude) {
        Ok((seasonal, _, _)) => seasonal,
        Err(e) => {
            tracing::warn!("Placement check on land {}: {}", land.id, e);
            warnings.push(format!("Shading could not be checked: {}", e));
            return warnings;
        }
    };

    warnings.extend(shading_warnings(&seasonal));

    tracing::debug!(
        "Placement check on land {} produced {} warning(s), headline {:?}",
        land.id,
        warnings.len(),
        worst_season(&seasonal).map(|(_, info)| exposure_category(info.shaded_percentage))
    );

    warnings
}

/// One warning per season shaded strictly above a category threshold
fn shading_warnings(seasonal: &SeasonalShading) -> Vec<String> {
    seasonal
        .iter()
        .filter_map(|(season, info)| {
            let pct = info.shaded_percentage;
            if pct > SHADE_THRESHOLD {
                Some(format!(
                    "High shading ({:.0}%) in {}: this spot suits shade-tolerant plants only",
                    pct, season
                ))
            } else if pct > PARTIAL_SUN_THRESHOLD {
                Some(format!(
                    "Partial shading ({:.0}%) in {}: full-sun crops may underperform",
                    pct, season
                ))
            } else {
                None
            }
        })
        .collect()
}

fn join_ids(ids: &BTreeSet<i64>) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{GeometrySnapshot, InMemoryStore};
    use approx::assert_relative_eq;

    fn land(latitude: Option<f64>) -> Land {
        Land { id: 1, name: None, width: 40.0, height: 40.0, latitude }
    }

    fn garden() -> Garden {
        Garden {
            id: 100,
            land_id: Some(1),
            x: Some(10.0),
            y: Some(15.0),
            width: Some(5.0),
            height: Some(5.0),
            ..Default::default()
        }
    }

    fn tree(id: i64, x: f64, y: f64) -> Tree {
        Tree {
            id,
            land_id: 1,
            x: Some(x),
            y: Some(y),
            height: Some(10.0),
            canopy_radius: Some(2.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_unplaced_garden_is_unavailable() {
        let mut g = garden();
        g.y = None;
        let lands = [land(Some(40.0))];
        let trees: [Tree; 0] = [];
        let result = get_garden_sun_exposure(&g, &lands[..], &trees[..]);
        assert!(result.seasonal_exposure_score.is_none());
        assert!(result.seasonal_shading.is_none());
        assert!(result.warnings[0].contains("not placed"));
    }

    #[test]
    fn test_garden_without_land() {
        let mut g = garden();
        g.land_id = None;
        let lands = [land(None)];
        let trees: [Tree; 0] = [];
        let result = get_garden_sun_exposure(&g, &lands[..], &trees[..]);
        assert!(!result.is_available());
        assert!(result.warnings[0].contains("not assigned to a land"));
    }

    #[test]
    fn test_missing_land() {
        let lands: [Land; 0] = [];
        let trees: [Tree; 0] = [];
        let result = get_garden_sun_exposure(&garden(), &lands[..], &trees[..]);
        assert!(!result.is_available());
        assert!(result.warnings[0].contains("Land 1 not found"));
    }

    #[test]
    fn test_open_garden_is_full_sun() {
        let lands = [land(None)];
        let trees: [Tree; 0] = [];
        let result = get_garden_sun_exposure(&garden(), &lands[..], &trees[..]);
        assert_eq!(result.seasonal_exposure_score, Some(1.0));
        assert_eq!(result.exposure_category, Some(ExposureCategory::FullSun));
        assert!(result.warnings.is_empty());
        assert_eq!(result.hemisphere, Some(Hemisphere::Northern));
    }

    #[test]
    fn test_headline_category_is_worst_season() {
        let lands = [land(Some(40.0))];
        let trees = [tree(7, 10.0, 5.0)];
        let result = get_garden_sun_exposure(&garden(), &lands[..], &trees[..]);
        // Winter 40% shaded, other seasons clear
        assert_eq!(result.exposure_category, Some(ExposureCategory::PartialSun));
        assert_relative_eq!(result.shaded_percentage(Season::Winter).unwrap(), 40.0, epsilon = 1e-6);
        assert_relative_eq!(result.seasonal_exposure_score.unwrap(), 2.6 / 3.0, epsilon = 1e-6);
        assert_eq!(result.shading_sources, vec![7]);
        assert!(result.warnings.iter().any(|w| w.contains("Shaded by 1 tree")));
    }

    #[test]
    fn test_partial_trees_are_skipped() {
        let lands = [land(Some(40.0))];
        let mut partial = tree(8, 10.0, 5.0);
        partial.canopy_radius = None;
        let trees = [partial];
        let result = get_garden_sun_exposure(&garden(), &lands[..], &trees[..]);
        assert_eq!(result.seasonal_exposure_score, Some(1.0));
        assert!(result.shading_sources.is_empty());
    }

    #[test]
    fn test_zero_canopy_tree_is_not_a_source() {
        let lands = [land(Some(40.0))];
        let mut flat = tree(5, 12.0, 5.0);
        flat.canopy_radius = Some(0.0);
        let trees = [flat];
        let result = get_garden_sun_exposure(&garden(), &lands[..], &trees[..]);
        assert_eq!(result.seasonal_exposure_score, Some(1.0));
        assert!(result.shading_sources.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_heavy_shading_warns() {
        let lands = [land(Some(65.0))];
        // Two wide trees right below the garden in a high-latitude land
        let mut a = tree(1, 11.0, 13.0);
        a.canopy_radius = Some(4.0);
        a.height = Some(20.0);
        let mut b = tree(2, 14.0, 13.0);
        b.canopy_radius = Some(4.0);
        b.height = Some(20.0);
        let trees = [a, b];
        let result = get_garden_sun_exposure(&garden(), &lands[..], &trees[..]);
        assert!(result.seasonal_exposure_score.unwrap() < LOW_EXPOSURE_SCORE);
        assert!(result.warnings.iter().any(|w| w.contains("significant seasonal shading")));
        assert_eq!(result.exposure_category, Some(ExposureCategory::Shade));
    }

    #[test]
    fn test_structures_from_store_are_sources() {
        let snapshot = GeometrySnapshot {
            lands: vec![land(Some(40.0))],
            gardens: vec![garden()],
            trees: vec![],
            structures: vec![Structure {
                id: 55,
                land_id: 1,
                x: Some(10.0),
                y: Some(10.0),
                width: Some(5.0),
                depth: Some(2.0),
                height: Some(4.0),
                ..Default::default()
            }],
        };
        let store = InMemoryStore::from_snapshot(snapshot);
        let result = get_garden_sun_exposure(&garden(), &store, &store);
        assert_eq!(result.structure_sources, vec![55]);
        assert!(result.shading_sources.is_empty());
        assert!(result.seasonal_exposure_score.unwrap() < 1.0);
    }

    #[test]
    fn test_tree_shadow_extent() {
        let extent = get_tree_shadow_extent(&tree(1, 5.0, 5.0), Some(40.0), Some(9));
        let shadows = extent.seasonal_shadows.unwrap();
        assert_eq!(shadows.len(), 3);
        let winter_length = 10.0 / 30.0_f64.to_radians().tan() + 4.0;
        assert_relative_eq!(extent.max_shadow_length.unwrap(), winter_length, epsilon = 1e-9);
        assert_eq!(
            get_tree_shadow_extent(&tree(1, 5.0, 5.0), Some(40.0), None),
            get_tree_shadow_extent(&tree(1, 5.0, 5.0), Some(40.0), Some(15))
        );
    }

    #[test]
    fn test_shadow_extent_requires_geometry() {
        let mut t = tree(1, 5.0, 5.0);
        t.height = None;
        let extent = get_tree_shadow_extent(&t, None, None);
        assert!(extent.seasonal_shadows.is_none());
        assert!(extent.max_shadow_length.is_none());

        let shed = Structure { id: 2, land_id: 1, x: Some(0.0), y: Some(0.0), width: Some(3.0), ..Default::default() };
        assert!(get_structure_shadow_extent(&shed, None, None).max_shadow_length.is_none());
    }

    #[test]
    fn test_structure_shadow_extent_uses_width_when_longer() {
        let wall = Structure {
            id: 3,
            land_id: 1,
            x: Some(0.0),
            y: Some(0.0),
            width: Some(30.0),
            depth: Some(0.5),
            height: Some(2.0),
            ..Default::default()
        };
        let extent = get_structure_shadow_extent(&wall, Some(10.0), None);
        assert_relative_eq!(extent.max_shadow_length.unwrap(), 30.0);
    }

    #[test]
    fn test_placement_warnings() {
        let trees = [tree(7, 10.0, 5.0)];
        let proposed = GardenGeometry { x: 10.0, y: 15.0, width: 5.0, height: 5.0 };
        let warnings = check_placement_warnings(&proposed, &land(Some(40.0)), &trees[..]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Partial shading (40%) in winter"));

        let covered = GardenGeometry { x: 9.0, y: 8.0, width: 2.0, height: 2.0 };
        let warnings = check_placement_warnings(&covered, &land(Some(40.0)), &trees[..]);
        assert!(warnings.iter().any(|w| w.starts_with("High shading (100%) in winter")));
    }

    #[test]
    fn test_placement_thresholds_are_strict() {
        let shaded = |depth: f64| {
            let shadow = ShadowRectangle::new(0.0, 0.0, 10.0, depth);
            let mut seasonal = SeasonalShading::new();
            seasonal.insert(Season::Winter, calculate_garden_shading(0.0, 0.0, 10.0, 10.0, &[shadow]));
            seasonal
        };

        let quarter = shaded(2.5);
        assert_eq!(quarter[&Season::Winter].shaded_percentage, 25.0);
        assert!(shading_warnings(&quarter).is_empty());

        let sixty = shaded(6.0);
        assert_eq!(sixty[&Season::Winter].shaded_percentage, 60.0);
        let warnings = shading_warnings(&sixty);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Partial shading (60%) in winter"));

        assert!(shading_warnings(&shaded(6.1))[0].starts_with("High shading"));
        assert!(shading_warnings(&shaded(2.6))[0].starts_with("Partial shading"));
    }

    #[test]
    fn test_placement_outside_land() {
        let trees: [Tree; 0] = [];
        let proposed = GardenGeometry { x: 38.0, y: 0.0, width: 5.0, height: 5.0 };
        let warnings = check_placement_warnings(&proposed, &land(None), &trees[..]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("beyond the land boundary"));

        let flat = GardenGeometry { x: 1.0, y: 1.0, width: 0.0, height: 5.0 };
        assert!(check_placement_warnings(&flat, &land(None), &trees[..])[0].contains("no area"));
    }

    #[test]
    fn test_survey_orders_by_score() {
        let mut shaded = garden();
        shaded.id = 1;
        let mut open = garden();
        open.id = 2;
        open.x = Some(30.0);
        let mut unplaced = garden();
        unplaced.id = 3;
        unplaced.x = None;
        let mut elsewhere = garden();
        elsewhere.id = 4;
        elsewhere.land_id = Some(2);

        let lands = [land(Some(40.0))];
        let trees = [tree(7, 10.0, 5.0)];
        let survey = survey_land_exposure(1, &[open, unplaced, shaded, elsewhere], &lands[..], &trees[..]);
        let order: Vec<i64> = survey.gardens.iter().map(|g| g.garden_id).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(survey.unavailable_count, 1);
        assert_eq!(survey.category_counts.get(&ExposureCategory::FullSun), Some(&1));
        assert_eq!(survey.category_counts.get(&ExposureCategory::PartialSun), Some(&1));
    }
}
