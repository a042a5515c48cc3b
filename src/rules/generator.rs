use crate::models::{Garden, Hemisphere, Tree};
use crate::rules::plant_fit::check_plant_fit;
use crate::rules::seasonal_patterns::check_seasonal_patterns;
use crate::rules::tree_placement::check_tree_placement;
use crate::rules::types::SunAdvisory;
use crate::service::ExposureResult;

/// Runs the stateless sun rules and ranks what fires
pub struct AdvisoryGenerator;

impl AdvisoryGenerator {
    /// Plant-fit and seasonal-pattern advisories for one garden
    ///
    /// `plant_sun` is the plant's sun requirement ("full_sun", "partial_sun", "shade");
    /// without it only the general rules run.
    pub fn for_garden(exposure: &ExposureResult, plant_sun: Option<&str>) -> Vec<SunAdvisory> {
        let mut advisories = check_plant_fit(exposure, plant_sun);
        advisories.extend(check_seasonal_patterns(exposure));
        Self::rank(&mut advisories);

        tracing::debug!(
            "Garden {}: {} advisory(ies) for plant requirement {:?}",
            exposure.garden_id,
            advisories.len(),
            plant_sun
        );
        advisories
    }

    /// Tree-placement advisories for a (proposed or existing) tree
    pub fn for_tree(tree: &Tree, hemisphere: Hemisphere, gardens: &[Garden]) -> Vec<SunAdvisory> {
        let mut advisories = check_tree_placement(tree, hemisphere, gardens);
        Self::rank(&mut advisories);
        advisories
    }

    /// Most severe first; ties keep a stable order by rule id then garden
    fn rank(advisories: &mut [SunAdvisory]) {
        advisories.sort_by(|a, b| {
            b.severity
                .cmp(&a.severity)
                .then_with(|| a.rule_id.cmp(&b.rule_id))
                .then_with(|| a.affected_gardens.cmp(&b.affected_gardens))
        });
    }
}
