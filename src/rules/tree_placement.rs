use crate::models::{Garden, Hemisphere, Tree};
use crate::rules::types::{RuleSeverity, SunAdvisory};

/// Flag gardens that sit in a tree's shadow path
///
/// A tree shades a garden when it stands on the garden's sun side (south of it in
/// the northern hemisphere, north of it in the southern) and its canopy spans
/// part of the garden's x-range. Shadows have no east-west component, so a tree
/// off to the side never shades.
pub fn check_tree_placement(tree: &Tree, hemisphere: Hemisphere, gardens: &[Garden]) -> Vec<SunAdvisory> {
    let (Some(tree_x), Some(tree_y)) = (tree.x, tree.y) else {
        return Vec::new();
    };
    let radius = tree.canopy_radius.unwrap_or(0.0);

    gardens
        .iter()
        .filter_map(|garden| {
            let geometry = garden.geometry()?;

            let spans_garden = if radius > 0.0 {
                tree_x - radius < geometry.x + geometry.width && geometry.x < tree_x + radius
            } else {
                geometry.x <= tree_x && tree_x <= geometry.x + geometry.width
            };
            let on_sun_side = match hemisphere {
                // Shadows run toward +y
                Hemisphere::Northern => tree_y < geometry.y,
                Hemisphere::Southern => tree_y > geometry.y + geometry.height,
            };
            if !(spans_garden && on_sun_side) {
                return None;
            }

            let side = hemisphere.sun_side();
            let opposite = hemisphere.shadow_side();
            let garden_label = garden
                .name
                .clone()
                .unwrap_or_else(|| format!("Garden {}", garden.id));

            Some(SunAdvisory {
                rule_id: "tree_shades_garden".to_string(),
                severity: RuleSeverity::Warning,
                title: format!("Tree on the {} side of {}", side, garden_label),
                explanation: format!(
                    "Tree {} stands {} of {}; in the {} hemisphere its shadow falls across the garden.",
                    tree.id,
                    side,
                    garden_label,
                    match hemisphere {
                        Hemisphere::Northern => "northern",
                        Hemisphere::Southern => "southern",
                    }
                ),
                suggested_action: format!(
                    "Place the tree on the {} side of the garden instead, or keep the garden to the {} of the tree",
                    opposite, opposite
                ),
                affected_gardens: vec![garden.id],
                affected_trees: vec![tree.id],
            })
        })
        .collect()
}
