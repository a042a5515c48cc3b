//! Shadow Geometry
//!
//! Axis-aligned rectangles approximating the ground footprint of a cast shadow,
//! and projection of tree canopies and structure footprints into them.
//!
//! Shadows keep the caster's width (no perspective narrowing) and extend from the
//! caster's own footprint outward along the hemisphere's shadow direction.

use serde::{Deserialize, Serialize};

use crate::error::SunError;
use crate::models::{Hemisphere, Season};
use crate::sun_position::{hemisphere, project_shadow_endpoint, shadow_length, sun_altitude};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowRectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ShadowRectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// (x_min, y_min, x_max, y_max)
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Overlap along each axis, clamped at zero
    fn overlap(&self, other: &ShadowRectangle) -> (f64, f64) {
        let (ax1, ay1, ax2, ay2) = self.bounds();
        let (bx1, by1, bx2, by2) = other.bounds();
        (
            (ax2.min(bx2) - ax1.max(bx1)).max(0.0),
            (ay2.min(by2) - ay1.max(by1)).max(0.0),
        )
    }

    /// Strict overlap test: shared edges and zero-width or zero-height
    /// overlaps do not intersect
    pub fn intersects(&self, other: &ShadowRectangle) -> bool {
        let (x_overlap, y_overlap) = self.overlap(other);
        x_overlap > 0.0 && y_overlap > 0.0
    }

    pub fn intersection_area(&self, other: &ShadowRectangle) -> f64 {
        let (x_overlap, y_overlap) = self.overlap(other);
        x_overlap * y_overlap
    }

    /// Longer side, used as the headline shadow extent
    pub fn longest_side(&self) -> f64 {
        self.width.max(self.height)
    }
}

/// Shadow rectangle of a tree canopy for one season.
///
/// The rectangle is `2 * canopy_radius` wide and `shadow_length + 2 * canopy_radius`
/// long, so the canopy circle always lies fully inside it.
pub fn project_tree_shadow(
    tree_x: f64,
    tree_y: f64,
    tree_height: f64,
    canopy_radius: f64,
    latitude: f64,
    season: Season,
) -> Result<ShadowRectangle, SunError> {
    let hemi = hemisphere(latitude);
    let altitude = sun_altitude(Some(latitude), season);
    let length = shadow_length(tree_height, altitude)?;

    let diameter = canopy_radius * 2.0;
    let top = match hemi {
        // Canopy top edge, shadow runs down (+y)
        Hemisphere::Northern => tree_y - canopy_radius,
        // Mirror image: top edge sits one radius beyond the projected endpoint
        Hemisphere::Southern => {
            let (_, end_y) = project_shadow_endpoint(tree_x, tree_y, length, hemi);
            end_y - canopy_radius
        }
    };

    Ok(ShadowRectangle::new(
        tree_x - canopy_radius,
        top,
        diameter,
        length + diameter,
    ))
}

/// Shadow rectangle of a rectangular structure footprint for one season.
///
/// Width matches the structure; length covers the footprint depth plus the cast shadow.
pub fn project_structure_shadow(
    structure_x: f64,
    structure_y: f64,
    structure_width: f64,
    structure_depth: f64,
    structure_height: f64,
    latitude: f64,
    season: Season,
) -> Result<ShadowRectangle, SunError> {
    let hemi = hemisphere(latitude);
    let altitude = sun_altitude(Some(latitude), season);
    let length = shadow_length(structure_height, altitude)?;

    let top = match hemi {
        Hemisphere::Northern => structure_y,
        Hemisphere::Southern => project_shadow_endpoint(structure_x, structure_y, length, hemi).1,
    };

    Ok(ShadowRectangle::new(
        structure_x,
        top,
        structure_width,
        structure_depth + length,
    ))
}
