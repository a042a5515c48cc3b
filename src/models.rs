//! Garden Geometry Models
//!
//! Rows read from the surrounding CRUD layer. The engine never owns or mutates
//! these; every computation re-derives its inputs from a fresh snapshot.
//!
//! Coordinate origin is the land's top-left corner, x increases right and
//! y increases down. Units are abstract but must be consistent within a land.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A plot of land that hosts gardens, trees and structures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Land {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    pub width: f64,
    pub height: f64,
    /// Degrees, positive north. `None` falls back to the temperate default.
    #[serde(default)]
    pub latitude: Option<f64>,
}

/// A garden bed. Any missing placement field means the garden is unplaced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Garden {
    pub id: i64,
    #[serde(default)]
    pub land_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

impl Garden {
    /// Placed footprint, or `None` if any of x/y/width/height is missing
    pub fn geometry(&self) -> Option<GardenGeometry> {
        Some(GardenGeometry {
            x: self.x?,
            y: self.y?,
            width: self.width?,
            height: self.height?,
        })
    }
}

/// Axis-aligned footprint of a placed (or proposed) garden
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GardenGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A tree on a land. `x`/`y` is the trunk center.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tree {
    pub id: i64,
    pub land_id: i64,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub canopy_radius: Option<f64>,
}

/// Tree geometry with every field needed for shadow math present
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeGeometry {
    pub x: f64,
    pub y: f64,
    pub height: f64,
    pub canopy_radius: f64,
}

impl Tree {
    /// `None` when any field is missing or height/canopy radius is not positive
    pub fn complete_geometry(&self) -> Option<TreeGeometry> {
        Some(TreeGeometry {
            x: self.x?,
            y: self.y?,
            height: positive(self.height?)?,
            canopy_radius: positive(self.canopy_radius?)?,
        })
    }
}

/// A built structure (shed, fence, greenhouse). `x`/`y` is the footprint top-left.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Structure {
    pub id: i64,
    pub land_id: i64,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub depth: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructureGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Structure {
    /// `None` when any field is missing or a dimension is not positive
    pub fn complete_geometry(&self) -> Option<StructureGeometry> {
        Some(StructureGeometry {
            x: self.x?,
            y: self.y?,
            width: positive(self.width?)?,
            depth: positive(self.depth?)?,
            height: positive(self.height?)?,
        })
    }
}

fn positive(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}

/// Seasonal sun-altitude bucket (not a calendar range)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Equinox,
    Summer,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Winter, Season::Equinox, Season::Summer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Equinox => "equinox",
            Season::Summer => "summer",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Hemisphere {
    Northern,
    Southern,
}

impl Hemisphere {
    /// Compass side of a garden from which shadows arrive
    pub fn sun_side(&self) -> &'static str {
        match self {
            Hemisphere::Northern => "south",
            Hemisphere::Southern => "north",
        }
    }

    /// Compass side of an object its shadow falls on
    pub fn shadow_side(&self) -> &'static str {
        match self {
            Hemisphere::Northern => "north",
            Hemisphere::Southern => "south",
        }
    }
}
