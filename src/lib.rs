//! Seasonal Sun Exposure & Shadow Projection Engine
//!
//! Models how trees and structures on a 2D land plot cast shadows onto garden
//! beds across three season buckets, and turns the result into exposure scores,
//! categories and advisories.
//!
//! Module layout (leaf-first):
//! - `models`: Land, Garden, Tree, Structure, Season, Hemisphere
//! - `sun_position`: latitude-banded sun altitude table and shadow length
//! - `geometry`: shadow rectangles and tree/structure projection
//! - `shading`: garden shading aggregation, categories, exposure score
//! - `store`: lookup traits and the in-memory snapshot store
//! - `service`: per-garden exposure, shadow extents, placement checks
//! - `rules`: explainable sun advisories
//! - `api_server`: Axum HTTP surface (feature `api`)
//!
//! Every computation is pure and synchronous; callers may parallelize freely.

pub mod error;
pub mod models;
pub mod sun_position;
pub mod geometry;
pub mod shading;
pub mod store;
pub mod service;
pub mod rules;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::SunError;
pub use models::{Garden, GardenGeometry, Hemisphere, Land, Season, Structure, Tree};
pub use sun_position::{
    hemisphere, latitude_band, project_shadow_endpoint, shadow_direction, shadow_length,
    sun_altitude, LatitudeBand, DEFAULT_LATITUDE,
};
pub use geometry::{project_structure_shadow, project_tree_shadow, ShadowRectangle};
pub use shading::{
    calculate_garden_shading, calculate_seasonal_garden_shading,
    calculate_seasonal_shading_with_structures, exposure_category, seasonal_exposure_score,
    ExposureCategory, SeasonalShading, ShadingInfo,
};
pub use store::{GeometrySnapshot, InMemoryStore, LandLookup, ShadeCasterLookup};
pub use service::{
    check_placement_warnings, get_garden_sun_exposure, get_structure_shadow_extent,
    get_tree_shadow_extent, survey_land_exposure, ExposureResult, LandExposureSurvey,
    SeasonExposure, ShadowExtent,
};
pub use rules::{AdvisoryGenerator, MarkdownFormatter, RuleSeverity, SunAdvisory, SunRequirement};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
