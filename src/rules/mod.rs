//! Sun Exposure Rule Engine
//!
//! Stateless, explainable rules turning exposure data (and optionally a plant's
//! sun requirement) into severity-ranked advisories. Rules never mutate state and
//! can run in any order; the output is the union of whatever fires.
//!
//! ## Architecture
//! - `types.rs` - RuleSeverity, SunAdvisory, SunRequirement
//! - `plant_fit.rs` - plant requirement vs garden exposure category
//! - `seasonal_patterns.rs` - winter/summer/variability rules, plant-independent
//! - `tree_placement.rs` - trees standing on a garden's sun side
//! - `generator.rs` - runs the rules and ranks the result
//! - `formatters/` - markdown rendering

pub mod types;
pub mod plant_fit;
pub mod seasonal_patterns;
pub mod tree_placement;
pub mod generator;
pub mod formatters;

pub use types::{RuleSeverity, SunAdvisory, SunRequirement};
pub use plant_fit::check_plant_fit;
pub use seasonal_patterns::check_seasonal_patterns;
pub use tree_placement::check_tree_placement;
pub use generator::AdvisoryGenerator;
pub use formatters::MarkdownFormatter;
