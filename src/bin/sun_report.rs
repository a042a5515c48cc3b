//! Sun Report
//!
//! Prints a land-by-land sun exposure survey and the markdown advisory report of
//! every garden, least sun first, in a geometry snapshot.
//!
//! Run with: DATA_FILE=data/sample_snapshot.json cargo run --bin sun_report [full_sun|partial_sun|shade]

use anyhow::{Context, Result};
use sun_exposure_rust::{
    survey_land_exposure, AdvisoryGenerator, GeometrySnapshot, InMemoryStore, MarkdownFormatter,
};

fn main() -> Result<()> {
    let data_file = std::env::var("DATA_FILE")
        .unwrap_or_else(|_| "data/sample_snapshot.json".to_string());
    let plant_sun = std::env::args().nth(1);

    let contents = std::fs::read_to_string(&data_file)
        .with_context(|| format!("Failed to read snapshot file: {}", data_file))?;
    let snapshot: GeometrySnapshot = serde_json::from_str(&contents)
        .with_context(|| "Failed to parse snapshot JSON")?;
    let mut land_ids: Vec<i64> = snapshot.lands.iter().map(|l| l.id).collect();
    land_ids.sort_unstable();
    let store = InMemoryStore::from_snapshot(snapshot);

    println!("Sun Exposure Report: {}", data_file);
    println!("{}", "=".repeat(60));

    for land_id in land_ids {
        let gardens = store.gardens_on_land(land_id);
        let survey = survey_land_exposure(land_id, &gardens, &store, &store);

        println!("\nLand {} ({} garden(s), {} unavailable)", land_id, survey.gardens.len(), survey.unavailable_count);
        for (category, count) in &survey.category_counts {
            println!("  {:<12} {}", category.display_text(), count);
        }
        println!("{}", "-".repeat(60));

        for exposure in &survey.gardens {
            let advisories = AdvisoryGenerator::for_garden(exposure, plant_sun.as_deref());
            println!("{}", MarkdownFormatter::format(exposure, &advisories));
        }
    }

    Ok(())
}
