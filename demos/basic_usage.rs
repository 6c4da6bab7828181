//! Basic usage example for geoheat-rs
//!
//! This example demonstrates how to:
//! - Normalize geography labels to canonical names
//! - Colour countries from the heatmap table
//! - Render the bundled sample geography into fills and connectors

use geoheat_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== geoheat-rs Basic Usage Example ===\n");

    let engine = MapEngine::default();

    // Example 1: Name normalization
    println!("--- Example 1: Canonical names ---");
    for raw in ["United States of America", "Czechia", "Korea, Republic of", "France"] {
        println!("{raw:>28} -> {}", engine.normalize(raw));
    }
    println!();

    // Example 2: Heatmap fills
    println!("--- Example 2: Fills from the heatmap table ---");
    for name in ["United Kingdom", "China", "Australia", "France", "Mongolia"] {
        let pct = engine
            .percent_for(name)
            .map_or_else(|| "no data".to_string(), |p| format!("{p}%"));
        println!("{name:>16}: {pct:>8} {}", engine.fill_for(name));
    }
    println!();

    // Example 3: Render the sample geography
    println!("--- Example 3: Render ---");
    let features = load_sample_features()?;
    let out = engine.render(&features);
    println!(
        "{} features, {} centroids, {} connectors",
        out.fills.len(),
        out.centroids.len(),
        out.connectors.len()
    );
    for c in &out.connectors {
        println!("- {} -> {} ({:.0} km)", c.country, c.center.name, c.distance_km);
    }

    Ok(())
}
