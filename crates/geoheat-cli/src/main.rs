//! geoheat: command-line interface for geoheat-core
//!
//! Inspect the built-in tables, colour single countries, resolve nearest
//! distribution centres and render whole GeoJSON files from the terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show what the engine is configured with
//!   $ geoheat stats
//!
//! - Canonical name and fill for one country
//!   $ geoheat normalize Czechia
//!   $ geoheat fill "united kingdom"
//!
//! - Nearest centre to an arbitrary point (lon, lat)
//!   $ geoheat nearest -- -0.12 51.5
//!
//! - Connectors for a geography file, as JSON
//!   $ geoheat --input world.geojson.gz connectors --json
//!
//! Data source
//! -----------
//!
//! Without `--input` the CLI renders the small sample geography bundled with
//! `geoheat-core`. `--config <file>` swaps in custom tables; anything the
//! file leaves out keeps its built-in value.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geoheat_core::loader::{load_config, load_features, load_sample_features};
use geoheat_core::prelude::*;
use geoheat_core::{GeoFeature, MatchMode};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_engine(args: &CliArgs) -> anyhow::Result<MapEngine> {
    // 1. Tables: config file or built-ins
    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let mut engine = config.into_engine();

    // 2. Command-line switches win over the file
    if args.whole_name {
        let normalizer = engine.normalizer().clone().with_mode(MatchMode::WholeName);
        engine = engine.with_normalizer(normalizer);
    }
    if args.all {
        engine = engine.with_selection(Selection::All);
    }
    Ok(engine)
}

fn load_geography(args: &CliArgs) -> anyhow::Result<Vec<GeoFeature>> {
    let features = match &args.input {
        Some(path) => load_features(path)
            .with_context(|| format!("reading geography {}", path.display()))?,
        None => load_sample_features().context("reading bundled sample geography")?,
    };
    tracing::info!(features = features.len(), "geography loaded");
    Ok(features)
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let engine = build_engine(&args)?;

    match &args.command {
        Commands::Stats => {
            let stats = engine.stats();
            println!("Engine statistics:");
            println!("  Distribution centres: {}", stats.centers);
            println!("  Heatmap entries: {}", stats.heatmap_entries);
            println!("  Office countries: {}", stats.office_countries);
            println!("  Name rules: {}", stats.name_rules);
        }

        Commands::Normalize { label } => {
            println!("{}", engine.normalize(label));
        }

        Commands::Color { pct } => {
            let c = engine.scale().color_for(Some(*pct));
            println!("{c} {}", c.to_hex());
        }

        Commands::Fill { name } => {
            let canonical = engine.normalize(name);
            let hit = engine
                .heatmap()
                .lookup_folded(&canonical)
                .or_else(|| engine.heatmap().lookup_folded(name));
            match hit {
                Some((found, pct)) => {
                    let c = engine.fill_for(found);
                    println!("{found}: {pct}% {c} {}", c.to_hex());
                }
                None => {
                    let c = engine.scale().background;
                    println!("{canonical}: no data {c} {}", c.to_hex());
                }
            }
        }

        Commands::Centers { query } => {
            let matches: Vec<_> = engine
                .centers()
                .iter()
                .filter(|c| query.as_deref().map_or(true, |q| c.name_contains(q)))
                .collect();
            if matches.is_empty() {
                println!("No centres found matching: {}", query.as_deref().unwrap_or(""));
            }
            for c in matches {
                println!("{} ({}) {:.4}, {:.4}", c.name, c.country, c.coord.lon, c.coord.lat);
            }
        }

        Commands::Nearest { lon, lat } => match engine.nearest(Coord::new(*lon, *lat)) {
            Some(hit) => println!(
                "{} ({}) {:.1} km",
                hit.center.name, hit.center.country, hit.distance_km
            ),
            None => eprintln!("No distribution centres configured"),
        },

        Commands::Centroids => {
            let features = load_geography(&args)?;
            for row in &engine.centroids(&features) {
                println!("{}: {:.4}, {:.4}", row.name, row.coord.lon, row.coord.lat);
            }
        }

        Commands::Connectors { json } => {
            let features = load_geography(&args)?;
            let table = engine.centroids(&features);
            let connectors = engine.connectors(&table);
            if *json {
                println!("{}", serde_json::to_string_pretty(&connectors)?);
            } else {
                for c in &connectors {
                    println!("{} -> {} ({:.1} km)", c.country, c.center.name, c.distance_km);
                }
            }
        }

        Commands::Render => {
            let features = load_geography(&args)?;
            let out = engine.render(&features);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }

        Commands::Impact { employees } => {
            let f = engine.impact(*employees);
            println!("Impact for {} employees:", f.employees);
            println!("  Hours at risk per year: {:.0}", f.annual_hours_at_risk);
            println!("  DEX cost: £{:.0}m", f.dex_cost_gbp_millions);
            println!("  Benchmark cost: ${:.0}m", f.benchmark_cost_usd_millions);
            println!("  Cost per 1000 employees: £{:.0}", f.cost_per_thousand_gbp);
        }
    }

    Ok(())
}
