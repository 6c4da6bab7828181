use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geoheat
#[derive(Debug, Parser)]
#[command(
    name = "geoheat",
    version,
    about = "Heatmap fills and nearest distribution centres for a world map"
)]
pub struct CliArgs {
    /// GeoJSON FeatureCollection to render (`.geojson` or `.geojson.gz`).
    /// Defaults to the small sample bundled with geoheat-core.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// JSON engine config overriding the built-in tables
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Rewrite only labels that equal a rule pattern exactly
    #[arg(long = "whole-name", global = true)]
    pub whole_name: bool,

    /// Connect every feature, not only office countries
    #[arg(long = "all", global = true)]
    pub all: bool,

    /// More logging (-v debug, -vv trace). RUST_LOG wins when set.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the configured tables
    Stats,

    /// Print the canonical name for a geography label
    Normalize {
        /// Raw label, e.g. "United States of America"
        label: String,
    },

    /// Print the fill colour for a percentage
    Color {
        /// Office-employee percentage
        #[arg(allow_negative_numbers = true)]
        pct: f64,
    },

    /// Look up a country's percentage and fill (accent/case-insensitive)
    Fill {
        /// Canonical or raw country name
        name: String,
    },

    /// List distribution centres, optionally filtered by name
    Centers {
        /// Substring to search (accent/case-insensitive)
        query: Option<String>,
    },

    /// Find the distribution centre nearest to a position
    Nearest {
        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,
    },

    /// Print the centroid table for the input geography
    Centroids,

    /// Print one connector per selected country
    Connectors {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the full render (fills, centroids, connectors) as JSON
    Render,

    /// Print the digital-experience impact figures
    Impact {
        /// Headcount
        #[arg(short = 'e', long = "employees", default_value_t = 40_267)]
        employees: u64,
    },
}
