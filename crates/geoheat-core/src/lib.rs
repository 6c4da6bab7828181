// crates/geoheat-core/src/lib.rs

//! # geoheat-core
//!
//! Geo-heatmap colouring and nearest-distribution-centre resolution for a
//! world map. The crate is rendering-agnostic: it turns country labels and
//! geometries into fills, centroids and connector lines, and leaves drawing to
//! whatever sits on top (CLI, WASM, a web page).

pub mod centers;
pub mod centroid;
pub mod common;
pub mod config;
pub mod distance;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod heatmap;
pub mod impact;
pub mod nearest;
pub mod normalize;
pub mod prelude;
pub mod text;
pub mod traits;

// Raw GeoJSON input, only needed by the loader
#[cfg(feature = "json")]
#[doc(hidden)]
pub mod raw;
#[cfg(feature = "json")]
pub mod convert;
#[cfg(feature = "json")]
pub mod loader;

// Re-exports
pub use crate::error::{GeoError, GeoHeatError, Result};

pub use crate::centers::{default_centers, DistributionCenter};
pub use crate::centroid::{CentroidTable, CountryCentroid};
pub use crate::common::EngineStats;
pub use crate::config::{EngineConfig, Selection};
pub use crate::engine::{CountryFill, MapEngine, RenderOutput};
pub use crate::geometry::{BBox, Coord, GeoFeature, Geometry};
pub use crate::heatmap::{default_heatmap, heat_color, HeatScale, HeatmapTable, Rgb};
pub use crate::impact::{ImpactFigures, ImpactModel};
pub use crate::nearest::Connector;
pub use crate::normalize::{normalize_name, MatchMode, NameNormalizer, NameRule};
pub use crate::text::{equals_folded, fold_key};
// The trait users call render() through
pub use crate::traits::{MapLayers, NameMatch};
