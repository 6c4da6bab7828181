// crates/geoheat-core/src/prelude.rs

//! `use geoheat_core::prelude::*;` pulls in the engine, its config and the
//! trait its render methods live on.

pub use crate::config::{EngineConfig, Selection};
pub use crate::engine::{MapEngine, RenderOutput};
pub use crate::error::{GeoError, Result};
pub use crate::geometry::{Coord, GeoFeature, Geometry};
pub use crate::heatmap::Rgb;
pub use crate::nearest::Connector;
pub use crate::traits::{MapLayers, NameMatch};

#[cfg(feature = "json")]
pub use crate::loader::{load_config, load_features, load_sample_features};
