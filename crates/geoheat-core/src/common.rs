// crates/geoheat-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a configured engine.
///
/// Returned by [`crate::MapEngine::stats`], these counts reflect the tables
/// after configuration overrides and identity-rule pruning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    pub centers: usize,
    pub heatmap_entries: usize,
    pub office_countries: usize,
    pub name_rules: usize,
}
