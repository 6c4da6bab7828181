// crates/geoheat-core/src/engine.rs

//! # Map Engine
//!
//! One engine, any number of presentation layers. A render is an explicit
//! two-phase pipeline:
//!
//! 1. every selected feature -> centroid, collected into an immutable
//!    [`CentroidTable`];
//! 2. that table -> one [`Connector`] per country.
//!
//! Nothing is cached between renders and nothing is mutated while iterating.

use crate::centers::DistributionCenter;
use crate::centroid::{try_centroid, CentroidTable};
use crate::common::EngineStats;
use crate::config::{EngineConfig, Selection};
use crate::geometry::GeoFeature;
use crate::heatmap::{HeatScale, HeatmapTable, Rgb};
use crate::impact::{ImpactFigures, ImpactModel};
use crate::nearest::{nearest_center, resolve_connectors, Connector, Nearest};
use crate::normalize::NameNormalizer;
use crate::traits::MapLayers;
use crate::Coord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Fill for one geography feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryFill {
    /// Label as the geography source spelled it.
    pub raw_name: String,
    /// Canonical name, used for lookups and tooltips.
    pub name: String,
    pub percent: Option<f64>,
    pub fill: Rgb,
}

/// Everything a presentation layer needs for one map render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOutput {
    pub fills: Vec<CountryFill>,
    pub centroids: CentroidTable,
    pub connectors: Vec<Connector>,
}

#[derive(Debug, Clone)]
pub struct MapEngine {
    normalizer: NameNormalizer,
    heatmap: HeatmapTable,
    scale: HeatScale,
    centers: Vec<DistributionCenter>,
    offices: HashSet<String>,
    selection: Selection,
    impact: ImpactModel,
}

impl Default for MapEngine {
    /// The engine with every built-in table.
    fn default() -> Self {
        EngineConfig::default().into_engine()
    }
}

impl MapEngine {
    pub(crate) fn from_parts(
        normalizer: NameNormalizer,
        heatmap: HeatmapTable,
        scale: HeatScale,
        centers: Vec<DistributionCenter>,
        offices: Vec<String>,
        selection: Selection,
        impact: ImpactModel,
    ) -> Self {
        Self {
            normalizer,
            heatmap,
            scale,
            centers,
            offices: offices.into_iter().collect(),
            selection,
            impact,
        }
    }

    pub fn with_centers(mut self, centers: Vec<DistributionCenter>) -> Self {
        self.centers = centers;
        self
    }

    pub fn with_heatmap(mut self, heatmap: HeatmapTable) -> Self {
        self.heatmap = heatmap;
        self
    }

    pub fn with_normalizer(mut self, normalizer: NameNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_scale(mut self, scale: HeatScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn centers(&self) -> &[DistributionCenter] {
        &self.centers
    }

    pub fn heatmap(&self) -> &HeatmapTable {
        &self.heatmap
    }

    pub fn scale(&self) -> &HeatScale {
        &self.scale
    }

    pub fn normalizer(&self) -> &NameNormalizer {
        &self.normalizer
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn impact_model(&self) -> &ImpactModel {
        &self.impact
    }

    /// Whether a feature takes part in connector resolution.
    ///
    /// With [`Selection::Offices`]: the canonical name is in the heatmap
    /// table, or either spelling is in the office-country list.
    pub fn is_selected(&self, raw_name: &str, name: &str) -> bool {
        match self.selection {
            Selection::All => true,
            Selection::Offices => {
                self.heatmap.contains(name)
                    || self.offices.contains(name)
                    || self.offices.contains(raw_name)
            }
        }
    }

    /// Nearest configured centre to an arbitrary position.
    pub fn nearest(&self, at: Coord) -> Option<Nearest<'_>> {
        nearest_center(at, &self.centers)
    }

    pub fn impact(&self, employees: u64) -> ImpactFigures {
        self.impact.figures(employees)
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            centers: self.centers.len(),
            heatmap_entries: self.heatmap.len(),
            office_countries: self.offices.len(),
            name_rules: self.normalizer.rules().len(),
        }
    }

    fn fill(&self, raw_name: &str) -> CountryFill {
        let name = self.normalizer.normalize(raw_name);
        let percent = self.heatmap.percent(&name);
        CountryFill {
            raw_name: raw_name.to_string(),
            fill: self.scale.map_fill(percent),
            name,
            percent,
        }
    }
}

impl MapLayers for MapEngine {
    fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    fn percent_for(&self, name: &str) -> Option<f64> {
        self.heatmap.percent(name)
    }

    fn fill_for(&self, name: &str) -> Rgb {
        self.scale.map_fill(self.heatmap.percent(name))
    }

    fn centroids(&self, features: &[GeoFeature]) -> CentroidTable {
        let mut table = CentroidTable::new();
        for f in features {
            let name = self.normalizer.normalize(&f.name);
            if !self.is_selected(&f.name, &name) || table.contains(&name) {
                continue;
            }
            match try_centroid(f) {
                Some(c) if c.is_finite() => {
                    table.insert_if_absent(name, c);
                }
                _ => {
                    tracing::debug!(feature = %f.name, kind = f.geometry.kind(), "no usable centroid");
                }
            }
        }
        tracing::debug!(features = features.len(), centroids = table.len(), "centroid phase done");
        table
    }

    fn connectors(&self, table: &CentroidTable) -> Vec<Connector> {
        resolve_connectors(table, &self.centers)
    }

    fn render(&self, features: &[GeoFeature]) -> RenderOutput {
        let fills = features.iter().map(|f| self.fill(&f.name)).collect();
        let centroids = self.centroids(features);
        let connectors = self.connectors(&centroids);
        RenderOutput {
            fills,
            centroids,
            connectors,
        }
    }
}
