// crates/geoheat-core/src/config.rs
use crate::centers::{default_centers, DistributionCenter};
use crate::engine::MapEngine;
use crate::heatmap::{default_heatmap, HeatScale, HeatmapTable};
use crate::impact::ImpactModel;
use crate::normalize::{MatchMode, NameNormalizer, NameRule};
use serde::{Deserialize, Serialize};

/// Which geography features get a centroid (and therefore a connector).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Countries in the heatmap table or in the office-country list.
    #[default]
    Offices,
    /// Every feature.
    All,
}

/// Countries with an office, spelled the way the brief spells them.
///
/// Several entries are not canonical geography names ("UAE", "Korea");
/// a feature matches on either its raw label or its canonical name.
pub const DEFAULT_OFFICE_COUNTRIES: &[&str] = &[
    "Abu Dhabi", "Antigua", "Australia", "Austria", "The Bahamas", "Bahrain",
    "Barbados", "Belgium", "Botswana", "Bulgaria", "Canada", "The Cayman Islands",
    "China", "Croatia", "Cyprus", "Czech Republic", "Denmark", "Dubai", "Egypt",
    "Estonia", "Finland", "France", "Germany", "Gibraltar", "Greece", "Guernsey",
    "Hong Kong SAR", "Hungary", "India", "Indonesia", "Ireland", "Israel", "Italy",
    "Japan", "Jersey", "Kenya", "Korea", "Latvia", "Lithuania", "Luxembourg",
    "Macao SAR", "Malaysia", "Mauritius", "Mexico", "Monaco", "Montenegro",
    "Mozambique", "Namibia", "The Netherlands", "New Zealand", "Norway", "Oman",
    "Pakistan", "The Philippines", "Poland", "Portugal", "Puerto Rico", "Romania",
    "Saudi Arabia", "Serbia", "The Seychelles", "Sharjah", "Singapore",
    "South Africa", "Spain", "St Kitts & Nevis", "Sweden", "Switzerland",
    "Taiwan, China", "Thailand", "Turks & Caicos", "UAE", "United Kingdom",
    "United States", "Vietnam", "Zambia", "Zimbabwe",
];

/// Engine configuration as read from JSON.
///
/// Every field is optional; an omitted table falls back to the built-in one.
///
/// ```json
/// {
///   "heatmap": { "United Kingdom": 25, "France": 3 },
///   "centers": [ { "name": "Malmo", "country": "Sweden", "coord": [13.0038, 55.605] } ],
///   "match_mode": "whole_name",
///   "selection": "all",
///   "scale": { "max_pct": 30 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub heatmap: Option<HeatmapTable>,
    pub centers: Option<Vec<DistributionCenter>>,
    pub office_countries: Option<Vec<String>>,
    pub rules: Option<Vec<NameRule>>,
    pub match_mode: MatchMode,
    pub selection: Selection,
    pub scale: HeatScale,
    pub impact: ImpactModel,
}

impl EngineConfig {
    /// Parses a JSON configuration.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Resolves omitted tables to the built-ins and builds the engine.
    pub fn into_engine(self) -> MapEngine {
        let normalizer = match self.rules {
            Some(rules) => NameNormalizer::new(rules),
            None => NameNormalizer::default(),
        }
        .with_mode(self.match_mode);

        let offices = self.office_countries.unwrap_or_else(|| {
            DEFAULT_OFFICE_COUNTRIES
                .iter()
                .map(|s| s.to_string())
                .collect()
        });

        MapEngine::from_parts(
            normalizer,
            self.heatmap.unwrap_or_else(|| default_heatmap().clone()),
            self.scale,
            self.centers.unwrap_or_else(|| default_centers().to_vec()),
            offices,
            self.selection,
            self.impact,
        )
    }
}
