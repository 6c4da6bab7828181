// crates/geoheat-core/src/heatmap.rs

//! # Heatmap Colorizer
//!
//! Office-employee percentages become fills on a light-to-dark yellow ramp.
//! Percentages above the top of the scale saturate at the darkest colour.

use crate::error::{GeoError, Result};
use crate::text::equals_folded;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Simple 8-bit RGB colour.
///
/// Displays and serializes as CSS `rgb(r, g, b)`; parses from `#rrggbb`,
/// `rrggbb` or `rgb(r, g, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channel-wise linear interpolation, each channel rounded to nearest.
    ///
    /// `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| -> u8 {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r, g, b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let bad = || GeoError::InvalidData(format!("not a colour: {s:?}"));

        if let Some(inner) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            let parts: Vec<u8> = inner
                .split(',')
                .map(|p| p.trim().parse::<u8>())
                .collect::<std::result::Result<_, _>>()
                .map_err(|_| bad())?;
            return match parts[..] {
                [r, g, b] => Ok(Rgb::new(r, g, b)),
                _ => Err(bad()),
            };
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(bad());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Colour ramp and its percentage domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatScale {
    /// What the colour ramp returns for a non-positive percentage.
    pub no_data: Rgb,
    /// Map fill for a country with no percentage at all (missing or zero).
    pub background: Rgb,
    /// Colour at `min_pct`.
    pub light: Rgb,
    /// Colour at `max_pct` and above.
    pub dark: Rgb,
    pub min_pct: f64,
    pub max_pct: f64,
    /// Hover fill offered to presentation layers.
    pub highlight: Rgb,
    /// Pressed fill offered to presentation layers.
    pub pressed: Rgb,
}

impl Default for HeatScale {
    fn default() -> Self {
        Self {
            no_data: Rgb::new(0xff, 0xfb, 0xe6),
            background: Rgb::new(0xf8, 0xfa, 0xfc),
            light: Rgb::new(255, 247, 161),
            dark: Rgb::new(230, 207, 0),
            min_pct: 1.0,
            max_pct: 25.0,
            highlight: Rgb::new(0xff, 0xe6, 0x00),
            pressed: Rgb::new(0xe6, 0xcf, 0x00),
        }
    }
}

impl HeatScale {
    /// Position of `pct` on the ramp, in `[0, 1]`.
    pub fn position(&self, pct: f64) -> f64 {
        let span = self.max_pct - self.min_pct;
        if span <= 0.0 || !span.is_finite() {
            // Degenerate domain: anything with data is fully saturated.
            return 1.0;
        }
        ((pct - self.min_pct) / span).clamp(0.0, 1.0)
    }

    /// Fill colour for an optional percentage.
    ///
    /// `None`, zero, negative and NaN all mean "no data".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geoheat_core::heatmap::{HeatScale, Rgb};
    ///
    /// let scale = HeatScale::default();
    /// assert_eq!(scale.color_for(None), scale.no_data);
    /// assert_eq!(scale.color_for(Some(1.0)), Rgb::new(255, 247, 161));
    /// assert_eq!(scale.color_for(Some(25.0)), scale.color_for(Some(1000.0)));
    /// ```
    pub fn color_for(&self, pct: Option<f64>) -> Rgb {
        match pct {
            Some(p) if p > 0.0 => self.light.lerp(self.dark, self.position(p)),
            _ => self.no_data,
        }
    }

    /// Fill a map layer paints for a country.
    ///
    /// A missing, zero or NaN percentage gets the page `background`; anything
    /// else goes through [`HeatScale::color_for`].
    ///
    /// ```rust
    /// use geoheat_core::heatmap::HeatScale;
    ///
    /// let scale = HeatScale::default();
    /// assert_eq!(scale.map_fill(None), scale.background);
    /// assert_eq!(scale.map_fill(Some(-2.0)), scale.no_data);
    /// assert_eq!(scale.map_fill(Some(3.0)), scale.color_for(Some(3.0)));
    /// ```
    pub fn map_fill(&self, pct: Option<f64>) -> Rgb {
        match pct {
            Some(p) if p != 0.0 && !p.is_nan() => self.color_for(Some(p)),
            _ => self.background,
        }
    }
}

/// Fill colour on the default scale.
pub fn heat_color(pct: Option<f64>) -> Rgb {
    DEFAULT_SCALE.color_for(pct)
}

static DEFAULT_SCALE: Lazy<HeatScale> = Lazy::new(HeatScale::default);

/// Canonical country name -> share of employees, in percent.
///
/// A curated table, not a distribution: it need not sum to 100 and is not
/// checked against the geography source. A miss simply means "no data".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeatmapTable {
    entries: HashMap<String, f64>,
}

impl HeatmapTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, pct: f64) {
        self.entries.insert(name.into(), pct);
    }

    pub fn percent(&self, name: &str) -> Option<f64> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by name, for stable listings.
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut v: Vec<(&str, f64)> = self.entries.iter().map(|(k, &p)| (k.as_str(), p)).collect();
        v.sort_by(|a, b| a.0.cmp(b.0));
        v
    }

    /// Accent- and case-insensitive lookup, for user-typed names.
    ///
    /// An exact hit wins; otherwise the first folded match in name order.
    pub fn lookup_folded(&self, q: &str) -> Option<(&str, f64)> {
        if let Some((k, &p)) = self.entries.get_key_value(q) {
            return Some((k.as_str(), p));
        }
        self.sorted().into_iter().find(|(k, _)| equals_folded(k, q))
    }

    /// Sum of all percentages. Informational only.
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for HeatmapTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

const BUILTIN: &[(&str, f64)] = &[
    ("Abu Dhabi, United Arab Emirates", 1.0),
    ("Antigua and Barbuda", 1.0),
    ("Australia", 7.0),
    ("Austria", 1.0),
    ("The Bahamas", 1.0),
    ("Bahrain", 1.0),
    ("Barbados", 1.0),
    ("Belgium", 1.0),
    ("Botswana", 1.0),
    ("Bulgaria", 1.0),
    ("Canada", 1.0),
    ("The Cayman Islands", 1.0),
    ("China", 10.0),
    ("Croatia", 1.0),
    ("Cyprus", 1.0),
    ("Czech Republic", 1.0),
    ("Denmark", 1.0),
    ("Dubai, United Arab Emirates", 1.0),
    ("Egypt", 1.0),
    ("Estonia", 1.0),
    ("Finland", 1.0),
    ("France", 3.0),
    ("Germany", 3.0),
    ("Gibraltar", 1.0),
    ("Greece", 1.0),
    ("Guernsey", 1.0),
    ("Hong Kong SAR", 6.0),
    ("Hungary", 1.0),
    ("India", 3.0),
    ("Indonesia", 1.0),
    ("Ireland", 2.0),
    ("Israel", 1.0),
    ("Italy", 2.0),
    ("Japan", 2.0),
    ("Jersey", 1.0),
    ("Kenya", 1.0),
    ("South Korea", 1.0),
    ("Latvia", 1.0),
    ("Lithuania", 1.0),
    ("Luxembourg", 1.0),
    ("Macao SAR, China", 1.0),
    ("Malaysia", 1.0),
    ("Mauritius", 1.0),
    ("Mexico", 1.0),
    ("Monaco", 1.0),
    ("Montenegro", 1.0),
    ("Mozambique", 1.0),
    ("Namibia", 1.0),
    ("Netherlands", 2.0),
    ("New Zealand", 1.0),
    ("Norway", 1.0),
    ("Oman", 1.0),
    ("Pakistan", 1.0),
    ("Philippines", 1.0),
    ("Poland", 1.0),
    ("Portugal", 1.0),
    ("Puerto Rico", 1.0),
    ("Romania", 1.0),
    ("Saudi Arabia", 1.0),
    ("Serbia", 1.0),
    ("Seychelles", 1.0),
    ("Sharjah, United Arab Emirates", 1.0),
    ("Singapore", 3.0),
    ("South Africa", 2.0),
    ("Spain", 2.0),
    ("Saint Kitts and Nevis", 1.0),
    ("Sweden", 1.0),
    ("Switzerland", 1.0),
    ("Taiwan", 1.0),
    ("Thailand", 1.0),
    ("Turks and Caicos Islands", 1.0),
    ("United Arab Emirates", 2.0),
    ("United Kingdom", 25.0),
    ("United States", 4.0),
    ("Vietnam", 1.0),
    ("Zambia", 1.0),
    ("Zimbabwe", 1.0),
];

static DEFAULT_TABLE: Lazy<HeatmapTable> = Lazy::new(|| BUILTIN.iter().copied().collect());

/// The built-in heatmap table.
pub fn default_heatmap() -> &'static HeatmapTable {
    &DEFAULT_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_cases() {
        let s = HeatScale::default();
        for pct in [None, Some(0.0), Some(-3.0), Some(f64::NAN)] {
            assert_eq!(s.color_for(pct), Rgb::new(0xff, 0xfb, 0xe6), "{pct:?}");
        }
    }

    #[test]
    fn map_fill_uses_background_for_missing_data() {
        let s = HeatScale::default();
        assert_eq!(s.background.to_hex(), "#f8fafc");
        for pct in [None, Some(0.0), Some(f64::NAN)] {
            assert_eq!(s.map_fill(pct), s.background, "{pct:?}");
        }
        // negative percentages still reach the ramp's no-data colour
        assert_eq!(s.map_fill(Some(-1.0)), Rgb::new(0xff, 0xfb, 0xe6));
        assert_eq!(s.map_fill(Some(25.0)), s.dark);
    }

    #[test]
    fn endpoints_and_clamping() {
        let s = HeatScale::default();
        assert_eq!(s.color_for(Some(1.0)), s.light);
        assert_eq!(s.color_for(Some(25.0)), s.dark);
        assert_eq!(s.color_for(Some(100.0)), s.dark);
        assert_eq!(s.color_for(Some(1000.0)), s.dark);
        assert_eq!(s.color_for(Some(f64::INFINITY)), s.dark);
        // below the domain but still "has data"
        assert_eq!(s.color_for(Some(0.5)), s.light);
    }

    #[test]
    fn midpoint_rounds_each_channel() {
        // t = 0.5: 242.5 -> 243, 227, 80.5 -> 81
        assert_eq!(heat_color(Some(13.0)), Rgb::new(243, 227, 81));
        // United Kingdom in the built-in table saturates
        assert_eq!(
            heat_color(default_heatmap().percent("United Kingdom")),
            Rgb::new(230, 207, 0)
        );
    }

    #[test]
    fn darkens_monotonically() {
        let s = HeatScale::default();
        let mut prev = s.color_for(Some(1.0));
        let mut p = 1.0;
        while p <= 25.0 {
            let c = s.color_for(Some(p));
            assert!(c.r <= prev.r && c.g <= prev.g && c.b <= prev.b, "{p}: {c} after {prev}");
            prev = c;
            p += 0.25;
        }
    }

    #[test]
    fn css_and_hex_forms() {
        let c = Rgb::new(230, 207, 0);
        assert_eq!(c.to_string(), "rgb(230, 207, 0)");
        assert_eq!(c.to_hex(), "#e6cf00");
        assert_eq!("#e6cf00".parse::<Rgb>().unwrap(), c);
        assert_eq!("E6CF00".parse::<Rgb>().unwrap(), c);
        assert_eq!("rgb(230, 207, 0)".parse::<Rgb>().unwrap(), c);
        assert!("#e6cf0".parse::<Rgb>().is_err());
        assert!("rgb(1,2)".parse::<Rgb>().is_err());
        assert!("rgb(1,2,300)".parse::<Rgb>().is_err());
    }

    #[test]
    fn scale_from_partial_json() {
        let s: HeatScale = serde_json::from_str(r##"{"dark":"#000000","max_pct":50}"##).unwrap();
        assert_eq!(s.dark, Rgb::new(0, 0, 0));
        assert_eq!(s.light, HeatScale::default().light);
        assert_eq!(s.position(25.5), 0.5);
    }

    #[test]
    fn builtin_table_is_curated_not_normalized() {
        let t = default_heatmap();
        assert_eq!(t.len(), 77);
        assert_eq!(t.percent("China"), Some(10.0));
        assert_eq!(t.percent("Atlantis"), None);
        assert!(t.total() > 100.0);
    }

    #[test]
    fn folded_lookup() {
        let t = default_heatmap();
        assert_eq!(t.lookup_folded("united kingdom"), Some(("United Kingdom", 25.0)));
        assert_eq!(t.lookup_folded("  CZECH republic "), Some(("Czech Republic", 1.0)));
        assert_eq!(t.lookup_folded("Atlantis"), None);
    }
}
