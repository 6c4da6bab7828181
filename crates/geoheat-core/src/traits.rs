// crates/geoheat-core/src/traits.rs
use crate::centroid::CentroidTable;
use crate::engine::RenderOutput;
use crate::geometry::GeoFeature;
use crate::heatmap::Rgb;
use crate::nearest::Connector;
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a display name.
///
/// This trait centralizes accent-insensitive and case-insensitive
/// comparisons based on [`fold_key`]. Implementors provide a `&str` view of
/// their name via [`NameMatch::name_str`], and get convenient helpers:
/// - [`NameMatch::is_named`]: equality on folded form
/// - [`NameMatch::name_contains`]: substring match on folded form
///
/// # Examples
/// ```rust
/// use geoheat_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Malmö").is_named("malmo"));
/// assert!(Place("Cluj-Napoca").name_contains("napoca"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

/// The capability every presentation layer consumes: given geography and
/// the engine's configuration, produce names, colours and connectors.
///
/// All methods are total. None of them mutates the implementor.
pub trait MapLayers {
    /// Canonical name for a raw geography label.
    fn normalize(&self, raw: &str) -> String;

    /// Heatmap percentage for a canonical name, if the table has one.
    fn percent_for(&self, name: &str) -> Option<f64>;

    /// Fill colour for a canonical name; the background when the table misses.
    fn fill_for(&self, name: &str) -> Rgb;

    /// Phase one: centroids of every selected feature.
    fn centroids(&self, features: &[GeoFeature]) -> CentroidTable;

    /// Phase two: one connector per centroid with a reachable centre.
    fn connectors(&self, table: &CentroidTable) -> Vec<Connector>;

    /// Both phases plus per-feature fills.
    fn render(&self, features: &[GeoFeature]) -> RenderOutput;
}
