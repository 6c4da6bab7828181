// crates/geoheat-core/src/centroid.rs

//! # Centroid Resolver
//!
//! Approximate centre points used as anchors for connector lines. These are
//! not area centroids: a bounding-box midpoint or a plain vertex mean is
//! close enough for drawing.

use crate::geometry::{BBox, Coord, GeoFeature, Geometry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Centroid of a feature, falling back to `(0, 0)` when there is nothing to
/// average.
///
/// # Examples
///
/// ```rust
/// use geoheat_core::{centroid::centroid, Coord, GeoFeature, Geometry};
///
/// let square = vec![vec![
///     Coord::new(0.0, 0.0),
///     Coord::new(2.0, 0.0),
///     Coord::new(2.0, 2.0),
///     Coord::new(0.0, 2.0),
/// ]];
/// let f = GeoFeature::new("Square", Geometry::Polygon(square));
/// assert_eq!(centroid(&f), Coord::new(1.0, 1.0));
/// ```
pub fn centroid(feature: &GeoFeature) -> Coord {
    try_centroid(feature).unwrap_or(Coord::ORIGIN)
}

/// Same as [`centroid`] but reports "no points" as `None`.
pub fn try_centroid(feature: &GeoFeature) -> Option<Coord> {
    approx_centroid(&feature.geometry, feature.bbox.as_ref())
}

/// Bounding-box midpoint when a box is given, otherwise the unweighted mean
/// of all outer-ring vertices.
///
/// Every vertex weighs the same, whichever member polygon it belongs to.
pub fn approx_centroid(geometry: &Geometry, bbox: Option<&BBox>) -> Option<Coord> {
    if let Some(b) = bbox {
        return Some(b.midpoint());
    }

    let (mut sum_x, mut sum_y, mut count) = (0.0_f64, 0.0_f64, 0_usize);
    for c in geometry.outer_vertices() {
        sum_x += c.lon;
        sum_y += c.lat;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(Coord::new(sum_x / count as f64, sum_y / count as f64))
}

/// One row of a [`CentroidTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryCentroid {
    pub name: String,
    pub coord: Coord,
}

/// Immutable, insertion-ordered `canonical name -> centroid` mapping.
///
/// Built once per render and handed to the nearest-centre resolver. When a
/// name is inserted twice the first centroid is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CentroidTable {
    entries: Vec<CountryCentroid>,
    index: HashMap<String, usize>,
}

impl CentroidTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts unless the name is already present. Returns whether it was
    /// inserted.
    pub fn insert_if_absent(&mut self, name: impl Into<String>, coord: Coord) -> bool {
        let name = name.into();
        if self.index.contains_key(&name) {
            return false;
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push(CountryCentroid { name, coord });
        true
    }

    pub fn get(&self, name: &str) -> Option<Coord> {
        self.index.get(name).map(|&i| self.entries[i].coord)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryCentroid> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[CountryCentroid] {
        &self.entries
    }
}

impl FromIterator<CountryCentroid> for CentroidTable {
    fn from_iter<I: IntoIterator<Item = CountryCentroid>>(iter: I) -> Self {
        let mut table = CentroidTable::new();
        for c in iter {
            table.insert_if_absent(c.name, c.coord);
        }
        table
    }
}

impl<'a> IntoIterator for &'a CentroidTable {
    type Item = &'a CountryCentroid;
    type IntoIter = std::slice::Iter<'a, CountryCentroid>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Serialized as the plain row list; the index is rebuilt on the way in.
impl Serialize for CentroidTable {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(s)
    }
}

impl<'de> Deserialize<'de> for CentroidTable {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let rows = Vec::<CountryCentroid>::deserialize(d)?;
        Ok(rows.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Ring;

    fn ring(points: &[(f64, f64)]) -> Ring {
        points.iter().copied().map(Coord::from).collect()
    }

    #[test]
    fn bbox_midpoint_is_exact() {
        let f = GeoFeature::new("Boxed", Geometry::Polygon(vec![ring(&[(50.0, 50.0)])]))
            .with_bbox(BBox::from_slice(&[-8.6, 49.9, 1.8, 60.9]).unwrap());
        assert_eq!(centroid(&f), Coord::new((-8.6 + 1.8) / 2.0, (49.9 + 60.9) / 2.0));
    }

    #[test]
    fn square_ring_mean() {
        let f = GeoFeature::new(
            "Square",
            Geometry::Polygon(vec![ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])]),
        );
        assert_eq!(centroid(&f), Coord::new(1.0, 1.0));
    }

    #[test]
    fn multipolygon_weights_vertices_equally() {
        // 3 vertices at x=0 and 1 vertex at x=8 -> mean x = 2
        let g = Geometry::MultiPolygon(vec![
            vec![ring(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)])],
            vec![ring(&[(8.0, 2.0)])],
        ]);
        assert_eq!(approx_centroid(&g, None), Some(Coord::new(2.0, 1.25)));
    }

    #[test]
    fn no_points_defaults_to_origin() {
        let empty = GeoFeature::new("Nowhere", Geometry::Polygon(vec![]));
        assert_eq!(centroid(&empty), Coord::ORIGIN);
        assert_eq!(try_centroid(&empty), None);
        assert_eq!(
            centroid(&GeoFeature::new("Nothing", Geometry::Empty)),
            Coord::ORIGIN
        );
        let hollow = GeoFeature::new("Hollow", Geometry::MultiPolygon(vec![vec![], vec![vec![]]]));
        assert_eq!(centroid(&hollow), Coord::ORIGIN);
    }

    #[test]
    fn repeated_calls_agree() {
        let f = GeoFeature::new(
            "Tri",
            Geometry::Polygon(vec![ring(&[(0.1, 0.2), (3.3, -1.7), (9.9, 4.4)])]),
        );
        assert_eq!(centroid(&f), centroid(&f.clone()));
    }

    #[test]
    fn table_keeps_first_insert() {
        let mut t = CentroidTable::new();
        assert!(t.insert_if_absent("A", Coord::new(1.0, 1.0)));
        assert!(!t.insert_if_absent("A", Coord::new(9.0, 9.0)));
        assert!(t.insert_if_absent("B", Coord::new(2.0, 2.0)));
        assert_eq!(t.get("A"), Some(Coord::new(1.0, 1.0)));
        let names: Vec<&str> = t.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn table_from_json_rows_keeps_first() {
        let t: CentroidTable = serde_json::from_str(
            r#"[{"name":"X","coord":[1.0,2.0]},{"name":"X","coord":[3.0,4.0]}]"#,
        )
        .unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("X"), Some(Coord::new(1.0, 2.0)));
    }
}
