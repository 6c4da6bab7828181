// crates/geoheat-core/src/geometry.rs
use serde::{Deserialize, Serialize};

/// A geographic position in degrees, stored longitude first.
///
/// Serializes as a two-element `[lon, lat]` array, the same order GeoJSON
/// and the map projection layer use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { lon: 0.0, lat: 0.0 };

    #[inline]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// True when both components are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl From<[f64; 2]> for Coord {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Coord> for [f64; 2] {
    fn from(c: Coord) -> Self {
        [c.lon, c.lat]
    }
}

impl From<(f64, f64)> for Coord {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

/// A closed (or open, it does not matter here) sequence of vertices.
pub type Ring = Vec<Coord>;

/// A polygon: the first ring is the outer boundary, the rest are holes.
pub type Polygon = Vec<Ring>;

/// Country geometry as delivered by the geography source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
    /// Any other geometry kind, or none at all. Contributes no vertices.
    Empty,
}

impl Geometry {
    /// Iterates the vertices of every outer ring.
    ///
    /// For a `Polygon` that is its first ring; for a `MultiPolygon` the first
    /// ring of each member polygon, in order.
    pub fn outer_vertices(&self) -> Box<dyn Iterator<Item = &Coord> + '_> {
        match self {
            Geometry::Polygon(rings) => Box::new(rings.first().into_iter().flatten()),
            Geometry::MultiPolygon(polys) => {
                Box::new(polys.iter().filter_map(|p| p.first()).flatten())
            }
            Geometry::Empty => Box::new(std::iter::empty()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::Empty => "Empty",
        }
    }
}

/// Axis-aligned bounding box `[min_x, min_y, max_x, max_y]` in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BBox {
    /// Builds a box from a GeoJSON-style number list.
    ///
    /// Only a list of exactly four numbers is a usable box; anything else
    /// (3D boxes included) yields `None`.
    pub fn from_slice(v: &[f64]) -> Option<Self> {
        match *v {
            [min_x, min_y, max_x, max_y] => Some(Self {
                min_x,
                min_y,
                max_x,
                max_y,
            }),
            _ => None,
        }
    }

    #[inline]
    pub fn midpoint(&self) -> Coord {
        Coord::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

/// One polygon record of the geography source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFeature {
    /// Label exactly as the geography source spells it.
    pub name: String,
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BBox>,
}

impl GeoFeature {
    pub fn new(name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            name: name.into(),
            geometry,
            bbox: None,
        }
    }

    pub fn with_bbox(mut self, bbox: BBox) -> Self {
        self.bbox = Some(bbox);
        self
    }
}
