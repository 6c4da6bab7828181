// crates/geoheat-core/src/convert.rs
#![cfg(feature = "json")]
use crate::geometry::{BBox, Coord, GeoFeature, Geometry, Polygon, Ring};
use crate::raw::{FeatureCollectionRaw, FeatureRaw, GeometryRaw};
use serde_json::Value;

/// **Standard Converter:** Raw GeoJSON -> domain features.
///
/// Features without a `properties.name` are kept with an empty label; the
/// engine decides later whether such a feature is selected at all.
pub fn from_raw(raw: FeatureCollectionRaw) -> Vec<GeoFeature> {
    raw.features.into_iter().map(feature_from_raw).collect()
}

fn feature_from_raw(f: FeatureRaw) -> GeoFeature {
    let name = f.properties.and_then(|p| p.name).unwrap_or_default();

    // Feature-level bbox wins; the geometry may carry its own.
    let geometry_bbox = f.geometry.as_ref().and_then(|g| g.bbox.clone());
    let bbox = f
        .bbox
        .as_deref()
        .and_then(BBox::from_slice)
        .or_else(|| geometry_bbox.as_deref().and_then(BBox::from_slice));

    let geometry = match f.geometry {
        Some(g) => geometry_from_raw(&name, g),
        None => Geometry::Empty,
    };

    GeoFeature {
        name,
        geometry,
        bbox,
    }
}

fn geometry_from_raw(name: &str, g: GeometryRaw) -> Geometry {
    match g.kind.as_deref().unwrap_or_default() {
        "Polygon" => Geometry::Polygon(parse_polygon(&g.coordinates)),
        "MultiPolygon" => Geometry::MultiPolygon(
            g.coordinates
                .as_array()
                .map(|polys| polys.iter().map(parse_polygon).collect())
                .unwrap_or_default(),
        ),
        other => {
            tracing::debug!(feature = name, kind = other, "geometry kind carries no rings");
            Geometry::Empty
        }
    }
}

fn parse_polygon(v: &Value) -> Polygon {
    v.as_array()
        .map(|rings| rings.iter().map(parse_ring).collect())
        .unwrap_or_default()
}

fn parse_ring(v: &Value) -> Ring {
    let Some(points) = v.as_array() else {
        tracing::warn!("ring is not an array, ignoring it");
        return Vec::new();
    };
    points.iter().filter_map(parse_position).collect()
}

/// A position needs at least two numbers; altitude and beyond are ignored.
fn parse_position(v: &Value) -> Option<Coord> {
    let a = v.as_array()?;
    Some(Coord::new(a.first()?.as_f64()?, a.get(1)?.as_f64()?))
}
