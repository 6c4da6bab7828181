// crates/geoheat-core/src/raw.rs
#![cfg(feature = "json")]
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Raw GeoJSON `FeatureCollection` as it comes from the geography source.
///
/// NOTE: This mirrors the external file layout only as far as the engine
/// needs it. Unknown members are ignored. We do *not* expose these types from
/// the public API; see [`crate::convert`] for the domain mapping.
///
/// Every member is read leniently: a value of the wrong shape is dropped
/// with a warning and the rest of the file still loads.
#[derive(Debug, Deserialize)]
pub struct FeatureCollectionRaw {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub features: Vec<FeatureRaw>,
}

/// Raw feature: `{ "properties": { "name": ... }, "geometry": ..., "bbox": [...] }`
#[derive(Debug, Deserialize)]
pub struct FeatureRaw {
    #[serde(default, deserialize_with = "lenient")]
    pub properties: Option<PropertiesRaw>,
    #[serde(default, deserialize_with = "lenient")]
    pub geometry: Option<GeometryRaw>,
    #[serde(default, deserialize_with = "lenient")]
    pub bbox: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct PropertiesRaw {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// Raw geometry. Coordinates are kept as an untyped JSON value so that a
/// malformed ring degrades to "no vertices" instead of failing the whole file.
#[derive(Debug, Deserialize)]
pub struct GeometryRaw {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default)]
    pub coordinates: Value,
    #[serde(default, deserialize_with = "lenient")]
    pub bbox: Option<Vec<f64>>,
}

// -----------------------------------------------------------------------
// LENIENT FIELD HELPERS
// -----------------------------------------------------------------------

/// `null` and wrongly-shaped values both become `None`.
fn lenient<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Value::deserialize(d)?;
    if v.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(v) {
        Ok(t) => Ok(Some(t)),
        Err(e) => {
            tracing::warn!(error = %e, "dropping malformed GeoJSON member");
            Ok(None)
        }
    }
}

/// Keeps the elements that parse; a non-array becomes an empty list.
fn lenient_vec<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(d)? else {
        tracing::warn!("\"features\" is not an array, ignoring it");
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(t) => Some(t),
            Err(e) => {
                tracing::warn!(error = %e, "dropping malformed feature");
                None
            }
        })
        .collect())
}
