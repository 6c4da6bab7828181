//! geoheat-wasm: WebAssembly bindings for geoheat-core
//!
//! A small JS/WASM API over one process-wide [`MapEngine`] built from the
//! built-in tables. The page draws; this crate only decides names, colours
//! and connector lines.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Single lookups: `normalize_name(label)`, `fill_color(pct)`,
//!   `fill_for_country(label)`, `nearest_center(lon, lat)`
//! - A full render of a GeoJSON string: `render_geojson(text)`
//! - Static data: `get_centers()`, `get_impact(n)`, `get_stats()`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { render_geojson, fill_color } from 'geoheat-wasm';
//!
//! async function main() {
//!   await init();
//!   const world = await (await fetch('countries.geojson')).text();
//!   const { fills, connectors } = render_geojson(world);
//!   console.log(fills.length, connectors.length, fill_color(13));
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Every value crossing the boundary is plain JSON: coordinates are
//!   `[lon, lat]` arrays, colours are CSS `rgb(r, g, b)` strings.
//! - Fallible calls throw a JS string on error.
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use geoheat_core::loader::features_from_str;
use geoheat_core::{Coord, CountryFill, MapEngine, MapLayers};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;

// 1. Static Instance
static ENGINE: OnceLock<MapEngine> = OnceLock::new();

fn engine() -> &'static MapEngine {
    ENGINE.get_or_init(MapEngine::default)
}

// Plain objects and arrays only, no JS `Map`s.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(JsValue::from)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing geoheat WASM module...".into());

    let stats = engine().stats();
    web_sys::console::log_1(
        &format!(
            "✓ {} centres, {} heatmap entries",
            stats.centers, stats.heatmap_entries
        )
        .into(),
    );
}

/* --------------------------------------------------------------------------
   Single Lookups
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn normalize_name(label: &str) -> String {
    engine().normalize(label)
}

/// CSS fill for a percentage; `undefined` means "no data".
#[wasm_bindgen]
pub fn fill_color(pct: Option<f64>) -> String {
    engine().scale().color_for(pct).to_string()
}

#[wasm_bindgen]
pub fn fill_for_country(label: &str) -> Result<JsValue, JsValue> {
    let e = engine();
    let name = e.normalize(label);
    let percent = e.percent_for(&name);
    let fill = CountryFill {
        raw_name: label.to_string(),
        fill: e.fill_for(&name),
        name,
        percent,
    };
    to_js(&fill)
}

/// Nearest centre to a position, or `null` when there are no centres.
#[wasm_bindgen]
pub fn nearest_center(lon: f64, lat: f64) -> Result<JsValue, JsValue> {
    match engine().nearest(Coord::new(lon, lat)) {
        Some(hit) => {
            let obj = serde_json::json!({
                "index": hit.index,
                "center": hit.center,
                "distance_km": hit.distance_km,
            });
            to_js(&obj)
        }
        None => Ok(JsValue::NULL),
    }
}

/* --------------------------------------------------------------------------
   Render
-------------------------------------------------------------------------- */

/// Renders a GeoJSON `FeatureCollection` string.
///
/// Returns `{ fills, centroids, connectors }`; throws on unparsable input.
#[wasm_bindgen]
pub fn render_geojson(geojson: &str) -> Result<JsValue, JsValue> {
    let features = features_from_str(geojson).map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&engine().render(&features))
}

/* --------------------------------------------------------------------------
   Static Data
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_centers() -> Result<JsValue, JsValue> {
    // Preserve scan order; the connector `center_index` refers into it.
    let array = js_sys::Array::new();
    for c in engine().centers() {
        array.push(&to_js(c)?);
    }
    Ok(array.into())
}

#[wasm_bindgen]
pub fn get_impact(employees: u32) -> Result<JsValue, JsValue> {
    to_js(&engine().impact(u64::from(employees)))
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    to_js(&engine().stats())
}
