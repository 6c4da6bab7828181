use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use geoheat_wasm::{fill_color, normalize_name, render_geojson};

#[wasm_bindgen_test]
fn normalizes_geography_labels() {
    #[cfg(target_arch = "wasm32")]
    geoheat_wasm::start();

    assert_eq!(normalize_name("Czechia"), "Czech Republic");
    assert_eq!(normalize_name("France"), "France");
}

#[wasm_bindgen_test]
fn colours_percentages() {
    assert_eq!(fill_color(Some(25.0)), "rgb(230, 207, 0)");
    assert_eq!(fill_color(None), "rgb(255, 251, 230)");
}

#[wasm_bindgen_test]
fn renders_a_feature_collection() {
    let json = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"name":"Japan"},
         "geometry":{"type":"Polygon","coordinates":[[[138,35],[140,35],[140,37],[138,37]]]}}
    ]}"#;
    assert!(render_geojson(json).is_ok());
    assert!(render_geojson("not json").is_err());
}
