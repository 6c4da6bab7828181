// crates/geoheat-core/tests/engine.rs
//
// End-to-end checks against the bundled sample geography.
#![cfg(feature = "json")]

use approx::assert_relative_eq;
use geoheat_core::loader::{features_from_str, load_sample_features};
use geoheat_core::prelude::*;
use geoheat_core::{DistributionCenter, HeatScale};

fn sample_render() -> RenderOutput {
    let features = load_sample_features().expect("bundled sample");
    MapEngine::default().render(&features)
}

#[test]
fn every_feature_gets_a_fill() {
    let features = load_sample_features().unwrap();
    let out = MapEngine::default().render(&features);
    assert_eq!(out.fills.len(), features.len());

    let fill = |raw: &str| out.fills.iter().find(|f| f.raw_name == raw).unwrap().clone();

    let uk = fill("United Kingdom");
    assert_eq!(uk.percent, Some(25.0));
    assert_eq!(uk.fill, Rgb::new(230, 207, 0));

    let hk = fill("Hong Kong");
    assert_eq!(hk.name, "Hong Kong SAR");
    assert_eq!(hk.percent, Some(6.0));

    let brazil = fill("Brazil");
    assert_eq!(brazil.percent, None);
    assert_eq!(brazil.fill, HeatScale::default().background);
    assert_eq!(brazil.fill.to_hex(), "#f8fafc");
}

#[test]
fn connectors_for_office_countries_only() {
    let out = sample_render();
    let countries: Vec<&str> = out.connectors.iter().map(|c| c.country.as_str()).collect();
    assert_eq!(
        countries,
        vec![
            "United Kingdom",
            "France",
            "Czech Republic",
            "United States",
            "Japan",
            "The Bahamas",
            "Hong Kong SAR",
            "South Korea",
            "Australia",
            "South Africa",
        ]
    );
    assert!(!countries.contains(&"Brazil"));
    assert!(!countries.contains(&"Mongolia"));
    assert!(!countries.contains(&"Antarctica"));
}

#[test]
fn sample_countries_reach_expected_centres() {
    let out = sample_render();
    let centre = |country: &str| {
        out.connectors
            .iter()
            .find(|c| c.country == country)
            .map(|c| c.center.name.clone())
            .unwrap()
    };
    assert_eq!(centre("United Kingdom"), "Basingstoke");
    assert_eq!(centre("France"), "Villejust");
    assert_eq!(centre("Czech Republic"), "Prague");
    assert_eq!(centre("Japan"), "Tokyo");
    assert_eq!(centre("Hong Kong SAR"), "Hong Kong");
    assert_eq!(centre("South Korea"), "Busan");
    assert_eq!(centre("Australia"), "Yagoona");
    assert_eq!(centre("South Africa"), "Midrand");
}

#[test]
fn bbox_beats_vertex_mean() {
    let out = sample_render();
    // The UK feature carries a bbox, so its anchor is the box midpoint.
    let uk = out.centroids.get("United Kingdom").unwrap();
    assert_relative_eq!(uk.lon, -3.4, epsilon = 1e-9);
    assert_relative_eq!(uk.lat, 55.4, epsilon = 1e-9);
}

#[test]
fn connector_endpoints_match_table_and_centre() {
    let out = sample_render();
    for c in &out.connectors {
        assert_eq!(out.centroids.get(&c.country), Some(c.from));
        assert_eq!(c.to, c.center.coord);
        assert_eq!(MapEngine::default().centers()[c.center_index], c.center);
        assert!(c.distance_km.is_finite() && c.distance_km >= 0.0);
    }
}

#[test]
fn equator_scenario() {
    let json = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"name":"TestCountry"},
         "geometry":{"type":"Polygon","coordinates":[[[-1,-1],[1,-1],[1,1],[-1,1]]]}}
    ]}"#;
    let features = features_from_str(json).unwrap();
    let engine = MapEngine::default()
        .with_selection(Selection::All)
        .with_centers(vec![
            DistributionCenter::new("Far", "X", Coord::new(10.0, 0.0)),
            DistributionCenter::new("Near", "Y", Coord::new(1.0, 0.0)),
        ]);

    let out = engine.render(&features);
    assert_eq!(out.connectors.len(), 1);
    let line = &out.connectors[0];
    assert_eq!(line.from, Coord::new(0.0, 0.0));
    assert_eq!(line.to, Coord::new(1.0, 0.0));
    assert_relative_eq!(line.distance_km, 111.19, epsilon = 0.01);
}

#[test]
fn render_serializes_for_presentation_layers() {
    let out = sample_render();
    let v = serde_json::to_value(&out).unwrap();
    assert_eq!(v["fills"][0]["fill"], "rgb(230, 207, 0)");
    assert_eq!(v["centroids"][0]["name"], "United Kingdom");
    assert!(v["connectors"][0]["center"]["coord"].is_array());
}
