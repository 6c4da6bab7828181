//! Nearest distribution centre lookups
//!
//! Resolves a few well-known cities against the built-in centre list and
//! then against a custom list read from an engine config.

use geoheat_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== geoheat-rs Nearest Centre Example ===\n");

    let engine = MapEngine::default();
    let places = [
        ("London", -0.1276, 51.5072),
        ("Nairobi", 36.8219, -1.2921),
        ("Lima", -77.0428, -12.0464),
        ("Auckland", 174.7633, -36.8485),
        ("Reykjavik", -21.9426, 64.1466),
    ];

    println!("--- Built-in centres ({}) ---", engine.centers().len());
    for (city, lon, lat) in places {
        if let Some(hit) = engine.nearest(Coord::new(lon, lat)) {
            println!("{city:>10} -> {} ({:.0} km)", hit.center.name, hit.distance_km);
        }
    }
    println!();

    // A two-centre network: everything goes to one or the other.
    println!("--- Custom centres from JSON ---");
    let config = EngineConfig::from_json_str(
        r#"{"centers": [
            {"name": "Rotterdam", "country": "Netherlands", "coord": [4.4777, 51.9244]},
            {"name": "Singapore", "country": "Singapore", "coord": [103.8198, 1.3521]}
        ]}"#,
    )?;
    let engine = config.into_engine();
    for (city, lon, lat) in places {
        if let Some(hit) = engine.nearest(Coord::new(lon, lat)) {
            println!("{city:>10} -> {} ({:.0} km)", hit.center.name, hit.distance_km);
        }
    }

    Ok(())
}
