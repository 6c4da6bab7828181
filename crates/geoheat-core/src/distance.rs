// crates/geoheat-core/src/distance.rs
use crate::geometry::Coord;

/// Mean Earth radius used for all great-circle distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two `(lon, lat)` positions, in kilometres.
///
/// Haversine formula on a sphere of radius [`EARTH_RADIUS_KM`]:
///
/// ```text
/// a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
/// d = 2·R·asin(√a)
/// ```
///
/// # Examples
///
/// ```rust
/// use geoheat_core::{distance::haversine_km, Coord};
///
/// let p = Coord::new(2.2137, 48.6866);
/// assert_eq!(haversine_km(p, p), 0.0);
/// ```
pub fn haversine_km(a: Coord, b: Coord) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn coincident_points_are_zero_apart() {
        for p in [
            Coord::new(0.0, 0.0),
            Coord::new(-73.5673, 45.5017),
            Coord::new(179.9, -89.0),
        ] {
            assert_eq!(haversine_km(p, p), 0.0);
        }
    }

    #[test]
    fn one_degree_along_equator() {
        let d = haversine_km(Coord::new(0.0, 0.0), Coord::new(1.0, 0.0));
        assert_relative_eq!(d, EARTH_RADIUS_KM * 1f64.to_radians(), epsilon = 1e-9);
    }

    #[test]
    fn symmetric() {
        let a = Coord::new(-1.0876, 51.2665);
        let b = Coord::new(139.6917, 35.6895);
        assert_relative_eq!(haversine_km(a, b), haversine_km(b, a), epsilon = 1e-9);
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = haversine_km(Coord::new(0.0, 0.0), Coord::new(180.0, 0.0));
        assert_relative_eq!(d, std::f64::consts::PI * EARTH_RADIUS_KM, epsilon = 1e-6);
    }
}
