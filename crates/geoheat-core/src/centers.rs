// crates/geoheat-core/src/centers.rs
use crate::geometry::Coord;
use crate::traits::NameMatch;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A distribution centre beacon on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionCenter {
    pub name: String,
    pub country: String,
    pub coord: Coord,
}

impl DistributionCenter {
    pub fn new(name: impl Into<String>, country: impl Into<String>, coord: Coord) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            coord,
        }
    }
}

impl NameMatch for DistributionCenter {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// (name, country, lon, lat)
const BUILTIN: &[(&str, &str, f64, f64)] = &[
    ("Montreal", "Canada", -73.5673, 45.5017),
    ("Houston", "USA", -95.3698, 29.7604),
    ("San Luis Potosi", "Mexico", -100.9855, 22.1565),
    ("Barranquilla", "Colombia", -74.8069, 10.9639),
    ("Santiago", "Chile", -70.6693, -33.4489),
    ("Sao Paulo", "Brazil", -46.6333, -23.5505),
    ("Buenos Aires", "Argentina", -58.3816, -34.6037),
    ("Malmo", "Sweden", 13.0038, 55.6050),
    ("Villejust", "France", 2.2137, 48.6866),
    ("Basingstoke", "United Kingdom", -1.0876, 51.2665),
    ("Schlieren", "Switzerland", 8.4477, 47.3962),
    ("Rho", "Italy", 9.0360, 45.5235),
    ("Prague", "Czech Republic", 14.4378, 50.0755),
    ("Bielany Wroclawskie", "Poland", 16.9700, 51.0300),
    ("Budapest", "Hungary", 19.0402, 47.4979),
    ("Cluj-Napoca", "Romania", 23.5940, 46.7712),
    ("Istanbul", "Turkey", 28.9784, 41.0082),
    ("Athens", "Greece", 23.7275, 37.9838),
    ("Kigali", "Rwanda", 30.0588, -1.9441),
    ("Midrand", "South Africa", 28.1272, -25.9992),
    ("Abu Dhabi", "UAE", 54.3773, 24.4539),
    ("Gazipur", "Bangladesh", 90.4203, 23.9999),
    ("Bangalore", "India", 77.5946, 12.9716),
    ("Petaling Jaya", "Malaysia", 101.6517, 3.1073),
    ("Singapore", "Singapore", 103.8198, 1.3521),
    ("Jakarta", "Indonesia", 106.8456, -6.2088),
    ("Makati", "Philippines", 121.0244, 14.5547),
    ("Yagoona", "Australia", 151.0195, -33.9020),
    ("Hong Kong", "Hong Kong", 114.1694, 22.3193),
    ("Shenzhen", "China", 114.0579, 22.5431),
    ("Hanoi", "Vietnam", 105.8342, 21.0278),
    ("Samut Prakan", "Thailand", 100.5980, 13.5991),
    ("Busan", "South Korea", 129.0756, 35.1796),
    ("Tokyo", "Japan", 139.6917, 35.6895),
];

static DEFAULT_CENTERS: Lazy<Vec<DistributionCenter>> = Lazy::new(|| {
    BUILTIN
        .iter()
        .map(|&(name, country, lon, lat)| DistributionCenter::new(name, country, Coord::new(lon, lat)))
        .collect()
});

/// The built-in distribution centre list, in scan order.
pub fn default_centers() -> &'static [DistributionCenter] {
    &DEFAULT_CENTERS
}

/// Finds a centre by display name, accent- and case-insensitive.
pub fn find_center<'a>(
    centers: &'a [DistributionCenter],
    name: &str,
) -> Option<&'a DistributionCenter> {
    centers.iter().find(|c| c.is_named(name))
}
