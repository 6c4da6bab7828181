// crates/geoheat-core/src/nearest.rs

//! # Nearest-Center Resolver
//!
//! For every centroid, a linear scan over the distribution centres picks the
//! one with the smallest great-circle distance. With a few dozen centres and
//! under a hundred countries a spatial index would buy nothing.

use crate::centers::DistributionCenter;
use crate::centroid::CentroidTable;
use crate::distance::haversine_km;
use crate::geometry::Coord;
use serde::{Deserialize, Serialize};

/// An edge from a country's centroid to its nearest distribution centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    /// Canonical name of the origin country.
    pub country: String,
    pub from: Coord,
    pub to: Coord,
    pub center: DistributionCenter,
    /// Position of `center` in the list it was chosen from.
    pub center_index: usize,
    pub distance_km: f64,
}

/// The chosen centre for one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<'a> {
    pub index: usize,
    pub center: &'a DistributionCenter,
    pub distance_km: f64,
}

/// Finds the centre closest to `at`.
///
/// Ties go to the centre listed first: the scan only replaces its current
/// best on a strictly smaller distance. Centres whose distance is not a
/// number are never chosen. An empty list yields `None`.
///
/// # Examples
///
/// ```rust
/// use geoheat_core::{nearest::nearest_center, Coord, DistributionCenter};
///
/// let centers = vec![
///     DistributionCenter::new("Far", "X", Coord::new(10.0, 0.0)),
///     DistributionCenter::new("Near", "Y", Coord::new(1.0, 0.0)),
/// ];
/// let hit = nearest_center(Coord::new(0.0, 0.0), &centers).unwrap();
/// assert_eq!(hit.center.name, "Near");
/// assert!(nearest_center(Coord::new(0.0, 0.0), &[]).is_none());
/// ```
pub fn nearest_center(at: Coord, centers: &[DistributionCenter]) -> Option<Nearest<'_>> {
    let mut best: Option<Nearest<'_>> = None;
    for (index, center) in centers.iter().enumerate() {
        let d = haversine_km(at, center.coord);
        if d.is_nan() {
            continue;
        }
        match best {
            Some(b) if d >= b.distance_km => {}
            _ => {
                best = Some(Nearest {
                    index,
                    center,
                    distance_km: d,
                })
            }
        }
    }
    best
}

/// One connector per table row that has a reachable centre, in table order.
///
/// With no centres at all the result is empty; it never contains a
/// connector without a destination.
pub fn resolve_connectors(table: &CentroidTable, centers: &[DistributionCenter]) -> Vec<Connector> {
    let connectors: Vec<Connector> = table
        .iter()
        .filter_map(|row| {
            nearest_center(row.coord, centers).map(|hit| Connector {
                country: row.name.clone(),
                from: row.coord,
                to: hit.center.coord,
                center: hit.center.clone(),
                center_index: hit.index,
                distance_km: hit.distance_km,
            })
        })
        .collect();

    tracing::debug!(
        countries = table.len(),
        centers = centers.len(),
        connectors = connectors.len(),
        "resolved nearest centres"
    );
    connectors
}
