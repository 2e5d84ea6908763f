//! Nearest-neighbor route construction.

use std::collections::BTreeSet;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::RouteInvariantViolation;
use crate::model::{DeliveryId, Distance, Location, Vehicle};
use crate::traits::DistanceLookup;

/// Builds the depot-rooted visiting order for one set of deliveries.
///
/// Starting at `depot`, repeatedly moves to the closest unvisited delivery.
/// Candidates are scanned in ascending id order and only a strictly shorter
/// leg replaces the current best, so ties go to the smallest id.
///
/// An empty `deliveries` set yields `[depot, depot]`.
pub fn nearest_neighbor_route<D, I>(distances: &D, depot: Location, deliveries: I) -> Vec<Location>
where
    D: DistanceLookup + ?Sized,
    I: IntoIterator<Item = DeliveryId>,
{
    let mut remaining: BTreeSet<DeliveryId> = deliveries.into_iter().collect();
    let mut route = Vec::with_capacity(remaining.len() + 2);
    route.push(depot);

    let mut current = depot;
    while let Some(next) = nearest(distances, current, &remaining) {
        remaining.remove(&next);
        route.push(next);
        current = next;
    }

    route.push(depot);
    route
}

fn nearest<D>(distances: &D, from: Location, candidates: &BTreeSet<DeliveryId>) -> Option<DeliveryId>
where
    D: DistanceLookup + ?Sized,
{
    let mut best: Option<(DeliveryId, Distance)> = None;
    for &candidate in candidates {
        let distance = distances.distance(from, candidate);
        if best.is_none_or(|(_, shortest)| distance < shortest) {
            best = Some((candidate, distance));
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Replaces every vehicle's route with its nearest-neighbor tour.
///
/// With `parallel` set, vehicles are routed on the rayon pool. The result is
/// the same either way.
pub fn build_routes<D>(
    distances: &D,
    depot: Location,
    vehicles: &mut [Vehicle],
    parallel: bool,
) -> Result<(), RouteInvariantViolation>
where
    D: DistanceLookup + Sync + ?Sized,
{
    if parallel {
        vehicles
            .par_iter_mut()
            .try_for_each(|vehicle| route_vehicle(distances, depot, vehicle))?;
    } else {
        for vehicle in vehicles.iter_mut() {
            route_vehicle(distances, depot, vehicle)?;
        }
    }

    info!(vehicles = vehicles.len(), parallel, "routes built");
    Ok(())
}

fn route_vehicle<D>(distances: &D, depot: Location, vehicle: &mut Vehicle) -> Result<(), RouteInvariantViolation>
where
    D: DistanceLookup + ?Sized,
{
    let route = nearest_neighbor_route(distances, depot, vehicle.deliveries().keys().copied());
    debug!(vehicle = vehicle.id(), route = ?route, "built route");
    vehicle.set_route(route)
}
