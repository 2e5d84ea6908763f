//! Read-only summaries for display.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assignment::{total_capacity, total_demand};
use crate::model::{DeliveryId, DeliveryRequest, Demand, Distance, Location, Vehicle, VehicleId};
use crate::traits::DistanceLookup;

/// Copy of a vehicle's state at the time the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub id: VehicleId,
    pub capacity: Demand,
    pub load: Demand,
    pub route: Vec<Location>,
    pub deliveries: BTreeMap<DeliveryId, Demand>,
}

impl VehicleSnapshot {
    pub fn of(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id(),
            capacity: vehicle.capacity(),
            load: vehicle.load(),
            route: vehicle.route().to_vec(),
            deliveries: vehicle.deliveries().clone(),
        }
    }

    /// Sum of leg distances along the route. Saturates instead of overflowing.
    pub fn route_distance<D>(&self, distances: &D) -> Distance
    where
        D: DistanceLookup + ?Sized,
    {
        self.route
            .windows(2)
            .map(|leg| distances.distance(leg[0], leg[1]))
            .fold(0, Distance::saturating_add)
    }
}

impl fmt::Display for VehicleSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Vehicle {} (Capacity: {}, Load: {}):",
            self.id, self.capacity, self.load
        )?;
        writeln!(f, "Route: {}", format_route(&self.route))?;
        write!(f, "Delivery Points:")?;
        for (id, demand) in &self.deliveries {
            write!(f, "\n  Point {id}: Demand {demand}")?;
        }
        Ok(())
    }
}

/// Aggregate and per-vehicle view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerStats {
    pub delivery_count: usize,
    pub total_demand: Demand,
    pub vehicle_count: usize,
    pub total_capacity: Demand,
    pub vehicles: Vec<VehicleSnapshot>,
}

impl PlannerStats {
    pub fn collect(requests: &[DeliveryRequest], vehicles: &[Vehicle]) -> Self {
        Self {
            delivery_count: requests.len(),
            total_demand: total_demand(requests),
            vehicle_count: vehicles.len(),
            total_capacity: total_capacity(vehicles),
            vehicles: vehicles.iter().map(VehicleSnapshot::of).collect(),
        }
    }

    /// Sum of current vehicle loads.
    pub fn total_load(&self) -> Demand {
        self.vehicles
            .iter()
            .map(|v| v.load)
            .fold(0, Demand::saturating_add)
    }

    pub fn total_route_distance<D>(&self, distances: &D) -> Distance
    where
        D: DistanceLookup + ?Sized,
    {
        self.vehicles
            .iter()
            .map(|v| v.route_distance(distances))
            .fold(0, Distance::saturating_add)
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&VehicleSnapshot> {
        self.vehicles.iter().find(|v| v.id == id)
    }
}

/// Renders a route as `0 -> 2 -> 1 -> 0`, or `Empty Route`.
pub fn format_route(route: &[Location]) -> String {
    if route.is_empty() {
        return "Empty Route".to_string();
    }
    route
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{LocationGraph, UNREACHABLE};
    use crate::model::TimeWindow;

    fn loaded_vehicle() -> Vehicle {
        let mut vehicle = Vehicle::new(0, 20);
        vehicle.add_delivery(1, 10);
        vehicle.add_delivery(2, 5);
        vehicle.set_route(vec![0, 2, 1, 0]).unwrap();
        vehicle
    }

    #[test]
    fn test_collect_sums() {
        let requests = vec![
            DeliveryRequest::new(1, 10, TimeWindow::new(0, 10)),
            DeliveryRequest::new(2, 5, TimeWindow::new(0, 10)),
        ];
        let vehicles = vec![loaded_vehicle(), Vehicle::new(1, 7)];

        let stats = PlannerStats::collect(&requests, &vehicles);

        assert_eq!(stats.delivery_count, 2);
        assert_eq!(stats.total_demand, 15);
        assert_eq!(stats.vehicle_count, 2);
        assert_eq!(stats.total_capacity, 27);
        assert_eq!(stats.total_load(), 15);
        assert_eq!(stats.vehicle(1).map(|v| v.load), Some(0));
    }

    #[test]
    fn test_format_route() {
        assert_eq!(format_route(&[0, 2, 1, 0]), "0 -> 2 -> 1 -> 0");
        assert_eq!(format_route(&[]), "Empty Route");
    }

    #[test]
    fn test_display() {
        let snapshot = VehicleSnapshot::of(&loaded_vehicle());
        assert_eq!(
            snapshot.to_string(),
            "Vehicle 0 (Capacity: 20, Load: 15):\n\
             Route: 0 -> 2 -> 1 -> 0\n\
             Delivery Points:\n  Point 1: Demand 10\n  Point 2: Demand 5"
        );
    }

    #[test]
    fn test_route_distance() {
        let mut graph = LocationGraph::new(3);
        graph.add_edge(0, 1, 5).unwrap();
        graph.add_edge(0, 2, 3).unwrap();
        graph.add_edge(1, 2, 4).unwrap();

        let snapshot = VehicleSnapshot::of(&loaded_vehicle());
        assert_eq!(snapshot.route_distance(&graph), 3 + 4 + 5);
    }

    #[test]
    fn test_route_distance_with_missing_edges_stays_finite() {
        let graph = LocationGraph::new(3);
        let snapshot = VehicleSnapshot::of(&loaded_vehicle());
        assert_eq!(snapshot.route_distance(&graph), UNREACHABLE * 3);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut vehicle = loaded_vehicle();
        let snapshot = VehicleSnapshot::of(&vehicle);
        vehicle.reset_assignments();
        assert_eq!(snapshot.load, 15);
        assert_eq!(snapshot.route, vec![0, 2, 1, 0]);
    }
}
