//! Delivery requests and vehicles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RouteInvariantViolation;

/// Index into the location graph.
pub type Location = usize;

/// Travel cost between two locations.
pub type Distance = u64;

/// Quantity a delivery consumes from a vehicle's capacity.
pub type Demand = u64;

/// Caller-assigned delivery identifier. Also the delivery's location.
pub type DeliveryId = Location;

/// Sequential vehicle identifier, starting at 0.
pub type VehicleId = usize;

/// Requested delivery window. Stored for callers, never enforced by routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
}

impl TimeWindow {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }
}

/// A single delivery to be served by some vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    id: DeliveryId,
    demand: Demand,
    time_window: TimeWindow,
}

impl DeliveryRequest {
    pub fn new(id: DeliveryId, demand: Demand, time_window: TimeWindow) -> Self {
        Self {
            id,
            demand,
            time_window,
        }
    }

    pub fn id(&self) -> DeliveryId {
        self.id
    }

    pub fn demand(&self) -> Demand {
        self.demand
    }

    pub fn time_window(&self) -> TimeWindow {
        self.time_window
    }
}

/// A capacity-constrained vehicle with its assigned deliveries and route.
///
/// `load` always equals the sum of the demands in `deliveries`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    id: VehicleId,
    capacity: Demand,
    load: Demand,
    deliveries: BTreeMap<DeliveryId, Demand>,
    route: Vec<Location>,
}

impl Vehicle {
    pub fn new(id: VehicleId, capacity: Demand) -> Self {
        Self {
            id,
            capacity,
            load: 0,
            deliveries: BTreeMap::new(),
            route: Vec::new(),
        }
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn capacity(&self) -> Demand {
        self.capacity
    }

    pub fn load(&self) -> Demand {
        self.load
    }

    /// Remaining capacity (slack).
    pub fn remaining_capacity(&self) -> Demand {
        self.capacity.saturating_sub(self.load)
    }

    pub fn deliveries(&self) -> &BTreeMap<DeliveryId, Demand> {
        &self.deliveries
    }

    pub fn route(&self) -> &[Location] {
        &self.route
    }

    /// Whether `demand` more units would still fit, counting a re-recorded
    /// delivery only once.
    pub fn can_take(&self, delivery_id: DeliveryId, demand: Demand) -> bool {
        let released = self.deliveries.get(&delivery_id).copied().unwrap_or(0);
        (self.load - released)
            .checked_add(demand)
            .is_some_and(|load| load <= self.capacity)
    }

    /// Records `demand` for `delivery_id`. Returns `false` and leaves the
    /// vehicle untouched when the demand would exceed capacity.
    ///
    /// Recording the same id twice overwrites the earlier demand.
    pub(crate) fn add_delivery(&mut self, delivery_id: DeliveryId, demand: Demand) -> bool {
        if !self.can_take(delivery_id, demand) {
            return false;
        }
        if !self.route.contains(&delivery_id) {
            self.route.push(delivery_id);
        }
        if let Some(previous) = self.deliveries.insert(delivery_id, demand) {
            self.load -= previous;
        }
        self.load += demand;
        true
    }

    pub(crate) fn reset_route(&mut self) {
        self.route.clear();
    }

    /// Drops all assignments, load and route.
    pub(crate) fn reset_assignments(&mut self) {
        self.deliveries.clear();
        self.load = 0;
        self.route.clear();
    }

    /// Replaces the route. Every assigned delivery must appear in `route`.
    pub(crate) fn set_route(&mut self, route: Vec<Location>) -> Result<(), RouteInvariantViolation> {
        if let Some(&missing) = self.deliveries.keys().find(|&&id| !route.contains(&id)) {
            return Err(RouteInvariantViolation::MissingDelivery {
                vehicle: self.id,
                delivery: missing,
            });
        }
        self.route = route;
        Ok(())
    }
}
