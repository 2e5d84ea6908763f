//! The planning session: owns the graph, the requests and the fleet.
//!
//! A session is populated, then driven through capacity validation,
//! assignment and route building in that order. Callers never get mutable
//! access to the entities inside; they read them back through snapshots.

use tracing::debug;

use crate::assignment::{self, AssignmentOutcome};
use crate::error::{PlannerError, PreconditionError};
use crate::graph::LocationGraph;
use crate::model::{DeliveryId, DeliveryRequest, Demand, Distance, Location, TimeWindow, Vehicle, VehicleId};
use crate::options::{AssignmentMode, PlannerOptions};
use crate::routing;
use crate::stats::{PlannerStats, VehicleSnapshot};

#[derive(Debug, Clone)]
pub struct Session {
    graph: LocationGraph,
    depot: Location,
    requests: Vec<DeliveryRequest>,
    vehicles: Vec<Vehicle>,
    options: PlannerOptions,
    assigned: bool,
}

impl Session {
    /// Creates an empty session over `num_locations` locations.
    pub fn new(num_locations: usize, depot: Location) -> Result<Self, PlannerError> {
        Self::with_options(num_locations, depot, PlannerOptions::default())
    }

    pub fn with_options(
        num_locations: usize,
        depot: Location,
        options: PlannerOptions,
    ) -> Result<Self, PlannerError> {
        Self::with_graph(LocationGraph::new(num_locations), depot, options)
    }

    /// Creates a session over a prebuilt graph.
    pub fn with_graph(graph: LocationGraph, depot: Location, options: PlannerOptions) -> Result<Self, PlannerError> {
        if !graph.contains(depot) {
            return Err(PreconditionError::DepotOutOfRange {
                depot,
                num_locations: graph.num_locations(),
            }
            .into());
        }
        Ok(Self {
            graph,
            depot,
            requests: Vec::new(),
            vehicles: Vec::new(),
            options,
            assigned: false,
        })
    }

    pub fn depot(&self) -> Location {
        self.depot
    }

    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    pub fn delivery_requests(&self) -> &[DeliveryRequest] {
        &self.requests
    }

    pub fn delivery_request(&self, id: DeliveryId) -> Option<&DeliveryRequest> {
        self.requests.iter().find(|r| r.id() == id)
    }

    pub fn add_edge(&mut self, u: Location, v: Location, weight: Distance) -> Result<(), PlannerError> {
        self.graph.add_edge(u, v, weight)?;
        Ok(())
    }

    /// Registers a delivery at location `id`.
    pub fn add_delivery_request(
        &mut self,
        id: DeliveryId,
        demand: Demand,
        time_window_start: i64,
        time_window_end: i64,
    ) -> Result<(), PlannerError> {
        if !self.graph.contains(id) {
            return Err(PreconditionError::DeliveryOutOfRange {
                delivery_id: id,
                num_locations: self.graph.num_locations(),
            }
            .into());
        }
        if self.delivery_request(id).is_some() {
            return Err(PreconditionError::DuplicateDelivery { delivery_id: id }.into());
        }
        let time_window = TimeWindow::new(time_window_start, time_window_end);
        if !time_window.is_valid() {
            return Err(PreconditionError::InvalidTimeWindow {
                delivery_id: id,
                start: time_window_start,
                end: time_window_end,
            }
            .into());
        }

        self.requests.push(DeliveryRequest::new(id, demand, time_window));
        // Routes built now would leave this request out.
        self.assigned = false;
        debug!(delivery = id, demand, "added delivery request");
        Ok(())
    }

    /// Adds a vehicle and returns its id. Ids run 0, 1, 2, ...
    pub fn add_vehicle(&mut self, capacity: Demand) -> VehicleId {
        let id = self.vehicles.len();
        self.vehicles.push(Vehicle::new(id, capacity));
        debug!(vehicle = id, capacity, "added vehicle");
        id
    }

    pub fn total_demand(&self) -> Demand {
        assignment::total_demand(&self.requests)
    }

    pub fn total_capacity(&self) -> Demand {
        assignment::total_capacity(&self.vehicles)
    }

    pub fn is_capacity_feasible(&self) -> bool {
        assignment::is_feasible(&self.requests, &self.vehicles)
    }

    /// Assigns deliveries according to [`PlannerOptions::assignment_mode`].
    pub fn assign_deliveries(&mut self) -> Result<AssignmentOutcome, PlannerError> {
        match self.options.assignment_mode {
            AssignmentMode::Accumulate => self.reassign_accumulate(),
            AssignmentMode::Fresh => self.reassign_fresh(),
        }
    }

    /// Clears every vehicle's load, delivery mapping and route.
    pub fn reset_assignments(&mut self) {
        for vehicle in &mut self.vehicles {
            vehicle.reset_assignments();
        }
        self.assigned = false;
    }

    /// Resets all vehicles, then assigns.
    ///
    /// Preconditions are checked before anything is reset.
    pub fn reassign_fresh(&mut self) -> Result<AssignmentOutcome, PlannerError> {
        self.check_populated()?;
        assignment::check_capacity(&self.requests, &self.vehicles)?;
        self.reset_assignments();
        self.reassign_accumulate()
    }

    /// Assigns on top of whatever earlier passes left on the vehicles.
    ///
    /// A failed pass is not rolled back: deliveries placed before the failure
    /// stay assigned and are visible through [`Session::stats`].
    pub fn reassign_accumulate(&mut self) -> Result<AssignmentOutcome, PlannerError> {
        self.assigned = false;
        let outcome = assignment::assign_deliveries(&self.requests, &mut self.vehicles)?;
        self.assigned = true;
        Ok(outcome)
    }

    /// Replaces every vehicle's route with its nearest-neighbor tour.
    pub fn build_routes(&mut self) -> Result<(), PlannerError> {
        if !self.assigned {
            return Err(PreconditionError::NotAssigned.into());
        }
        routing::build_routes(&self.graph, self.depot, &mut self.vehicles, self.options.parallel_routes)?;
        Ok(())
    }

    /// Full pass: validate, assign, build routes, summarise.
    pub fn optimize(&mut self) -> Result<PlannerStats, PlannerError> {
        self.assign_deliveries()?;
        self.build_routes()?;
        Ok(self.stats())
    }

    pub fn stats(&self) -> PlannerStats {
        PlannerStats::collect(&self.requests, &self.vehicles)
    }

    pub fn vehicles(&self) -> Vec<VehicleSnapshot> {
        self.vehicles.iter().map(VehicleSnapshot::of).collect()
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<VehicleSnapshot> {
        self.vehicles.get(id).map(VehicleSnapshot::of)
    }

    fn check_populated(&self) -> Result<(), PreconditionError> {
        if self.requests.is_empty() {
            return Err(PreconditionError::NoDeliveryRequests);
        }
        if self.vehicles.is_empty() {
            return Err(PreconditionError::NoVehicles);
        }
        Ok(())
    }
}
