//! Error types returned by the planner.

use thiserror::Error;

use crate::model::{Demand, DeliveryId, Location, VehicleId};

/// Errors from building a [`crate::graph::LocationGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("location {location} is outside the graph (0..{num_locations})")]
    LocationOutOfRange {
        location: Location,
        num_locations: usize,
    },
    #[error("distance matrix has {rows} rows, expected {expected}")]
    MatrixShape { expected: usize, rows: usize },
    #[error("distance matrix row {row} has {found} columns, expected {expected}")]
    MatrixRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A required input or prior step is missing. Raised before any algorithm runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("system not initialized")]
    NotInitialized,
    #[error("no delivery requests added")]
    NoDeliveryRequests,
    #[error("no vehicles added")]
    NoVehicles,
    #[error("deliveries have not been assigned yet")]
    NotAssigned,
    #[error("depot {depot} is outside the graph (0..{num_locations})")]
    DepotOutOfRange { depot: Location, num_locations: usize },
    #[error("delivery {delivery_id} is outside the graph (0..{num_locations})")]
    DeliveryOutOfRange {
        delivery_id: DeliveryId,
        num_locations: usize,
    },
    #[error("delivery {delivery_id} was already added")]
    DuplicateDelivery { delivery_id: DeliveryId },
    #[error("delivery {delivery_id} has a time window ending ({end}) before it starts ({start})")]
    InvalidTimeWindow {
        delivery_id: DeliveryId,
        start: i64,
        end: i64,
    },
}

/// A computed route lost a stop it was required to carry.
///
/// This indicates a defect in route construction, not bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteInvariantViolation {
    #[error("route for vehicle {vehicle} is missing assigned delivery {delivery}")]
    MissingDelivery {
        vehicle: VehicleId,
        delivery: DeliveryId,
    },
}

/// Top-level planner error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    #[error(
        "total vehicle capacity {total_capacity} is insufficient for total demand {total_demand}; \
         add vehicles or reduce demand"
    )]
    CapacityInfeasible {
        total_demand: Demand,
        total_capacity: Demand,
    },
    #[error(
        "unable to assign delivery {delivery_id} (demand: {demand}): \
         no vehicle has sufficient remaining capacity"
    )]
    AssignmentInfeasible {
        delivery_id: DeliveryId,
        demand: Demand,
    },
    #[error(transparent)]
    RouteInvariant(#[from] RouteInvariantViolation),
    #[error(transparent)]
    Graph(#[from] GraphError),
}
