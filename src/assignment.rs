//! Capacity validation and greedy delivery assignment.
//!
//! Deliveries are placed largest-demand-first, each onto the vehicle with the
//! most remaining capacity that can still hold it. This is a heuristic: a
//! packing may exist that the greedy pass misses.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{PlannerError, PreconditionError};
use crate::model::{DeliveryId, DeliveryRequest, Demand, Vehicle, VehicleId};

/// Sum of all request demands, saturating at `Demand::MAX`.
pub fn total_demand(requests: &[DeliveryRequest]) -> Demand {
    requests
        .iter()
        .map(DeliveryRequest::demand)
        .fold(0, Demand::saturating_add)
}

/// Sum of all vehicle capacities, saturating at `Demand::MAX`.
///
/// A saturated capacity still covers any demand total, so the feasibility
/// comparison stays correct.
pub fn total_capacity(vehicles: &[Vehicle]) -> Demand {
    vehicles
        .iter()
        .map(Vehicle::capacity)
        .fold(0, Demand::saturating_add)
}

/// Aggregate feasibility: total capacity covers total demand.
///
/// Necessary but not sufficient for a valid per-vehicle packing.
pub fn is_feasible(requests: &[DeliveryRequest], vehicles: &[Vehicle]) -> bool {
    total_capacity(vehicles) >= total_demand(requests)
}

/// Like [`is_feasible`], but reports both totals on failure.
pub fn check_capacity(requests: &[DeliveryRequest], vehicles: &[Vehicle]) -> Result<(), PlannerError> {
    let total_demand = total_demand(requests);
    let total_capacity = total_capacity(vehicles);
    if total_capacity < total_demand {
        warn!(total_demand, total_capacity, "insufficient fleet capacity");
        return Err(PlannerError::CapacityInfeasible {
            total_demand,
            total_capacity,
        });
    }
    Ok(())
}

/// One delivery placed on one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub delivery_id: DeliveryId,
    pub vehicle_id: VehicleId,
    pub demand: Demand,
}

/// Assignments made by a single pass, in the order they were made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentOutcome {
    pub assignments: Vec<Assignment>,
}

impl AssignmentOutcome {
    pub fn vehicle_for(&self, delivery_id: DeliveryId) -> Option<VehicleId> {
        self.assignments
            .iter()
            .find(|a| a.delivery_id == delivery_id)
            .map(|a| a.vehicle_id)
    }
}

/// Assigns every request to a vehicle.
///
/// Routes are cleared first; loads and delivery mappings are not, so calling
/// this twice without resetting the vehicles adds onto the earlier pass.
///
/// On [`PlannerError::AssignmentInfeasible`] the deliveries placed earlier in
/// the same pass stay on their vehicles.
pub fn assign_deliveries(
    requests: &[DeliveryRequest],
    vehicles: &mut [Vehicle],
) -> Result<AssignmentOutcome, PlannerError> {
    if requests.is_empty() {
        return Err(PreconditionError::NoDeliveryRequests.into());
    }
    if vehicles.is_empty() {
        return Err(PreconditionError::NoVehicles.into());
    }
    check_capacity(requests, vehicles)?;

    for vehicle in vehicles.iter_mut() {
        vehicle.reset_route();
    }

    let mut sorted: Vec<&DeliveryRequest> = requests.iter().collect();
    sorted.sort_by(|a, b| b.demand().cmp(&a.demand()));

    let mut outcome = AssignmentOutcome {
        assignments: Vec::with_capacity(sorted.len()),
    };

    for request in sorted {
        let (id, demand) = (request.id(), request.demand());
        let placed = match best_vehicle(vehicles, demand) {
            Some(index) => {
                let vehicle = &mut vehicles[index];
                vehicle.add_delivery(id, demand).then_some(vehicle.id())
            }
            None => None,
        };

        let Some(vehicle_id) = placed else {
            warn!(delivery = id, demand, "no vehicle has sufficient remaining capacity");
            return Err(PlannerError::AssignmentInfeasible {
                delivery_id: id,
                demand,
            });
        };

        debug!(delivery = id, demand, vehicle = vehicle_id, "assigned delivery");
        outcome.assignments.push(Assignment {
            delivery_id: id,
            vehicle_id,
            demand,
        });
    }

    info!(
        deliveries = outcome.assignments.len(),
        vehicles = vehicles.len(),
        "assignment pass complete"
    );
    Ok(outcome)
}

/// Index of the vehicle with the most slack that still fits `demand`.
/// Equal slack keeps the earlier vehicle.
fn best_vehicle(vehicles: &[Vehicle], demand: Demand) -> Option<usize> {
    let mut best: Option<(usize, Demand)> = None;
    for (index, vehicle) in vehicles.iter().enumerate() {
        let slack = vehicle.remaining_capacity();
        if slack < demand {
            continue;
        }
        if best.is_none_or(|(_, best_slack)| slack > best_slack) {
            best = Some((index, slack));
        }
    }
    best.map(|(index, _)| index)
}
