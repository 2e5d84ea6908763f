//! Front door for hosts that create the session lazily.
//!
//! Every operation fails with [`PreconditionError::NotInitialized`] until
//! [`Planner::initialize`] has been called.

use crate::error::{PlannerError, PreconditionError};
use crate::model::{DeliveryId, DeliveryRequest, Demand, Distance, Location, VehicleId};
use crate::options::PlannerOptions;
use crate::session::Session;
use crate::stats::PlannerStats;

#[derive(Debug, Clone, Default)]
pub struct Planner {
    options: PlannerOptions,
    session: Option<Session>,
}

impl Planner {
    pub fn new(options: PlannerOptions) -> Self {
        Self {
            options,
            session: None,
        }
    }

    /// Starts a new session, discarding any previous one.
    pub fn initialize(&mut self, num_locations: usize, depot: Location) -> Result<(), PlannerError> {
        self.session = Some(Session::with_options(num_locations, depot, self.options.clone())?);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Result<&Session, PreconditionError> {
        self.session.as_ref().ok_or(PreconditionError::NotInitialized)
    }

    fn session_mut(&mut self) -> Result<&mut Session, PreconditionError> {
        self.session.as_mut().ok_or(PreconditionError::NotInitialized)
    }

    pub fn add_edge(&mut self, u: Location, v: Location, weight: Distance) -> Result<(), PlannerError> {
        self.session_mut()?.add_edge(u, v, weight)
    }

    pub fn add_delivery_request(
        &mut self,
        id: DeliveryId,
        demand: Demand,
        time_window_start: i64,
        time_window_end: i64,
    ) -> Result<(), PlannerError> {
        self.session_mut()?
            .add_delivery_request(id, demand, time_window_start, time_window_end)
    }

    pub fn add_vehicle(&mut self, capacity: Demand) -> Result<VehicleId, PlannerError> {
        Ok(self.session_mut()?.add_vehicle(capacity))
    }

    pub fn delivery_request(&self, id: DeliveryId) -> Option<&DeliveryRequest> {
        self.session.as_ref()?.delivery_request(id)
    }

    /// Validates capacity, assigns deliveries and builds routes.
    pub fn optimize(&mut self) -> Result<PlannerStats, PlannerError> {
        self.session_mut()?.optimize()
    }

    pub fn stats(&self) -> Result<PlannerStats, PlannerError> {
        Ok(self.session()?.stats())
    }
}
