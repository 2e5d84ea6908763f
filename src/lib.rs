//! delivery-planner core
//!
//! Greedy capacity-constrained assignment of deliveries to vehicles, followed
//! by nearest-neighbor route construction over a depot-rooted distance graph.

pub mod traits;
pub mod model;
pub mod error;
pub mod options;
pub mod graph;
pub mod assignment;
pub mod routing;
pub mod stats;
pub mod session;
pub mod planner;

pub use error::{GraphError, PlannerError, PreconditionError, RouteInvariantViolation};
pub use graph::{LocationGraph, UNREACHABLE};
pub use model::{DeliveryId, DeliveryRequest, Demand, Distance, Location, TimeWindow, VehicleId};
pub use options::{AssignmentMode, PlannerOptions};
pub use planner::Planner;
pub use session::Session;
pub use stats::{PlannerStats, VehicleSnapshot};
