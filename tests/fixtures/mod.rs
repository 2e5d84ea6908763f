//! Test fixtures for delivery-planner.
//!
//! Provides a builder for sessions with sensible defaults.

#![allow(dead_code)]

use delivery_planner::{Demand, Distance, Location, PlannerOptions, Session};

/// Builder for test sessions.
#[derive(Clone, Debug)]
pub struct TestSession {
    num_locations: usize,
    depot: Location,
    edges: Vec<(Location, Location, Distance)>,
    deliveries: Vec<(Location, Demand)>,
    capacities: Vec<Demand>,
    options: PlannerOptions,
}

impl TestSession {
    pub fn new(num_locations: usize) -> Self {
        Self {
            num_locations,
            depot: 0,
            edges: Vec::new(),
            deliveries: Vec::new(),
            capacities: Vec::new(),
            options: PlannerOptions::default(),
        }
    }

    /// Graph, depot and edges from the four-location worked example.
    pub fn four_locations() -> Self {
        Self::new(4)
            .edge(0, 1, 5)
            .edge(0, 2, 3)
            .edge(0, 3, 8)
            .edge(1, 2, 4)
            .edge(2, 3, 6)
            .edge(1, 3, 9)
    }

    pub fn depot(mut self, depot: Location) -> Self {
        self.depot = depot;
        self
    }

    pub fn edge(mut self, u: Location, v: Location, weight: Distance) -> Self {
        self.edges.push((u, v, weight));
        self
    }

    pub fn delivery(mut self, id: Location, demand: Demand) -> Self {
        self.deliveries.push((id, demand));
        self
    }

    pub fn vehicle(mut self, capacity: Demand) -> Self {
        self.capacities.push(capacity);
        self
    }

    pub fn options(mut self, options: PlannerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Session {
        let mut session = Session::with_options(self.num_locations, self.depot, self.options)
            .expect("depot should be inside the graph");
        for (u, v, weight) in self.edges {
            session.add_edge(u, v, weight).expect("edge should be inside the graph");
        }
        for (id, demand) in self.deliveries {
            session
                .add_delivery_request(id, demand, 0, 24 * 3600)
                .expect("delivery should be valid");
        }
        for capacity in self.capacities {
            session.add_vehicle(capacity);
        }
        session
    }
}
