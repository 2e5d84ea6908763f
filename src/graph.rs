//! Weighted location graph backed by a dense distance matrix.
//!
//! Pairs that were never connected hold [`UNREACHABLE`], a large finite
//! sentinel. Callers treat it as "very far"; summing a few of them never
//! overflows a [`Distance`].

use crate::error::GraphError;
use crate::model::{Distance, Location};
use crate::traits::{DistanceLookup, DistanceMatrixProvider};

/// Cost reported for pairs with no direct edge.
pub const UNREACHABLE: Distance = Distance::MAX / 4;

/// Symmetric N x N distance matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGraph {
    num_locations: usize,
    distances: Vec<Distance>,
}

impl LocationGraph {
    /// Creates a graph of `num_locations` locations with no edges.
    pub fn new(num_locations: usize) -> Self {
        Self {
            num_locations,
            distances: vec![UNREACHABLE; num_locations * num_locations],
        }
    }

    /// Builds a graph from an explicit square matrix.
    ///
    /// The matrix is taken as-is; asymmetric input keeps its asymmetry.
    pub fn from_matrix(rows: &[Vec<Distance>]) -> Result<Self, GraphError> {
        let n = rows.len();
        let mut distances = Vec::with_capacity(n * n);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(GraphError::MatrixRow {
                    row,
                    expected: n,
                    found: values.len(),
                });
            }
            distances.extend_from_slice(values);
        }
        Ok(Self {
            num_locations: n,
            distances,
        })
    }

    /// Builds a graph from whatever `provider` returns for `num_locations`.
    pub fn from_provider<P>(provider: &P, num_locations: usize) -> Result<Self, GraphError>
    where
        P: DistanceMatrixProvider + ?Sized,
    {
        let rows = provider.matrix_for(num_locations);
        if rows.len() != num_locations {
            return Err(GraphError::MatrixShape {
                expected: num_locations,
                rows: rows.len(),
            });
        }
        Self::from_matrix(&rows)
    }

    pub fn num_locations(&self) -> usize {
        self.num_locations
    }

    pub fn contains(&self, location: Location) -> bool {
        location < self.num_locations
    }

    /// Records `weight` for both `u -> v` and `v -> u`.
    pub fn add_edge(&mut self, u: Location, v: Location, weight: Distance) -> Result<(), GraphError> {
        for location in [u, v] {
            if !self.contains(location) {
                return Err(GraphError::LocationOutOfRange {
                    location,
                    num_locations: self.num_locations,
                });
            }
        }
        let n = self.num_locations;
        self.distances[u * n + v] = weight;
        self.distances[v * n + u] = weight;
        Ok(())
    }

    /// Stored weight between `u` and `v`.
    ///
    /// Returns 0 for `u == v` and [`UNREACHABLE`] for unset or out-of-range
    /// pairs.
    pub fn distance(&self, u: Location, v: Location) -> Distance {
        if u == v {
            return 0;
        }
        if !self.contains(u) || !self.contains(v) {
            return UNREACHABLE;
        }
        self.distances[u * self.num_locations + v]
    }

    pub fn is_reachable(&self, u: Location, v: Location) -> bool {
        self.distance(u, v) < UNREACHABLE
    }
}

impl DistanceLookup for LocationGraph {
    fn distance(&self, from: Location, to: Location) -> Distance {
        LocationGraph::distance(self, from, to)
    }
}
