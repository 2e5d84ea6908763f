//! Core seams for the delivery planner.
//!
//! These are intentionally minimal. The route builder only ever asks for a
//! single leg cost, and bulk loaders only ever hand over a square matrix.

use crate::model::{Distance, Location};

/// Answers "how far is it from `from` to `to`".
///
/// Implementations must never fail: a pair with no known cost is reported as
/// [`crate::graph::UNREACHABLE`] rather than an error.
pub trait DistanceLookup {
    fn distance(&self, from: Location, to: Location) -> Distance;
}

/// Provides a full distance matrix for `num_locations` locations.
///
/// The matrix is indexed by location: `matrix[i][j]` is the cost from `i` to
/// `j`. Cells the provider cannot fill should hold
/// [`crate::graph::UNREACHABLE`].
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, num_locations: usize) -> Vec<Vec<Distance>>;
}

impl<T: DistanceLookup + ?Sized> DistanceLookup for &T {
    fn distance(&self, from: Location, to: Location) -> Distance {
        (**self).distance(from, to)
    }
}
