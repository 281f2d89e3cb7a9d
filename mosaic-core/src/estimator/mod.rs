//! Weight and heuristic model contract

mod haversine;

pub use haversine::HaversineEstimator;

use geo::Point;

use crate::{PartitionId, RoadGeometry, Segment};

/// Prices traversals. All methods are pure.
///
/// Implementations are shared between graph instances behind an `Arc`.
pub trait EdgeEstimator: Send + Sync {
    /// Cost of traversing `segment` of `road`
    fn segment_weight(&self, segment: &Segment, road: &RoadGeometry) -> f64;

    /// Traversal time of `segment` in seconds
    fn segment_eta(&self, segment: &Segment, road: &RoadGeometry) -> f64;

    /// Lower bound of the cost between two points. Must be admissible and
    /// consistent with [`EdgeEstimator::segment_weight`].
    fn heuristic(&self, from: Point<f64>, to: Point<f64>) -> f64;

    /// Coarse cost of a long-distance leap between two points
    fn leap_weight(&self, from: Point<f64>, to: Point<f64>) -> f64;

    /// Cost of a direct connection off the road network
    fn offroad_weight(&self, from: Point<f64>, to: Point<f64>) -> f64;

    /// Whether a leap may enter `partition`
    fn leap_allowed(&self, partition: PartitionId) -> bool;
}
