//! Federated road graph over independently loaded partitions.
//!
//! The road network is split into region tiles (partitions). A pathfinding
//! algorithm sees one logical graph through [`WorldGraph`], which resolves the
//! owning partition of every segment, stitches boundary transitions to their
//! twins in neighbouring partitions and delegates pricing to a shared
//! [`EdgeEstimator`].

pub mod error;
pub mod estimator;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod transitions;
pub mod world;

pub use error::Error;
pub use estimator::{EdgeEstimator, HaversineEstimator};
pub use loading::{DetailGraph, PartitionGeometry, PartitionLoader};
pub use model::{
    Direction, JointEdge, JointSegment, Junction, ParentedJointEdge, RoadGeometry, RouteWeight,
    Segment, SegmentEdge, SpeedCamera, WeightKind,
};
pub use transitions::TransitionIndex;
pub use world::{Mode, WorldGraph, WorldGraphBuilder, WorldGraphConfig};

/// Identifier of a region tile
pub type PartitionId = u16;
/// Identifier of a road feature inside a partition
pub type FeatureId = u32;
/// Index of a point (or of the segment starting at it) along a feature
pub type PointId = u32;

/// Partition id reserved for synthetic route start/end segments
pub const FAKE_PARTITION_ID: PartitionId = PartitionId::MAX;
