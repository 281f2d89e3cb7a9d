// Re-export key components
pub use crate::estimator::{EdgeEstimator, HaversineEstimator};
pub use crate::loading::{DetailGraph, PartitionGeometry, PartitionLoader, memory::MemoryLoader};
pub use crate::routing::astar::{Route, shortest_path};
pub use crate::transitions::{TransitionIndex, memory::MemoryTransitionIndex};
pub use crate::world::{Mode, WorldGraph, WorldGraphBuilder, WorldGraphConfig};

// Graph model
pub use crate::model::{
    Direction, JointEdge, JointSegment, Junction, ParentedJointEdge, RoadGeometry, RouteWeight,
    Segment, SegmentEdge, SpeedCamera, WeightKind,
};

// Identifiers
pub use crate::Error;
pub use crate::FAKE_PARTITION_ID;
pub use crate::FeatureId;
pub use crate::PartitionId;
pub use crate::PointId;
