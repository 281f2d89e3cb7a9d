//! Graph model shared by the facade and its collaborators

pub mod edge;
pub mod geometry;
pub mod segment;
pub mod weight;

pub use edge::{JointEdge, ParentedJointEdge, SegmentEdge};
pub use geometry::{Junction, RoadGeometry, SpeedCamera};
pub use segment::{Direction, JointSegment, Segment};
pub use weight::{RouteWeight, WeightKind};
