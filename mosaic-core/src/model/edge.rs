//! Adjacency records handed to the pathfinding algorithm

use serde::{Deserialize, Serialize};

use super::{JointSegment, RouteWeight, Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentEdge {
    pub target: Segment,
    pub weight: RouteWeight,
}

impl SegmentEdge {
    pub fn new(target: Segment, weight: RouteWeight) -> Self {
        Self { target, weight }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointEdge {
    pub target: JointSegment,
    pub weight: RouteWeight,
}

impl JointEdge {
    pub fn new(target: JointSegment, weight: RouteWeight) -> Self {
        Self { target, weight }
    }
}

/// Joint edge together with the weight of the parent edge it was reached
/// from. Keeping both in one record keeps them aligned when lists grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentedJointEdge {
    pub edge: JointEdge,
    pub parent_weight: RouteWeight,
}

impl ParentedJointEdge {
    pub fn new(edge: JointEdge, parent_weight: RouteWeight) -> Self {
        Self {
            edge,
            parent_weight,
        }
    }

    pub fn target(&self) -> &JointSegment {
        &self.edge.target
    }
}
