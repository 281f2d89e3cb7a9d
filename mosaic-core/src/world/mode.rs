//! Traversal granularities and their edge listing behaviour

use std::fmt;
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};

use super::WorldGraph;
use crate::{Direction, Error, ParentedJointEdge, Segment, SegmentEdge};

/// Traversal granularity of a [`WorldGraph`], fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Detail edges of one partition, no border crossing
    SingleRegion,
    /// Joint edges of one partition, no transit duplication
    JointSingleRegion,
    /// Only coarse leaps between transitions
    LeapsOnly,
    /// Detail edges stitched across partitions
    #[default]
    Full,
}

impl Mode {
    /// Modes that can not work without a transition index
    pub fn requires_transitions(self) -> bool {
        matches!(self, Mode::LeapsOnly | Mode::Full)
    }

    pub(crate) fn traversal(self) -> &'static dyn Traversal {
        match self {
            Mode::SingleRegion => &SingleRegion,
            Mode::JointSingleRegion => &JointSingleRegion,
            Mode::LeapsOnly => &LeapsOnly,
            Mode::Full => &Full,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Mode::SingleRegion => "single_region",
            Mode::JointSingleRegion => "joint_single_region",
            Mode::LeapsOnly => "leaps_only",
            Mode::Full => "full",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Mode::SingleRegion,
            Mode::JointSingleRegion,
            Mode::LeapsOnly,
            Mode::Full,
        ]
        .into_iter()
        .find(|mode| mode.as_str() == s)
        .ok_or_else(|| Error::InvalidData(format!("unknown traversal mode: {s}")))
    }
}

/// Edge listing of one traversal mode.
///
/// Callers have already rejected fake segments.
pub(crate) trait Traversal: Sync {
    fn adjacent_edges(
        &self,
        graph: &WorldGraph,
        segment: &Segment,
        direction: Direction,
    ) -> Result<Vec<SegmentEdge>, Error> {
        let mut edges = graph.local_edges(segment, direction)?;
        graph.splice_twins(segment, direction, &mut edges)?;
        Ok(edges)
    }

    fn adjacent_joint_edges(
        &self,
        graph: &WorldGraph,
        parent: &Segment,
        direction: Direction,
    ) -> Result<Vec<ParentedJointEdge>, Error> {
        let mut edges = graph.local_joint_edges(parent, direction)?;
        self.expand_joints(graph, &mut edges, direction)?;
        Ok(edges)
    }

    fn expand_joints(
        &self,
        graph: &WorldGraph,
        edges: &mut Vec<ParentedJointEdge>,
        direction: Direction,
    ) -> Result<(), Error> {
        graph.duplicate_transit_joints(edges, direction)
    }
}

struct SingleRegion;

impl Traversal for SingleRegion {
    fn adjacent_edges(
        &self,
        graph: &WorldGraph,
        segment: &Segment,
        direction: Direction,
    ) -> Result<Vec<SegmentEdge>, Error> {
        graph.local_edges(segment, direction)
    }
}

struct JointSingleRegion;

impl Traversal for JointSingleRegion {
    fn expand_joints(
        &self,
        _graph: &WorldGraph,
        _edges: &mut Vec<ParentedJointEdge>,
        _direction: Direction,
    ) -> Result<(), Error> {
        Ok(())
    }
}

struct LeapsOnly;

impl Traversal for LeapsOnly {
    fn adjacent_edges(
        &self,
        graph: &WorldGraph,
        segment: &Segment,
        direction: Direction,
    ) -> Result<Vec<SegmentEdge>, Error> {
        // A leap can only be priced from its true origin.
        assert!(
            direction.is_outgoing(),
            "Ingoing edges listing is not supported in leaps_only mode (segment {segment})"
        );

        let index = graph
            .transitions()
            .ok_or(Error::MissingCollaborator("transition index"))?;
        if index.is_transition(segment, direction)? {
            return graph.twin_edges(index, segment, direction, true);
        }

        let mut leaps = index.outgoing_leaps(segment)?;
        leaps.retain(|edge| {
            let allowed = graph.leap_allowed(edge.target.partition);
            if !allowed {
                trace!(
                    "Leap {segment} -> {} skipped: partition {} is closed to leaps",
                    edge.target, edge.target.partition
                );
            }
            allowed
        });
        Ok(leaps)
    }

    fn adjacent_joint_edges(
        &self,
        _graph: &WorldGraph,
        parent: &Segment,
        _direction: Direction,
    ) -> Result<Vec<ParentedJointEdge>, Error> {
        panic!("Joint edges are not available in leaps_only mode (parent {parent})")
    }

    fn expand_joints(
        &self,
        _graph: &WorldGraph,
        _edges: &mut Vec<ParentedJointEdge>,
        _direction: Direction,
    ) -> Result<(), Error> {
        panic!("Joint edges are not available in leaps_only mode")
    }
}

struct Full;

impl Traversal for Full {}
