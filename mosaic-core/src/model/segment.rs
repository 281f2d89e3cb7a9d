//! Directed references into the road network

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, FAKE_PARTITION_ID, FeatureId, PartitionId, PointId};

/// Direction of an adjacency query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Outgoing,
    Ingoing,
}

impl Direction {
    pub fn is_outgoing(self) -> bool {
        self == Direction::Outgoing
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Outgoing => Direction::Ingoing,
            Direction::Ingoing => Direction::Outgoing,
        }
    }
}

/// A directed edge fragment between two consecutive points of one feature.
///
/// `index` is the index of the fragment along the feature: it spans points
/// `index` and `index + 1`. A forward segment runs from the lower point to the
/// higher one, a backward segment the other way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Segment {
    pub partition: PartitionId,
    pub feature: FeatureId,
    pub index: PointId,
    pub forward: bool,
}

impl Segment {
    pub const fn new(
        partition: PartitionId,
        feature: FeatureId,
        index: PointId,
        forward: bool,
    ) -> Self {
        Self {
            partition,
            feature,
            index,
            forward,
        }
    }

    /// Synthetic segment standing for a free-form route start or finish.
    /// It is not bound to any road geometry.
    pub const fn fake(feature: FeatureId, index: PointId) -> Self {
        Self::new(FAKE_PARTITION_ID, feature, index, true)
    }

    pub fn is_real(&self) -> bool {
        self.partition != FAKE_PARTITION_ID
    }

    /// Point at the front (`true`) or the back (`false`) of the segment
    /// in the direction of travel.
    pub fn point_id(&self, front: bool) -> PointId {
        if self.forward == front {
            self.max_point()
        } else {
            self.index
        }
    }

    pub fn min_point(&self) -> PointId {
        self.index
    }

    /// Saturates at `PointId::MAX`, which no road geometry can hold
    pub fn max_point(&self) -> PointId {
        self.index.saturating_add(1)
    }

    /// Same physical edge traversed the other way
    pub fn reversed(&self) -> Self {
        Self {
            forward: !self.forward,
            ..*self
        }
    }

    pub fn is_inverse(&self, other: &Segment) -> bool {
        self.partition == other.partition
            && self.feature == other.feature
            && self.index == other.index
            && self.forward != other.forward
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}{}",
            self.partition,
            self.feature,
            self.index,
            if self.forward { "+" } else { "-" }
        )
    }
}

/// A run of segments along one feature between two joint nodes
/// (nodes where the road actually branches).
///
/// `start` and `end` are segment indices along the feature, stored in the
/// direction of travel: `start` is always the segment the joint is entered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JointSegment {
    partition: PartitionId,
    feature: FeatureId,
    start: PointId,
    end: PointId,
    forward: bool,
}

impl JointSegment {
    /// Builds a joint running from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Both segments must be real and lie on the same feature of the same
    /// partition with the same direction.
    pub fn new(from: Segment, to: Segment) -> Result<Self, Error> {
        if !from.is_real() || !to.is_real() {
            return Err(Error::InvalidJoint(format!(
                "fake segments can not form a joint: {from} -> {to}"
            )));
        }
        if from.partition != to.partition || from.feature != to.feature {
            return Err(Error::InvalidJoint(format!(
                "segments lie on different features: {from} -> {to}"
            )));
        }
        if from.forward != to.forward {
            return Err(Error::InvalidJoint(format!(
                "segments have different directions: {from} -> {to}"
            )));
        }

        Ok(Self {
            partition: from.partition,
            feature: from.feature,
            start: from.index,
            end: to.index,
            forward: from.forward,
        })
    }

    /// Builds a joint from the first and last segment met while walking a
    /// chain of segments in `direction`.
    ///
    /// Walking backward visits the chain from its end, so the endpoints are
    /// swapped to give the same joint a forward walk would produce.
    pub fn from_walk(first: Segment, last: Segment, direction: Direction) -> Result<Self, Error> {
        match direction {
            Direction::Outgoing => Self::new(first, last),
            Direction::Ingoing => Self::new(last, first),
        }
    }

    /// Copy of this joint with the same point offsets and direction, placed on
    /// another (partition, feature) pair.
    pub fn rooted_at(&self, partition: PartitionId, feature: FeatureId) -> Self {
        Self {
            partition,
            feature,
            ..*self
        }
    }

    pub fn partition(&self) -> PartitionId {
        self.partition
    }

    pub fn feature(&self) -> FeatureId {
        self.feature
    }

    pub fn start_index(&self) -> PointId {
        self.start
    }

    pub fn end_index(&self) -> PointId {
        self.end
    }

    pub fn is_forward(&self) -> bool {
        self.forward
    }

    /// The first (`start == true`) or the last segment of the joint
    pub fn segment(&self, start: bool) -> Segment {
        Segment::new(
            self.partition,
            self.feature,
            if start { self.start } else { self.end },
            self.forward,
        )
    }
}

impl fmt::Display for JointSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:[{}..{}]{}",
            self.partition,
            self.feature,
            self.start,
            self.end,
            if self.forward { "+" } else { "-" }
        )
    }
}
