//! Contracts for lazily loaded partition data.
//!
//! A [`PartitionLoader`] owns partition lifetime: it decides what is cached and
//! when a partition may be evicted. Handles it returns are meant to be used for
//! the duration of one call and dropped afterwards.

pub mod memory;

use std::sync::Arc;

use crate::{
    Direction, Error, FeatureId, ParentedJointEdge, PartitionId, RoadGeometry, Segment,
    SegmentEdge, SpeedCamera,
};

/// Detailed directed graph of one partition
pub trait DetailGraph: Send + Sync {
    /// Local edges adjacent to `segment` in `direction`.
    ///
    /// For [`Direction::Outgoing`] the targets are the successors of `segment`,
    /// for [`Direction::Ingoing`] they are its predecessors.
    fn edges(&self, segment: &Segment, direction: Direction) -> Result<Vec<SegmentEdge>, Error>;

    /// Joint edges reachable from `parent` in `direction`, each paired with
    /// the weight of the parent edge it continues.
    fn joint_edges(
        &self,
        parent: &Segment,
        direction: Direction,
    ) -> Result<Vec<ParentedJointEdge>, Error>;
}

/// Road feature geometry of one partition
pub trait PartitionGeometry: Send + Sync {
    fn road(&self, feature: FeatureId) -> Result<&RoadGeometry, Error>;
}

/// Supplies partition graphs and geometry on request.
///
/// Implementations may block on first access to a partition.
pub trait PartitionLoader: Send + Sync {
    /// # Errors
    ///
    /// Fails when the partition data is missing or can not be decoded.
    fn detail_graph(&self, partition: PartitionId) -> Result<Arc<dyn DetailGraph>, Error>;

    /// # Errors
    ///
    /// Fails when the partition data is missing or can not be decoded.
    fn geometry(&self, partition: PartitionId) -> Result<Arc<dyn PartitionGeometry>, Error>;

    fn speed_cameras(&self, _segment: &Segment) -> Result<Vec<SpeedCamera>, Error> {
        Ok(Vec::new())
    }

    /// Drops cached partitions
    fn clear(&self) {}
}
