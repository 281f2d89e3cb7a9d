//! Contract for the cross-partition transition index.
//!
//! A transition is a segment on the border of its partition through which a
//! route leaves (exit) or enters (entry) the partition. The same physical
//! crossing is stored once per partition; those copies are twins.

pub mod memory;

use crate::{Direction, Error, FeatureId, PartitionId, Segment, SegmentEdge};

pub trait TransitionIndex: Send + Sync {
    /// Whether `segment` is an exit (outgoing) or entry (ingoing) transition
    /// of its partition.
    fn is_transition(&self, segment: &Segment, direction: Direction) -> Result<bool, Error>;

    /// Copies of the transition `segment` in neighbouring partitions
    fn twins(&self, segment: &Segment, direction: Direction) -> Result<Vec<Segment>, Error>;

    /// Whether the feature continues logically across a partition border
    fn is_feature_transit(
        &self,
        partition: PartitionId,
        feature: FeatureId,
    ) -> Result<bool, Error>;

    /// Segments on the twin features of the transit feature `segment` lies on
    fn twin_features(
        &self,
        segment: &Segment,
        direction: Direction,
    ) -> Result<Vec<Segment>, Error>;

    /// All entry (`is_entry == true`) or exit transitions of a partition
    fn transitions(&self, partition: PartitionId, is_entry: bool) -> Result<Vec<Segment>, Error>;

    /// Coarse leap edges going out of a transition segment
    fn outgoing_leaps(&self, segment: &Segment) -> Result<Vec<SegmentEdge>, Error>;
}
