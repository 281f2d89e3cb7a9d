use thiserror::Error;

use crate::{FeatureId, PartitionId, PointId, Segment};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Partition {0} is not available")]
    PartitionUnavailable(PartitionId),
    #[error("Feature {feature} not found in partition {partition}")]
    MissingFeature {
        partition: PartitionId,
        feature: FeatureId,
    },
    #[error("Point {point} is out of range for feature {feature} in partition {partition} ({len} points)")]
    PointOutOfRange {
        partition: PartitionId,
        feature: FeatureId,
        point: PointId,
        len: usize,
    },
    #[error("Segment {0} is not bound to road geometry")]
    FakeSegment(Segment),
    #[error("Transition index error: {0}")]
    TransitionIndex(String),
    #[error("Invalid joint segment: {0}")]
    InvalidJoint(String),
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(&'static str),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
