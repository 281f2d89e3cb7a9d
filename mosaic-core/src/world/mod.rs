//! The federated graph facade.
//!
//! [`WorldGraph`] answers adjacency and cost queries for a pathfinding
//! algorithm over segments of any partition. It keeps no partition data of its
//! own: every query resolves the owning partition through the loader again.

mod mode;
mod stitching;

pub use mode::Mode;

use std::sync::Arc;

use geo::Point;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    Direction, EdgeEstimator, Error, FeatureId, JointSegment, Junction, ParentedJointEdge,
    PartitionId, PartitionLoader, RoadGeometry, RouteWeight, Segment, SegmentEdge, SpeedCamera,
    TransitionIndex,
};

/// Construction parameters of a [`WorldGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGraphConfig {
    pub mode: Mode,
}

/// Collects the collaborators of a [`WorldGraph`]
#[derive(Default)]
pub struct WorldGraphBuilder {
    loader: Option<Arc<dyn PartitionLoader>>,
    transitions: Option<Arc<dyn TransitionIndex>>,
    estimator: Option<Arc<dyn EdgeEstimator>>,
    config: WorldGraphConfig,
}

impl WorldGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loader(mut self, loader: Arc<dyn PartitionLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn transitions(mut self, transitions: Arc<dyn TransitionIndex>) -> Self {
        self.transitions = Some(transitions);
        self
    }

    pub fn estimator(mut self, estimator: Arc<dyn EdgeEstimator>) -> Self {
        self.estimator = Some(estimator);
        self
    }

    pub fn config(mut self, config: WorldGraphConfig) -> Self {
        self.config = config;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::MissingCollaborator`] when the loader or the estimator
    /// is missing, or when the mode needs a transition index and none was
    /// given.
    pub fn build(self) -> Result<WorldGraph, Error> {
        let loader = self
            .loader
            .ok_or(Error::MissingCollaborator("partition loader"))?;
        let estimator = self
            .estimator
            .ok_or(Error::MissingCollaborator("edge estimator"))?;
        let mode = self.config.mode;
        if mode.requires_transitions() && self.transitions.is_none() {
            return Err(Error::MissingCollaborator("transition index"));
        }

        debug!(
            "World graph created in {mode} mode ({} transition index)",
            if self.transitions.is_some() {
                "with"
            } else {
                "without"
            }
        );

        Ok(WorldGraph {
            loader,
            transitions: self.transitions,
            estimator,
            mode,
        })
    }
}

/// One logical road graph over all partitions
pub struct WorldGraph {
    loader: Arc<dyn PartitionLoader>,
    transitions: Option<Arc<dyn TransitionIndex>>,
    estimator: Arc<dyn EdgeEstimator>,
    mode: Mode,
}

impl WorldGraph {
    pub fn builder() -> WorldGraphBuilder {
        WorldGraphBuilder::new()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub(crate) fn transitions(&self) -> Option<&dyn TransitionIndex> {
        self.transitions.as_deref()
    }

    pub fn outgoing_edges(&self, segment: &Segment) -> Result<Vec<SegmentEdge>, Error> {
        self.adjacent_edges(segment, Direction::Outgoing)
    }

    pub fn ingoing_edges(&self, segment: &Segment) -> Result<Vec<SegmentEdge>, Error> {
        self.adjacent_edges(segment, Direction::Ingoing)
    }

    /// Edges adjacent to `segment` at the granularity of the current mode.
    ///
    /// Fake segments have no edges here; route start and finish are wired up
    /// by the caller.
    ///
    /// # Panics
    ///
    /// Listing ingoing edges in [`Mode::LeapsOnly`] is a contract violation.
    ///
    /// # Errors
    ///
    /// Loader and transition index failures are passed through.
    pub fn adjacent_edges(
        &self,
        segment: &Segment,
        direction: Direction,
    ) -> Result<Vec<SegmentEdge>, Error> {
        if !segment.is_real() {
            return Ok(Vec::new());
        }
        self.mode
            .traversal()
            .adjacent_edges(self, segment, direction)
    }

    /// Joint edges continuing `joint` past its end
    pub fn outgoing_joint_edges(
        &self,
        joint: &JointSegment,
    ) -> Result<Vec<ParentedJointEdge>, Error> {
        self.adjacent_joint_edges(&joint.segment(false), Direction::Outgoing)
    }

    /// Joint edges leading into `joint` through its start
    pub fn ingoing_joint_edges(
        &self,
        joint: &JointSegment,
    ) -> Result<Vec<ParentedJointEdge>, Error> {
        self.adjacent_joint_edges(&joint.segment(true), Direction::Ingoing)
    }

    /// Joint edges adjacent to `parent`, duplicated into twin partitions for
    /// transit features unless the mode is [`Mode::JointSingleRegion`].
    ///
    /// # Panics
    ///
    /// Joint listing is a contract violation in [`Mode::LeapsOnly`].
    pub fn adjacent_joint_edges(
        &self,
        parent: &Segment,
        direction: Direction,
    ) -> Result<Vec<ParentedJointEdge>, Error> {
        if !parent.is_real() {
            return Ok(Vec::new());
        }
        self.mode
            .traversal()
            .adjacent_joint_edges(self, parent, direction)
    }

    /// Appends transit duplicates to a joint edge list built by the caller.
    ///
    /// # Panics
    ///
    /// Joint listing is a contract violation in [`Mode::LeapsOnly`].
    pub fn expand_transit_joints(
        &self,
        edges: &mut Vec<ParentedJointEdge>,
        direction: Direction,
    ) -> Result<(), Error> {
        self.mode.traversal().expand_joints(self, edges, direction)
    }

    /// Runs `process` on the geometry of a road feature
    pub fn with_road<T>(
        &self,
        partition: PartitionId,
        feature: FeatureId,
        process: impl FnOnce(&RoadGeometry) -> T,
    ) -> Result<T, Error> {
        let geometry = self.loader.geometry(partition)?;
        let road = geometry.road(feature)?;
        Ok(process(road))
    }

    /// Runs `process` on the road of a real segment once both of its points
    /// are known to exist
    fn with_segment_road<T>(
        &self,
        segment: &Segment,
        process: impl FnOnce(&RoadGeometry) -> T,
    ) -> Result<T, Error> {
        if !segment.is_real() {
            return Err(Error::FakeSegment(*segment));
        }
        self.with_road(segment.partition, segment.feature, |road| {
            let len = road.point_count();
            if segment.min_point() as usize >= len.saturating_sub(1) {
                return Err(Error::PointOutOfRange {
                    partition: segment.partition,
                    feature: segment.feature,
                    point: segment.max_point(),
                    len,
                });
            }
            Ok(process(road))
        })?
    }

    /// Junction at the front or the back of `segment`
    pub fn junction(&self, segment: &Segment, front: bool) -> Result<Junction, Error> {
        self.with_segment_road(segment, |road| {
            road.junctions[segment.point_id(front) as usize]
        })
    }

    pub fn point(&self, segment: &Segment, front: bool) -> Result<Point<f64>, Error> {
        Ok(self.junction(segment, front)?.point)
    }

    pub fn is_one_way(&self, partition: PartitionId, feature: FeatureId) -> Result<bool, Error> {
        self.with_road(partition, feature, |road| road.one_way)
    }

    pub fn is_pass_through_allowed(
        &self,
        partition: PartitionId,
        feature: FeatureId,
    ) -> Result<bool, Error> {
        self.with_road(partition, feature, |road| road.pass_through_allowed)
    }

    pub fn heuristic(&self, from: Point<f64>, to: Point<f64>) -> RouteWeight {
        RouteWeight::new(self.estimator.heuristic(from, to))
    }

    /// Heuristic between the front points of two segments
    pub fn segment_heuristic(&self, from: &Segment, to: &Segment) -> Result<RouteWeight, Error> {
        Ok(self.heuristic(self.point(from, true)?, self.point(to, true)?))
    }

    /// Heuristic from the front point of `from` to a free point
    pub fn segment_to_point_heuristic(
        &self,
        from: &Segment,
        to: Point<f64>,
    ) -> Result<RouteWeight, Error> {
        Ok(self.heuristic(self.point(from, true)?, to))
    }

    /// True cost of traversing `segment`
    pub fn edge_weight(&self, segment: &Segment) -> Result<RouteWeight, Error> {
        self.with_segment_road(segment, |road| {
            RouteWeight::new(self.estimator.segment_weight(segment, road))
        })
    }

    pub fn leap_weight(&self, from: Point<f64>, to: Point<f64>) -> RouteWeight {
        RouteWeight::leap(self.estimator.leap_weight(from, to))
    }

    pub fn offroad_weight(&self, from: Point<f64>, to: Point<f64>) -> RouteWeight {
        RouteWeight::new(self.estimator.offroad_weight(from, to))
    }

    /// Traversal time of `segment` in seconds, for arrival estimates
    pub fn segment_eta(&self, segment: &Segment) -> Result<f64, Error> {
        self.with_segment_road(segment, |road| self.estimator.segment_eta(segment, road))
    }

    pub fn leap_allowed(&self, partition: PartitionId) -> bool {
        self.estimator.leap_allowed(partition)
    }

    /// Entry or exit transitions of a partition. Without a transition index
    /// no partition has any.
    pub fn transitions_of(
        &self,
        partition: PartitionId,
        is_entry: bool,
    ) -> Result<Vec<Segment>, Error> {
        match self.transitions() {
            Some(index) => index.transitions(partition, is_entry),
            None => Ok(Vec::new()),
        }
    }

    pub fn speed_cameras(&self, segment: &Segment) -> Result<Vec<SpeedCamera>, Error> {
        if !segment.is_real() {
            return Ok(Vec::new());
        }
        self.loader.speed_cameras(segment)
    }

    pub fn clear_cached_graphs(&self) {
        debug!("Clearing cached partition graphs");
        self.loader.clear();
    }
}
