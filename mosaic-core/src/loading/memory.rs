//! In-memory partition loader.
//!
//! All partitions are built up front. Each detail graph is a `petgraph`
//! digraph whose nodes are segments and whose edge weights are the costs of
//! moving onto the target segment.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use hashbrown::HashMap;
use log::debug;
use petgraph::Direction as EdgeDirection;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::{DetailGraph, PartitionGeometry, PartitionLoader};
use crate::{
    Direction, Error, FeatureId, JointEdge, ParentedJointEdge, PartitionId, RoadGeometry,
    RouteWeight, Segment, SegmentEdge, SpeedCamera,
};

/// Graph and geometry of one partition
#[derive(Debug, Clone)]
pub struct MemoryPartition {
    id: PartitionId,
    roads: HashMap<FeatureId, RoadGeometry>,
    graph: DiGraph<Segment, RouteWeight>,
    nodes: HashMap<Segment, NodeIndex>,
    joints: HashMap<(Segment, Direction), Vec<ParentedJointEdge>>,
}

impl MemoryPartition {
    pub fn new(id: PartitionId) -> Self {
        Self {
            id,
            roads: HashMap::new(),
            graph: DiGraph::new(),
            nodes: HashMap::new(),
            joints: HashMap::new(),
        }
    }

    pub fn id(&self) -> PartitionId {
        self.id
    }

    pub fn add_road(&mut self, feature: FeatureId, road: RoadGeometry) -> &mut Self {
        self.roads.insert(feature, road);
        self
    }

    /// Adds a directed edge `from -> to` costing `weight`.
    ///
    /// # Errors
    ///
    /// Both segments must belong to this partition.
    pub fn add_edge(
        &mut self,
        from: Segment,
        to: Segment,
        weight: RouteWeight,
    ) -> Result<&mut Self, Error> {
        self.check_owned(&from)?;
        self.check_owned(&to)?;

        let from = self.node(from);
        let to = self.node(to);
        self.graph.add_edge(from, to, weight);
        Ok(self)
    }

    /// Registers a joint edge reachable from `parent` in `direction`.
    ///
    /// # Errors
    ///
    /// The parent and the joint target must belong to this partition.
    pub fn add_joint_edge(
        &mut self,
        parent: Segment,
        direction: Direction,
        edge: JointEdge,
        parent_weight: RouteWeight,
    ) -> Result<&mut Self, Error> {
        self.check_owned(&parent)?;
        self.check_owned(&edge.target.segment(true))?;

        self.joints
            .entry((parent, direction))
            .or_default()
            .push(ParentedJointEdge::new(edge, parent_weight));
        Ok(self)
    }

    pub fn segment_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn node(&mut self, segment: Segment) -> NodeIndex {
        *self
            .nodes
            .entry(segment)
            .or_insert_with(|| self.graph.add_node(segment))
    }

    fn check_owned(&self, segment: &Segment) -> Result<(), Error> {
        if segment.partition == self.id {
            Ok(())
        } else {
            Err(Error::InvalidData(format!(
                "segment {segment} does not belong to partition {}",
                self.id
            )))
        }
    }
}

impl DetailGraph for MemoryPartition {
    fn edges(&self, segment: &Segment, direction: Direction) -> Result<Vec<SegmentEdge>, Error> {
        let Some(&node) = self.nodes.get(segment) else {
            return Ok(Vec::new());
        };

        let edges = match direction {
            Direction::Outgoing => self
                .graph
                .edges_directed(node, EdgeDirection::Outgoing)
                .map(|edge| SegmentEdge::new(self.graph[edge.target()], *edge.weight()))
                .collect(),
            Direction::Ingoing => self
                .graph
                .edges_directed(node, EdgeDirection::Incoming)
                .map(|edge| SegmentEdge::new(self.graph[edge.source()], *edge.weight()))
                .collect(),
        };

        Ok(edges)
    }

    fn joint_edges(
        &self,
        parent: &Segment,
        direction: Direction,
    ) -> Result<Vec<ParentedJointEdge>, Error> {
        Ok(self
            .joints
            .get(&(*parent, direction))
            .cloned()
            .unwrap_or_default())
    }
}

impl PartitionGeometry for MemoryPartition {
    fn road(&self, feature: FeatureId) -> Result<&RoadGeometry, Error> {
        self.roads.get(&feature).ok_or(Error::MissingFeature {
            partition: self.id,
            feature,
        })
    }
}

/// Loader serving prebuilt [`MemoryPartition`]s
#[derive(Debug, Default)]
pub struct MemoryLoader {
    partitions: HashMap<PartitionId, Arc<MemoryPartition>>,
    speed_cameras: HashMap<Segment, Vec<SpeedCamera>>,
    loads: AtomicUsize,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, partition: MemoryPartition) -> &mut Self {
        self.partitions.insert(partition.id, Arc::new(partition));
        self
    }

    pub fn add_speed_camera(&mut self, segment: Segment, camera: SpeedCamera) -> &mut Self {
        self.speed_cameras.entry(segment).or_default().push(camera);
        self
    }

    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Number of partition handles handed out so far
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    fn partition(&self, partition: PartitionId) -> Result<Arc<MemoryPartition>, Error> {
        let found = self
            .partitions
            .get(&partition)
            .cloned()
            .ok_or(Error::PartitionUnavailable(partition))?;
        self.loads.fetch_add(1, Ordering::Relaxed);
        Ok(found)
    }
}

impl PartitionLoader for MemoryLoader {
    fn detail_graph(&self, partition: PartitionId) -> Result<Arc<dyn DetailGraph>, Error> {
        let graph: Arc<dyn DetailGraph> = self.partition(partition)?;
        Ok(graph)
    }

    fn geometry(&self, partition: PartitionId) -> Result<Arc<dyn PartitionGeometry>, Error> {
        let geometry: Arc<dyn PartitionGeometry> = self.partition(partition)?;
        Ok(geometry)
    }

    fn speed_cameras(&self, segment: &Segment) -> Result<Vec<SpeedCamera>, Error> {
        Ok(self
            .speed_cameras
            .get(segment)
            .cloned()
            .unwrap_or_default())
    }

    fn clear(&self) {
        debug!(
            "Memory loader keeps {} partitions resident, nothing to clear",
            self.partitions.len()
        );
    }
}
