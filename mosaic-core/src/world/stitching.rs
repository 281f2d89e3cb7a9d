//! Cross-partition stitching shared by the traversal modes

use log::{trace, warn};

use super::WorldGraph;
use crate::{
    Direction, Error, JointEdge, ParentedJointEdge, Segment, SegmentEdge, TransitionIndex,
};

impl WorldGraph {
    /// Edges of the home partition's detail graph
    pub(crate) fn local_edges(
        &self,
        segment: &Segment,
        direction: Direction,
    ) -> Result<Vec<SegmentEdge>, Error> {
        self.loader
            .detail_graph(segment.partition)?
            .edges(segment, direction)
    }

    pub(crate) fn local_joint_edges(
        &self,
        parent: &Segment,
        direction: Direction,
    ) -> Result<Vec<ParentedJointEdge>, Error> {
        self.loader
            .detail_graph(parent.partition)?
            .joint_edges(parent, direction)
    }

    /// Appends edges to the twins of `segment` when it is a transition
    pub(crate) fn splice_twins(
        &self,
        segment: &Segment,
        direction: Direction,
        edges: &mut Vec<SegmentEdge>,
    ) -> Result<(), Error> {
        let Some(index) = self.transitions() else {
            return Ok(());
        };
        if index.is_transition(segment, direction)? {
            edges.extend(self.twin_edges(index, segment, direction, false)?);
        }
        Ok(())
    }

    /// Edges from a transition to its twins.
    ///
    /// Twins are the same physical crossing, so the edge costs the heuristic
    /// distance between the two copies, which is zero unless the partitions
    /// were built from different data. With `gate_leaps` set, twins in
    /// partitions closed to leaps are skipped.
    pub(crate) fn twin_edges(
        &self,
        index: &dyn TransitionIndex,
        segment: &Segment,
        direction: Direction,
        gate_leaps: bool,
    ) -> Result<Vec<SegmentEdge>, Error> {
        let from = self.point(segment, true)?;
        let mut edges = Vec::new();

        for twin in index.twins(segment, direction)? {
            if !twin.is_real() {
                warn!("Transition {segment} has a fake twin {twin}, skipping it");
                continue;
            }
            if gate_leaps && !self.estimator.leap_allowed(twin.partition) {
                trace!(
                    "Twin {twin} of {segment} skipped: partition {} is closed to leaps",
                    twin.partition
                );
                continue;
            }

            let to = self.point(&twin, true)?;
            let weight = self.heuristic(from, to);
            trace!("Stitched {segment} to twin {twin} with weight {weight}");
            edges.push(SegmentEdge::new(twin, weight));
        }

        Ok(edges)
    }

    /// Duplicates joint edges ending on transit features into the twin
    /// features across the border.
    ///
    /// A duplicate keeps the joint's point offsets, direction and weight, and
    /// inherits the parent weight of the record it was derived from.
    pub(crate) fn duplicate_transit_joints(
        &self,
        edges: &mut Vec<ParentedJointEdge>,
        direction: Direction,
    ) -> Result<(), Error> {
        let Some(index) = self.transitions() else {
            return Ok(());
        };

        let mut duplicates = Vec::new();
        for record in edges.iter() {
            let target = record.target();
            if !index.is_feature_transit(target.partition(), target.feature())? {
                continue;
            }

            for twin in index.twin_features(&target.segment(true), direction)? {
                let joint = target.rooted_at(twin.partition, twin.feature);
                trace!("Duplicated transit joint {target} as {joint}");
                duplicates.push(ParentedJointEdge::new(
                    JointEdge::new(joint, record.edge.weight),
                    record.parent_weight,
                ));
            }
        }

        edges.extend(duplicates);
        Ok(())
    }
}
