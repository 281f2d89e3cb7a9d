mod common;

use std::sync::Arc;

use mosaic_core::loading::memory::{MemoryLoader, MemoryPartition};
use mosaic_core::prelude::*;

use common::{A, B, init_logging, lon};

const PARENT: Segment = Segment::new(A, 10, 0, true);

fn joint(partition: PartitionId, feature: FeatureId, start: PointId, end: PointId) -> JointSegment {
    JointSegment::new(
        Segment::new(partition, feature, start, true),
        Segment::new(partition, feature, end, true),
    )
    .unwrap()
}

/// Partition A with a transit feature 11 continuing as feature 21 of B and a
/// plain feature 12. `PARENT` leads to joints on both.
fn graph(mode: Mode) -> (WorldGraph, Arc<MemoryTransitionIndex>) {
    init_logging();

    let mut a = MemoryPartition::new(A);
    a.add_road(10, RoadGeometry::new([lon(0.0), lon(0.001)], 50.0));
    a.add_road(
        11,
        RoadGeometry::new([lon(0.001), lon(0.002), lon(0.003), lon(0.004)], 50.0),
    );
    a.add_road(12, RoadGeometry::new([lon(0.001), lon(0.0015), lon(0.002)], 30.0));
    a.add_joint_edge(
        PARENT,
        Direction::Outgoing,
        JointEdge::new(joint(A, 11, 0, 2), RouteWeight::new(12.0)),
        RouteWeight::new(4.0),
    )
    .unwrap();
    a.add_joint_edge(
        PARENT,
        Direction::Outgoing,
        JointEdge::new(joint(A, 12, 0, 1), RouteWeight::new(7.0)),
        RouteWeight::new(6.0),
    )
    .unwrap();
    a.add_joint_edge(
        joint(A, 11, 0, 2).segment(true),
        Direction::Ingoing,
        JointEdge::new(joint(A, 10, 0, 0), RouteWeight::new(3.0)),
        RouteWeight::new(1.0),
    )
    .unwrap();

    let mut b = MemoryPartition::new(B);
    b.add_road(
        21,
        RoadGeometry::new([lon(0.001), lon(0.002), lon(0.003), lon(0.004)], 50.0),
    );

    let mut loader = MemoryLoader::new();
    loader.insert(a).insert(b);

    let mut index = MemoryTransitionIndex::new();
    index.add_transit_twins((A, 11), (B, 21));
    let index = Arc::new(index);

    let graph = WorldGraph::builder()
        .loader(Arc::new(loader))
        .transitions(index.clone())
        .estimator(Arc::new(HaversineEstimator::default()))
        .mode(mode)
        .build()
        .unwrap();

    (graph, index)
}

#[test]
fn test_transit_joints_are_duplicated_with_their_weights() {
    let (graph, _) = graph(Mode::Full);

    let edges = graph
        .adjacent_joint_edges(&PARENT, Direction::Outgoing)
        .unwrap();
    assert_eq!(edges.len(), 3);

    let duplicate = edges[2];
    assert_eq!(*duplicate.target(), joint(B, 21, 0, 2));
    assert_eq!(duplicate.edge.weight, edges[0].edge.weight);
    assert_eq!(duplicate.parent_weight, edges[0].parent_weight);
    assert_eq!(duplicate.parent_weight, RouteWeight::new(4.0));
}

#[test]
fn test_duplicates_keep_offsets_and_direction() {
    let (graph, _) = graph(Mode::Full);
    let mut edges = vec![ParentedJointEdge::new(
        JointEdge::new(
            JointSegment::new(
                Segment::new(A, 11, 2, false),
                Segment::new(A, 11, 1, false),
            )
            .unwrap(),
            RouteWeight::new(9.0),
        ),
        RouteWeight::new(2.0),
    )];

    graph
        .expand_transit_joints(&mut edges, Direction::Outgoing)
        .unwrap();

    assert_eq!(edges.len(), 2);
    let twin = edges[1].target();
    assert_eq!(twin.partition(), B);
    assert_eq!(twin.feature(), 21);
    assert_eq!(twin.start_index(), 2);
    assert_eq!(twin.end_index(), 1);
    assert!(!twin.is_forward());
    assert_eq!(edges[1].edge.weight, RouteWeight::new(9.0));
}

#[test]
fn test_joint_single_region_skips_duplication() {
    let (graph, index) = graph(Mode::JointSingleRegion);

    let edges = graph
        .adjacent_joint_edges(&PARENT, Direction::Outgoing)
        .unwrap();
    assert_eq!(edges.len(), 2);
    assert!(edges.iter().all(|edge| edge.target().partition() == A));
    assert_eq!(index.twin_lookups(), 0);
}

#[test]
fn test_joint_listing_through_joint_ends() {
    let (graph, _) = graph(Mode::Full);
    let incoming = joint(A, 10, 0, 0);

    let outgoing = graph.outgoing_joint_edges(&incoming).unwrap();
    assert_eq!(outgoing.len(), 3);

    let ingoing = graph.ingoing_joint_edges(&joint(A, 11, 0, 2)).unwrap();
    assert_eq!(ingoing.len(), 1);
    assert_eq!(*ingoing[0].target(), incoming);
}

#[test]
fn test_fake_parent_has_no_joint_edges() {
    let (graph, _) = graph(Mode::Full);
    assert!(
        graph
            .adjacent_joint_edges(&Segment::fake(0, 0), Direction::Outgoing)
            .unwrap()
            .is_empty()
    );
}

#[test]
#[should_panic(expected = "Joint edges are not available in leaps_only mode")]
fn test_leaps_only_has_no_joints() {
    let (graph, _) = graph(Mode::LeapsOnly);
    let _ = graph.adjacent_joint_edges(&PARENT, Direction::Outgoing);
}
