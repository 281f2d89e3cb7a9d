#![allow(dead_code)]

use std::sync::Arc;

use geo::Point;
use mosaic_core::loading::memory::{MemoryLoader, MemoryPartition};
use mosaic_core::prelude::*;

pub const B: PartitionId = 2;
pub const A: PartitionId = 1;

/// Start of the route in partition B
pub const S_B: Segment = Segment::new(B, 20, 0, true);
/// Border crossing as stored in partition B
pub const X_B: Segment = Segment::new(B, 20, 1, true);
/// Border crossing as stored in partition A
pub const X_A: Segment = Segment::new(A, 10, 0, true);
/// Continuation of the crossing inside partition A
pub const Y_A: Segment = Segment::new(A, 10, 1, true);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn lon(x: f64) -> Point<f64> {
    Point::new(x, 0.0)
}

/// Two partitions sharing one border crossing on an east-west road.
///
/// B holds points 0.000..0.002, A holds 0.001..0.003; the segment between
/// 0.001 and 0.002 exists in both.
pub struct TwoPartitionWorld {
    pub loader: Arc<MemoryLoader>,
    pub index: Arc<MemoryTransitionIndex>,
    pub estimator: Arc<HaversineEstimator>,
}

impl TwoPartitionWorld {
    pub fn new() -> Self {
        Self::with_estimator(HaversineEstimator::new(200.0))
    }

    pub fn with_estimator(estimator: HaversineEstimator) -> Self {
        init_logging();

        let mut b = MemoryPartition::new(B);
        b.add_road(20, RoadGeometry::new([lon(0.0), lon(0.001), lon(0.002)], 50.0));
        b.add_edge(S_B, X_B, RouteWeight::new(10.0)).unwrap();
        b.add_edge(X_B, X_B.reversed(), RouteWeight::new(30.0))
            .unwrap();

        let mut a = MemoryPartition::new(A);
        a.add_road(10, RoadGeometry::new([lon(0.001), lon(0.002), lon(0.003)], 50.0));
        a.add_edge(X_A, Y_A, RouteWeight::new(5.0)).unwrap();

        let mut loader = MemoryLoader::new();
        loader.insert(a).insert(b);

        let mut index = MemoryTransitionIndex::new();
        index.add_crossing(X_B, X_A).unwrap();

        Self {
            loader: Arc::new(loader),
            index: Arc::new(index),
            estimator: Arc::new(estimator),
        }
    }

    pub fn graph(&self, mode: Mode) -> WorldGraph {
        WorldGraph::builder()
            .loader(self.loader.clone())
            .transitions(self.index.clone())
            .estimator(self.estimator.clone())
            .mode(mode)
            .build()
            .unwrap()
    }
}

/// Adds edges between consecutive segments of `feature` in both directions
/// allowed by `road`, priced with `estimator`.
pub fn chain_road(
    partition: &mut MemoryPartition,
    feature: FeatureId,
    road: RoadGeometry,
    estimator: &dyn EdgeEstimator,
) {
    let id = partition.id();
    let segments = road.point_count().saturating_sub(1) as PointId;

    for index in 0..segments.saturating_sub(1) {
        let from = Segment::new(id, feature, index, true);
        let to = Segment::new(id, feature, index + 1, true);
        let weight = RouteWeight::new(estimator.segment_weight(&to, &road));
        partition.add_edge(from, to, weight).unwrap();

        if !road.one_way {
            let weight = RouteWeight::new(estimator.segment_weight(&from.reversed(), &road));
            partition
                .add_edge(to.reversed(), from.reversed(), weight)
                .unwrap();
        }
    }

    partition.add_road(feature, road);
}
