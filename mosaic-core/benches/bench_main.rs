use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use geo::Point;
use mosaic_core::loading::memory::MemoryPartition;
use mosaic_core::prelude::*;

const PARTITIONS: PartitionId = 8;
const POINTS: u32 = 200;

/// A row of partitions along the equator, each holding one road whose last
/// segment crosses into the next partition.
fn world(mode: Mode) -> (WorldGraph, Vec<Segment>) {
    let estimator = Arc::new(HaversineEstimator::default());
    let mut loader = MemoryLoader::new();
    let mut index = MemoryTransitionIndex::new();
    let mut segments = Vec::new();

    for partition in 0..PARTITIONS {
        let offset = f64::from(partition) * f64::from(POINTS - 1) * 0.001;
        let road = RoadGeometry::new(
            (0..=POINTS).map(|i| Point::new(offset + f64::from(i) * 0.001, 0.0)),
            60.0,
        );

        let mut tile = MemoryPartition::new(partition);
        for i in 0..POINTS - 1 {
            let from = Segment::new(partition, 0, i, true);
            let to = Segment::new(partition, 0, i + 1, true);
            tile.add_edge(
                from,
                to,
                RouteWeight::new(estimator.segment_weight(&to, &road)),
            )
            .unwrap();
            segments.push(from);
        }
        tile.add_road(0, road);
        loader.insert(tile);

        if partition + 1 < PARTITIONS {
            index
                .add_crossing(
                    Segment::new(partition, 0, POINTS - 1, true),
                    Segment::new(partition + 1, 0, 0, true),
                )
                .unwrap();
        }
    }

    let graph = WorldGraph::builder()
        .loader(Arc::new(loader))
        .transitions(Arc::new(index))
        .estimator(estimator)
        .mode(mode)
        .build()
        .unwrap();

    (graph, segments)
}

fn bench_edge_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("outgoing_edges");

    for mode in [Mode::SingleRegion, Mode::Full] {
        let (graph, segments) = world(mode);
        group.bench_function(mode.to_string(), |b| {
            b.iter(|| {
                for segment in &segments {
                    black_box(graph.outgoing_edges(black_box(segment)).unwrap());
                }
            })
        });
    }

    group.finish();
}

fn bench_shortest_path(c: &mut Criterion) {
    let (graph, _) = world(Mode::Full);
    let from = Segment::new(0, 0, 0, true);
    let to = Segment::new(PARTITIONS - 1, 0, POINTS - 2, true);

    c.bench_function("shortest_path_across_partitions", |b| {
        b.iter(|| shortest_path(&graph, black_box(from), black_box(to)).unwrap())
    });
}

criterion_group!(benches, bench_edge_listing, bench_shortest_path);
criterion_main!(benches);
