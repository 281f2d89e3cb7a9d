use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use log::trace;

use crate::{Error, RouteWeight, Segment, WorldGraph};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    estimate: RouteWeight,
    weight: RouteWeight,
    segment: Segment,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lowest estimate first
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| self.segment.cmp(&other.segment))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cheapest route between two segments
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Segments from start to finish, both included
    pub segments: Vec<Segment>,
    /// Sum of the weights of all edges taken
    pub weight: RouteWeight,
}

/// A* search over outgoing edges of `graph` guided by its heuristic.
/// Returns `None` when `to` can not be reached from `from`.
///
/// # Errors
///
/// Fails as soon as the graph fails to list edges or locate a segment.
pub fn shortest_path(
    graph: &WorldGraph,
    from: Segment,
    to: Segment,
) -> Result<Option<Route>, Error> {
    let mut distances: HashMap<Segment, RouteWeight> = HashMap::new();
    let mut predecessors: HashMap<Segment, Segment> = HashMap::new();
    let mut heap = BinaryHeap::new();

    heap.push(State {
        estimate: graph.segment_heuristic(&from, &to)?,
        weight: RouteWeight::ZERO,
        segment: from,
    });
    distances.insert(from, RouteWeight::ZERO);

    while let Some(State {
        weight, segment, ..
    }) = heap.pop()
    {
        if segment == to {
            return Ok(Some(Route {
                segments: unwind(&predecessors, from, to),
                weight,
            }));
        }

        // Stale heap entry
        if let Some(&best) = distances.get(&segment) {
            if weight > best {
                continue;
            }
        }

        for edge in graph.outgoing_edges(&segment)? {
            let next = edge.target;
            let next_weight = weight + edge.weight;

            let improved = match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_weight);
                    true
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_weight < *entry.get() {
                        *entry.get_mut() = next_weight;
                        true
                    } else {
                        false
                    }
                }
            };

            if improved {
                predecessors.insert(next, segment);
                heap.push(State {
                    estimate: next_weight + graph.segment_heuristic(&next, &to)?,
                    weight: next_weight,
                    segment: next,
                });
            }
        }
    }

    trace!("No route from {from} to {to}");
    Ok(None)
}

fn unwind(predecessors: &HashMap<Segment, Segment>, from: Segment, to: Segment) -> Vec<Segment> {
    let mut path = vec![to];
    let mut current = to;
    while current != from {
        match predecessors.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
