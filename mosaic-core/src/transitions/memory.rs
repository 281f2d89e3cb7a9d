//! In-memory transition index

use std::sync::atomic::{AtomicUsize, Ordering};

use hashbrown::HashMap;

use super::TransitionIndex;
use crate::{Direction, Error, FeatureId, PartitionId, RouteWeight, Segment, SegmentEdge};

type FeatureKey = (PartitionId, FeatureId);

#[derive(Debug, Default)]
pub struct MemoryTransitionIndex {
    /// Exit transition -> entry twins in neighbouring partitions
    exits: HashMap<Segment, Vec<Segment>>,
    /// Entry transition -> exit twins in neighbouring partitions
    entries: HashMap<Segment, Vec<Segment>>,
    transit_twins: HashMap<FeatureKey, Vec<FeatureKey>>,
    leaps: HashMap<Segment, Vec<SegmentEdge>>,
    partition_entries: HashMap<PartitionId, Vec<Segment>>,
    partition_exits: HashMap<PartitionId, Vec<Segment>>,
    twin_lookups: AtomicUsize,
}

impl MemoryTransitionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a border crossing: leaving through `exit` arrives on `entry`.
    ///
    /// # Errors
    ///
    /// Both segments must be real and lie in different partitions.
    pub fn add_crossing(&mut self, exit: Segment, entry: Segment) -> Result<&mut Self, Error> {
        if !exit.is_real() || !entry.is_real() {
            return Err(Error::TransitionIndex(format!(
                "fake segments can not cross a border: {exit} -> {entry}"
            )));
        }
        if exit.partition == entry.partition {
            return Err(Error::TransitionIndex(format!(
                "crossing {exit} -> {entry} stays inside partition {}",
                exit.partition
            )));
        }

        push_unique(self.exits.entry(exit).or_default(), entry);
        push_unique(self.entries.entry(entry).or_default(), exit);
        push_unique(self.partition_exits.entry(exit.partition).or_default(), exit);
        push_unique(
            self.partition_entries.entry(entry.partition).or_default(),
            entry,
        );
        Ok(self)
    }

    /// Registers a two-way crossing between `a` and `b` so that `a -> b` and
    /// `b.reversed() -> a.reversed()` are both possible.
    pub fn add_two_way_crossing(&mut self, a: Segment, b: Segment) -> Result<&mut Self, Error> {
        self.add_crossing(a, b)?;
        self.add_crossing(b.reversed(), a.reversed())
    }

    /// Marks two features as the same transit feature split by a border
    pub fn add_transit_twins(&mut self, a: FeatureKey, b: FeatureKey) -> &mut Self {
        push_unique(self.transit_twins.entry(a).or_default(), b);
        push_unique(self.transit_twins.entry(b).or_default(), a);
        self
    }

    pub fn add_leap(&mut self, from: Segment, to: Segment, weight: RouteWeight) -> &mut Self {
        self.leaps
            .entry(from)
            .or_default()
            .push(SegmentEdge::new(to, weight));
        self
    }

    /// Number of twin and twin feature lookups served so far
    pub fn twin_lookups(&self) -> usize {
        self.twin_lookups.load(Ordering::Relaxed)
    }

    fn side(&self, direction: Direction) -> &HashMap<Segment, Vec<Segment>> {
        match direction {
            Direction::Outgoing => &self.exits,
            Direction::Ingoing => &self.entries,
        }
    }
}

impl TransitionIndex for MemoryTransitionIndex {
    fn is_transition(&self, segment: &Segment, direction: Direction) -> Result<bool, Error> {
        Ok(self.side(direction).contains_key(segment))
    }

    fn twins(&self, segment: &Segment, direction: Direction) -> Result<Vec<Segment>, Error> {
        self.twin_lookups.fetch_add(1, Ordering::Relaxed);
        Ok(self
            .side(direction)
            .get(segment)
            .cloned()
            .unwrap_or_default())
    }

    fn is_feature_transit(
        &self,
        partition: PartitionId,
        feature: FeatureId,
    ) -> Result<bool, Error> {
        Ok(self.transit_twins.contains_key(&(partition, feature)))
    }

    // Transit twins are symmetric, so the direction does not matter here.
    fn twin_features(
        &self,
        segment: &Segment,
        _direction: Direction,
    ) -> Result<Vec<Segment>, Error> {
        self.twin_lookups.fetch_add(1, Ordering::Relaxed);
        let twins = self
            .transit_twins
            .get(&(segment.partition, segment.feature))
            .map(|twins| {
                twins
                    .iter()
                    .map(|&(partition, feature)| {
                        Segment::new(partition, feature, segment.index, segment.forward)
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(twins)
    }

    fn transitions(&self, partition: PartitionId, is_entry: bool) -> Result<Vec<Segment>, Error> {
        let side = if is_entry {
            &self.partition_entries
        } else {
            &self.partition_exits
        };
        Ok(side.get(&partition).cloned().unwrap_or_default())
    }

    fn outgoing_leaps(&self, segment: &Segment) -> Result<Vec<SegmentEdge>, Error> {
        Ok(self.leaps.get(segment).cloned().unwrap_or_default())
    }
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}
