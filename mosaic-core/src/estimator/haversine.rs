use geo::{Distance, Haversine, Point};
use hashbrown::HashSet;

use super::EdgeEstimator;
use crate::{PartitionId, RoadGeometry, Segment};

const KMH_TO_MPS: f64 = 1000.0 / 3600.0;

/// Speed based weight model working on great-circle distances.
///
/// Weights are travel times in seconds. The heuristic divides the
/// distance by `max_speed_kmh`, so it stays admissible as long as no road is
/// faster than that.
#[derive(Debug, Clone)]
pub struct HaversineEstimator {
    max_speed_kmh: f64,
    leap_speed_kmh: f64,
    offroad_speed_kmh: f64,
    leaps_forbidden: HashSet<PartitionId>,
}

impl Default for HaversineEstimator {
    fn default() -> Self {
        Self::new(130.0)
    }
}

impl HaversineEstimator {
    pub fn new(max_speed_kmh: f64) -> Self {
        Self {
            max_speed_kmh,
            leap_speed_kmh: max_speed_kmh * 0.7,
            offroad_speed_kmh: 5.0,
            leaps_forbidden: HashSet::new(),
        }
    }

    pub fn with_leap_speed(mut self, speed_kmh: f64) -> Self {
        self.leap_speed_kmh = speed_kmh;
        self
    }

    pub fn with_offroad_speed(mut self, speed_kmh: f64) -> Self {
        self.offroad_speed_kmh = speed_kmh;
        self
    }

    /// Forbids leaps into `partition`
    pub fn forbid_leaps(mut self, partition: PartitionId) -> Self {
        self.leaps_forbidden.insert(partition);
        self
    }

    pub fn max_speed_kmh(&self) -> f64 {
        self.max_speed_kmh
    }

    fn travel_time(from: Point<f64>, to: Point<f64>, speed_kmh: f64) -> f64 {
        if speed_kmh <= 0.0 {
            return f64::INFINITY;
        }
        Haversine.distance(from, to) / (speed_kmh * KMH_TO_MPS)
    }

    fn segment_time(segment: &Segment, road: &RoadGeometry) -> f64 {
        match (
            road.junction(segment.point_id(false)),
            road.junction(segment.point_id(true)),
        ) {
            (Some(back), Some(front)) => Self::travel_time(
                back.point,
                front.point,
                road.speed_kmh(segment.forward),
            ),
            _ => f64::INFINITY,
        }
    }
}

impl EdgeEstimator for HaversineEstimator {
    fn segment_weight(&self, segment: &Segment, road: &RoadGeometry) -> f64 {
        Self::segment_time(segment, road)
    }

    fn segment_eta(&self, segment: &Segment, road: &RoadGeometry) -> f64 {
        Self::segment_time(segment, road)
    }

    fn heuristic(&self, from: Point<f64>, to: Point<f64>) -> f64 {
        Self::travel_time(from, to, self.max_speed_kmh)
    }

    fn leap_weight(&self, from: Point<f64>, to: Point<f64>) -> f64 {
        Self::travel_time(from, to, self.leap_speed_kmh)
    }

    fn offroad_weight(&self, from: Point<f64>, to: Point<f64>) -> f64 {
        Self::travel_time(from, to, self.offroad_speed_kmh)
    }

    fn leap_allowed(&self, partition: PartitionId) -> bool {
        !self.leaps_forbidden.contains(&partition)
    }
}
