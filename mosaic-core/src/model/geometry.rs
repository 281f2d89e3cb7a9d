//! Road feature geometry as supplied by partition loaders

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::PointId;

/// End point of a segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Junction {
    /// Coordinates, `x` is longitude and `y` latitude
    pub point: Point<f64>,
    /// Elevation in meters, when known
    pub altitude: Option<f64>,
}

impl Junction {
    pub fn new(point: Point<f64>) -> Self {
        Self {
            point,
            altitude: None,
        }
    }

    pub fn with_altitude(point: Point<f64>, altitude: f64) -> Self {
        Self {
            point,
            altitude: Some(altitude),
        }
    }

    pub fn point(&self) -> Point<f64> {
        self.point
    }
}

/// Attributes of one road feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadGeometry {
    pub junctions: Vec<Junction>,
    pub one_way: bool,
    pub pass_through_allowed: bool,
    /// Speed along the feature's point order, km/h
    pub forward_speed_kmh: f64,
    /// Speed against the feature's point order, km/h
    pub backward_speed_kmh: f64,
}

impl RoadGeometry {
    /// Two-way road with pass-through allowed and the same speed both ways
    pub fn new(points: impl IntoIterator<Item = Point<f64>>, speed_kmh: f64) -> Self {
        Self {
            junctions: points.into_iter().map(Junction::new).collect(),
            one_way: false,
            pass_through_allowed: true,
            forward_speed_kmh: speed_kmh,
            backward_speed_kmh: speed_kmh,
        }
    }

    pub fn one_way(mut self) -> Self {
        self.one_way = true;
        self.backward_speed_kmh = 0.0;
        self
    }

    pub fn no_pass_through(mut self) -> Self {
        self.pass_through_allowed = false;
        self
    }

    pub fn point_count(&self) -> usize {
        self.junctions.len()
    }

    pub fn junction(&self, point: PointId) -> Option<&Junction> {
        self.junctions.get(point as usize)
    }

    pub fn speed_kmh(&self, forward: bool) -> f64 {
        if forward {
            self.forward_speed_kmh
        } else {
            self.backward_speed_kmh
        }
    }
}

/// Speed camera on a segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedCamera {
    /// Position along the segment, 0 at its back and 1 at its front
    pub coef: f64,
    /// Enforced limit, km/h. Zero when unknown.
    pub max_speed_kmh: u8,
}
