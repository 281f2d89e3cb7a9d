//! Route cost values

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// How a weight was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum WeightKind {
    /// Priced from real road geometry
    #[default]
    Exact,
    /// Coarse long-distance estimate; the route part needs refinement later
    Leap,
}

/// Additive, totally ordered, non-negative route cost.
///
/// Weights are ordered by value first; among equal values an exact weight
/// sorts before a leap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RouteWeight {
    weight: f64,
    kind: WeightKind,
}

impl RouteWeight {
    pub const ZERO: RouteWeight = RouteWeight {
        weight: 0.0,
        kind: WeightKind::Exact,
    };

    /// Worse than any finite weight
    pub const INFINITE: RouteWeight = RouteWeight {
        weight: f64::INFINITY,
        kind: WeightKind::Exact,
    };

    pub fn new(weight: f64) -> Self {
        Self::with_kind(weight, WeightKind::Exact)
    }

    pub fn leap(weight: f64) -> Self {
        Self::with_kind(weight, WeightKind::Leap)
    }

    fn with_kind(weight: f64, kind: WeightKind) -> Self {
        debug_assert!(
            weight >= 0.0,
            "route weight must be a non-negative number, got {weight}"
        );
        // NaN and negative zero collapse to zero
        Self {
            weight: if weight > 0.0 { weight } else { 0.0 },
            kind,
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn kind(&self) -> WeightKind {
        self.kind
    }

    pub fn is_leap(&self) -> bool {
        self.kind == WeightKind::Leap
    }

    pub fn is_finite(&self) -> bool {
        self.weight.is_finite()
    }
}

impl Default for RouteWeight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for RouteWeight {
    type Output = RouteWeight;

    fn add(self, rhs: RouteWeight) -> RouteWeight {
        RouteWeight {
            weight: self.weight + rhs.weight,
            kind: self.kind.max(rhs.kind),
        }
    }
}

impl AddAssign for RouteWeight {
    fn add_assign(&mut self, rhs: RouteWeight) {
        *self = *self + rhs;
    }
}

impl Sum for RouteWeight {
    fn sum<I: Iterator<Item = RouteWeight>>(iter: I) -> Self {
        iter.fold(RouteWeight::ZERO, Add::add)
    }
}

impl Ord for RouteWeight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

impl PartialOrd for RouteWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RouteWeight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RouteWeight {}

impl fmt::Display for RouteWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WeightKind::Exact => write!(f, "{}", self.weight),
            WeightKind::Leap => write!(f, "{} (leap)", self.weight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_keeps_leap_marker() {
        let total = RouteWeight::new(2.0) + RouteWeight::leap(3.0);
        assert_eq!(total.weight(), 5.0);
        assert!(total.is_leap());

        let exact = RouteWeight::new(2.0) + RouteWeight::new(3.0);
        assert!(!exact.is_leap());
    }

    #[test]
    fn test_infinite_is_worse_than_finite() {
        assert!(RouteWeight::new(1e300) < RouteWeight::INFINITE);
        assert!(!RouteWeight::INFINITE.is_finite());
        assert_eq!(RouteWeight::INFINITE + RouteWeight::new(1.0), RouteWeight::INFINITE);
    }

    #[test]
    fn test_ordering_breaks_ties_by_kind() {
        assert!(RouteWeight::new(4.0) < RouteWeight::leap(4.0));
        assert!(RouteWeight::leap(3.0) < RouteWeight::new(4.0));
    }

    #[test]
    fn test_sum() {
        let total: RouteWeight = [1.0, 2.5, 0.5].into_iter().map(RouteWeight::new).sum();
        assert_eq!(total, RouteWeight::new(4.0));
    }
}
