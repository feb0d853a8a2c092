//! Planar locations and the distance metric used as the search heuristic.

use std::fmt;

use geo::{Coord, Distance, Euclidean, Point};

/// Position of a node on the map plane, in kilometres.
///
/// Distances are Euclidean, so they are non-negative, symmetric and obey the
/// triangle inequality. A* relies on this to keep its heuristic admissible.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Location(Point<f64>);

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Self(Point::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x()
    }

    pub fn y(&self) -> f64 {
        self.0.y()
    }

    pub fn point(&self) -> Point<f64> {
        self.0
    }

    /// Straight-line distance to `other`
    pub fn distance(&self, other: &Location) -> f64 {
        Euclidean.distance(self.0, other.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}

impl From<Point<f64>> for Location {
    fn from(point: Point<f64>) -> Self {
        Self(point)
    }
}

impl From<Location> for Coord<f64> {
    fn from(location: Location) -> Self {
        location.0.into()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Location::new(0.0, 0.0);
        let b = Location::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = Location::new(-1.5, 2.0);
        let b = Location::new(4.0, -7.25);
        assert_eq!(a.distance(&b), b.distance(&a));
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn triangle_inequality_holds() {
        let a = Location::new(0.0, 0.0);
        let b = Location::new(2.0, 5.0);
        let c = Location::new(-3.0, 1.0);
        assert!(a.distance(&c) <= a.distance(&b) + b.distance(&c));
    }

    #[test]
    fn finiteness_checks_both_coordinates() {
        assert!(Location::new(1.0, -2.0).is_finite());
        assert!(!Location::new(f64::NAN, 0.0).is_finite());
        assert!(!Location::new(0.0, f64::NEG_INFINITY).is_finite());
    }
}
