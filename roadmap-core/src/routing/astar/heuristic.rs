use crate::Location;

/// Lower-bound estimate of the remaining distance to the goal.
///
/// Implementations must never exceed the true segment-weighted distance,
/// otherwise A* loses its optimality guarantee.
pub trait Heuristic {
    fn estimate(&self, from: &Location, goal: &Location) -> f64;
}

/// Straight-line distance to the goal
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightLine;

impl Heuristic for StraightLine {
    fn estimate(&self, from: &Location, goal: &Location) -> f64 {
        from.distance(goal)
    }
}

/// Always zero, turning A* into Dijkstra's algorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _from: &Location, _goal: &Location) -> f64 {
        0.0
    }
}
