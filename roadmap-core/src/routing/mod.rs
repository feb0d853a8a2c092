//! Shortest path search and the paths it produces

pub mod astar;
pub mod path;

pub use astar::{Heuristic, SearchConfig, StraightLine, Zero, shortest_path, shortest_path_with};
pub use path::{RoadLeg, RoutePath};
