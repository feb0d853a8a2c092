pub mod articulation;

pub use articulation::articulation_points;
