pub mod occupancy;
pub mod position;
pub mod topology;

pub use occupancy::Occupancy;
pub use position::{Move, Position, CELLS, ROWS};
pub use topology::Topology;
