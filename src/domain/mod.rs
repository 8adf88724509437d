mod cell;
mod color;
mod rules;
mod registry;
mod patterns;
pub mod transition;

pub use cell::{LiveCell, Position};
pub use color::Rgb;
pub use rules::Fate;
pub use registry::CellRegistry;
pub use patterns::{Pattern, Prefill, Preset};
pub use transition::{NeighborInfo, NeighborMap, Outcome, aggregate, next_generation};
