mod camera;
mod config;
mod game_state;

pub use camera::{Camera, ZoomLevel, ZOOM_LEVELS, DEFAULT_ZOOM};
pub use config::{SimConfig, DEFAULT_PALETTE};
pub use game_state::{GameState, Tool};
