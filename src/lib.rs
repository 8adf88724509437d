// Domain layer - sparse simulation core
pub mod domain;
pub mod error;

// Application layer - scheduling, viewport and configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{CellRegistry, LiveCell, Position, Prefill, Preset, Rgb};
pub use application::{Camera, GameState, SimConfig, Tool};
pub use error::{ConfigError, RegistryError};
