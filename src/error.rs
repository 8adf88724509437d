//! Error types for colored_life.

use thiserror::Error;

/// Errors from checked edits of the cell registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A live cell already sits on the position.
    #[error("position ({x}, {y}) is already occupied")]
    Occupied {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
    },
}

/// Errors from reading configuration out of the environment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Variable is set but does not parse.
    #[error("{var}: cannot parse {value:?}")]
    Malformed {
        /// Variable name.
        var: &'static str,
        /// Raw value found.
        value: String,
    },

    /// Variable parses but is outside the accepted range.
    #[error("{var}: {value} is out of range")]
    OutOfRange {
        /// Variable name.
        var: &'static str,
        /// Parsed value.
        value: f32,
    },
}
