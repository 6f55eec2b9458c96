//! Configuration error types.

use derive_more::Display;

/// Error raised when a match cannot be configured.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigError {
    /// Board dimensions below the 3×3 minimum.
    #[display("Invalid board size {}x{}: rows and columns must both be at least 3", rows, cols)]
    InvalidDimensions {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// A configuration file could not be read.
    #[display("Failed to read config file {}: {}", path, message)]
    FileRead {
        /// Path that was read.
        path: String,
        /// Underlying I/O error message.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[display("Failed to parse config: {}", _0)]
    Parse(String),
}

impl std::error::Error for ConfigError {}
