//! Match configuration: board size and the run length needed to win.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Smallest accepted board side.
pub const MIN_SIDE: usize = 3;

/// Board side up to which three in a row wins.
pub const SMALL_BOARD_SIDE: usize = 5;

/// Rules fixed for the lifetime of one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize)]
pub struct MatchConfig {
    /// Number of rows.
    rows: usize,

    /// Number of columns.
    cols: usize,

    /// Run length that wins the match.
    moves_to_win: usize,
}

/// Board size as written in a TOML file.
#[derive(Debug, Clone, Copy, Deserialize)]
struct MatchFile {
    rows: usize,
    cols: usize,
}

impl MatchConfig {
    /// Creates a configuration, deriving the winning run length from the size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimensions`] when either side is below 3.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows < MIN_SIDE || cols < MIN_SIDE {
            return Err(ConfigError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            moves_to_win: moves_to_win_for(rows, cols),
        })
    }

    /// Parses `rows` and `cols` from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: MatchFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::new(file.rows, file.cols)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead {
                path: path.as_ref().display().to_string(),
                message: e.to_string(),
            })?;

        let config = Self::from_toml_str(&content)?;
        info!(rows = config.rows, cols = config.cols, "Match config loaded");
        Ok(config)
    }
}

/// Winning run length for a board size.
///
/// Three in a row wins when either side is at most five, so a 3×100 board
/// still only needs three.
pub fn moves_to_win_for(rows: usize, cols: usize) -> usize {
    if rows <= SMALL_BOARD_SIDE || cols <= SMALL_BOARD_SIDE {
        3
    } else {
        5
    }
}
