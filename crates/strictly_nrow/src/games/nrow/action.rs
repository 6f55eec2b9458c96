//! First-class move types for N-in-a-row.
//!
//! Moves are plain coordinates; who made a move is derived from the ply it
//! landed on, never stored alongside it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A board coordinate: the cell a mark is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Error parsing a `row,col` move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid move {:?}: expected \"row,col\"", _0)]
pub struct MoveParseError(pub String);

impl std::error::Error for MoveParseError {}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MoveParseError(s.to_string());
        let (row, col) = s.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Self::new(row, col))
    }
}

/// Reason a move request was ignored.
///
/// Rejections are reported inside a move outcome rather than as an `Err`:
/// stale or repeated clicks are an expected part of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MoveRejection {
    /// The game at the cursor is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The cursor is on an earlier ply; moves extend only the latest one.
    #[display("Viewing ply {} of {}; jump to the latest ply to move", cursor, latest)]
    NotAtLatestPly {
        /// Ply currently displayed.
        cursor: usize,
        /// Latest ply in the history.
        latest: usize,
    },

    /// The coordinates fall outside the board.
    #[display("Move {} is outside the board", _0)]
    OutOfBounds(Move),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Move),

    /// A history invariant failed after a move (debug builds only).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(&'static str),
}

impl std::error::Error for MoveRejection {}
