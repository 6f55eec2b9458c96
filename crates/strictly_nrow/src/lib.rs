//! Strictly N-in-a-row - generalized tic-tac-toe with move-history navigation
//!
//! Boards of any size from 3×3 up, a winning run of three or five depending
//! on the size, and a history that can be rewound without losing moves.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection around the last placed mark
//! - **History**: immutable snapshots, cursor-based time travel, derived status
//! - **Contracts**: move preconditions and debug-build history invariants
//! - **Config**: board size and winning run length, from code or TOML
//!
//! # Example
//!
//! ```
//! use strictly_nrow::{GameStatus, Move, Player, new_match};
//!
//! let mut history = new_match(3, 3)?;
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     history.apply_move(row, col);
//! }
//! assert_eq!(history.status(), GameStatus::Won(Player::X));
//! assert_eq!(
//!     history.win_result().line(),
//!     [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)]
//! );
//! # Ok::<(), strictly_nrow::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod games;

// Crate-level exports - Configuration
pub use config::{MIN_SIDE, MatchConfig, SMALL_BOARD_SIDE, moves_to_win_for};

// Crate-level exports - Errors
pub use error::ConfigError;

// Crate-level exports - Game types (N-in-a-row)
pub use games::nrow::{
    Axis, Board, Cell, GameHistory, GameStatus, JumpView, Move, MoveContract, MoveOutcome,
    MoveParseError, MoveRejection, Plies, PlyEntry, Player, Snapshot, WinResult, detect_win,
    new_match,
};

// Crate-level exports - Verification layer
pub use games::nrow::invariants::{
    AlternatingTurnInvariant, CursorInBoundsInvariant, HistoryInvariants, Invariant,
    InvariantSet, InvariantViolation, SingleCellDeltaInvariant,
};
pub use games::nrow::rules::{is_draw, is_full};
