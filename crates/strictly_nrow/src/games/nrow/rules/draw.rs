//! Draw detection logic for N-in-a-row.

use super::super::{Board, Move, Player};
use super::win::detect_win;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board), fields(rows = board.rows(), cols = board.cols()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks whether the position after `player` moved at `last_move` is drawn.
///
/// A win is ruled out first: a full board that also completes a run is a win.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, moves_to_win: usize, last_move: Move, player: Player) -> bool {
    detect_win(board, moves_to_win, last_move, player).winner().is_none() && is_full(board)
}
