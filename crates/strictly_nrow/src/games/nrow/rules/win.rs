//! Win detection logic for N-in-a-row.
//!
//! Only lines through the last placed mark are inspected, so a check costs
//! at most one walk per axis rather than a full-board scan.

use super::super::{Board, Cell, Move, Player};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// A line direction a winning run can follow.
///
/// Declaration order is the detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Axis {
    /// Top to bottom.
    Vertical,
    /// Left to right.
    Horizontal,
    /// Top-left to bottom-right (↘).
    MainDiagonal,
    /// Top-right to bottom-left (↙).
    AntiDiagonal,
}

impl Axis {
    /// Row and column offsets of one step along the axis.
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Vertical => (1, 0),
            Axis::Horizontal => (0, 1),
            Axis::MainDiagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// Outcome of a win check.
///
/// `line` is empty exactly when `winner` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinResult {
    winner: Option<Player>,
    line: Vec<Move>,
}

impl WinResult {
    /// A result with no winner.
    pub fn none() -> Self {
        Self::default()
    }

    fn won(player: Player, line: Vec<Move>) -> Self {
        Self {
            winner: Some(player),
            line,
        }
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The cells of the winning run, ordered end to end.
    pub fn line(&self) -> &[Move] {
        &self.line
    }

    /// Returns true if `mv` is part of the winning run.
    pub fn contains(&self, mv: Move) -> bool {
        self.line.contains(&mv)
    }
}

/// Counts consecutive `player` cells from `from`, excluding `from` itself.
fn walk(board: &Board, from: Move, d_row: isize, d_col: isize, player: Player) -> usize {
    std::iter::successors(board.step(from, d_row, d_col), |&mv| {
        board.step(mv, d_row, d_col)
    })
    .take_while(|&mv| board.get(mv) == Some(Cell::Occupied(player)))
    .count()
}

/// Decides whether placing `player`'s mark at `last_move` completed a run of
/// at least `moves_to_win` cells.
///
/// The board must already hold the mark at `last_move`. Axes are checked in
/// [`Axis`] order and the first qualifying run is returned in full, even when
/// it is longer than `moves_to_win`.
#[instrument(skip(board), fields(rows = board.rows(), cols = board.cols()))]
pub fn detect_win(board: &Board, moves_to_win: usize, last_move: Move, player: Player) -> WinResult {
    if !board.contains(last_move) {
        warn!(%last_move, "Win check requested outside the board");
        return WinResult::none();
    }

    let needed = moves_to_win.saturating_sub(1);

    for axis in Axis::iter() {
        let (d_row, d_col) = axis.step();
        let before = walk(board, last_move, -d_row, -d_col, player);
        let after = walk(board, last_move, d_row, d_col, player);

        if before + after >= needed {
            let start = Move::new(
                last_move.row.wrapping_add_signed(-d_row * before as isize),
                last_move.col.wrapping_add_signed(-d_col * before as isize),
            );
            let line: Vec<Move> = std::iter::successors(Some(start), |&mv| {
                board.step(mv, d_row, d_col)
            })
            .take(before + after + 1)
            .collect();

            debug!(?axis, ?player, run = line.len(), "Winning run found");
            return WinResult::won(player, line);
        }
    }

    WinResult::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(rows: usize, cols: usize, marks: &[(usize, usize, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(rows, cols), |board, &(r, c, p)| {
                board.with_mark(Move::new(r, c), p)
            })
    }

    fn moves(cells: &[(usize, usize)]) -> Vec<Move> {
        cells.iter().copied().map(Move::from).collect()
    }

    #[test]
    fn test_no_winner_single_mark() {
        let board = board_with(3, 3, &[(1, 1, Player::X)]);
        let result = detect_win(&board, 3, Move::new(1, 1), Player::X);
        assert_eq!(result, WinResult::none());
        assert!(result.line().is_empty());
    }

    #[test]
    fn test_winner_top_row_left_to_right() {
        let board = board_with(
            3,
            3,
            &[(0, 0, Player::X), (0, 1, Player::X), (0, 2, Player::X)],
        );
        let result = detect_win(&board, 3, Move::new(0, 1), Player::X);
        assert_eq!(result.winner(), Some(Player::X));
        assert_eq!(result.line(), moves(&[(0, 0), (0, 1), (0, 2)]));
    }

    #[test]
    fn test_winner_column_top_to_bottom() {
        let board = board_with(
            4,
            4,
            &[(1, 2, Player::O), (2, 2, Player::O), (3, 2, Player::O)],
        );
        let result = detect_win(&board, 3, Move::new(3, 2), Player::O);
        assert_eq!(result.winner(), Some(Player::O));
        assert_eq!(result.line(), moves(&[(1, 2), (2, 2), (3, 2)]));
    }

    #[test]
    fn test_winner_main_diagonal() {
        let board = board_with(
            3,
            3,
            &[(0, 0, Player::O), (1, 1, Player::O), (2, 2, Player::O)],
        );
        let result = detect_win(&board, 3, Move::new(2, 2), Player::O);
        assert_eq!(result.winner(), Some(Player::O));
        assert_eq!(result.line(), moves(&[(0, 0), (1, 1), (2, 2)]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            3,
            3,
            &[(0, 2, Player::X), (1, 1, Player::X), (2, 0, Player::X)],
        );
        let result = detect_win(&board, 3, Move::new(2, 0), Player::X);
        assert_eq!(result.winner(), Some(Player::X));
        assert_eq!(result.line(), moves(&[(0, 2), (1, 1), (2, 0)]));
    }

    #[test]
    fn test_run_one_short() {
        let board = board_with(
            7,
            7,
            &[
                (3, 0, Player::X),
                (3, 1, Player::X),
                (3, 2, Player::X),
                (3, 3, Player::X),
            ],
        );
        let result = detect_win(&board, 5, Move::new(3, 3), Player::X);
        assert_eq!(result.winner(), None);
    }

    #[test]
    fn test_exact_run_bounded_by_opponent() {
        let board = board_with(
            7,
            7,
            &[
                (2, 0, Player::O),
                (2, 1, Player::X),
                (2, 2, Player::X),
                (2, 3, Player::X),
                (2, 4, Player::X),
                (2, 5, Player::X),
                (2, 6, Player::O),
            ],
        );
        let result = detect_win(&board, 5, Move::new(2, 3), Player::X);
        assert_eq!(result.winner(), Some(Player::X));
        assert_eq!(result.line().len(), 5);
        assert!(!result.contains(Move::new(2, 0)));
        assert!(result.contains(Move::new(2, 5)));
    }

    #[test]
    fn test_long_run_reported_in_full() {
        let marks: Vec<_> = (0..6).map(|c| (0, c, Player::O)).collect();
        let board = board_with(6, 6, &marks);
        let result = detect_win(&board, 5, Move::new(0, 2), Player::O);
        assert_eq!(result.line().len(), 6);
        assert_eq!(result.line().first(), Some(&Move::new(0, 0)));
        assert_eq!(result.line().last(), Some(&Move::new(0, 5)));
    }

    #[test]
    fn test_vertical_has_priority_over_horizontal() {
        let board = board_with(
            3,
            3,
            &[
                (0, 0, Player::X),
                (1, 0, Player::X),
                (2, 0, Player::X),
                (2, 1, Player::X),
                (2, 2, Player::X),
            ],
        );
        let result = detect_win(&board, 3, Move::new(2, 0), Player::X);
        assert_eq!(result.line(), moves(&[(0, 0), (1, 0), (2, 0)]));
    }

    #[test]
    fn test_other_player_marks_ignored() {
        let board = board_with(
            3,
            3,
            &[(0, 0, Player::O), (0, 1, Player::O), (0, 2, Player::X)],
        );
        let result = detect_win(&board, 3, Move::new(0, 2), Player::X);
        assert_eq!(result.winner(), None);
    }

    #[test]
    fn test_threshold_of_one_wins_immediately() {
        let board = board_with(3, 3, &[(1, 1, Player::X)]);
        let result = detect_win(&board, 1, Move::new(1, 1), Player::X);
        assert_eq!(result.winner(), Some(Player::X));
        assert_eq!(result.line(), moves(&[(1, 1)]));
    }

    #[test]
    fn test_out_of_bounds_last_move() {
        let board = Board::new(3, 3);
        let result = detect_win(&board, 3, Move::new(5, 5), Player::X);
        assert_eq!(result, WinResult::none());
    }
}
