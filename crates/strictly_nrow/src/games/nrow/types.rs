//! Core domain types for N-in-a-row.

use super::action::Move;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player who moves on the given ply.
    ///
    /// Ply 0 is the empty board and has no mover; odd plies belong to X and
    /// even plies to O.
    pub fn for_ply(ply: usize) -> Option<Self> {
        match ply {
            0 => None,
            p if p % 2 == 1 => Some(Player::X),
            _ => Some(Player::O),
        }
    }

    /// Returns the player to move once the board shows `ply`.
    pub fn next_after(ply: usize) -> Self {
        if ply % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Rectangular board of `rows × cols` cells, stored row-major.
///
/// Boards are values: placing a mark produces a new board and leaves the
/// original untouched, so snapshots held by a history are never aliased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the move lies on the board.
    pub fn contains(&self, mv: Move) -> bool {
        mv.row < self.rows && mv.col < self.cols
    }

    /// Gets the cell at the given coordinates.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        if self.contains(mv) {
            self.cells.get(mv.row * self.cols + mv.col).copied()
        } else {
            None
        }
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty_at(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Returns a copy of this board with `player`'s mark written at `mv`.
    ///
    /// Out-of-range coordinates return an unchanged copy.
    #[instrument(skip(self))]
    pub fn with_mark(&self, mv: Move, player: Player) -> Self {
        let mut next = self.clone();
        next.set(mv, Cell::Occupied(player));
        next
    }

    /// Overwrites a cell in place.
    pub(crate) fn set(&mut self, mv: Move, cell: Cell) {
        if self.contains(mv) {
            let idx = mv.row * self.cols + mv.col;
            self.cells[idx] = cell;
        }
    }

    /// Moves one step from `mv` by the signed offsets, if the result is on the board.
    pub fn step(&self, mv: Move, d_row: isize, d_col: isize) -> Option<Move> {
        let row = mv.row.checked_add_signed(d_row)?;
        let col = mv.col.checked_add_signed(d_col)?;
        let next = Move::new(row, col);
        self.contains(next).then_some(next)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Formats the board as text with column indices on top and row indices
    /// down the left margin.
    pub fn display(&self) -> String {
        let width = self.rows.max(self.cols).saturating_sub(1).to_string().len();
        let mut result = format!("{:width$}", "");
        for col in 0..self.cols {
            result.push_str(&format!(" {col:>width$}"));
        }
        for row in 0..self.rows {
            result.push('\n');
            result.push_str(&format!("{row:>width$}"));
            for col in 0..self.cols {
                let symbol = match self.cells[row * self.cols + col] {
                    Cell::Empty => ".",
                    Cell::Occupied(Player::X) => "X",
                    Cell::Occupied(Player::O) => "O",
                };
                result.push_str(&format!(" {symbol:>width$}"));
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Status of the game at a given ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ply_parity() {
        assert_eq!(Player::for_ply(0), None);
        assert_eq!(Player::for_ply(1), Some(Player::X));
        assert_eq!(Player::for_ply(2), Some(Player::O));
        assert_eq!(Player::for_ply(7), Some(Player::X));
        assert_eq!(Player::next_after(0), Player::X);
        assert_eq!(Player::next_after(3), Player::O);
    }

    #[test]
    fn test_with_mark_copies() {
        let board = Board::new(3, 4);
        let marked = board.with_mark(Move::new(1, 3), Player::O);
        assert_eq!(board.get(Move::new(1, 3)), Some(Cell::Empty));
        assert_eq!(marked.get(Move::new(1, 3)), Some(Cell::Occupied(Player::O)));
        assert_eq!(marked.count(Player::O), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let board = Board::new(3, 3);
        assert_eq!(board.get(Move::new(3, 0)), None);
        assert!(!board.is_empty_at(Move::new(0, 3)));
        assert_eq!(board.step(Move::new(0, 0), -1, 0), None);
        assert_eq!(board.step(Move::new(2, 2), 0, 1), None);
        assert_eq!(board.step(Move::new(1, 1), 1, -1), Some(Move::new(2, 0)));
    }

    #[test]
    fn test_display_headers() {
        let board = Board::new(3, 3).with_mark(Move::new(0, 2), Player::X);
        assert_eq!(board.display(), "  0 1 2\n0 . . X\n1 . . .\n2 . . .");
    }

    #[test]
    fn test_display_wide_board_pads_indices() {
        let board = Board::new(3, 11);
        let first = board.display().lines().next().map(str::to_owned);
        assert_eq!(
            first.as_deref(),
            Some("    0  1  2  3  4  5  6  7  8  9 10")
        );
    }
}
