//! Contract-based validation for N-in-a-row.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveRejection};
use super::history::GameHistory;
use super::invariants::{HistoryInvariants, InvariantSet};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The displayed ply must not be won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory) -> Result<(), MoveRejection> {
        if history.status().is_terminal() {
            Err(MoveRejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The cursor must show the newest ply.
pub struct AtLatestPly;

impl AtLatestPly {
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory) -> Result<(), MoveRejection> {
        if history.is_at_latest() {
            Ok(())
        } else {
            Err(MoveRejection::NotAtLatestPly {
                cursor: history.cursor(),
                latest: history.latest_ply(),
            })
        }
    }
}

/// Precondition: The cell must exist and be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    #[instrument(skip(history))]
    pub fn check(mv: &Move, history: &GameHistory) -> Result<(), MoveRejection> {
        let board = history.current().board();
        if !board.contains(*mv) {
            Err(MoveRejection::OutOfBounds(*mv))
        } else if !board.is_empty_at(*mv) {
            Err(MoveRejection::Occupied(*mv))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal if the game is live at the newest
/// ply and the target cell is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(history))]
    pub fn check(mv: &Move, history: &GameHistory) -> Result<(), MoveRejection> {
        GameNotOver::check(history)?;
        AtLatestPly::check(history)?;
        CellIsEmpty::check(mv, history)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move requests.
///
/// Preconditions:
/// - Game not over at the cursor
/// - Cursor at the newest ply
/// - Cell on the board and empty
///
/// Postconditions:
/// - Each snapshot adds exactly the recorded move
/// - Marks alternate starting with X
/// - Cursor and board sizes are consistent
pub struct MoveContract;

impl MoveContract {
    /// Checks preconditions before applying a move.
    pub fn pre(history: &GameHistory, mv: &Move) -> Result<(), MoveRejection> {
        LegalMove::check(mv, history)
    }

    /// Checks postconditions after a move was applied.
    pub fn post(history: &GameHistory) -> Result<(), MoveRejection> {
        HistoryInvariants::check_all(history).map_err(|violations| {
            for violation in &violations {
                warn!(description = violation.description, "Postcondition failed");
            }
            MoveRejection::InvariantViolation(
                violations
                    .first()
                    .map_or("unknown invariant", |v| v.description),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::nrow::{Cell, Player, new_match};

    #[test]
    fn test_precondition_empty_cell() {
        let history = new_match(3, 3).unwrap();
        assert!(MoveContract::pre(&history, &Move::new(1, 1)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut history = new_match(3, 3).unwrap();
        history.apply_move(1, 1);
        assert_eq!(
            MoveContract::pre(&history, &Move::new(1, 1)),
            Err(MoveRejection::Occupied(Move::new(1, 1)))
        );
    }

    #[test]
    fn test_precondition_order_game_over_first() {
        let mut history = new_match(3, 3).unwrap();
        for (r, c) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            history.apply_move(r, c);
        }
        // Occupied and finished: the finished game is reported.
        assert_eq!(
            MoveContract::pre(&history, &Move::new(0, 0)),
            Err(MoveRejection::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_moves() {
        let mut history = new_match(4, 4).unwrap();
        for (r, c) in [(0, 0), (3, 3), (2, 1)] {
            history.apply_move(r, c);
        }
        assert!(MoveContract::post(&history).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut history = new_match(3, 3).unwrap();
        history.apply_move(1, 1);
        history.snapshots[1]
            .board
            .set(Move::new(0, 0), Cell::Occupied(Player::O));
        assert!(matches!(
            MoveContract::post(&history),
            Err(MoveRejection::InvariantViolation(_))
        ));
    }
}
