//! Cursor invariant: the cursor points at a snapshot sized to the match.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: the history is non-empty, the cursor indexes into it, and every
/// board matches the configured dimensions.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        let rows = *history.config.rows();
        let cols = *history.config.cols();

        !history.snapshots.is_empty()
            && history.cursor < history.snapshots.len()
            && history
                .snapshots
                .iter()
                .all(|s| s.board.rows() == rows && s.board.cols() == cols)
    }

    fn description() -> &'static str {
        "Cursor within history and boards sized to the match"
    }
}
