//! Single-cell delta invariant: each ply adds exactly its recorded move.

use super::super::{Cell, GameHistory, Player};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one cell.
///
/// The differing cell is the snapshot's `last_move`, was empty before and
/// holds the mark of the player who owns that ply afterwards.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameHistory> for SingleCellDeltaInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let (before, after) = (&pair[0], &pair[1]);
                let ply = i + 1;
                let (Some(mv), Some(player)) = (after.last_move, Player::for_ply(ply)) else {
                    return false;
                };

                let changed = before
                    .board
                    .cells()
                    .iter()
                    .zip(after.board.cells())
                    .filter(|(a, b)| a != b)
                    .count();

                changed == 1
                    && before.board.get(mv) == Some(Cell::Empty)
                    && after.board.get(mv) == Some(Cell::Occupied(player))
            })
    }

    fn description() -> &'static str {
        "Each ply adds exactly its recorded move"
    }
}
