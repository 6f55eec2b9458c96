//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameHistory, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The opening snapshot is empty and has no last move. Every later snapshot
/// holds as many X marks as O marks, or one more.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        let Some(opening) = history.snapshots.first() else {
            return false;
        };

        if opening.last_move.is_some() || opening.board.cells().iter().any(|c| c.player().is_some()) {
            return false;
        }

        history.snapshots.iter().enumerate().all(|(ply, snapshot)| {
            let x = snapshot.board.count(Player::X);
            let o = snapshot.board.count(Player::O);
            x + o == ply && (x == o || x == o + 1)
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
