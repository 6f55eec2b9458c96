mod action;
mod contracts;
mod history;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveParseError, MoveRejection};
pub use contracts::MoveContract;
pub use history::{GameHistory, JumpView, MoveOutcome, Plies, PlyEntry, Snapshot, new_match};
pub use rules::{Axis, WinResult, detect_win};
pub use types::{Board, Cell, GameStatus, Player};
