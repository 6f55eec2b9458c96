//! Time-travelable match history.
//!
//! [`GameHistory`] is the single source of truth for a match: an append-only
//! list of immutable [`Snapshot`]s plus a cursor selecting the displayed ply.
//! Whose turn it is and whether the game is over are always derived from the
//! ply index and the snapshot, never tracked in a separate flag.

use super::action::{Move, MoveRejection};
use super::contracts::MoveContract;
use super::rules::{WinResult, detect_win};
use super::types::{Board, GameStatus, Player};
use crate::config::MatchConfig;
use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Immutable board state at one ply.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board after the move.
    pub(super) board: Board,

    /// Move that produced this board; `None` for the opening empty board.
    pub(super) last_move: Option<Move>,
}

impl Snapshot {
    fn opening(config: &MatchConfig) -> Self {
        Self {
            board: Board::new(*config.rows(), *config.cols()),
            last_move: None,
        }
    }
}

/// Derived evaluation of one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Evaluation {
    status: GameStatus,
    win: WinResult,
}

impl Evaluation {
    fn in_progress() -> Self {
        Self {
            status: GameStatus::InProgress,
            win: WinResult::none(),
        }
    }
}

/// Result of a move request.
#[derive(Debug, Clone, Copy)]
pub struct MoveOutcome<'a> {
    rejection: Option<MoveRejection>,
    status: GameStatus,
    board: &'a Board,
    win: &'a WinResult,
}

impl<'a> MoveOutcome<'a> {
    /// Returns true if the move was placed.
    pub fn applied(&self) -> bool {
        self.rejection.is_none()
    }

    /// Why the move was ignored, if it was.
    pub fn rejection(&self) -> Option<MoveRejection> {
        self.rejection
    }

    /// Status after the request.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Board shown after the request.
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Cells of the winning run, empty unless the game is won.
    pub fn win_line(&self) -> &'a [Move] {
        self.win.line()
    }
}

/// View of the history after jumping to a ply.
#[derive(Debug, Clone, Copy)]
pub struct JumpView<'a> {
    board: &'a Board,
    next_mover: Player,
    status: GameStatus,
    win: &'a WinResult,
}

impl<'a> JumpView<'a> {
    /// Board at the selected ply.
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Player whose turn it is at the selected ply.
    pub fn next_mover(&self) -> Player {
        self.next_mover
    }

    /// Status of the selected ply.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Winning run at the selected ply, if any.
    pub fn win_line(&self) -> &'a [Move] {
        self.win.line()
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize)]
pub struct PlyEntry {
    /// Ply index.
    ply: usize,

    /// Move played on this ply; `None` for the game start.
    last_move: Option<Move>,

    /// Player who moved; `None` for the game start.
    player: Option<Player>,
}

impl std::fmt::Display for PlyEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.last_move, self.player) {
            (Some(mv), Some(player)) => write!(f, "move #{}: {} at {}", self.ply, player, mv),
            _ => write!(f, "game start"),
        }
    }
}

/// Lazy iterator over the move list.
///
/// Cloning restarts it; `.rev()` lists the newest move first.
#[derive(Debug, Clone)]
pub struct Plies<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Snapshot>>,
}

impl<'a> Plies<'a> {
    fn entry((ply, snapshot): (usize, &'a Snapshot)) -> PlyEntry {
        PlyEntry {
            ply,
            last_move: snapshot.last_move,
            player: Player::for_ply(ply),
        }
    }
}

impl Iterator for Plies<'_> {
    type Item = PlyEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Plies::entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Plies<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Plies::entry)
    }
}

impl ExactSizeIterator for Plies<'_> {}

impl std::iter::FusedIterator for Plies<'_> {}

/// Starts a new match on a `rows × cols` board.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDimensions`] when either side is below 3.
#[instrument]
pub fn new_match(rows: usize, cols: usize) -> Result<GameHistory, ConfigError> {
    Ok(GameHistory::new(MatchConfig::new(rows, cols)?))
}

/// Append-only log of snapshots with a movable cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    pub(super) config: MatchConfig,
    pub(super) snapshots: Vec<Snapshot>,
    pub(super) cursor: usize,
    evaluation: Evaluation,
}

impl GameHistory {
    /// Creates a history holding only the empty opening board.
    #[instrument]
    pub fn new(config: MatchConfig) -> Self {
        Self {
            snapshots: vec![Snapshot::opening(&config)],
            config,
            cursor: 0,
            evaluation: Evaluation::in_progress(),
        }
    }

    /// Rules of the current match.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Index of the displayed ply.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the newest ply.
    pub fn latest_ply(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Number of snapshots, including the opening board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the opening snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns true when the cursor shows the newest ply.
    pub fn is_at_latest(&self) -> bool {
        self.cursor == self.latest_ply()
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// Snapshot at any ply.
    pub fn snapshot(&self, ply: usize) -> Option<&Snapshot> {
        self.snapshots.get(ply)
    }

    /// Status of the displayed ply.
    pub fn status(&self) -> GameStatus {
        self.evaluation.status
    }

    /// Win check result for the displayed ply.
    pub fn win_result(&self) -> &WinResult {
        &self.evaluation.win
    }

    /// Player to move at the displayed ply.
    pub fn next_mover(&self) -> Player {
        Player::next_after(self.cursor)
    }

    /// Places the next player's mark at `(row, col)`.
    ///
    /// Ignored (with `applied() == false`) when the game is over, the cursor
    /// is on an earlier ply, or the cell is off the board or occupied.
    #[instrument(skip(self), fields(ply = self.snapshots.len()))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> MoveOutcome<'_> {
        let mv = Move::new(row, col);

        if let Err(rejection) = MoveContract::pre(self, &mv) {
            warn!(%mv, %rejection, "Move ignored");
            return self.outcome(Some(rejection));
        }

        let ply = self.snapshots.len();
        let mover = Player::next_after(ply - 1);
        let board = self.current().board.with_mark(mv, mover);
        self.snapshots.push(Snapshot {
            board,
            last_move: Some(mv),
        });
        self.cursor = ply;
        self.evaluation = self.evaluate(ply);
        debug!(%mv, player = %mover, status = ?self.evaluation.status, "Move applied");

        debug_assert!(
            MoveContract::post(self).is_ok(),
            "History invariants violated after move"
        );

        self.outcome(None)
    }

    /// Moves the cursor to `ply` without touching the history.
    ///
    /// Returns `None` and changes nothing when `ply` is past the newest ply.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, ply: usize) -> Option<JumpView<'_>> {
        if ply >= self.snapshots.len() {
            warn!(ply, latest = self.latest_ply(), "Jump past the newest ply ignored");
            return None;
        }

        self.cursor = ply;
        self.evaluation = self.evaluate(ply);
        debug!(ply, status = ?self.evaluation.status, "Cursor moved");

        Some(JumpView {
            board: &self.snapshots[ply].board,
            next_mover: Player::next_after(ply),
            status: self.evaluation.status,
            win: &self.evaluation.win,
        })
    }

    /// Starts a new match on a `rows × cols` board.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimensions`] and keeps the current match
    /// when either side is below 3.
    #[instrument(skip(self))]
    pub fn reconfigure(&mut self, rows: usize, cols: usize) -> Result<(), ConfigError> {
        let config = MatchConfig::new(rows, cols)?;
        *self = Self::new(config);
        info!(rows, cols, moves_to_win = *config.moves_to_win(), "New match started");
        Ok(())
    }

    /// Move list from the game start to the newest ply.
    pub fn list_plies(&self) -> Plies<'_> {
        Plies {
            inner: self.snapshots.iter().enumerate(),
        }
    }

    /// Recomputes status for the snapshot at `ply`.
    fn evaluate(&self, ply: usize) -> Evaluation {
        let snapshot = &self.snapshots[ply];
        let (Some(last_move), Some(player)) = (snapshot.last_move, Player::for_ply(ply)) else {
            return Evaluation::in_progress();
        };

        let win = detect_win(
            &snapshot.board,
            *self.config.moves_to_win(),
            last_move,
            player,
        );

        let status = match win.winner() {
            Some(winner) => GameStatus::Won(winner),
            None if snapshot.board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        };

        Evaluation { status, win }
    }

    fn outcome(&self, rejection: Option<MoveRejection>) -> MoveOutcome<'_> {
        MoveOutcome {
            rejection,
            status: self.evaluation.status,
            board: &self.current().board,
            win: &self.evaluation.win,
        }
    }
}
