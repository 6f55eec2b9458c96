//! Tests for the time-travelable game history.

use strictly_nrow::{
    ConfigError, GameHistory, GameStatus, MatchConfig, Move, MoveRejection, Player, new_match,
};

fn play(history: &mut GameHistory, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        let outcome = history.apply_move(row, col);
        assert!(outcome.applied(), "({row}, {col}): {:?}", outcome.rejection());
    }
}

#[test]
fn test_top_row_win_scenario() {
    let mut history = new_match(3, 3).expect("valid size");
    play(&mut history, &[(0, 0), (1, 1), (0, 1), (1, 0)]);
    assert_eq!(history.status(), GameStatus::InProgress);

    let outcome = history.apply_move(0, 2);
    assert!(outcome.applied());
    assert_eq!(outcome.status(), GameStatus::Won(Player::X));
    assert_eq!(
        outcome.win_line(),
        [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)]
    );
    assert_eq!(history.cursor(), 5);
}

#[test]
fn test_occupied_cell_changes_nothing() {
    let mut history = new_match(3, 3).expect("valid size");
    play(&mut history, &[(1, 1), (0, 0)]);
    let before = history.clone();

    let outcome = history.apply_move(1, 1);
    assert!(!outcome.applied());
    assert_eq!(outcome.rejection(), Some(MoveRejection::Occupied(Move::new(1, 1))));
    assert_eq!(outcome.board(), before.current().board());
    assert_eq!(history, before);
}

#[test]
fn test_draw_on_full_board_without_line() {
    // X O X / X O O / O X X
    let mut history = new_match(3, 3).expect("valid size");
    play(
        &mut history,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    assert_eq!(history.status(), GameStatus::Draw);
    assert!(history.win_result().line().is_empty());
    assert_eq!(
        history.apply_move(0, 0).rejection(),
        Some(MoveRejection::GameOver)
    );
}

#[test]
fn test_win_on_last_cell_is_not_draw() {
    // X O X / O X O / O X X, X fills the last cell completing the diagonal
    let mut history = new_match(3, 3).expect("valid size");
    play(
        &mut history,
        &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    assert!(history.current().board().is_full());
    assert_eq!(history.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_jump_is_idempotent() {
    let mut history = new_match(4, 4).expect("valid size");
    play(&mut history, &[(0, 0), (1, 1), (2, 2), (3, 3)]);

    let first = history.jump_to(2).map(|v| (v.board().clone(), v.next_mover(), v.status()));
    let after_first = history.clone();
    let second = history.jump_to(2).map(|v| (v.board().clone(), v.next_mover(), v.status()));

    assert_eq!(first, second);
    assert_eq!(history, after_first);
    assert_eq!(history.len(), 5);
}

#[test]
fn test_jump_back_and_resume() {
    let mut history = new_match(3, 3).expect("valid size");
    play(&mut history, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);

    let view = history.jump_to(0).expect("opening ply");
    assert_eq!(view.next_mover(), Player::X);
    assert_eq!(view.status(), GameStatus::InProgress);
    assert!(view.board().cells().iter().all(|c| c.player().is_none()));

    // History keeps every ply while rewound.
    assert_eq!(history.list_plies().count(), 6);
    assert!(!history.apply_move(2, 2).applied());

    history.jump_to(history.latest_ply());
    assert_eq!(history.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_reconfigure_resets_match() {
    let mut history = new_match(3, 3).expect("valid size");
    play(&mut history, &[(0, 0), (1, 1), (2, 2)]);

    history.reconfigure(6, 6).expect("valid size");
    assert_eq!(history.len(), 1);
    assert_eq!(history.cursor(), 0);
    assert_eq!(history.status(), GameStatus::InProgress);
    assert_eq!(*history.config().moves_to_win(), 5);
    assert_eq!(history.current().board().cells().len(), 36);
}

#[test]
fn test_reconfigure_rejects_small_board() {
    let mut history = new_match(3, 3).expect("valid size");
    assert_eq!(
        history.reconfigure(3, 2),
        Err(ConfigError::InvalidDimensions { rows: 3, cols: 2 })
    );
}

#[test]
fn test_five_in_a_row_on_large_board() {
    let mut history = GameHistory::new(MatchConfig::new(8, 8).expect("valid size"));
    // X builds column 3, O answers in column 6
    for r in 0..4 {
        play(&mut history, &[(r, 3), (r, 6)]);
    }
    assert_eq!(history.status(), GameStatus::InProgress);
    play(&mut history, &[(4, 3)]);
    assert_eq!(history.status(), GameStatus::Won(Player::X));
    assert_eq!(history.win_result().line().len(), 5);
}

#[test]
fn test_ply_list_is_restartable() {
    let mut history = new_match(3, 5).expect("valid size");
    play(&mut history, &[(0, 4), (2, 0)]);

    let plies = history.list_plies();
    let once: Vec<_> = plies.clone().collect();
    let twice: Vec<_> = plies.collect();
    assert_eq!(once, twice);
    assert_eq!(*once[1].last_move(), Some(Move::new(0, 4)));
    assert_eq!(*once[2].player(), Some(Player::O));
}
