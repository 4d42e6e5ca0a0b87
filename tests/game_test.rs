//! Tests for the game state manager contract.

use tictactoe_engine::{Cell, Game, GameResult, InvalidMoveError, Mark, Position, Turn};

#[test]
fn test_fresh_game_state() {
    let game = Game::new();
    assert_eq!(game.turn(), Turn::HumanTurn);
    assert_eq!(game.result(), GameResult::InProgress);
    assert!(!game.is_locked());
    assert!(game.board().cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_exactly_one_cell_transitions_per_move() {
    let mut game = Game::new();
    let before = game.board().clone();
    game.apply_move(4, Mark::Human).unwrap();
    let after = game.board();

    let changed: Vec<_> = Position::ALL
        .into_iter()
        .filter(|&pos| before.get(pos) != after.get(pos))
        .collect();
    assert_eq!(changed, vec![Position::Center]);
}

#[test]
fn test_occupied_cell_fails_and_board_unchanged() {
    let mut game = Game::new();
    game.apply_move(0, Mark::Human).unwrap();
    let before = game.board().clone();

    let err = game.apply_move(0, Mark::Computer).unwrap_err();
    assert_eq!(err, InvalidMoveError::Occupied { index: 0 });
    assert_eq!(game.board(), &before);
    assert_eq!(game.turn(), Turn::ComputerTurn);
}

#[test]
fn test_out_of_range_index_fails() {
    let mut game = Game::new();
    assert_eq!(
        game.apply_move(42, Mark::Human),
        Err(InvalidMoveError::OutOfRange { index: 42 })
    );
}

#[test]
fn test_terminal_board_rejects_further_moves() {
    let mut game = Game::new();
    // Human takes the left column unopposed on the right side.
    game.apply_move(0, Mark::Human).unwrap();
    game.apply_move(2, Mark::Computer).unwrap();
    game.apply_move(3, Mark::Human).unwrap();
    game.apply_move(5, Mark::Computer).unwrap();
    assert_eq!(game.apply_move(6, Mark::Human), Ok(GameResult::HumanWins));

    assert_eq!(
        game.apply_move(8, Mark::Computer),
        Err(InvalidMoveError::GameOver)
    );
}

#[test]
fn test_result_recomputed_not_cached() {
    let mut game = Game::new();
    game.apply_move(0, Mark::Human).unwrap();
    assert_eq!(game.result(), GameResult::InProgress);
    game.apply_move(4, Mark::Computer).unwrap();
    assert_eq!(game.result(), GameResult::InProgress);
}

#[test]
fn test_restart_idempotent() {
    let mut game = Game::new();
    game.apply_move(4, Mark::Human).unwrap();
    game.lock_input();

    game.restart();
    let once = game.clone();
    game.restart();
    assert_eq!(game, once);
    assert_eq!(game, Game::new());
}

#[test]
fn test_state_snapshot_round_trips_as_json() {
    let mut game = Game::new();
    game.apply_move(4, Mark::Human).unwrap();
    game.apply_move(0, Mark::Computer).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
}
