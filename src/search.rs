//! Adversarial minimax search for the computer's move.
//!
//! Exhaustive over the full game tree: branching factor at most 9, depth
//! at most 9, so no pruning is needed. Terminal scores are
//! depth-independent - the engine does not prefer a faster win over a
//! slower one, and the first empty cell among equally scored candidates
//! wins the tie. Both properties are observable and kept deliberately.

use crate::board::{Board, Cell, GameResult, Mark};
use crate::error::NoLegalMoveError;
use crate::position::Position;
use crate::rules::terminal_state;
use tracing::{debug, instrument};

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const DRAW_SCORE: i32 = 0;

/// Scores a board for the computer by searching all continuations.
///
/// `maximizing` is true when the computer places next. The board is
/// mutated in place during the search; every hypothetical placement is
/// undone before returning.
fn minimax(board: &mut Board, maximizing: bool) -> i32 {
    match terminal_state(board) {
        GameResult::ComputerWins => return WIN_SCORE,
        GameResult::HumanWins => return LOSS_SCORE,
        GameResult::Draw => return DRAW_SCORE,
        GameResult::InProgress => {}
    }

    let mark = if maximizing {
        Mark::Computer
    } else {
        Mark::Human
    };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Cell::Occupied(mark));
        let score = minimax(board, !maximizing);
        board.set(pos, Cell::Empty);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Selects the computer's move.
///
/// Evaluates every empty cell in ascending index order - hypothetically
/// placing the computer's mark, scoring the opponent's best response, then
/// undoing - and returns the first cell achieving the maximum score. The
/// caller's board is never modified; the search runs on a private copy.
///
/// # Errors
///
/// Returns [`NoLegalMoveError`] if the board has no empty cell. Callers
/// must only invoke the search while [`terminal_state`] is `InProgress`.
#[instrument(skip(board))]
pub fn best_computer_move(board: &Board) -> Result<Position, NoLegalMoveError> {
    let mut scratch = board.clone();
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        scratch.set(pos, Cell::Occupied(Mark::Computer));
        let score = minimax(&mut scratch, false);
        scratch.set(pos, Cell::Empty);
        debug!(position = %pos, score, "Evaluated candidate move");

        // Strict comparison keeps the first cell among ties.
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((pos, score));
        }
    }

    best.map(|(pos, _)| pos).ok_or(NoLegalMoveError)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(layout: [Cell; 9]) -> Board {
        let mut board = Board::new();
        for (pos, cell) in Position::ALL.into_iter().zip(layout) {
            board.set(pos, cell);
        }
        board
    }

    const X: Cell = Cell::Occupied(Mark::Human);
    const O: Cell = Cell::Occupied(Mark::Computer);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_blocks_immediate_human_threat() {
        // X X . / . O . / . . . - the human wins at index 2 unless blocked.
        let board = board_from([X, X, E, E, O, E, E, E, E]);
        assert_eq!(best_computer_move(&board).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_takes_immediate_win_over_block() {
        // O O . / X X . / . . . - index 2 wins outright; depth-independent
        // scores still prefer it because a win outranks any continuation.
        let board = board_from([O, O, E, X, X, E, E, E, E]);
        assert_eq!(best_computer_move(&board).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_caller_board_untouched() {
        let board = board_from([X, E, E, E, E, E, E, E, E]);
        let before = board.clone();
        best_computer_move(&board).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_has_no_legal_move() {
        let board = board_from([X, O, X, O, X, X, O, X, O]);
        assert_eq!(best_computer_move(&board), Err(NoLegalMoveError));
    }
}
