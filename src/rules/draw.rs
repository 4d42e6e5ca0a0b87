//! Draw detection logic for tic-tac-toe.

use crate::board::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;
    use crate::position::Position;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Mark::Human));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Cell::Occupied(Mark::Human));
        }
        assert!(is_full(&board));
    }
}
