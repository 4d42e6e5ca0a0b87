//! Win detection logic for tic-tac-toe.

use crate::board::{Board, Cell, Mark};
use crate::position::Position;
use tracing::instrument;

/// The eight winning lines: rows, columns, diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that side has three in a row, `None` otherwise.
/// The first matching line decides.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return match cell {
                Cell::Occupied(mark) => Some(mark),
                Cell::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Mark::Human));
        board.set(Position::TopCenter, Cell::Occupied(Mark::Human));
        board.set(Position::TopRight, Cell::Occupied(Mark::Human));
        assert_eq!(check_winner(&board), Some(Mark::Human));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        board.set(Position::TopCenter, Cell::Occupied(Mark::Computer));
        board.set(Position::Center, Cell::Occupied(Mark::Computer));
        board.set(Position::BottomCenter, Cell::Occupied(Mark::Computer));
        assert_eq!(check_winner(&board), Some(Mark::Computer));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Cell::Occupied(Mark::Computer));
        board.set(Position::Center, Cell::Occupied(Mark::Computer));
        board.set(Position::BottomLeft, Cell::Occupied(Mark::Computer));
        assert_eq!(check_winner(&board), Some(Mark::Computer));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Mark::Human));
        board.set(Position::TopCenter, Cell::Occupied(Mark::Human));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_no_winner() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Mark::Human));
        board.set(Position::TopCenter, Cell::Occupied(Mark::Computer));
        board.set(Position::TopRight, Cell::Occupied(Mark::Human));
        assert_eq!(check_winner(&board), None);
    }
}
