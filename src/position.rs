//! Named positions on the 3x3 board.

use crate::board::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// All 9 positions in ascending index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Filters positions by board state - returns only empty cells,
    /// in ascending index order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
