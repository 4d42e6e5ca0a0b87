//! Core domain types for the tic-tac-toe engine.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A side in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The human player (moves first).
    Human,
    /// The computer opponent.
    Computer,
}

impl Mark {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Human => Mark::Computer,
            Mark::Computer => Mark::Human,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a side's mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(Mark::Human) => 'X',
                    Cell::Occupied(Mark::Computer) => 'O',
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of evaluating a board.
///
/// Always derived from the board by [`crate::terminal_state`], never stored
/// as the source of truth alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Game is ongoing.
    InProgress,
    /// The computer completed a winning line.
    ComputerWins,
    /// The human completed a winning line.
    HumanWins,
    /// Full board, no winning line.
    Draw,
}

impl GameResult {
    /// Returns true if the game has concluded.
    pub fn is_terminal(self) -> bool {
        self != GameResult::InProgress
    }
}
