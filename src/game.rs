//! Game state manager: validated moves, turn tracking, interaction lock.

use crate::board::{Board, Cell, GameResult, Mark};
use crate::error::InvalidMoveError;
use crate::position::Position;
use crate::rules::terminal_state;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Which side may act next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// The human may click a cell.
    HumanTurn,
    /// The computer's reply is pending.
    ComputerTurn,
}

/// Complete mutable game state.
///
/// The board is the single source of truth for the game result:
/// [`Game::result`] recomputes [`terminal_state`] instead of caching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The board.
    board: Board,
    /// Whose turn it is.
    turn: Turn,
    /// True while human input is disabled.
    locked: bool,
}

impl Game {
    /// Creates a fresh game: empty board, human to move, input unlocked.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Turn::HumanTurn,
            locked: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose turn it is.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns true while human input is disabled.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Recomputes the game result from the board.
    pub fn result(&self) -> GameResult {
        terminal_state(&self.board)
    }

    /// Applies a move at the given cell index (0-8).
    ///
    /// On success exactly one cell transitions Empty to Occupied, the
    /// result is recomputed, and the turn flips to the mover's opponent
    /// when the game continues. On error the board is unchanged.
    ///
    /// # Errors
    ///
    /// - [`InvalidMoveError::GameOver`] if the board is already terminal
    /// - [`InvalidMoveError::OutOfRange`] if `index` is not 0-8
    /// - [`InvalidMoveError::Occupied`] if the target cell is not empty
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<GameResult, InvalidMoveError> {
        if self.result().is_terminal() {
            warn!(index, ?mark, "Move attempted after game over");
            return Err(InvalidMoveError::GameOver);
        }

        let pos = Position::from_index(index).ok_or_else(|| {
            warn!(index, ?mark, "Move attempted out of range");
            InvalidMoveError::OutOfRange { index }
        })?;

        if !self.board.is_empty(pos) {
            warn!(index, ?mark, "Move attempted on occupied cell");
            return Err(InvalidMoveError::Occupied { index });
        }

        self.board.set(pos, Cell::Occupied(mark));
        let result = terminal_state(&self.board);
        if result == GameResult::InProgress {
            self.turn = match mark {
                Mark::Human => Turn::ComputerTurn,
                Mark::Computer => Turn::HumanTurn,
            };
        }

        debug!(index, ?mark, ?result, "Move committed");
        Ok(result)
    }

    /// Disables human input while a computer move is pending.
    pub fn lock_input(&mut self) {
        self.locked = true;
    }

    /// Re-enables human input.
    pub fn unlock_input(&mut self) {
        self.locked = false;
    }

    /// Resets to the starting state: empty board, human to move, unlocked.
    ///
    /// Idempotent.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.turn = Turn::HumanTurn;
        self.locked = false;
        debug!("Game reset to starting state");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
