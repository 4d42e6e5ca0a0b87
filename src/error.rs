//! Error types for the engine's fail-fast contracts.
//!
//! Both errors are programmer-contract violations rather than expected
//! runtime conditions: the presentation layer must never offer an occupied
//! cell or a finished board as clickable, and the search must only run on
//! a board with at least one empty cell. They surface immediately instead
//! of being swallowed, since silent swallowing can mask double-move races.

use derive_more::{Display, Error};

/// A move request that violates the engine's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMoveError {
    /// The cell index is outside the 0-8 board range.
    #[display("Cell index {} is out of range (must be 0-8)", index)]
    OutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// The target cell is already occupied.
    #[display("Cell {} is already occupied", index)]
    Occupied {
        /// The rejected index.
        index: usize,
    },
    /// The game has already reached a terminal result.
    #[display("Game is already over")]
    GameOver,
}

/// The search was invoked on a board with no empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No legal move: the board is full")]
pub struct NoLegalMoveError;
