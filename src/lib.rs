//! Unbeatable tic-tac-toe engine.
//!
//! A human-vs-computer tic-tac-toe core: board state, terminal-state
//! detection, exhaustive minimax search, and an async session that defers
//! the computer's reply behind a configurable thinking delay.
//!
//! # Architecture
//!
//! - **Board**: 9-cell board with `Mark`/`Cell` domain types
//! - **Rules**: pure terminal-state detection shared by the state manager
//!   and the search engine
//! - **Search**: exhaustive minimax; the computer never loses
//! - **Game**: validated move application, turn tracking, interaction lock
//! - **Session**: deferred computer move with restart cancellation and an
//!   event stream for the presentation layer
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{best_computer_move, Board, Cell, Mark, Position};
//!
//! let mut board = Board::new();
//! board.set(Position::TopLeft, Cell::Occupied(Mark::Human));
//! board.set(Position::TopCenter, Cell::Occupied(Mark::Human));
//! board.set(Position::Center, Cell::Occupied(Mark::Computer));
//!
//! // The computer blocks the human's open row.
//! let reply = best_computer_move(&board).unwrap();
//! assert_eq!(reply, Position::TopRight);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod error;
mod game;
mod position;
mod rules;
mod search;
mod session;

// Crate-level exports - domain types
pub use board::{Board, Cell, GameResult, Mark};

// Crate-level exports - positions
pub use position::Position;

// Crate-level exports - terminal-state detection
pub use rules::terminal_state;

// Crate-level exports - search
pub use search::best_computer_move;

// Crate-level exports - state manager
pub use game::{Game, Turn};

// Crate-level exports - errors
pub use error::{InvalidMoveError, NoLegalMoveError};

// Crate-level exports - session orchestration
pub use config::{ConfigError, SessionConfig};
pub use session::{ClickOutcome, GameEvent, GameSession};
