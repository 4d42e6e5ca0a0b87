//! Terminal-state detection, shared by the state manager and the search
//! engine.

mod draw;
mod win;

pub(crate) use draw::is_full;
pub(crate) use win::check_winner;

use crate::board::{Board, GameResult, Mark};
use tracing::instrument;

/// Evaluates a board for a concluded game.
///
/// Pure function of the board: scans the eight winning lines first (the
/// first matching line decides), then checks for a full-board draw.
#[instrument]
pub fn terminal_state(board: &Board) -> GameResult {
    match check_winner(board) {
        Some(Mark::Computer) => GameResult::ComputerWins,
        Some(Mark::Human) => GameResult::HumanWins,
        None if is_full(board) => GameResult::Draw,
        None => GameResult::InProgress,
    }
}
