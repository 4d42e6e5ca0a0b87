//! Async game session: human clicks in, deferred computer replies out.
//!
//! The computer's move is deliberately deferred by a configurable delay to
//! simulate thinking time. Input is locked for the duration so a human
//! click cannot race the pending move, and [`GameSession::restart`] bumps
//! an epoch counter that any in-flight computer move re-checks before
//! committing, so a stale move can never land on a restarted board.

use crate::board::{Board, GameResult, Mark};
use crate::config::SessionConfig;
use crate::error::InvalidMoveError;
use crate::game::{Game, Turn};
use crate::position::Position;
use crate::search::best_computer_move;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Events emitted to the presentation layer.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Board contents changed.
    BoardChanged(Board),
    /// The computer's deferred reply has been scheduled.
    ComputerThinking,
    /// A move was committed.
    MoveMade {
        /// Which side moved.
        mark: Mark,
        /// Where the mark was placed.
        position: Position,
    },
    /// The game reached a terminal result.
    GameOver {
        /// The final result.
        result: GameResult,
    },
}

/// Outcome of a human click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The move was committed; the game result after it.
    Applied(GameResult),
    /// The click was ignored: input locked, computer's turn, or game over.
    Ignored,
}

/// A single human-vs-computer game session.
///
/// Cloning is cheap and clones share the same game state. The session
/// must run inside a tokio runtime so the deferred computer move can be
/// spawned.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: Arc<Mutex<Game>>,
    epoch: Arc<AtomicU64>,
    config: SessionConfig,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl GameSession {
    /// Creates a session and the event stream for its presentation layer.
    #[instrument(skip(config))]
    pub fn new(config: SessionConfig) -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        info!(
            think_delay_ms = *config.think_delay_ms(),
            "Creating game session"
        );
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let session = Self {
            game: Arc::new(Mutex::new(Game::new())),
            epoch: Arc::new(AtomicU64::new(0)),
            config,
            event_tx,
        };
        (session, event_rx)
    }

    /// Returns a snapshot of the board.
    pub fn board(&self) -> Board {
        self.game.lock().unwrap().board().clone()
    }

    /// Returns the current game result.
    pub fn result(&self) -> GameResult {
        self.game.lock().unwrap().result()
    }

    /// Returns true while human input is disabled.
    pub fn is_locked(&self) -> bool {
        self.game.lock().unwrap().is_locked()
    }

    /// Handles a "cell clicked" event from the presentation layer.
    ///
    /// The click is ignored while input is locked, while the computer's
    /// reply is pending, or after the game is over. When the move commits
    /// and the game continues, input locks and the computer's reply is
    /// scheduled after the configured thinking delay.
    ///
    /// # Errors
    ///
    /// Propagates [`InvalidMoveError`] for occupied or out-of-range cells;
    /// the presentation layer must not offer those as clickable.
    #[instrument(skip(self))]
    pub fn click(&self, index: usize) -> Result<ClickOutcome, InvalidMoveError> {
        let mut game = self.game.lock().unwrap();

        if game.is_locked() {
            debug!(index, "Click ignored: input locked");
            return Ok(ClickOutcome::Ignored);
        }
        if game.turn() != Turn::HumanTurn {
            debug!(index, "Click ignored: computer's turn");
            return Ok(ClickOutcome::Ignored);
        }
        if game.result().is_terminal() {
            debug!(index, "Click ignored: game over");
            return Ok(ClickOutcome::Ignored);
        }

        let result = game.apply_move(index, Mark::Human)?;
        // A committed move proves the index is in range.
        let Some(position) = Position::from_index(index) else {
            return Err(InvalidMoveError::OutOfRange { index });
        };

        self.emit(GameEvent::MoveMade {
            mark: Mark::Human,
            position,
        });
        self.emit(GameEvent::BoardChanged(game.board().clone()));

        if result.is_terminal() {
            info!(?result, "Game over");
            self.emit(GameEvent::GameOver { result });
            return Ok(ClickOutcome::Applied(result));
        }

        // Lock before the deferred move is dispatched; only the commit
        // path unlocks. The epoch must be captured while the game lock is
        // still held: epoch updates are serialized by that lock, so a
        // restart can only be ordered entirely before or entirely after
        // this click, never between the commit and the capture.
        game.lock_input();
        let scheduled_epoch = self.epoch.load(Ordering::SeqCst);
        drop(game);
        self.schedule_computer_move(scheduled_epoch);

        Ok(ClickOutcome::Applied(result))
    }

    /// Restarts the game, suppressing any pending computer move.
    ///
    /// Idempotent.
    #[instrument(skip(self))]
    pub fn restart(&self) {
        // Bump under the game lock so the epoch cannot advance between a
        // click committing and capturing its cancellation epoch.
        let mut game = self.game.lock().unwrap();
        self.epoch.fetch_add(1, Ordering::SeqCst);
        game.restart();
        info!("Session restarted");
        self.emit(GameEvent::BoardChanged(game.board().clone()));
    }

    /// Schedules the computer's reply after the configured thinking delay.
    fn schedule_computer_move(&self, scheduled_epoch: u64) {
        let session = self.clone();
        self.emit(GameEvent::ComputerThinking);
        debug!(scheduled_epoch, "Scheduling deferred computer move");

        tokio::spawn(async move {
            tokio::time::sleep(session.config.think_delay()).await;
            session.commit_computer_move(scheduled_epoch);
        });
    }

    /// Commits the deferred computer move unless the session restarted.
    fn commit_computer_move(&self, scheduled_epoch: u64) {
        let mut game = self.game.lock().unwrap();

        // Epoch check under the state lock: a restart that raced the
        // wakeup must win.
        if self.epoch.load(Ordering::SeqCst) != scheduled_epoch {
            debug!(
                scheduled_epoch,
                "Pending computer move suppressed by restart"
            );
            return;
        }

        let position = match best_computer_move(game.board()) {
            Ok(pos) => pos,
            Err(e) => {
                warn!(error = %e, "Computer move scheduled on a full board");
                game.unlock_input();
                return;
            }
        };

        match game.apply_move(position.to_index(), Mark::Computer) {
            Ok(result) => {
                game.unlock_input();
                self.emit(GameEvent::MoveMade {
                    mark: Mark::Computer,
                    position,
                });
                self.emit(GameEvent::BoardChanged(game.board().clone()));
                if result.is_terminal() {
                    info!(?result, "Game over");
                    self.emit(GameEvent::GameOver { result });
                }
            }
            Err(e) => {
                warn!(error = %e, position = %position, "Deferred computer move rejected");
                game.unlock_input();
            }
        }
    }

    fn emit(&self, event: GameEvent) {
        // The receiver may be gone when the presentation layer shuts down.
        let _ = self.event_tx.send(event);
    }
}
