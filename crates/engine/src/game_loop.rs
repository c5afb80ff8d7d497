//! GameLoop: a session plus its gravity clock.

use log::debug;

use crate::core::{GameConfig, Session};
use crate::gravity::GravityTimer;
use crate::types::GameAction;

/// Owns the session and advances it on player input and elapsed time.
#[derive(Debug, Clone)]
pub struct GameLoop {
    session: Session,
    gravity: GravityTimer,
}

impl GameLoop {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_session(Session::new(config), config.gravity_ms)
    }

    pub fn with_session(session: Session, gravity_ms: u32) -> Self {
        Self {
            session,
            gravity: GravityTimer::new(gravity_ms),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn gravity(&self) -> &GravityTimer {
        &self.gravity
    }

    /// Apply a player action immediately.
    pub fn apply(&mut self, action: GameAction) {
        self.session.apply_action(action);
    }

    /// Advance wall-clock time, dropping the piece once per due gravity step.
    ///
    /// Returns the number of pieces that locked.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let steps = self.gravity.advance(elapsed_ms);
        let mut locked = 0;
        for _ in 0..steps {
            if self.session.drop_piece() {
                locked += 1;
            }
        }
        if locked > 0 {
            debug!("gravity: {} steps, {} locks", steps, locked);
        }
        locked
    }

    /// Consume the session's pending redraw request
    pub fn take_redraw(&mut self) -> bool {
        self.session.take_redraw()
    }
}
