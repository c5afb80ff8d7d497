//! Session module - the piece controller
//!
//! A [`Session`] owns the grid, the active piece, and the piece randomizer.
//! Every player or gravity command goes through one of four operations:
//!
//! - [`Session::move_piece`]: shift one column, reverted on collision
//! - [`Session::drop_piece`]: fall one row; on collision the piece settles and
//!   the next one spawns
//! - [`Session::rotate_piece`]: 90° clockwise, undone by the exact inverse
//!   transform on collision
//! - [`Session::reset`]: spawn a random piece; a blocked spawn clears the grid
//!
//! Invalid moves are never errors: they are rolled back in place. Each
//! operation raises a redraw request that the host answers with a full repaint.

use log::{debug, info};

use crate::collision::collides;
use crate::config::GameConfig;
use crate::grid::Grid;
use crate::pieces::ActivePiece;
use crate::rng::PieceRandomizer;
use crate::types::{Direction, GameAction, PieceType};

/// Record of a piece settling into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub piece: PieceType,
    /// Resting position of the piece's matrix origin
    pub x: i16,
    pub y: i16,
    /// The next spawn was blocked and the grid was cleared
    pub board_reset: bool,
}

/// Points awarded for a lock, given the grid right after the merge.
pub type ScoreHook = fn(&Grid, &LockEvent) -> u32;

/// Default hook: locks are worth nothing.
pub fn no_score(_grid: &Grid, _event: &LockEvent) -> u32 {
    0
}

/// Game session state: grid, active piece, and bookkeeping
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    active: ActivePiece,
    randomizer: PieceRandomizer,
    score_hook: ScoreHook,
    score: u32,
    last_event: Option<LockEvent>,
    redraw: bool,
    pieces_spawned: u64,
    board_resets: u64,
}

impl Session {
    /// Start a session on an empty grid sized by `config` and spawn the first piece.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_grid(Grid::new(config.columns(), config.rows()), config)
    }

    /// Start a session on a prepared grid.
    ///
    /// Grid dimensions come from `grid`; the piece set and seed from `config`.
    /// The first spawn follows [`reset`](Self::reset), so a blocked spawn clears
    /// the prepared grid.
    pub fn with_grid(grid: Grid, config: &GameConfig) -> Self {
        let columns = grid.columns();
        let mut session = Self {
            grid,
            active: ActivePiece::spawn(PieceType::I, columns),
            randomizer: PieceRandomizer::new(config.seed.unwrap_or(1), config.piece_set_size),
            score_hook: no_score,
            score: 0,
            last_event: None,
            redraw: false,
            pieces_spawned: 0,
            board_resets: 0,
        };
        info!(
            "session started: {}x{} grid, piece set {}",
            session.grid.columns(),
            session.grid.rows(),
            session.randomizer.set_size()
        );
        session.reset();
        session
    }

    /// Replace the scoring hook applied on every lock
    pub fn with_score_hook(mut self, hook: ScoreHook) -> Self {
        self.score_hook = hook;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for tools and tests; requests a redraw.
    pub fn grid_mut(&mut self) -> &mut Grid {
        self.redraw = true;
        &mut self.grid
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pieces_spawned(&self) -> u64 {
        self.pieces_spawned
    }

    pub fn board_resets(&self) -> u64 {
        self.board_resets
    }

    /// Take the most recent lock event, if any
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Whether a redraw has been requested since the last [`take_redraw`](Self::take_redraw)
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Consume the pending redraw request
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.redraw, false)
    }

    /// Place an arbitrary piece as the active one (tools and tests).
    ///
    /// No collision check is made.
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = piece;
        self.redraw = true;
    }

    /// Route a player command to its operation
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_piece(Direction::Left),
            GameAction::MoveRight => self.move_piece(Direction::Right),
            GameAction::Drop => {
                self.drop_piece();
            }
            GameAction::Rotate => self.rotate_piece(),
        }
    }

    /// Spawn a random piece from the configured set.
    ///
    /// Returns true when the spawn was blocked and the grid was cleared.
    pub fn reset(&mut self) -> bool {
        let kind = self.randomizer.next_piece();
        self.spawn(kind)
    }

    /// Spawn `kind` centered on row 0.
    ///
    /// A spawn that collides means the board is full: the whole grid is cleared
    /// and play continues. Returns true in that case.
    pub fn spawn(&mut self, kind: PieceType) -> bool {
        self.active = ActivePiece::spawn(kind, self.grid.columns());
        self.pieces_spawned += 1;
        debug!(
            "spawned {} at ({}, {})",
            kind.name(),
            self.active.x,
            self.active.y
        );

        let blocked = collides(&self.grid, &self.active);
        if blocked {
            self.grid.clear();
            self.board_resets += 1;
            info!("spawn blocked, grid cleared (reset #{})", self.board_resets);
        }
        self.redraw = true;
        blocked
    }

    /// Shift the piece one column; a colliding shift is reverted.
    pub fn move_piece(&mut self, dir: Direction) {
        let dx = dir.delta();
        self.active.x += dx;
        if collides(&self.grid, &self.active) {
            self.active.x -= dx;
        }
        self.redraw = true;
    }

    /// Move the piece down one row.
    ///
    /// If the piece cannot fall it is merged at its current position and the
    /// next piece spawns. Returns true when the piece locked.
    pub fn drop_piece(&mut self) -> bool {
        self.active.y += 1;
        let locked = collides(&self.grid, &self.active);
        if locked {
            self.active.y -= 1;
            self.lock();
        }
        self.redraw = true;
        locked
    }

    /// Rotate the working matrix 90° clockwise.
    ///
    /// On collision the inverse transform restores the previous orientation.
    pub fn rotate_piece(&mut self) {
        self.active.matrix.rotate_cw();
        if collides(&self.grid, &self.active) {
            self.active.matrix.rotate_ccw();
        }
        self.redraw = true;
    }

    fn lock(&mut self) {
        self.grid.merge(&self.active);
        let mut event = LockEvent {
            piece: self.active.kind,
            x: self.active.x,
            y: self.active.y,
            board_reset: false,
        };
        self.score = self
            .score
            .saturating_add((self.score_hook)(&self.grid, &event));
        debug!(
            "locked {} at ({}, {})",
            event.piece.name(),
            event.x,
            event.y
        );

        event.board_reset = self.reset();
        self.last_event = Some(event);
    }
}
