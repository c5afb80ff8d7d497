//! Blockfall terminal runner (default binary).
//!
//! Reads configuration from the environment, then runs the game loop: poll
//! input until the next frame, apply key presses immediately, advance gravity
//! by wall-clock time, and repaint whenever the session asks for it.

use std::fs::OpenOptions;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::info;

use blockfall::core::GameConfig;
use blockfall::engine::{FrameClock, GameLoop};
use blockfall::input::{handle_key_event, is_key_down, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

/// Log file path; logging stays off when unset since stderr shares the screen.
const LOG_PATH_VAR: &str = "BLOCKFALL_LOG_PATH";

fn main() -> Result<()> {
    let config = GameConfig::from_env().context("invalid configuration")?;
    init_logging()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let config = config.with_seed(seed);
    info!(
        "config: {}x{} px at scale {} ({}x{} grid), piece set {}, gravity {}ms, seed {}",
        config.surface_width,
        config.surface_height,
        config.scale,
        config.columns(),
        config.rows(),
        config.piece_set_size,
        config.gravity_ms,
        seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var(LOG_PATH_VAR) else {
        return Ok(());
    };
    let path = path.trim();
    if path.is_empty() {
        return Ok(());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = GameLoop::new(config);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut clock = FrameClock::new(FRAME_MS);
    let mut last_size: Option<(u16, u16)> = None;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let resized = last_size != Some((w, h));
        if game.take_redraw() || resized {
            last_size = Some((w, h));
            view.render_into(game.session(), Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
        }

        // Input with timeout until next frame.
        if event::poll(clock.until_next_frame(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if is_key_down(key) => {
                    if should_quit(key) {
                        info!(
                            "quit after {} pieces, {} board resets",
                            game.session().pieces_spawned(),
                            game.session().board_resets()
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply(action);
                    }
                }
                Event::Resize(_, _) => last_size = None,
                _ => {}
            }
        }

        // Gravity.
        if let Some(elapsed_ms) = clock.tick(Instant::now()) {
            game.advance(elapsed_ms);
        }
    }
}
