//! Terminal Tic-Tac-Toe runner (default binary).
//!
//! Uses crossterm for keyboard/mouse input and the framebuffer-based
//! renderer from the `term` crate. The loop is turn-based: it blocks on the
//! next terminal event and redraws after each one.

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Builder, Env, Target};
use log::{debug, info, warn};

use tui_tictactoe::config::{AppConfig, Cli};
use tui_tictactoe::input::{handle_key_event, left_click, should_quit};
use tui_tictactoe::session::Session;
use tui_tictactoe::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_tictactoe::types::GameAction;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli)?;
    init_logging(&config)?;

    let session = Session::new(config.session_config()).context("failed to start game")?;
    info!(
        "starting {}x{} game (X {}, O {}, background {})",
        config.board_size, config.board_size, config.x_color, config.o_color, config.background
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!("failed to restore terminal: {:#}", err);
    }
    result
}

/// Logs go to a file when one is configured; the terminal belongs to the UI,
/// so without a file logging stays off unless `RUST_LOG` asks for it.
fn init_logging(config: &AppConfig) -> Result<()> {
    match &config.log_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Builder::from_env(Env::default().default_filter_or("info"))
                .target(Target::Pipe(Box::new(file)))
                .init();
        }
        None => {
            Builder::from_env(Env::default().default_filter_or("off")).init();
        }
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(&session, viewport, &mut fb);
        term.present(&mut fb)?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit requested");
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => left_click(mouse)
                .and_then(|(x, y)| view.hit_test(session.board_size(), viewport, x, y))
                .map(|pos| {
                    session.set_cursor(pos);
                    GameAction::Place
                }),
            Event::Resize(_, _) => {
                term.invalidate();
                None
            }
            _ => None,
        };

        let Some(action) = action else { continue };
        // Cells that are not on screen cannot be played.
        if action == GameAction::Place && !view.fits(session.board_size(), viewport) {
            debug!("placement ignored: board does not fit {}x{}", w, h);
            continue;
        }
        if let Some(outcome) = session.apply(action) {
            debug!("{:?}", outcome);
        }
    }
}
