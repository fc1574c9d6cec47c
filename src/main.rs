//! Terminal blockfall runner (default binary).
//!
//! One session tick per frame. Input is polled until the next tick is due,
//! and a frame is drawn after every tick.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use blockfall::core::{RandomShapes, ScriptedShapes, Session, SessionSnapshot, ShapeSource};
use blockfall::input::{is_soft_drop_key, map_key_press, should_quit, SoftDropLatch};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameEvent, PieceKind, TICK_MS};

/// Frames a status line stays on screen after an event.
const STATUS_TTL_TICKS: u32 = 90;

#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle in the terminal")]
struct Cli {
    /// Seed for the shape sequence (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Frame period in milliseconds.
    #[arg(long, default_value_t = u64::from(TICK_MS))]
    tick_ms: u64,

    /// Cycle through a fixed list of shapes instead of drawing at random,
    /// e.g. `--pieces i,i,o,t`.
    #[arg(long, value_delimiter = ',')]
    pieces: Option<Vec<PieceKind>>,

    /// Write tracing output here (filtered by RUST_LOG). Nothing is logged
    /// when omitted, since the terminal is in use.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let source: Box<dyn ShapeSource> = match (cli.pieces.clone(), cli.seed) {
        (Some(kinds), _) if !kinds.is_empty() => Box::new(ScriptedShapes::new(kinds)),
        (_, Some(seed)) => Box::new(RandomShapes::seeded(seed)),
        _ => Box::new(RandomShapes::from_entropy()),
    };
    let mut session = Session::with_source(source);
    info!(seed = ?cli.seed, tick_ms = cli.tick_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, Duration::from_millis(cli.tick_ms.max(1)));

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = session.score(), rows = session.rows_cleared(), "exiting");
    result
}

fn init_tracing(path: Option<&std::path::Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session, tick: Duration) -> Result<()> {
    let view = GameView::default();
    let mut latch = SoftDropLatch::new();
    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut status: Option<(&'static str, u32)> = None;

    let mut last_tick = Instant::now();

    loop {
        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if is_soft_drop_key(key.code) {
                            if let Some(command) = latch.press() {
                                session.apply(command);
                            }
                        } else if let Some(command) = map_key_press(key) {
                            session.apply(command);
                        }
                    }
                    KeyEventKind::Repeat => {
                        if is_soft_drop_key(key.code) {
                            if let Some(command) = latch.press() {
                                session.apply(command);
                            }
                        }
                    }
                    KeyEventKind::Release => {
                        if is_soft_drop_key(key.code) {
                            if let Some(command) = latch.release() {
                                session.apply(command);
                            }
                        }
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() < tick {
            continue;
        }
        last_tick = Instant::now();

        if let Some(command) = latch.tick() {
            session.apply(command);
        }
        session.step();

        if let Some(event) = session.take_last_event() {
            debug!(?event, score = session.score(), "event");
            if let Some(text) = status_for(event) {
                status = Some((text, STATUS_TTL_TICKS));
            }
        }
        status = status.and_then(|(text, ttl)| ttl.checked_sub(1).map(|ttl| (text, ttl)));

        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 26));
        let line = if snap.game_over {
            Some("r to restart")
        } else {
            status.map(|(text, _)| text)
        };
        view.render_into(&snap, line, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;
    }
}

fn status_for(event: GameEvent) -> Option<&'static str> {
    match event {
        GameEvent::RowCleared { .. } => Some("row cleared"),
        GameEvent::PiecePlaced | GameEvent::GameOver => None,
    }
}
