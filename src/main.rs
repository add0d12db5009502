//! Terminal falltris runner (default binary).
//!
//! Polls crossterm for keys, advances the game one frame every `TICK_MS`
//! and draws through the framebuffer renderer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::Env;

use falltris::core::{GameSnapshot, GameState};
use falltris::input::{should_quit, should_restart, SoftDropLatch};
use falltris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use falltris::types::{Intent, TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "falltris", version, about = "Falling-block puzzle game for the terminal")]
struct Args {
    /// RNG seed for the piece sequence (defaults to the current time)
    #[arg(long)]
    seed: Option<u32>,

    /// Write logs to this file; nothing is logged otherwise
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Terminal columns per grid cell (1-8)
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=8))]
    cell_width: u16,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let seed = args.seed.unwrap_or_else(clock_seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, GameView::new(args.cell_width, 1));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file; stdout belongs to the renderer.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, seed: u32, view: GameView) -> Result<()> {
    let mut game = GameState::new(seed);
    let mut latch = SoftDropLatch::new();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&mut fb)?;

        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        log::info!("quit: score={}", game.score());
                        return Ok(());
                    }
                    if key.kind == KeyEventKind::Press && should_restart(key) {
                        game.restart();
                        latch.reset();
                        continue;
                    }
                    if let Some(intent) = latch.handle_key(key) {
                        apply(&mut game, intent);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if let Some(intent) = latch.update(TICK_MS) {
                apply(&mut game, intent);
            }
            game.tick();

            if let Some(ev) = game.take_last_event() {
                log::debug!(
                    "lock: kind={} lines={} topped_out={}",
                    ev.kind.as_str(),
                    ev.lines_cleared,
                    ev.topped_out
                );
            }
        }
    }
}

fn apply(game: &mut GameState, intent: Intent) {
    if !game.apply_intent(intent) {
        log::trace!("rejected {}", intent.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_width_is_bounded() {
        let args = Args::try_parse_from(["falltris"]).unwrap();
        assert_eq!(args.cell_width, 2);

        let args = Args::try_parse_from(["falltris", "--cell-width", "8"]).unwrap();
        assert_eq!(args.cell_width, 8);

        assert!(Args::try_parse_from(["falltris", "--cell-width", "0"]).is_err());
        assert!(Args::try_parse_from(["falltris", "--cell-width", "6000"]).is_err());
    }
}
