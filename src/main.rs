//! Grid engine driver (default binary).
//!
//! Two modes:
//! - interactive: crossterm keyboard input, gravity on the configured cadence,
//!   a plain text view of the board
//! - `--headless`: one command per stdin line (`left`, `right`, `rotate`/`up`,
//!   `drop`/`down`, `undo`, `restart`), one JSON snapshot per stdout line, for
//!   external presentation layers
//!
//! Configuration comes from `TETRIS_*` environment variables; `--seed N`
//! overrides `TETRIS_SEED`.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::{Color as TermColor, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, terminal, QueueableCommand};
use tracing::{info, warn, Level};

use vr_tetris::engine::{Session, SessionConfig};
use vr_tetris::input::{handle_key_event, should_quit, KeyAction};
use vr_tetris::types::Command;

/// Frame interval for input polling and redraw
const FRAME_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Args {
    headless: bool,
    seed: Option<u32>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut out = Args::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--headless" => out.headless = true,
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                out.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(out)
}

fn init_tracing(headless: bool) -> Result<()> {
    let level = std::env::var("TETRIS_LOG_LEVEL")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let log_path = std::env::var("TETRIS_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false);

    match log_path {
        Some(path) => {
            let file = File::create(&path).with_context(|| format!("opening log file {}", path))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        // The interactive view owns the terminal; only log there when asked to.
        None if headless => builder.with_writer(io::stderr).init(),
        None => {}
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args)?;
    init_tracing(args.headless)?;

    let mut config = SessionConfig::from_env()?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let mut session = Session::new(&config)?;
    info!(
        seed = config.seed,
        width = config.board_width,
        height = config.board_height,
        tick_ms = config.tick_ms,
        "session started"
    );

    if args.headless {
        return run_headless(&mut session);
    }

    let mut stdout = io::stdout();
    enter(&mut stdout)?;
    let result = run_interactive(&mut session, &mut stdout);

    // Always try to restore terminal state.
    let _ = exit(&mut stdout);
    result
}

fn run_headless(session: &mut Session) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit_snapshot(&mut out, session)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        match word {
            "undo" => {
                session.undo();
            }
            "restart" => session.restart(session.seed().wrapping_add(1)),
            _ => match Command::from_str(word) {
                Some(command) => {
                    session.apply(command);
                }
                None => {
                    warn!(input = word, "unknown command");
                    continue;
                }
            },
        }
        emit_snapshot(&mut out, session)?;
    }
    Ok(())
}

fn emit_snapshot(out: &mut impl Write, session: &Session) -> Result<()> {
    serde_json::to_writer(&mut *out, &session.state().snapshot())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn run_interactive(session: &mut Session, stdout: &mut io::Stdout) -> Result<()> {
    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        draw(stdout, session)?;

        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Ignore releases; terminal auto-repeat arrives as presses/repeats.
                if key.kind != KeyEventKind::Release {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(KeyAction::Game(command)) => {
                            session.apply(command);
                        }
                        Some(KeyAction::Undo) => {
                            session.undo();
                        }
                        Some(KeyAction::Restart) => {
                            session.restart(session.seed().wrapping_add(1));
                        }
                        None => {}
                    }
                }
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            session.advance(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }

        if session.is_topped_out() {
            info!(lines = session.state().lines_cleared(), "topped out");
            session.restart(session.seed().wrapping_add(1));
        }
    }
}

fn enter(stdout: &mut io::Stdout) -> Result<()> {
    terminal::enable_raw_mode()?;
    stdout.queue(terminal::EnterAlternateScreen)?;
    stdout.queue(cursor::Hide)?;
    stdout.queue(terminal::Clear(terminal::ClearType::All))?;
    stdout.flush()?;
    Ok(())
}

fn exit(stdout: &mut io::Stdout) -> Result<()> {
    stdout.queue(ResetColor)?;
    stdout.queue(cursor::Show)?;
    stdout.queue(terminal::LeaveAlternateScreen)?;
    stdout.flush()?;
    terminal::disable_raw_mode()?;
    Ok(())
}

fn draw(stdout: &mut io::Stdout, session: &Session) -> Result<()> {
    let state = session.state();
    let board = state.board();
    let active = state.active();

    for y in 0..board.height() as i8 {
        stdout.queue(cursor::MoveTo(0, y as u16))?;
        stdout.queue(Print("|"))?;
        for x in 0..board.width() as i8 {
            let falling = active.blocks().iter().find(|b| b.x == x && b.y == y);
            let (glyph, color) = match (falling, board.get(x, y).flatten()) {
                (Some(block), _) => ("[]", block.color),
                (None, Some(tile)) => ("##", tile.color),
                (None, None) => (" .", None),
            };
            match color {
                Some(c) => {
                    let (r, g, b) = c.rgb();
                    stdout.queue(SetForegroundColor(TermColor::Rgb { r, g, b }))?;
                }
                None => {
                    stdout.queue(ResetColor)?;
                }
            }
            stdout.queue(Print(glyph))?;
        }
        stdout.queue(ResetColor)?;
        stdout.queue(Print("|"))?;
    }

    let footer = board.height() as u16;
    stdout.queue(cursor::MoveTo(0, footer))?;
    stdout.queue(Print(format!(
        "Lines: {:<6} seed: {:<10}",
        state.lines_cleared(),
        session.seed()
    )))?;
    stdout.queue(cursor::MoveTo(0, footer + 1))?;
    stdout.queue(Print("arrows/hjkl move+rotate  space drop  u undo  r restart  q quit"))?;
    stdout.flush()?;
    Ok(())
}
