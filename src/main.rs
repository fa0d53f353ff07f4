//! Terminal Tektris runner (default binary).
//!
//! Owns the clock and the terminal: key presses become engine commands,
//! the tick timer lets the shape fall, and every loop redraws the board.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tektris::cli::{parse_args, resolve_seed, usage_error, SEED_ENV, USAGE};
use tektris::core::EngineConfig;
use tektris::input::{handle_key_event, should_quit, should_restart};
use tektris::session::Session;
use tektris::term::{GameView, TerminalRenderer};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", usage_error(&e));
            std::process::exit(2);
        }
    };
    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let env_seed = std::env::var(SEED_ENV).ok();
    let seed = resolve_seed(&config, env_seed.as_deref(), clock_seed())?;

    let mut session = Session::new(EngineConfig::default(), seed);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    println!(
        "[Tektris] seed {} | games {} | best score {} | lines {}",
        seed,
        session.games_played(),
        session.best_score(),
        session.total_lines()
    );
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut last_tick = Instant::now();

    loop {
        term.draw(view.render(session.game()))?;

        let tick_duration = Duration::from_millis(session.tick_ms() as u64);
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if session.is_game_over() {
                        if should_restart(key) && session.restart() {
                            last_tick = Instant::now();
                        }
                    } else if let Some(action) = handle_key_event(key) {
                        session.apply(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick();
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}
