//! Terminal runner (default binary).
//!
//! Samples a monotonic clock, turns key presses into engine commands, ticks the
//! engine once per frame, and draws each snapshot through the view onto the
//! terminal screen.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::config::{clock_seed, parse_args, RunConfig, USAGE};
use blockfall::core::{GameEngine, GameSnapshot};
use blockfall::input::{handle_key_event, should_quit, InputAction};
use blockfall::term::{FrameBuffer, GameView, Overlay, Screen, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_args(&args, clock_seed())? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let mut game = GameEngine::new(config.seed);
    game.start();

    let mut term = Screen::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &config);

    // Always try to restore terminal state.
    let _ = term.leave();

    eprintln!(
        "[blockfall] seed {} score {} lines {} pieces {}{}",
        config.seed,
        game.score(),
        game.lines(),
        game.pieces_spawned(),
        if game.is_game_over() { " (game over)" } else { "" }
    );
    if config.dump_snapshot {
        println!("{}", serde_json::to_string(&game.snapshot())?);
    }

    result
}

fn run(term: &mut Screen, game: &mut GameEngine, config: &RunConfig) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut overlay = Overlay::default();

    let frame = Duration::from_millis(config.frame_ms);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, overlay, Viewport::new(w, h), &mut fb);
        term.present(&fb)?;

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(InputAction::Game(command)) if !overlay.paused => {
                            game.apply(command);
                        }
                        Some(InputAction::Pause) if !game.is_game_over() => {
                            overlay.paused = !overlay.paused;
                        }
                        Some(InputAction::Restart) => {
                            game.restart();
                            overlay.paused = false;
                            last_tick = Instant::now();
                        }
                        _ => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            if !overlay.paused {
                let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
                game.tick(elapsed_ms);
            }
        }
    }
}
