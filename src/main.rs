//! Terminal client (default binary).
//!
//! crossterm for input, the framebuffer renderer for output, and a fixed frame
//! tick that feeds elapsed time to the game.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockdrop::config::Config;
use blockdrop::logging::init_logging;
use blockdrop::term::{FrameBuffer, TerminalRenderer, Viewport};
use blockdrop::App;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let app = result?;
    if let Some(score) = app.final_score() {
        println!("Game over. Final score: {}", score);
    } else {
        println!("Score: {}", app.snapshot().score);
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: Config) -> Result<App> {
    let tick = Duration::from_millis(config.tick_ms as u64);
    let mut app = App::new(config);
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        if app.render_into(viewport, &mut fb) {
            term.present(&fb)?;
        }

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                // Repeats arrive from terminals that report them; treat them as presses.
                Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                    app.handle_key(key)
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse, viewport),
                Event::Resize(_, _) => {
                    term.invalidate();
                    app.invalidate();
                }
                _ => {}
            }
        }

        if app.should_quit() {
            log::info!("quit at score {}", app.snapshot().score);
            return Ok(app);
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            app.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
