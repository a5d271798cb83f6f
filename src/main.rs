//! Terminal runner (default binary).
//!
//! Loads the built-in level and runs the single-threaded loop: render, wait
//! for input until the next animation tick, dispatch, tick. Uses crossterm for
//! input and a framebuffer renderer for output.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use gridwalk::config::Config;
use gridwalk::core::GameState;
use gridwalk::engine::{Control, GameDriver};
use gridwalk::input::{handle_key_event, is_close_request};
use gridwalk::logging;
use gridwalk::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Upper bound on a single input wait once the animation timer has stopped.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;

    let state = GameState::from_default_map(config.rules()).context("load built-in map")?;
    info!(
        "starting: tick={}ms exit_policy={}",
        config.tick_ms,
        config.exit_policy.as_str()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut driver = GameDriver::new(state, config.tick(), Instant::now());
    let result = run(&mut term, &mut driver);

    // Always try to restore terminal state.
    let _ = term.exit();

    let game = driver.state();
    info!(
        "finished: outcome={} moves={} items={}/{}",
        game.outcome().as_str(),
        game.moves(),
        game.collected(),
        game.total_collectibles()
    );
    result
}

fn run(term: &mut TerminalRenderer, driver: &mut GameDriver) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    while driver.is_running() {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or_else(|_| {
                let need = view.frame_size(driver.state().grid());
                (need.width, need.height)
            });
            view.render_into_with_notice(
                &driver.state().snapshot(),
                driver.notice(),
                Viewport::new(w, h),
                &mut fb,
            );
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        let timeout = driver
            .time_until_next_tick(Instant::now())
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let control = if is_close_request(key) {
                        driver.request_close()
                    } else if let Some(action) = handle_key_event(key) {
                        driver.handle(action)
                    } else if driver.notice().is_some() {
                        // Modal notice: any key closes it.
                        driver.dismiss_notice()
                    } else {
                        Control::Continue
                    };
                    if control == Control::Quit {
                        break;
                    }
                    dirty = true;
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if driver.on_tick(Instant::now()) {
            dirty = true;
        }
    }

    Ok(())
}
