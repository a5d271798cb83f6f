//! Loop driver: owns the game, the animation timer and the active notice.
//!
//! The terminal binary feeds it actions and clock readings; everything that
//! decides *when* the loop stops lives here so it can be tested without a TTY.

use std::time::{Duration, Instant};

use log::info;

use crate::core::{GameState, MoveResult};
use crate::notice::Notice;
use crate::timer::RepeatingTimer;
use crate::types::GameAction;

/// What the loop should do after dispatching an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct GameDriver {
    state: GameState,
    timer: RepeatingTimer,
    notice: Option<Notice>,
    running: bool,
}

impl GameDriver {
    pub fn new(state: GameState, tick: Duration, now: Instant) -> Self {
        Self {
            state,
            timer: RepeatingTimer::new(tick, now),
            notice: None,
            running: true,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn timer(&self) -> &RepeatingTimer {
        &self.timer
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// How long to wait for input before the next tick is due.
    ///
    /// `None` once the timer has been cancelled (wait for input only).
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_next(now)
    }

    /// Dispatch one input action.
    pub fn handle(&mut self, action: GameAction) -> Control {
        if !self.running {
            return Control::Quit;
        }

        if action == GameAction::Quit {
            return self.stop("quit requested");
        }

        // A visible notice is modal: the key only dismisses it.
        if self.notice.is_some() {
            return self.dismiss_notice();
        }

        let GameAction::Move(dir) = action else {
            return Control::Continue;
        };

        let result = self.state.move_player(dir);
        match result {
            MoveResult::Lost => {
                self.timer.cancel();
                self.notice = Some(Notice::game_over());
            }
            MoveResult::Won => {
                self.timer.cancel();
                self.notice = Some(Notice::victory());
            }
            _ => {
                if let Some((collected, total)) = result.exit_blocked() {
                    self.notice = Some(Notice::exit_blocked(collected, total));
                }
            }
        }
        Control::Continue
    }

    /// Close the active notice. Closing a win/loss notice ends the loop.
    pub fn dismiss_notice(&mut self) -> Control {
        match self.notice.take() {
            Some(n) if n.is_terminal() => self.stop(&n.title),
            _ => Control::Continue,
        }
    }

    /// Window-close style shutdown, regardless of outcome.
    pub fn request_close(&mut self) -> Control {
        self.stop("close requested")
    }

    /// Advance animation for every timer tick that came due.
    ///
    /// Returns true when a redraw is due.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let fired = self.timer.poll(now);
        if fired == 0 {
            return false;
        }
        for _ in 0..fired {
            if !self.state.advance_frame() {
                self.timer.cancel();
                break;
            }
        }
        true
    }

    fn stop(&mut self, reason: &str) -> Control {
        if self.running {
            info!(
                "stopping ({}): outcome={}, moves={}",
                reason,
                self.state.outcome().as_str(),
                self.state.moves()
            );
        }
        self.running = false;
        self.timer.cancel();
        Control::Quit
    }
}
