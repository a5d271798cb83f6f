//! Integration tests for the game loop driver

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use gridwalk::core::{GameRules, GameState};
use gridwalk::engine::{Control, GameDriver, NoticeKind};
use gridwalk::input::{handle_key_event, is_close_request};
use gridwalk::types::Outcome;
use gridwalk::Config;

const TICK: Duration = Duration::from_millis(50);

/// Feed a key the way the binary does.
fn press(driver: &mut GameDriver, code: KeyCode) -> Control {
    let key = KeyEvent::from(code);
    if let Some(action) = handle_key_event(key) {
        driver.handle(action)
    } else if driver.notice().is_some() {
        driver.dismiss_notice()
    } else {
        Control::Continue
    }
}

fn default_driver() -> (GameDriver, Instant) {
    let t0 = Instant::now();
    let state = GameState::from_default_map(GameRules::default()).unwrap();
    (GameDriver::new(state, TICK, t0), t0)
}

#[test]
fn test_escape_quits_mid_game() {
    let (mut driver, _) = default_driver();
    assert_eq!(press(&mut driver, KeyCode::Char('d')), Control::Continue);
    assert_eq!(press(&mut driver, KeyCode::Esc), Control::Quit);
    assert!(!driver.is_running());
    assert_eq!(driver.state().outcome(), Outcome::InProgress);
}

#[test]
fn test_ctrl_c_is_a_close_request() {
    let (mut driver, _) = default_driver();
    let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(is_close_request(key));
    assert_eq!(driver.request_close(), Control::Quit);
    assert!(!driver.is_running());
}

#[test]
fn test_unknown_keys_do_nothing() {
    let (mut driver, _) = default_driver();
    assert_eq!(press(&mut driver, KeyCode::Char('x')), Control::Continue);
    assert_eq!(press(&mut driver, KeyCode::Enter), Control::Continue);
    assert_eq!(driver.state().moves(), 0);
    assert!(driver.is_running());
}

#[test]
fn test_full_playthrough_with_keys() {
    let (mut driver, t0) = default_driver();

    // Straight to the exit first: locked.
    for _ in 0..5 {
        press(&mut driver, KeyCode::Char('D'));
    }
    assert_eq!(
        driver.notice().map(|n| n.kind),
        Some(NoticeKind::ExitBlocked)
    );
    assert_eq!(driver.notice().unwrap().message, "Collect all items! (0/1)");

    // Any key closes the notice without moving.
    press(&mut driver, KeyCode::Char(' '));
    assert!(driver.notice().is_none());
    assert_eq!(driver.state().moves(), 5);

    // Pick up the item, then return.
    for _ in 0..5 {
        press(&mut driver, KeyCode::Right);
    }
    assert_eq!(driver.state().collected(), 1);
    for _ in 0..5 {
        press(&mut driver, KeyCode::Char('a'));
    }
    assert_eq!(driver.state().outcome(), Outcome::Won);
    assert_eq!(driver.notice().map(|n| n.kind), Some(NoticeKind::Victory));

    // Animation stopped with the outcome.
    let frame = driver.state().animation_frame();
    assert!(!driver.on_tick(t0 + TICK * 100));
    assert_eq!(driver.state().animation_frame(), frame);

    // Closing the victory notice ends the loop.
    assert_eq!(press(&mut driver, KeyCode::Char('w')), Control::Quit);
    assert!(!driver.is_running());
}

#[test]
fn test_tick_interval_from_config() {
    let cfg = Config::from_lookup(|key| (key == "GRIDWALK_TICK_MS").then(|| "20".to_string()));
    let t0 = Instant::now();
    let state = GameState::from_default_map(cfg.rules()).unwrap();
    let mut driver = GameDriver::new(state, cfg.tick(), t0);

    assert!(!driver.on_tick(t0 + Duration::from_millis(19)));
    assert!(driver.on_tick(t0 + Duration::from_millis(20)));
    assert!(driver.on_tick(t0 + Duration::from_millis(100)));
    assert_eq!(driver.state().animation_frame(), 5);
}
