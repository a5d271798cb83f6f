//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, the loop driver).
//!
//! # Map Codes
//!
//! Levels are written as rows of ASCII cell codes:
//!
//! | Code | Cell |
//! |------|------|
//! | `0` | Empty floor |
//! | `1` | Wall |
//! | `C` | Collectible |
//! | `E` | Exit |
//! | `P` | Player start (rewritten to floor at load) |
//! | `X` | Hazard (a stationary patrol) |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Animation tick interval |
//! | `MIN_TICK_MS` | 10 | Lower bound accepted from configuration |
//!
//! # Animation Periods
//!
//! Pulsing sprites use a triangular waveform over the animation frame counter:
//!
//! | Sprite | Period (frames) | Amplitude |
//! |--------|-----------------|-----------|
//! | Collectible | 20 | 0.20 |
//! | Hazard | 16 | 0.15 |
//! | Player breathing | 30 | 0.05 |
//!
//! # Examples
//!
//! ```
//! use gridwalk_types::{CellKind, Direction, GameAction, Pos};
//!
//! assert_eq!(CellKind::from_code('1'), Some(CellKind::Wall));
//! assert_eq!(CellKind::Collectible.code(), 'C');
//!
//! let p = Pos::new(1, 3).step(Direction::Right);
//! assert_eq!(p, Pos::new(2, 3));
//!
//! assert_eq!(GameAction::from_str("up"), Some(GameAction::Move(Direction::Up)));
//! ```

/// Animation tick interval in milliseconds.
pub const TICK_MS: u32 = 50;

/// Smallest tick interval accepted from configuration.
pub const MIN_TICK_MS: u32 = 10;

/// Collectible pulse period in frames.
pub const COLLECTIBLE_PULSE_PERIOD: u32 = 20;
/// Collectible pulse amplitude (fraction of base size).
pub const COLLECTIBLE_PULSE_AMPLITUDE: f32 = 0.2;

/// Hazard pulse period in frames.
pub const HAZARD_PULSE_PERIOD: u32 = 16;
/// Hazard pulse amplitude (fraction of base size).
pub const HAZARD_PULSE_AMPLITUDE: f32 = 0.15;

/// Player breathing period in frames.
pub const PLAYER_BREATH_PERIOD: u32 = 30;
/// Player breathing amplitude (fraction of base size).
pub const PLAYER_BREATH_AMPLITUDE: f32 = 0.05;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_defaults() {
        assert_eq!(TICK_MS, 50);
        assert_eq!(COLLECTIBLE_PULSE_PERIOD, 20);
        assert_eq!(HAZARD_PULSE_PERIOD, 16);
        assert_eq!(PLAYER_BREATH_PERIOD, 30);
    }

    #[test]
    fn cell_codes_round_trip_through_kind() {
        for code in ['0', '1', 'C', 'E', 'X'] {
            let kind = CellKind::from_code(code).unwrap();
            assert_eq!(kind.code(), code);
        }
        assert_eq!(CellKind::from_code('?'), None);
    }

    #[test]
    fn direction_deltas_are_unit_steps() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
        for dir in Direction::ALL {
            assert_eq!(Direction::from_delta(dir.delta().0, dir.delta().1), Some(dir));
        }
        assert_eq!(Direction::from_delta(1, 1), None);
        assert_eq!(Direction::from_delta(0, 0), None);
    }

    #[test]
    fn outcome_terminal_flags() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Won.is_terminal());
        assert!(Outcome::Lost.is_terminal());
    }
}

/// Kind of a single map cell.
///
/// The player start marker `P` is not a cell kind: the player is tracked out
/// of band and the start cell becomes [`CellKind::Empty`] once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Empty,
    Wall,
    Collectible,
    Exit,
    Hazard,
}

/// Map code for the player start marker.
pub const PLAYER_CODE: char = 'P';

impl CellKind {
    /// Parse a cell kind from its map code.
    ///
    /// Returns `None` for unknown codes and for the player marker.
    pub fn from_code(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(CellKind::Empty),
            '1' => Some(CellKind::Wall),
            'C' => Some(CellKind::Collectible),
            'E' => Some(CellKind::Exit),
            'X' => Some(CellKind::Hazard),
            _ => None,
        }
    }

    /// Map code for this kind.
    pub fn code(&self) -> char {
        match self {
            CellKind::Empty => '0',
            CellKind::Wall => '1',
            CellKind::Collectible => 'C',
            CellKind::Exit => 'E',
            CellKind::Hazard => 'X',
        }
    }

    pub fn is_walkable(&self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Empty => "empty",
            CellKind::Wall => "wall",
            CellKind::Collectible => "collectible",
            CellKind::Exit => "exit",
            CellKind::Hazard => "hazard",
        }
    }
}

/// Grid coordinate. `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring position one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)` for this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Inverse of [`Direction::delta`]. Anything but a unit step is `None`.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    Quit,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(GameAction::Move(Direction::Up)),
            "down" => Some(GameAction::Move(Direction::Down)),
            "left" => Some(GameAction::Move(Direction::Left)),
            "right" => Some(GameAction::Move(Direction::Right)),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Quit => "quit",
        }
    }
}

/// Game outcome. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::InProgress => "in_progress",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }
}
