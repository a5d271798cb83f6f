//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, the map and the state transitions.
//! It has **no dependencies** on terminals, timers, or I/O, making it:
//!
//! - **Deterministic**: The same key sequence always produces the same game
//! - **Testable**: Every rule is covered by plain unit tests
//! - **Portable**: Can be driven by any front end (terminal, headless)
//!
//! # Module Structure
//!
//! - [`map`]: ASCII level parsing and validation into a [`Grid`]
//! - [`game_state`]: Player, hazards, counters, outcome, and the move rule
//! - [`pulse`]: Triangular waveform used for sprite animation
//! - [`snapshot`]: Borrowed read-only view for renderers
//!
//! # Game Rules
//!
//! - Walls and the grid edge block movement; a blocked move changes nothing
//! - Stepping onto a hazard loses the game
//! - Stepping onto a collectible picks it up and turns the cell into floor
//! - The exit wins only once every collectible has been picked up
//! - Once the game is won or lost, further moves are ignored
//!
//! # Example
//!
//! ```
//! use gridwalk_core::{GameState, MoveResult};
//! use gridwalk_types::{Direction, Outcome};
//!
//! let mut game = GameState::new(&["1P0000E0000C0X"]).unwrap();
//!
//! // Walk right onto the exit before collecting the item: no win.
//! for _ in 0..5 {
//!     game.move_player(Direction::Right);
//! }
//! assert_eq!(game.outcome(), Outcome::InProgress);
//!
//! // Collect the item and come back.
//! for _ in 0..5 {
//!     game.move_player(Direction::Right);
//! }
//! assert_eq!(game.collected(), 1);
//! for _ in 0..4 {
//!     game.move_player(Direction::Left);
//! }
//! assert_eq!(game.move_player(Direction::Left), MoveResult::Won);
//! ```

pub mod game_state;
pub mod map;
pub mod pulse;
pub mod snapshot;

pub use gridwalk_types as types;

// Re-export commonly used types for convenience
pub use game_state::{ExitPolicy, GameRules, GameState, MoveResult};
pub use map::{Grid, MapError, ParsedMap, DEFAULT_MAP};
pub use pulse::Pulse;
pub use snapshot::GameSnapshot;
