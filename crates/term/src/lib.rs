//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that can be flushed to a terminal
//! backend, instead of going through a widget toolkit.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Express the board's shapes (tiles, stars, arches, patrols) as styled cells
//! - Allow precise control over aspect ratio (e.g. 4x2 chars per map cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use gridwalk_core as core;
pub use gridwalk_engine as engine;
pub use gridwalk_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
