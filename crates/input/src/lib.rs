//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s. Letter keys are
//! case-insensitive; unrecognized keys map to nothing.

pub mod map;

pub use gridwalk_types as types;

pub use map::{handle_key_event, is_close_request, should_quit};
