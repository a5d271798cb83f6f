//! Loop driver module (engine-facing).
//!
//! Sits between the pure core and the terminal: it owns the [`GameState`],
//! the animation [`RepeatingTimer`] and the modal [`Notice`], and decides when
//! the interactive loop stops. It never touches the terminal or the clock;
//! callers pass `Instant`s in.
//!
//! [`GameState`]: crate::core::GameState

pub mod driver;
pub mod notice;
pub mod timer;

pub use gridwalk_core as core;
pub use gridwalk_types as types;

pub use driver::{Control, GameDriver};
pub use notice::{Notice, NoticeKind};
pub use timer::RepeatingTimer;
