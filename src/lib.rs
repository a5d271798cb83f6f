//! gridwalk (workspace facade crate).
//!
//! Exposes `gridwalk::{core,engine,input,term,types}` from the dedicated crates
//! under `crates/`, plus the binary-side `config` and `logging` modules.

pub mod config;
pub mod logging;

pub use gridwalk_core as core;
pub use gridwalk_engine as engine;
pub use gridwalk_input as input;
pub use gridwalk_term as term;
pub use gridwalk_types as types;

pub use config::Config;
