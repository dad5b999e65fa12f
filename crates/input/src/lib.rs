//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into engine [`Command`](crate::types::Command)s
//! and the few actions the shell handles itself (pause, restart).

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, InputAction};
