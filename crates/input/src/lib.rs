//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond crossterm's event
//! types. It maps key events into [`crate::types::GameAction`]. Every key
//! press is one action; there is no auto-repeat handling since a 2048 move is
//! discrete.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
