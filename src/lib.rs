//! TUI 2048 (workspace facade crate).
//!
//! This package exposes `tui_2048::{core,input,scores,term,types}` while the
//! implementation lives in dedicated crates under `crates/`, and holds the
//! application glue the binary needs: environment configuration, logging
//! setup and the [`Session`] that connects a board to the leaderboard.

pub mod config;
pub mod logging;
pub mod session;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_scores as scores;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub use config::AppConfig;
pub use session::{Session, SessionEvent};
