//! Application configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TUI_2048_SIZE` | 4 | Board side length |
//! | `TUI_2048_SEED` | system clock | Seed for tile spawns |
//! | `TUI_2048_PLAYER` | prompt | Player name for the leaderboard |
//! | `TUI_2048_SCORES_PATH` | platform data dir | Leaderboard JSON file |
//! | `TUI_2048_LOG_PATH` | `tui-2048.log` | Log file; empty disables logging |
//!
//! Values that do not parse fall back to the default. Sizes below 2 are
//! passed through so that board construction reports them.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use directories::ProjectDirs;

use crate::types::DEFAULT_BOARD_SIZE;

pub const SCORES_FILENAME: &str = "scores.json";
pub const DEFAULT_LOG_PATH: &str = "tui-2048.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub size: usize,
    pub seed: u32,
    /// Player name given up front; `None` means ask on stdin.
    pub player: Option<String>,
    pub scores_path: PathBuf,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            seed: clock_seed(),
            player: None,
            scores_path: default_scores_path(),
            log_path: Some(PathBuf::from(DEFAULT_LOG_PATH)),
        }
    }
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let size = lookup("TUI_2048_SIZE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_BOARD_SIZE);

        let seed = lookup("TUI_2048_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let player = lookup("TUI_2048_PLAYER")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let scores_path = lookup("TUI_2048_SCORES_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_scores_path);

        let log_path = match lookup("TUI_2048_LOG_PATH") {
            Some(s) if s.trim().is_empty() => None,
            Some(s) => Some(PathBuf::from(s.trim())),
            None => Some(PathBuf::from(DEFAULT_LOG_PATH)),
        };

        Self {
            size,
            seed,
            player,
            scores_path,
            log_path,
        }
    }
}

/// `scores.json` in the user's data directory, or the working directory
/// when the platform has none.
pub fn default_scores_path() -> PathBuf {
    match ProjectDirs::from("", "", "tui-2048") {
        Some(dirs) => dirs.data_dir().join(SCORES_FILENAME),
        None => PathBuf::from(SCORES_FILENAME),
    }
}

fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}
