//! Leaderboard persistence for finished games.
//!
//! The board engine knows nothing about this crate. When a game ends the
//! session hands a `(player, score)` pair to a [`ScoreStore`], which keeps
//! the best score per player and lists everyone from highest to lowest.
//!
//! Two stores are provided:
//!
//! - [`MemoryStore`]: process-local, used in tests and when no file is usable
//! - [`JsonFileStore`]: a small JSON document on disk
//!
//! # Example
//!
//! ```
//! use tui_2048_scores::{MemoryStore, RecordOutcome, ScoreStore};
//!
//! let mut store = MemoryStore::new();
//! assert_eq!(store.record("ada", 512).unwrap(), RecordOutcome::Inserted);
//! assert_eq!(
//!     store.record("ada", 2048).unwrap(),
//!     RecordOutcome::Improved { previous: 512 }
//! );
//! assert_eq!(store.best("ada").unwrap().unwrap().score, 2048);
//! ```

pub mod error;
pub mod json;
pub mod store;

pub use error::{ScoreError, ScoreResult};
pub use json::JsonFileStore;
pub use store::{Leaderboard, MemoryStore, RecordOutcome, ScoreEntry, ScoreStore};
