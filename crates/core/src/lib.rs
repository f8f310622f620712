//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the board engine: the grid, the merge rules, tile
//! spawning and game-over detection. It has **zero dependencies** on UI,
//! storage, or I/O, and it never logs. That makes it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Randomness is injected through [`RandomSource`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid, moves, spawning and terminal detection
//! - [`line`]: the single compaction/merge primitive and the direction table
//! - [`rng`]: injectable random source and the default LCG
//! - [`snapshot`]: owned copies of board state for consumers
//! - [`error`]: construction errors
//!
//! # Game Rules
//!
//! - A move pushes every tile as far as possible in one direction.
//! - Two equal tiles that meet merge into one tile of double value; the new
//!   value is added to the score. A merged tile does not merge again in the
//!   same move.
//! - After every move that changes the board, one tile spawns in a random
//!   empty cell: a 2 nine times out of ten, otherwise a 4.
//! - The game is over when the board is full and no neighbours are equal.
//!   Moves on a finished board are accepted and change nothing.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::Board;
//! use tui_2048_types::Direction;
//!
//! let mut board = Board::with_seed(4, 12345).unwrap();
//! assert_eq!(board.tile_count(), 2);
//!
//! let outcome = board.apply_move(Direction::Left);
//! if outcome.changed {
//!     assert!(outcome.spawned.is_some());
//! }
//! assert!(!board.is_game_over());
//! ```

pub mod board;
pub mod error;
pub mod line;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, GameStatus, MoveOutcome, Spawn};
pub use error::{BoardError, BoardResult};
pub use line::{can_merge, line_plan, merge_line, merged_line, Axis, LinePlan};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::BoardSnapshot;
