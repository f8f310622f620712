//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board engine, terminal rendering, score keeping).
//!
//! # Board Dimensions
//!
//! Boards are square. The classic game is 4x4, but any size from
//! [`MIN_BOARD_SIZE`] upwards is playable.
//!
//! # Tile Spawning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TILES` | 2 | Tiles placed when a board is created |
//! | `BASE_TILE` | 2 | Value of a regular spawn |
//! | `BONUS_TILE` | 4 | Value of a rare spawn |
//! | `BONUS_TILE_ODDS` | 10 | One spawn in ten is a bonus tile |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_BOARD_SIZE};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
//! assert_eq!(Direction::from_str("u"), Some(Direction::Up));
//!
//! // Game actions carry their direction
//! let action = GameAction::from_str("moveDown").unwrap();
//! assert_eq!(action.direction(), Some(Direction::Down));
//!
//! assert_eq!(DEFAULT_BOARD_SIZE, 4);
//! ```

/// Smallest playable board side length.
pub const MIN_BOARD_SIZE: usize = 2;

/// Board side length used when nothing else is configured.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Number of tiles seeded onto a fresh board.
pub const INITIAL_TILES: usize = 2;

/// Value of a regular spawned tile.
pub const BASE_TILE: Cell = 2;

/// Value of the rarer spawned tile.
pub const BONUS_TILE: Cell = 4;

/// A spawn is a [`BONUS_TILE`] once in this many draws (10% of the time).
pub const BONUS_TILE_ODDS: u32 = 10;

/// The tile the game is named after. Reaching it does not end the game.
pub const WIN_TILE: Cell = 2048;

/// Largest tile a [`Cell`] can hold. Two of them never merge, so tile values
/// and scores cannot overflow.
pub const MAX_TILE: Cell = 1 << 63;

/// A cell on the game board
///
/// - `0`: Empty cell
/// - power of two >= 2: a tile
pub type Cell = u64;

/// The four directions tiles can be pushed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Every direction, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "left" | "l", "right" | "r", "up" | "u", "down" | "d"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("Right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("d"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Game actions that can be applied by the player
///
/// Moves are forwarded to the board; `Restart` is handled by the session
/// that owns the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Push every tile towards column 0
    MoveLeft,
    /// Push every tile towards the last column
    MoveRight,
    /// Push every tile towards row 0
    MoveUp,
    /// Push every tile towards the last row
    MoveDown,
    /// Abandon the current board and start a new one
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::Restart => "restart",
        }
    }

    /// The direction this action pushes tiles in, if it is a move.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::Restart => None,
        }
    }
}

impl From<Direction> for GameAction {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
        }
    }
}
