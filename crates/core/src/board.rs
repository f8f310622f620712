//! Board module - the N x N merge grid
//!
//! The board owns the cells, the score and the random source used for
//! spawning. Cells are a flat row-major array; coordinates are `(row, col)`
//! with row 0 at the top and column 0 on the left.
//!
//! A move is one pass over N lines driven by [`line_plan`]. When the grid
//! changes, exactly one tile is spawned before the move returns, so callers
//! can never observe a half-finished move or forget to spawn.

use crate::error::{BoardError, BoardResult};
use crate::line::{can_merge, line_plan, merge_line, Axis};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::BoardSnapshot;
use crate::types::{
    Cell, Direction, BASE_TILE, BONUS_TILE, BONUS_TILE_ODDS, INITIAL_TILES, MIN_BOARD_SIZE,
};

/// Whether the board still has a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// No empty cell and no equal neighbours. Terminal.
    GameOver,
}

/// A tile written by the spawn step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Cell,
}

/// Result of a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// The grid differs from the pre-move grid in at least one cell.
    pub changed: bool,
    /// Sum of the tiles produced by merges during this move.
    pub score_gained: u64,
    /// Tile spawned after the move. `None` exactly when `changed` is false.
    pub spawned: Option<Spawn>,
}

/// The game board: a square grid of power-of-two tiles plus the score
#[derive(Debug, Clone)]
pub struct Board<R = SimpleRng> {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
    score: u64,
    rng: R,
    /// Reused line buffer for moves.
    scratch: Vec<Cell>,
}

impl Board<SimpleRng> {
    /// Create a seeded board using the default RNG (seed 1).
    pub fn new(size: usize) -> BoardResult<Self> {
        Self::with_rng(size, SimpleRng::default())
    }

    /// Create a seeded board whose spawns follow `seed`.
    pub fn with_seed(size: usize, seed: u32) -> BoardResult<Self> {
        Self::with_rng(size, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Board<R> {
    /// Create a board of `size x size` and place the two starting tiles.
    ///
    /// Fails with [`BoardError::InvalidSize`] when `size < 2`.
    pub fn with_rng(size: usize, rng: R) -> BoardResult<Self> {
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::InvalidSize { size });
        }

        let mut board = Self {
            size,
            cells: vec![0; size * size],
            score: 0,
            rng,
            scratch: Vec::with_capacity(size),
        };
        for _ in 0..INITIAL_TILES {
            if board.empty_count() > 0 {
                board.spawn_tile();
            }
        }
        Ok(board)
    }

    /// Build a board from explicit rows. No tiles are spawned and the score
    /// starts at 0.
    ///
    /// Every row must be as long as there are rows, and every cell must be 0
    /// or a power of two >= 2.
    pub fn from_rows<Row: AsRef<[Cell]>>(rows: &[Row], rng: R) -> BoardResult<Self> {
        let size = rows.len();
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::InvalidSize { size });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: line.len(),
                    expected: size,
                });
            }
            for (col, &value) in line.iter().enumerate() {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
                cells.push(value);
            }
        }

        Ok(Self {
            size,
            cells,
            score: 0,
            rng,
            scratch: Vec::with_capacity(size),
        })
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total of all merges so far
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Get cell at (row, col). Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|v| **v == 0).count()
    }

    /// Number of nonzero cells
    pub fn tile_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    pub fn max_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Check whether no move can change the board.
    ///
    /// True iff there is no empty cell and no two horizontally or vertically
    /// adjacent cells can merge.
    pub fn is_game_over(&self) -> bool {
        if self.cells.iter().any(|v| *v == 0) {
            return false;
        }

        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                let v = self.cells[row * n + col];
                if col + 1 < n && can_merge(v, self.cells[row * n + col + 1]) {
                    return false;
                }
                if row + 1 < n && can_merge(v, self.cells[(row + 1) * n + col]) {
                    return false;
                }
            }
        }
        true
    }

    pub fn status(&self) -> GameStatus {
        if self.is_game_over() {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        }
    }

    /// Owned deep copy of the grid, score and terminal flag.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = BoardSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Refresh an existing snapshot, reusing its row allocations.
    pub fn snapshot_into(&self, snap: &mut BoardSnapshot) {
        let n = self.size;
        snap.size = n;
        snap.rows.resize_with(n, Vec::new);
        for (row, out) in snap.rows.iter_mut().enumerate() {
            out.clear();
            out.extend_from_slice(&self.cells[row * n..(row + 1) * n]);
        }
        snap.score = self.score;
        snap.game_over = self.is_game_over();
    }

    /// Push every tile in `direction`, merging equal neighbours.
    ///
    /// If any cell changed, the score grows by the merged values and one new
    /// tile is spawned. If nothing changed, the board, score and RNG are left
    /// exactly as they were. Calling this on a finished game is therefore a
    /// no-op that reports `changed == false`.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let plan = line_plan(direction);
        let n = self.size;

        let mut line = std::mem::take(&mut self.scratch);
        line.clear();
        line.resize(n, 0);

        let mut changed = false;
        let mut gained = 0u64;
        for i in 0..n {
            for (k, slot) in line.iter_mut().enumerate() {
                *slot = self.cells[line_index(plan.axis, n, i, k)];
            }
            if plan.reverse_before {
                line.reverse();
            }
            gained += merge_line(&mut line);
            if plan.reverse_after {
                line.reverse();
            }
            for (k, &value) in line.iter().enumerate() {
                let idx = line_index(plan.axis, n, i, k);
                if self.cells[idx] != value {
                    self.cells[idx] = value;
                    changed = true;
                }
            }
        }
        self.scratch = line;

        if !changed {
            // Any merge removes a tile, so an unchanged grid had no merges.
            debug_assert_eq!(gained, 0);
            return MoveOutcome::default();
        }

        self.score = self.score.saturating_add(gained);
        let spawned = if self.empty_count() > 0 {
            self.spawn_tile()
        } else {
            None
        };
        MoveOutcome {
            changed,
            score_gained: gained,
            spawned,
        }
    }

    /// Same as [`Board::apply_move`], reporting only whether the grid changed.
    pub fn move_tiles(&mut self, direction: Direction) -> bool {
        self.apply_move(direction).changed
    }

    pub fn move_left(&mut self) -> bool {
        self.move_tiles(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_tiles(Direction::Right)
    }

    pub fn move_up(&mut self) -> bool {
        self.move_tiles(Direction::Up)
    }

    pub fn move_down(&mut self) -> bool {
        self.move_tiles(Direction::Down)
    }

    /// Write a 2 (90%) or 4 (10%) into a uniformly chosen empty cell.
    ///
    /// Precondition: at least one cell is empty. Callers check this first;
    /// debug builds assert it. Draws the cell index first, then the value.
    fn spawn_tile(&mut self) -> Option<Spawn> {
        let empty = self.empty_count();
        debug_assert!(empty > 0, "spawn_tile called on a full board");

        let mut nth = self.rng.next_range(empty as u32) as usize;
        let value = if self.rng.next_range(BONUS_TILE_ODDS) < BONUS_TILE_ODDS - 1 {
            BASE_TILE
        } else {
            BONUS_TILE
        };

        for (idx, cell) in self.cells.iter_mut().enumerate() {
            if *cell != 0 {
                continue;
            }
            if nth == 0 {
                *cell = value;
                return Some(Spawn {
                    row: idx / self.size,
                    col: idx % self.size,
                    value,
                });
            }
            nth -= 1;
        }
        None
    }
}

/// Flat index of the `k`-th cell of line `i` along `axis`.
#[inline(always)]
fn line_index(axis: Axis, n: usize, i: usize, k: usize) -> usize {
    match axis {
        Axis::Row => i * n + k,
        Axis::Column => k * n + i,
    }
}
