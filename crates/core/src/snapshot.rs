use crate::types::Cell;

/// Owned copy of everything a consumer needs to draw or inspect a board.
///
/// Snapshots never alias the board they came from; mutating one has no
/// effect on the game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoardSnapshot {
    pub size: usize,
    pub rows: Vec<Vec<Cell>>,
    pub score: u64,
    pub game_over: bool,
}

impl BoardSnapshot {
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Largest tile on the board, 0 when empty.
    pub fn max_tile(&self) -> Cell {
        self.rows
            .iter()
            .flat_map(|r| r.iter().copied())
            .max()
            .unwrap_or(0)
    }

    pub fn empty_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.iter())
            .filter(|v| **v == 0)
            .count()
    }
}
