//! Line module - the compaction/merge primitive and the direction table
//!
//! Every move is expressed as the same operation on lines: pull a row or
//! column out of the grid so that the move goes towards index 0, merge it,
//! and write it back. [`line_plan`] says how each direction maps onto lines;
//! [`merge_line`] is the only place merge rules live.

use crate::types::{Cell, Direction, MAX_TILE};

/// Which grid lines a move operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Each row, read left to right
    Row,
    /// Each column, read top to bottom
    Column,
}

/// How a direction is reduced to the "move towards index 0" primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePlan {
    pub axis: Axis,
    /// Reverse the extracted line before merging.
    pub reverse_before: bool,
    /// Reverse the merged line before writing it back.
    pub reverse_after: bool,
}

/// Direction-to-line mapping table.
///
/// | Direction | axis | reverse before | reverse after |
/// |-----------|------|----------------|---------------|
/// | Left      | Row    | no  | no  |
/// | Right     | Row    | yes | yes |
/// | Up        | Column | no  | no  |
/// | Down      | Column | yes | yes |
pub const fn line_plan(direction: Direction) -> LinePlan {
    match direction {
        Direction::Left => LinePlan {
            axis: Axis::Row,
            reverse_before: false,
            reverse_after: false,
        },
        Direction::Right => LinePlan {
            axis: Axis::Row,
            reverse_before: true,
            reverse_after: true,
        },
        Direction::Up => LinePlan {
            axis: Axis::Column,
            reverse_before: false,
            reverse_after: false,
        },
        Direction::Down => LinePlan {
            axis: Axis::Column,
            reverse_before: true,
            reverse_after: true,
        },
    }
}

/// Compact and merge a line towards index 0, in place.
///
/// 1. Zeros are removed, keeping the order of the remaining tiles.
/// 2. One left-to-right pass merges each pair of equal neighbours into a tile
///    of double value. A tile produced by a merge is never merged again in the
///    same pass, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]` and `[2, 2, 2]`
///    becomes `[4, 2, 0]`.
/// 3. The tail is padded with zeros.
///
/// Returns the sum of the merged tile values, which is the score gained.
/// Tiles of [`MAX_TILE`] stay put instead of merging, and the gain saturates
/// at `u64::MAX`.
///
/// This is allocation-free; callers reuse one scratch buffer for every line.
pub fn merge_line(line: &mut [Cell]) -> u64 {
    // Compaction.
    let mut len = 0usize;
    for read in 0..line.len() {
        let v = line[read];
        if v != 0 {
            line[len] = v;
            len += 1;
        }
    }

    // Merge pass. `write <= read` always holds, and both `line[read]` and
    // `line[read + 1]` are read before `line[write]` is overwritten.
    let mut gained = 0u64;
    let mut write = 0usize;
    let mut read = 0usize;
    while read < len {
        let v = line[read];
        if read + 1 < len && can_merge(v, line[read + 1]) {
            let merged = v * 2;
            line[write] = merged;
            gained = gained.saturating_add(merged);
            read += 2;
        } else {
            line[write] = v;
            read += 1;
        }
        write += 1;
    }

    line[write..].fill(0);
    gained
}

/// Whether two neighbouring tiles combine into one. The doubled value must
/// still fit, so a pair of [`MAX_TILE`]s never merges.
#[inline]
pub const fn can_merge(a: Cell, b: Cell) -> bool {
    a != 0 && a == b && a <= MAX_TILE / 2
}

/// Allocating form of [`merge_line`].
///
/// # Examples
///
/// ```
/// use tui_2048_core::merged_line;
///
/// assert_eq!(merged_line(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
/// assert_eq!(merged_line(&[0, 2, 0, 0]), (vec![2, 0, 0, 0], 0));
/// ```
pub fn merged_line(line: &[Cell]) -> (Vec<Cell>, u64) {
    let mut out = line.to_vec();
    let gained = merge_line(&mut out);
    (out, gained)
}
