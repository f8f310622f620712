//! Board tests - move semantics, game over detection and construction

use tui_2048::core::{Board, BoardError, MoveOutcome, SimpleRng};
use tui_2048::types::{Cell, Direction, BASE_TILE, BONUS_TILE, INITIAL_TILES};

fn board(rows: &[[Cell; 4]]) -> Board {
    Board::from_rows(rows, SimpleRng::new(7)).unwrap()
}

fn grid(board: &Board) -> Vec<Vec<Cell>> {
    board.snapshot().rows
}

/// The grid right after merging, before the spawned tile landed.
fn grid_before_spawn(board: &Board, outcome: &MoveOutcome) -> Vec<Vec<Cell>> {
    let mut rows = grid(board);
    let spawn = outcome.spawned.expect("changed moves spawn a tile");
    assert!(spawn.value == BASE_TILE || spawn.value == BONUS_TILE);
    assert_eq!(rows[spawn.row][spawn.col], spawn.value);
    rows[spawn.row][spawn.col] = 0;
    rows
}

const MIXED: [[Cell; 4]; 4] = [[2, 2, 4, 4], [0, 0, 0, 2], [2, 0, 2, 0], [0, 0, 0, 0]];

#[test]
fn test_move_left_ground_truth() {
    let mut b = board(&MIXED);
    let outcome = b.apply_move(Direction::Left);

    assert!(outcome.changed);
    assert_eq!(outcome.score_gained, 12);
    assert_eq!(b.score(), 12);
    assert_eq!(
        grid_before_spawn(&b, &outcome),
        vec![
            vec![4, 8, 0, 0],
            vec![2, 0, 0, 0],
            vec![4, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]
    );
}

#[test]
fn test_move_right_ground_truth() {
    let mut b = board(&MIXED);
    let outcome = b.apply_move(Direction::Right);

    assert!(outcome.changed);
    assert_eq!(outcome.score_gained, 12);
    assert_eq!(
        grid_before_spawn(&b, &outcome),
        vec![
            vec![0, 0, 4, 8],
            vec![0, 0, 0, 2],
            vec![0, 0, 0, 4],
            vec![0, 0, 0, 0],
        ]
    );
}

#[test]
fn test_move_up_and_down_work_on_columns() {
    let rows: [[Cell; 4]; 4] = [[2, 0, 0, 4], [2, 0, 0, 0], [0, 0, 0, 4], [2, 0, 0, 8]];

    let mut up = board(&rows);
    let outcome = up.apply_move(Direction::Up);
    assert_eq!(outcome.score_gained, 12);
    let after = grid_before_spawn(&up, &outcome);
    let col0: Vec<Cell> = after.iter().map(|r| r[0]).collect();
    let col3: Vec<Cell> = after.iter().map(|r| r[3]).collect();
    assert_eq!(col0, vec![4, 2, 0, 0]);
    assert_eq!(col3, vec![8, 8, 0, 0]);

    let mut down = board(&rows);
    let outcome = down.apply_move(Direction::Down);
    let after = grid_before_spawn(&down, &outcome);
    let col0: Vec<Cell> = after.iter().map(|r| r[0]).collect();
    let col3: Vec<Cell> = after.iter().map(|r| r[3]).collect();
    assert_eq!(col0, vec![0, 0, 2, 4]);
    assert_eq!(col3, vec![0, 0, 8, 8]);
}

#[test]
fn test_slide_without_merge_counts_as_change() {
    let rows: [[Cell; 4]; 4] = [[0, 2, 0, 0], [0; 4], [0; 4], [0; 4]];
    let mut b = board(&rows);
    let outcome = b.apply_move(Direction::Left);

    assert!(outcome.changed);
    assert_eq!(outcome.score_gained, 0);
    assert_eq!(grid_before_spawn(&b, &outcome)[0], vec![2, 0, 0, 0]);
    assert_eq!(b.tile_count(), 2);
}

#[test]
fn test_unchanged_move_keeps_grid_score_and_empties() {
    let rows: [[Cell; 4]; 4] = [[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [16, 2, 0, 0]];
    let mut b = board(&rows);
    let before = grid(&b);
    let empties = b.empty_count();

    let outcome = b.apply_move(Direction::Left);

    assert_eq!(outcome, MoveOutcome::default());
    assert_eq!(grid(&b), before);
    assert_eq!(b.empty_count(), empties);
    assert_eq!(b.score(), 0);
}

#[test]
fn test_checkerboard_is_game_over() {
    let rows: [[Cell; 4]; 4] = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
    let b = board(&rows);
    assert!(b.is_game_over());
    assert!(b.snapshot().game_over);
}

#[test]
fn test_full_board_with_a_pair_is_not_over() {
    // Horizontal pair in the last row.
    let rows: [[Cell; 4]; 4] = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]];
    assert!(!board(&rows).is_game_over());

    // Vertical pair in the last column.
    let rows: [[Cell; 4]; 4] = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 16], [4, 2, 4, 16]];
    assert!(!board(&rows).is_game_over());
}

#[test]
fn test_board_with_an_empty_cell_is_not_over() {
    let rows: [[Cell; 4]; 4] = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]];
    assert!(!board(&rows).is_game_over());
}

#[test]
fn test_moves_after_game_over_are_no_ops() {
    let rows: [[Cell; 4]; 4] = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
    let mut b = board(&rows);
    let before = grid(&b);

    for direction in Direction::ALL {
        let outcome = b.apply_move(direction);
        assert!(!outcome.changed, "{:?} changed a finished board", direction);
        assert_eq!(outcome.spawned, None);
    }
    assert_eq!(grid(&b), before);
    assert_eq!(b.score(), 0);
}

#[test]
fn test_new_board_has_two_starting_tiles_for_every_size() {
    for size in 2..=8 {
        for seed in [0u32, 1, 42, 0xdead_beef] {
            let b = Board::with_seed(size, seed).unwrap();
            assert_eq!(b.size(), size);
            assert_eq!(b.score(), 0);
            assert_eq!(b.tile_count(), INITIAL_TILES);

            let snap = b.snapshot();
            for value in snap.rows.iter().flatten().filter(|v| **v != 0) {
                assert!(
                    *value == BASE_TILE || *value == BONUS_TILE,
                    "size {} seed {} spawned {}",
                    size,
                    seed,
                    value
                );
            }
        }
    }
}

#[test]
fn test_invalid_sizes_are_rejected() {
    for size in [0, 1] {
        assert_eq!(
            Board::with_seed(size, 1).err(),
            Some(BoardError::InvalidSize { size })
        );
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut a = Board::with_seed(4, 2024).unwrap();
    let mut b = Board::with_seed(4, 2024).unwrap();
    for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down].repeat(5) {
        assert_eq!(a.apply_move(direction), b.apply_move(direction));
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_boards_are_independent() {
    let mut a = board(&MIXED);
    let b = board(&MIXED);
    a.move_left();
    assert_ne!(grid(&a), grid(&b));
    assert_eq!(b.score(), 0);
}
