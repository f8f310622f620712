use tui_2048::core::{Board, BoardSnapshot, SimpleRng};
use tui_2048::term::{tile_color, AnchorY, GameView, PanelInfo, Viewport};
use tui_2048::types::Cell;

fn snapshot(rows: [[Cell; 4]; 4]) -> BoardSnapshot {
    Board::from_rows(&rows, SimpleRng::new(1)).unwrap().snapshot()
}

fn find_row(fb: &tui_2048::term::FrameBuffer, needle: &str) -> Option<u16> {
    (0..fb.height()).find(|&y| fb.row_text(y).contains(needle))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = snapshot([[0; 4]; 4]);
    let view = GameView::default();

    // 4 tiles of 6x3, 5 one-cell gutters and the border => 31x19.
    let fb = view.render(&snap, Viewport::new(31, 19));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(30, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 18).unwrap().ch, '└');
    assert_eq!(fb.get(30, 18).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_tile_label() {
    let mut rows = [[0; 4]; 4];
    rows[0][0] = 2;
    rows[3][3] = 2048;
    let snap = snapshot(rows);
    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(31, 19));

    // Tile (0,0) starts at (2,2); a one-char label sits at column 2+5/2, middle row.
    let cell = fb.get(4, 3).unwrap();
    assert_eq!(cell.ch, '2');
    assert_eq!(cell.style.bg, tile_color(2));
    assert!(cell.style.bold);

    // Tile (3,3) starts at (23,14); "2048" starts at 23+1.
    let (x, y) = view.tile_origin(3, 3);
    assert_eq!((x, y), (23, 14));
    let text: String = (x + 1..x + 5).map(|cx| fb.get(cx, y + 1).unwrap().ch).collect();
    assert_eq!(text, "2048");
}

#[test]
fn term_view_shows_empty_tiles_in_their_color() {
    let snap = snapshot([[0; 4]; 4]);
    let fb = GameView::default().render(&snap, Viewport::new(31, 19));
    assert_eq!(fb.get(2, 2).unwrap().style.bg, tile_color(0));
    assert_eq!(fb.get(2, 2).unwrap().ch, ' ');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = snapshot([[2, 4, 0, 0], [0; 4], [0; 4], [0, 0, 0, 64]]);
    snap.score = 1234;

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let panel = PanelInfo {
        player: "ada",
        best: Some(900),
    };
    let fb = view.render_with_panel(&snap, &panel, Viewport::new(70, 19));

    let score_y = find_row(&fb, "SCORE").expect("score label");
    assert!(fb.row_text(score_y + 1).contains("1234"));

    let max_y = find_row(&fb, "MAX").expect("max label");
    assert!(fb.row_text(max_y + 1).contains("64"));

    // The current score beats the stored best.
    let best_y = find_row(&fb, "BEST").expect("best label");
    assert!(fb.row_text(best_y + 1).contains("1234"));

    assert!(find_row(&fb, "ada").is_some());
    assert!(find_row(&fb, "q quit").is_some());
}

#[test]
fn term_view_omits_side_panel_when_narrow() {
    let snap = snapshot([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let fb = GameView::default().render(&snap, Viewport::new(31, 19));
    assert!(find_row(&fb, "SCORE").is_none());
}

#[test]
fn term_view_overlays_game_over() {
    let snap = snapshot([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert!(snap.game_over);

    let fb = GameView::default().render(&snap, Viewport::new(31, 19));
    let y = find_row(&fb, "GAME OVER").expect("overlay");
    assert_eq!(y, 19 / 2);
    assert!(fb.row_text(y + 1).contains("r restart"));
}

#[test]
fn term_view_clips_to_a_tiny_viewport() {
    let snap = snapshot([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let fb = GameView::default().render(&snap, Viewport::new(10, 5));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 5);
}
