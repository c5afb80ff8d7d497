//! Terminal view tests

use blockfall::core::{color_for, GameConfig, Grid, Session, BACKGROUND, STROKE};
use blockfall::term::{FrameBuffer, GameView, Viewport, BLOCK_GLYPH, STROKE_GLYPH};
use blockfall::types::PieceType;

fn session_with_o() -> Session {
    let mut session = Session::new(&GameConfig::default().with_seed(1));
    session.spawn(PieceType::O);
    session
}

#[test]
fn test_board_border_fits_exact_viewport() {
    let session = session_with_o();
    let view = GameView::default();
    let fb = view.render(&session, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn test_active_piece_drawn_two_columns_per_block() {
    let session = session_with_o();
    let view = GameView::default();
    let viewport = Viewport::new(22, 22);
    let fb = view.render(&session, viewport);
    let layout = view.layout(session.grid(), viewport);

    let color = color_for(PieceType::O.id()).unwrap();
    for (x, y) in [(5, 0), (6, 0), (5, 1), (6, 1)] {
        let (px, py) = view.cell_origin(&layout, session.grid(), x, y).unwrap();
        let left = fb.get(px, py).unwrap();
        let right = fb.get(px + 1, py).unwrap();
        assert_eq!(left.ch, BLOCK_GLYPH);
        assert_eq!(right.ch, STROKE_GLYPH);
        assert_eq!(left.style.fg, color);
        assert_eq!(left.style.bg, STROKE);
    }

    // O's empty first column shows the background.
    let (px, py) = view.cell_origin(&layout, session.grid(), 4, 0).unwrap();
    let cell = fb.get(px, py).unwrap();
    assert_eq!(cell.ch, ' ');
    assert_eq!(cell.style.bg, BACKGROUND);
}

#[test]
fn test_settled_blocks_use_their_piece_color() {
    let mut grid = Grid::new(10, 20);
    grid.set(0, 19, PieceType::S.id());
    grid.set(9, 19, PieceType::L.id());

    let view = GameView::default();
    let viewport = Viewport::new(22, 22);
    let mut fb = FrameBuffer::new(0, 0);
    let layout = view.render_board_into(&grid, None, viewport, &mut fb);

    let (px, py) = view.cell_origin(&layout, &grid, 0, 19).unwrap();
    assert_eq!(fb.get(px, py).unwrap().style.fg, color_for(5).unwrap());
    let (px, py) = view.cell_origin(&layout, &grid, 9, 19).unwrap();
    assert_eq!(fb.get(px, py).unwrap().style.fg, color_for(3).unwrap());
    assert_eq!(fb.get(px + 1, py).unwrap().ch, STROKE_GLYPH);
}

#[test]
fn test_board_is_centered() {
    let session = session_with_o();
    let view = GameView::default();
    let fb = view.render(&session, Viewport::new(30, 30));
    assert_eq!(fb.get(4, 4).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 25).unwrap().ch, '┘');
}

#[test]
fn test_side_panel_shown_when_wide() {
    let session = session_with_o();
    let view = GameView::default();

    let text = view.render(&session, Viewport::new(60, 22)).to_text();
    assert!(text.contains("SCORE"));
    assert!(text.contains("PIECES"));
    assert!(text.contains("RESETS"));

    let text = view.render(&session, Viewport::new(22, 22)).to_text();
    assert!(!text.contains("SCORE"));
}

#[test]
fn test_small_viewport_does_not_panic() {
    let session = session_with_o();
    let view = GameView::default();
    for (w, h) in [(0, 0), (1, 1), (5, 3), (21, 21)] {
        let fb = view.render(&session, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}

#[test]
fn test_render_reflects_moves() {
    let mut session = session_with_o();
    let view = GameView::default();
    let viewport = Viewport::new(22, 22);

    let before = view.render(&session, viewport).to_text();
    session.drop_piece();
    let after = view.render(&session, viewport).to_text();
    assert_ne!(before, after);
}
