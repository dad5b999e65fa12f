use blockfall::core::{GameEngine, GameSnapshot};
use blockfall::term::{FrameBuffer, GameView, Overlay, Rgb, Viewport};
use blockfall::types::Color;

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn started_snapshot() -> GameSnapshot {
    let mut game = GameEngine::new(1);
    game.start();
    game.snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Overlay::default(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[19][0] = Some(Color::Green);

    let view = GameView::default();
    let fb = view.render(&snap, Overlay::default(), Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(Color::Green));
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_over_board() {
    let snap = started_snapshot();
    let active = snap.active.unwrap();

    let fb = GameView::default().render(&snap, Overlay::default(), Viewport::new(22, 22));

    for (dx, dy) in active.matrix.occupied() {
        let x = 1 + ((active.x + dx) as u16) * 2;
        let y = 1 + (active.y + dy) as u16;
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(active.color));
    }
}

#[test]
fn term_view_centers_board_on_large_viewports() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Overlay::default(), Viewport::new(30, 30));

    // start = (30 - 22) / 2 = 4
    assert_eq!(fb.get(4, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = started_snapshot();
    snap.score = 1234;
    snap.lines = 10;

    let fb = GameView::default().render(&snap, Overlay::default(), Viewport::new(60, 22));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("LINES"));
    assert!(all.contains("NEXT"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = started_snapshot();
    let fb = GameView::default().render(&snap, Overlay::default(), Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_pause_and_game_over_overlays() {
    let view = GameView::default();
    let mut snap = started_snapshot();

    let fb = view.render(&snap, Overlay { paused: true }, Viewport::new(22, 22));
    assert!(screen_text(&fb).contains("PAUSED"));

    snap.game_over = true;
    let fb = view.render(&snap, Overlay { paused: true }, Viewport::new(22, 22));
    let all = screen_text(&fb);
    assert!(all.contains("GAME OVER"));
    assert!(!all.contains("PAUSED"));

    let fb = view.render(&snap, Overlay::default(), Viewport::new(22, 22));
    assert!(screen_text(&fb).contains("GAME OVER"));
}
