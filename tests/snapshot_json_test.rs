use blockfall::core::{Board, CycleSource, GameEngine, NextPiece, ShapeKind};
use blockfall::types::{Color, Phase, FALL_INTERVAL_MS};

fn scripted() -> GameEngine<CycleSource> {
    GameEngine::with_source(
        Board::new(),
        CycleSource::new(vec![
            NextPiece::new(ShapeKind::O, Color::Orange),
            NextPiece::new(ShapeKind::T, Color::Blue),
        ]),
    )
}

#[test]
fn snapshot_json_has_expected_shape() {
    let mut game = scripted();
    game.start();

    let v = serde_json::to_value(game.snapshot()).unwrap();

    let board = v["board"].as_array().unwrap();
    assert_eq!(board.len(), 20);
    for row in board {
        let row = row.as_array().unwrap();
        assert_eq!(row.len(), 10);
        assert!(row.iter().all(|c| c.is_null()));
    }

    assert_eq!(v["score"], 0);
    assert_eq!(v["lines"], 0);
    assert_eq!(v["pieces"], 1);
    assert_eq!(v["phase"], "falling");
    assert_eq!(v["game_over"], false);

    assert_eq!(v["active"]["x"], 4);
    assert_eq!(v["active"]["y"], 0);
    assert_eq!(v["active"]["color"], "orange");
    assert_eq!(
        v["active"]["matrix"],
        serde_json::json!([[true, true], [true, true]])
    );

    assert_eq!(v["next"]["shape"], "T");
    assert_eq!(v["next"]["color"], "blue");
    assert_eq!(
        v["next"]["matrix"],
        serde_json::json!([[true, true, true], [false, true, false]])
    );
}

#[test]
fn snapshot_json_shows_locked_cells_by_color() {
    let mut game = scripted();
    game.start();
    while game.soft_drop() {}
    game.tick(FALL_INTERVAL_MS + 1);

    let v = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(v["board"][19][4], "orange");
    assert_eq!(v["board"][18][5], "orange");
    assert!(v["board"][19][3].is_null());
    assert_eq!(v["active"]["color"], "blue");
}

#[test]
fn snapshot_json_game_over_has_no_active_piece() {
    let mut board = Board::new();
    board.set(4, 0, Some(Color::Red));
    let mut game = GameEngine::with_source(board, CycleSource::repeat(ShapeKind::O, Color::Cyan));
    game.start();

    let v = serde_json::to_value(game.snapshot()).unwrap();
    assert!(v["active"].is_null());
    assert_eq!(v["phase"], "game_over");
    assert_eq!(v["game_over"], true);
    assert_eq!(v["board"][0][4], "red");
}

#[test]
fn snapshot_json_names_for_colors_phases_and_shapes() {
    let colors: Vec<_> = Color::ALL
        .iter()
        .map(|c| serde_json::to_value(c).unwrap())
        .collect();
    assert_eq!(
        colors,
        ["cyan", "yellow", "magenta", "red", "green", "blue", "orange"]
    );

    let phases = [
        (Phase::Spawning, "spawning"),
        (Phase::Falling, "falling"),
        (Phase::Locking, "locking"),
        (Phase::LineClearing, "line_clearing"),
        (Phase::GameOver, "game_over"),
    ];
    for (phase, name) in phases {
        assert_eq!(serde_json::to_value(phase).unwrap(), name);
    }

    let shapes: Vec<_> = ShapeKind::ALL
        .iter()
        .map(|k| serde_json::to_value(k).unwrap())
        .collect();
    assert_eq!(shapes, ["I", "O", "T", "L", "J", "Z", "S"]);
}
