use minesweeper_core::{Cell, GameParams, MineField, VisibleField};
use serde_json::json;

#[test]
fn snapshot_mirrors_the_board_in_row_order() {
    let layout = vec![vec![true, false], vec![false, false]];
    let mut game = VisibleField::new(MineField::from_layout(&layout).unwrap());
    game.uncover(1, 1);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].len(), 2);
    assert_eq!(snapshot[0][0], Cell::Covered);
    assert_eq!(snapshot[1][1], Cell::Revealed { adjacent: 1 });
}

#[test]
fn cells_serialize_with_state_tags() {
    assert_eq!(
        serde_json::to_value(Cell::Covered).unwrap(),
        json!({"state": "covered"})
    );
    assert_eq!(
        serde_json::to_value(Cell::Revealed { adjacent: 3 }).unwrap(),
        json!({"state": "revealed", "adjacent": 3})
    );
    assert_eq!(
        serde_json::to_value(Cell::ExplodedMine).unwrap(),
        json!({"state": "exploded_mine"})
    );

    let parsed: Cell = serde_json::from_str(r#"{"state":"mine_guess"}"#).unwrap();
    assert_eq!(parsed, Cell::MineGuess);
}

#[test]
fn game_params_default_to_the_classic_board() {
    let params: GameParams = serde_json::from_str("{}").unwrap();
    assert_eq!((params.rows, params.cols, params.mines), (9, 9, 10));

    let params: GameParams = serde_json::from_str(r#"{"rows":4,"cols":5,"mines":6}"#).unwrap();
    assert_eq!((params.rows, params.cols, params.mines), (4, 5, 6));
}
