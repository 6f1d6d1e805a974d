//! Scripted walkthrough of the game API, no interaction required.
//!
//! Run with `cargo run --example scripted_game`. Squares are printed as the
//! integer status codes a renderer would consume.

use minesweeper_core::{GameParams, MineField, VisibleField};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let params = GameParams {
        rows: 8,
        cols: 8,
        mines: 10,
    };
    let mut field = MineField::with_params(params)?;
    field.populate(&mut StdRng::seed_from_u64(42), 3, 3)?;

    let mut game = VisibleField::new(field);
    println!(
        "Opening (3, 3) on a {}x{} board with {} mines",
        params.rows, params.cols, params.mines
    );
    game.uncover(3, 3);
    display(&game);

    game.cycle_guess(0, 7);
    println!("Mines left counter: {}", game.num_mines_left());

    // Sweep row by row until something ends the game.
    'sweep: for row in 0..params.rows {
        for col in 0..params.cols {
            if !game.uncover(row, col) {
                println!("Hit a mine at ({}, {})!", row, col);
            }
            if game.is_game_over() {
                break 'sweep;
            }
        }
    }

    display(&game);
    println!("Final mines left counter: {}", game.num_mines_left());
    Ok(())
}

fn display(game: &VisibleField) {
    for row in 0..game.mine_field().num_rows() {
        let line: Vec<String> = (0..game.mine_field().num_cols())
            .map(|col| format!("{:3}", game.status_code(row, col)))
            .collect();
        println!("{}", line.join(" "));
    }
    println!();
}
