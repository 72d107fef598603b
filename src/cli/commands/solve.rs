//! Solve command - Minimax analysis of a single position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{create_spinner, print_kv, print_section},
    tictactoe::{Board, best_action, evaluate_actions},
};

#[derive(Parser, Debug)]
#[command(about = "Show the minimax value of every move in a position")]
pub struct SolveArgs {
    /// Board as 9 row-major cells (X, O, `.` for empty); defaults to the empty board
    #[arg(long)]
    pub state: Option<String>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = match args.state.as_deref() {
        Some(s) => Board::from_string(s)?,
        None => Board::new(),
    };

    print_section("Position");
    println!("{board}");

    if board.terminal() {
        let verdict = match board.winner() {
            Some(winner) => format!("{winner} wins"),
            None => "draw".to_string(),
        };
        print_kv("Game over", &verdict);
        return Ok(());
    }

    print_kv("To move", &board.player().to_string());

    let mover = board.player();
    let spinner = create_spinner("Searching game tree...");
    let scored = evaluate_actions(&board);
    spinner.finish_and_clear();

    print_section("Move values (+1 X wins, -1 O wins, 0 draw)");
    for (action, value) in &scored {
        print_kv(&action.to_string(), &format!("{value:+}"));
    }

    if let Some(best) = best_action(mover, &scored) {
        println!();
        print_kv("Optimal move", &best.to_string());
    }

    Ok(())
}
