//! Play command - Interactive game against the minimax solver

use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section},
    tictactoe::{Action, Game, GameOutcome, Player, minimax},
};

#[derive(Parser, Debug)]
#[command(about = "Play Tic-Tac-Toe against the minimax solver")]
pub struct PlayArgs {
    /// Which token you control (`x` moves first, or `o`)
    #[arg(long, default_value = "x")]
    pub human: String,
}

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" => Ok(Player::X),
        "o" | "second" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

/// Parse a move typed as `row col` (0-based), e.g. `1 2` or `1,2`
pub(crate) fn parse_action(input: &str) -> Option<Action> {
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse::<usize>);
    let row = parts.next()?.ok()?;
    let col = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    let action = Action::new(row, col);
    action.index().map(|_| action)
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let human = parse_player_token(&args.human, "--human")?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run(human, &mut input)
}

fn run(human: Player, input: &mut impl BufRead) -> Result<()> {
    let mut game = Game::new();
    print_section(&format!("You play {human}; enter moves as `row col` (0-2)"));

    while game.outcome().is_none() {
        let board = game.current_state();
        println!("\n{board}\n");

        let action = if board.player() == human {
            match prompt_action(input)? {
                Some(action) => action,
                None => return Ok(()),
            }
        } else {
            let action = minimax(&board).ok_or_else(|| anyhow!("no move on a live board"))?;
            print_kv("Computer plays", &action.to_string());
            action
        };

        if let Err(e) = game.play(action) {
            println!("{e}");
        }
    }

    println!("\n{}\n", game.current_state());
    let verdict = match game.outcome() {
        Some(GameOutcome::Win(winner)) if winner == human => "You win.".to_string(),
        Some(GameOutcome::Win(winner)) => format!("{winner} wins."),
        _ => "Draw.".to_string(),
    };
    println!("Game over: {verdict}");
    Ok(())
}

/// Read moves until one parses; `None` at end of input
fn prompt_action(input: &mut impl BufRead) -> Result<Option<Action>> {
    loop {
        print!("Your move: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match parse_action(&line) {
            Some(action) => return Ok(Some(action)),
            None => println!("Enter a row and a column between 0 and 2, e.g. `1 1`"),
        }
    }
}
