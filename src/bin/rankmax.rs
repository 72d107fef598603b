//! rankmax CLI - PageRank estimation and a perfect Tic-Tac-Toe player
//!
//! This CLI provides:
//! - Sampled and iterated PageRank for a directory of HTML pages
//! - Minimax analysis of Tic-Tac-Toe positions
//! - Interactive play against the minimax solver

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rankmax")]
#[command(version, about = "PageRank over HTML corpora and minimax Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// Show debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the pages of an HTML corpus by sampling and by iteration
    Pagerank(rankmax::cli::commands::pagerank::PageRankArgs),

    /// Show minimax values and the optimal move for a position
    Solve(rankmax::cli::commands::solve::SolveArgs),

    /// Play against the minimax solver
    Play(rankmax::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    rankmax::cli::init_logging(cli.verbose);

    match cli.command {
        Commands::Pagerank(args) => rankmax::cli::commands::pagerank::execute(args),
        Commands::Solve(args) => rankmax::cli::commands::solve::execute(args),
        Commands::Play(args) => rankmax::cli::commands::play::execute(args),
    }
}
