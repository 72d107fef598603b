//! Two classic search algorithms
//!
//! This crate provides:
//! - PageRank over a corpus of hyperlinked pages, estimated both by random
//!   surfer sampling and by fixed-point iteration
//! - Tic-Tac-Toe rules with an exhaustive minimax solver
//! - A small CLI wrapping both

pub mod cli;
pub mod error;
pub mod pagerank;
pub mod tictactoe;
pub mod utils;

pub use error::{Error, Result};
pub use pagerank::{Corpus, RankDistribution, iterate_pagerank, sample_pagerank, transition_model};
pub use tictactoe::{Action, Board, Player, initial_state, minimax};
