//! Tic-Tac-Toe rules and a perfect-play minimax solver

pub mod board;
pub mod game;
pub mod lines;
pub mod minimax;

pub use board::{Action, Board, Cell, Player, initial_state};
pub use game::{Game, GameOutcome};
pub use lines::WINNING_LINES;
pub use minimax::{best_action, evaluate_actions, max_value, min_value, minimax};
