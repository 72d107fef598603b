//! High-level game management

use super::board::{Action, Board, Player};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    fn of(board: &Board) -> Option<Self> {
        if !board.terminal() {
            return None;
        }
        Some(match board.winner() {
            Some(winner) => GameOutcome::Win(winner),
            None => GameOutcome::Draw,
        })
    }
}

/// A game played from the empty board, with its move history
#[derive(Debug, Clone, Default)]
pub struct Game {
    moves: Vec<Action>,
    state: Board,
    outcome: Option<GameOutcome>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play `action` for the player to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has finished and
    /// [`crate::Error::InvalidAction`] for an occupied or off-board cell.
    pub fn play(&mut self, action: Action) -> Result<Player, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let mover = self.state.player();
        self.state = self.state.result(action)?;
        self.moves.push(action);
        self.outcome = GameOutcome::of(&self.state);
        Ok(mover)
    }

    /// Current board
    pub fn current_state(&self) -> Board {
        self.state
    }

    /// Actions played so far, in order
    pub fn moves(&self) -> &[Action] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Boards from the empty board up to the current one
    ///
    /// # Errors
    ///
    /// Returns error if the recorded history does not replay, which means the
    /// game data was corrupted.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut board = Board::new();
        states.push(board);
        for &action in &self.moves {
            board = board.result(action)?;
            states.push(board);
        }
        Ok(states)
    }
}
