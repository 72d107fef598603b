//! Board state representation and game rules

use std::fmt;

use super::lines;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A move, identified by the `(row, col)` of the cell it marks.
///
/// Ordering is row-major, which is also the order [`Board::actions`] yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    /// Action for a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Self {
        Action {
            row: index / 3,
            col: index % 3,
        }
    }

    /// Row-major cell index, or `None` if the action is off the board
    pub fn index(self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then_some(self.row * 3 + self.col)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 board.
///
/// Boards are plain values: applying an action with [`Board::result`]
/// returns a new board and leaves the original untouched. The player to
/// move is derived from the number of marks, X moving on even counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; 9],
}

/// The empty starting board
pub fn initial_state() -> Board {
    Board::new()
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns error if X is not level with O or exactly one mark ahead.
    pub fn from_cells(cells: [Cell; 9]) -> Result<Self, crate::Error> {
        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();
        if x_count != o_count && x_count != o_count + 1 {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        }
        Ok(Board { cells })
    }

    /// Parse a board from 9 cell characters in row-major order.
    ///
    /// `X`/`O` mark the players and `.`, `-` or `_` an empty cell.
    /// Whitespace is ignored, so `"XO. / .X. / ..O"`-style layouts work
    /// once the slashes are dropped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not hold exactly 9 non-whitespace characters
    /// - Any character is not a valid cell
    /// - The piece counts cannot arise in an X-first game
    ///
    /// # Examples
    ///
    /// ```
    /// use rankmax::tictactoe::{Board, Player};
    ///
    /// let board = Board::from_string("XO. .X. ...").unwrap();
    /// assert_eq!(board.player(), Player::O);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Self::from_cells(cells)
    }

    /// Cell at `(row, col)`, or `None` if off the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Action::new(row, col).index().map(|i| self.cells[i])
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Player who moves next: X on an even number of marks, O on an odd one
    pub fn player(&self) -> Player {
        if self.occupied_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Every empty cell, in row-major order
    pub fn actions(&self) -> Vec<Action> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Action::from_index(i))
            .collect()
    }

    /// Board after the player to move marks `action`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAction`] if the cell is occupied or off
    /// the board.
    #[must_use = "result returns a new board; the original is unchanged"]
    pub fn result(&self, action: Action) -> Result<Board, crate::Error> {
        let invalid = crate::Error::InvalidAction {
            row: action.row,
            col: action.col,
        };
        let Some(index) = action.index() else {
            return Err(invalid);
        };
        if self.cells[index] != Cell::Empty {
            return Err(invalid);
        }

        let mut next = *self;
        next.cells[index] = self.player().to_cell();
        Ok(next)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        lines::completed_line(&self.cells).map(|(player, _)| player)
    }

    /// Check if the game is over (win or full board)
    pub fn terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// +1 if X has won, -1 if O has won, 0 otherwise.
    ///
    /// Only meaningful on a terminal board.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Compact row-major encoding, e.g. `XO.......`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
