//! Winning lines of the 3x3 board

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in row-major cell numbering
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// The first completed line and its owner, if any
pub fn completed_line(cells: &[Cell; 9]) -> Option<(Player, [usize; 3])> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let owner = cells[a].to_player()?;
        (cells[b] == cells[a] && cells[c] == cells[a]).then_some((owner, line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(completed_line(&cells), Some((Player::X, [0, 1, 2])));
    }

    #[test]
    fn test_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[1] = Cell::O;
        cells[4] = Cell::O;
        cells[7] = Cell::O;

        assert_eq!(completed_line(&cells), Some((Player::O, [1, 4, 7])));
    }

    #[test]
    fn test_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert_eq!(completed_line(&cells), Some((Player::X, [2, 4, 6])));
    }

    #[test]
    fn test_empty_line_is_not_a_win() {
        let cells = [Cell::Empty; 9];
        assert_eq!(completed_line(&cells), None);
    }
}
