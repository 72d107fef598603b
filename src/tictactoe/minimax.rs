//! Exhaustive minimax search
//!
//! The whole game tree below the given board is explored on every call: no
//! pruning, memoisation, or depth limit. A 3x3 board has at most nine plies,
//! so this stays cheap enough to brute-force.

use super::{Action, Board, Player};

/// Best value X can force from `board`, assuming O plays optimally.
pub fn max_value(board: &Board) -> i32 {
    if board.terminal() {
        return board.utility();
    }
    children(board)
        .map(|(_, child)| min_value(&child))
        .max()
        .unwrap_or_else(|| board.utility())
}

/// Best value O can force from `board`, assuming X plays optimally.
pub fn min_value(board: &Board) -> i32 {
    if board.terminal() {
        return board.utility();
    }
    children(board)
        .map(|(_, child)| max_value(&child))
        .min()
        .unwrap_or_else(|| board.utility())
}

/// Minimax value of every legal action for the player to move, in row-major order.
///
/// Values are from X's point of view: +1 is a forced X win, -1 a forced O
/// win, 0 a draw. A terminal board has no actions.
pub fn evaluate_actions(board: &Board) -> Vec<(Action, i32)> {
    if board.terminal() {
        return Vec::new();
    }
    let mover = board.player();
    children(board)
        .map(|(action, child)| {
            let value = match mover {
                Player::X => min_value(&child),
                Player::O => max_value(&child),
            };
            (action, value)
        })
        .collect()
}

/// Optimal action for the player to move, or `None` on a terminal board.
///
/// X picks the action with the highest value and O the lowest. Among
/// equally good actions the first in row-major order wins, so the result
/// is deterministic.
///
/// # Examples
///
/// ```
/// use rankmax::tictactoe::{Action, Board, minimax};
///
/// // X to move can complete the top row
/// let board = Board::from_string("XX. OO. ...").unwrap();
/// assert_eq!(minimax(&board), Some(Action::new(0, 2)));
/// ```
pub fn minimax(board: &Board) -> Option<Action> {
    best_action(board.player(), &evaluate_actions(board))
}

/// First action in `scored` with the best value for `mover`
pub fn best_action(mover: Player, scored: &[(Action, i32)]) -> Option<Action> {
    let best = match mover {
        Player::X => scored.iter().map(|&(_, v)| v).max()?,
        Player::O => scored.iter().map(|&(_, v)| v).min()?,
    };
    scored
        .iter()
        .find(|&&(_, value)| value == best)
        .map(|&(action, _)| action)
}

/// Legal actions paired with the boards they lead to
fn children(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    board
        .actions()
        .into_iter()
        .filter_map(move |action| board.result(action).ok().map(|child| (action, child)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_board_has_no_move() {
        let board = Board::from_string("XXX OO. ...").unwrap();
        assert_eq!(minimax(&board), None);
        assert!(evaluate_actions(&board).is_empty());
    }

    #[test]
    fn test_o_blocks_immediate_threat() {
        // X threatens the top row; O must take (0, 2)
        let board = Board::from_string("XX. .O. ...").unwrap();
        assert_eq!(minimax(&board), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_o_prefers_win_over_block() {
        // O to move can win on the middle row even though X threatens the top
        let board = Board::from_string("XX. OO. X..").unwrap();
        assert_eq!(minimax(&board), Some(Action::new(1, 2)));
        assert_eq!(min_value(&board), -1);
    }

    #[test]
    fn test_forced_last_move() {
        let board = Board::from_string("XOX XOO OX.").unwrap();
        assert_eq!(minimax(&board), Some(Action::new(2, 2)));
    }

    #[test]
    fn test_values_match_outcome_of_full_board() {
        let board = Board::from_string("XOX XOO OXX").unwrap();
        assert_eq!(max_value(&board), 0);
        assert_eq!(min_value(&board), 0);
    }

    #[test]
    fn test_corner_opening_needs_centre_reply() {
        // Every reply to a corner opening except the centre loses for O
        let board = Board::new().result(Action::new(0, 0)).unwrap();
        let scored = evaluate_actions(&board);
        for &(action, value) in &scored {
            let expected = if action == Action::new(1, 1) { 0 } else { 1 };
            assert_eq!(value, expected, "reply {action}");
        }
        assert_eq!(minimax(&board), Some(Action::new(1, 1)));
    }

    #[test]
    fn test_ties_break_in_row_major_order() {
        let board = Board::from_string("X.. .O. ...").unwrap();
        let scored = evaluate_actions(&board);
        let best = scored.iter().map(|&(_, v)| v).max().unwrap();
        let first = scored.iter().find(|&&(_, v)| v == best).unwrap().0;
        assert!(scored.iter().filter(|&&(_, v)| v == best).count() > 1);
        assert_eq!(minimax(&board), Some(first));
    }
}
