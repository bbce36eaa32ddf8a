//! Depth-bounded minimax search
//!
//! The reference algorithm: no pruning, no move ordering. Alpha-beta
//! must agree with this move-for-move, which the search tests pin down.

use crate::board::{Board, Move};
use crate::eval::{evaluate, Weights};
use crate::rules::generate_moves;

use super::SearchResult;

/// Run a minimax search from the root position.
///
/// The root is always a maximizing node for the side to move.
#[must_use]
pub fn search(board: &Board, weights: &Weights, depth: u8) -> SearchResult {
    let mut nodes = 0;
    let (score, best_move) = minimax(board, weights, depth, true, &mut nodes);
    SearchResult {
        best_move,
        score,
        nodes,
    }
}

/// Recursive minimax over clone-and-apply successors.
///
/// Cutoffs, in order:
/// - game already over: the previous mover won, signaled with infinity
///   (negative at a maximizing node, positive at a minimizing one);
/// - depth exhausted: static evaluation of the position;
/// - no legal move: static evaluation (a blocked position is a leaf,
///   not an error).
///
/// The first move reaching the best value is kept (strict comparison),
/// so generation order decides ties.
#[must_use]
pub fn minimax(
    board: &Board,
    weights: &Weights,
    depth: u8,
    maximizing: bool,
    nodes: &mut u64,
) -> (f64, Option<Move>) {
    *nodes += 1;

    if board.is_over() {
        let score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return (score, None);
    }
    if depth == 0 {
        return (evaluate(board, weights), None);
    }

    let moves = generate_moves(board);
    if moves.is_empty() {
        return (evaluate(board, weights), None);
    }

    let mut best_move = None;
    if maximizing {
        let mut best = f64::NEG_INFINITY;
        for mv in moves {
            let mut child = board.clone();
            if child.apply_move(mv).is_err() {
                continue; // generator only yields legal moves
            }
            let (value, _) = minimax(&child, weights, depth - 1, false, nodes);
            if value > best {
                best = value;
                best_move = Some(mv);
            }
        }
        (best, best_move)
    } else {
        let mut best = f64::INFINITY;
        for mv in moves {
            let mut child = board.clone();
            if child.apply_move(mv).is_err() {
                continue;
            }
            let (value, _) = minimax(&child, weights, depth - 1, true, nodes);
            if value < best {
                best = value;
                best_move = Some(mv);
            }
        }
        (best, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Phase, Piece, Pos, BOARD_SIZE};

    fn board_with(black: &[(u8, u8)], white: &[(u8, u8)]) -> Board {
        let mut board = Board::new();
        let max = black.len().max(white.len());
        for i in 0..max {
            if let Some(&(r, c)) = black.get(i) {
                board.apply_move(Move::Place(Pos::new(r, c))).unwrap();
            }
            if let Some(&(r, c)) = white.get(i) {
                board.apply_move(Move::Place(Pos::new(r, c))).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_depth_zero_evaluates_root() {
        let board = board_with(&[(2, 2)], &[(0, 0)]);
        let mut nodes = 0;
        let (score, best_move) = minimax(&board, &Weights::BALANCED, 0, true, &mut nodes);
        assert_eq!(score, evaluate(&board, &Weights::BALANCED));
        assert_eq!(best_move, None);
        assert_eq!(nodes, 1);
    }

    #[test]
    fn test_finds_winning_placement() {
        // Black completes the top row
        let board = board_with(&[(0, 0), (0, 1), (0, 2)], &[(4, 0), (4, 1), (2, 2)]);
        let result = search(&board, &Weights::BALANCED, 1);
        assert_eq!(result.best_move, Some(Move::Place(Pos::new(0, 3))));
        assert_eq!(result.score, f64::INFINITY);
    }

    #[test]
    fn test_blocks_opponent_line() {
        // White threatens (4,3); Black has no win of its own
        let board = board_with(&[(0, 0), (0, 1), (1, 3)], &[(4, 0), (4, 1), (4, 2)]);
        let result = search(&board, &Weights::BALANCED, 2);
        assert_eq!(result.best_move, Some(Move::Place(Pos::new(4, 3))));
        assert!(result.score.is_finite());
    }

    #[test]
    fn test_no_move_fallback() {
        // Black's pieces are walled into the corner: no legal relocation
        let mut cells = [[Piece::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, c) in [(0, 0), (0, 1), (1, 0)] {
            cells[r][c] = Piece::Black;
        }
        for (r, c) in [(0, 2), (1, 1), (1, 2), (2, 0), (2, 1)] {
            cells[r][c] = Piece::White;
        }
        let board = Board::with_position(cells, Piece::Black, Phase::Movement);
        assert!(generate_moves(&board).is_empty());

        let result = search(&board, &Weights::BALANCED, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluate(&board, &Weights::BALANCED));
    }

    #[test]
    fn test_terminal_root_signals_loss() {
        let board = board_with(
            &[(0, 0), (0, 1), (0, 2), (0, 3)],
            &[(4, 0), (4, 1), (4, 2)],
        );
        assert!(board.is_over());
        let result = search(&board, &Weights::BALANCED, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, f64::NEG_INFINITY);
    }

    #[test]
    fn test_first_best_move_wins_ties() {
        // With all weights zero every leaf scores 0.0, so the first
        // generated move must be returned.
        let zero = Weights {
            material: 0.0,
            central_control: 0.0,
            mobility: 0.0,
            near_victory: 0.0,
            defense: 0.0,
            connectivity: 0.0,
            alignment: 0.0,
        };
        let board = Board::new();
        let result = search(&board, &zero, 1);
        assert_eq!(result.best_move, Some(Move::Place(Pos::new(0, 0))));
    }
}
