//! Alpha-beta pruning search
//!
//! Same branching structure as plain minimax, additionally threading
//! the (alpha, beta) window and skipping siblings that cannot affect
//! the parent's decision. Pruning changes visited-node counts, never
//! the returned value.

use crate::board::{Board, Move, Pos, BOARD_SIZE};
use crate::eval::{evaluate, Weights};
use crate::rules::generate_moves;

use super::SearchResult;

/// Candidate ordering before each branch is expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveOrdering {
    /// Keep the generator's order (matches minimax move-for-move)
    #[default]
    Generation,
    /// Examine center-bound moves first to tighten the window early.
    /// May change which of several equal-valued moves wins the tie,
    /// never the value itself.
    CenterFirst,
}

/// Run an alpha-beta search from the root position with a full window.
#[must_use]
pub fn search(board: &Board, weights: &Weights, depth: u8, ordering: MoveOrdering) -> SearchResult {
    let mut nodes = 0;
    let (score, best_move) = alpha_beta_ordered(
        board,
        weights,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        true,
        ordering,
        &mut nodes,
    );
    SearchResult {
        best_move,
        score,
        nodes,
    }
}

/// Recursive alpha-beta in generation order.
///
/// Cutoffs and tie-breaking are identical to
/// [`minimax`](super::minimax::minimax); the added `alpha`/`beta`
/// bounds only prune siblings once `beta <= alpha`.
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn alpha_beta(
    board: &Board,
    weights: &Weights,
    depth: u8,
    alpha: f64,
    beta: f64,
    maximizing: bool,
    nodes: &mut u64,
) -> (f64, Option<Move>) {
    alpha_beta_ordered(
        board,
        weights,
        depth,
        alpha,
        beta,
        maximizing,
        MoveOrdering::Generation,
        nodes,
    )
}

#[allow(clippy::too_many_arguments)]
fn alpha_beta_ordered(
    board: &Board,
    weights: &Weights,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    ordering: MoveOrdering,
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

    let mut moves = generate_moves(board);
    if moves.is_empty() {
        return (evaluate(board, weights), None);
    }
    if ordering == MoveOrdering::CenterFirst {
        moves.sort_by_key(|mv| center_distance(mv.target()));
    }

    let mut best_move = None;
    if maximizing {
        let mut best = f64::NEG_INFINITY;
        for mv in moves {
            let mut child = board.clone();
            if child.apply_move(mv).is_err() {
                continue; // generator only yields legal moves
            }
            let (value, _) =
                alpha_beta_ordered(&child, weights, depth - 1, alpha, beta, false, ordering, nodes);
            if value > best {
                best = value;
                best_move = Some(mv);
            }
            alpha = alpha.max(value);
            if beta <= alpha {
                break; // remaining siblings cannot raise the minimizer's bound
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
            let (value, _) =
                alpha_beta_ordered(&child, weights, depth - 1, alpha, beta, true, ordering, nodes);
            if value < best {
                best = value;
                best_move = Some(mv);
            }
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        (best, best_move)
    }
}

/// Manhattan distance of a cell to the board center; the stable sort
/// key for `CenterFirst` ordering
fn center_distance(pos: Pos) -> i32 {
    let center = (BOARD_SIZE / 2) as i32;
    (i32::from(pos.row) - center).abs() + (i32::from(pos.col) - center).abs()
}
