//! Heuristic feature functions for Teeko positions
//!
//! Each feature is a pure scan of the board for one side. The combined
//! score is a weighted sum, evaluated from the perspective of the side
//! to move in the position being scored.

use crate::board::{Board, Piece, Pos, BOARD_SIZE, KING_DIRECTIONS};

use super::weights::Weights;

/// Direction vectors for line windows (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Evaluate the board from the perspective of the side to move.
///
/// Positive values favor the player about to move. The result is a
/// plain weighted sum; forced win/loss is signaled with infinities by
/// the search, never by this function.
#[must_use]
pub fn evaluate(board: &Board, weights: &Weights) -> f64 {
    let side = board.turn();
    let opponent = side.opponent();

    weights.material * f64::from(material_advantage(board, side))
        + weights.central_control * f64::from(central_control(board, side))
        + weights.mobility * f64::from(mobility(board, side) - mobility(board, opponent))
        + weights.near_victory * f64::from(near_victory(board, side))
        + weights.defense * f64::from(defense(board, side))
        + weights.connectivity * f64::from(connectivity(board, side))
        + weights.alignment * f64::from(alignment(board, side))
}

/// Own piece count minus the opponent's.
///
/// Only non-zero mid-placement; the movement phase relocates pieces
/// without changing counts.
#[must_use]
pub fn material_advantage(board: &Board, side: Piece) -> i32 {
    i32::from(board.count(side)) - i32::from(board.count(side.opponent()))
}

/// Reward pieces near the geometric center: each piece scores
/// `max(0, 3 - manhattan distance to center)`.
#[must_use]
pub fn central_control(board: &Board, side: Piece) -> i32 {
    let center_row = (BOARD_SIZE / 2) as i32;
    let center_col = (BOARD_SIZE / 2) as i32;
    let mut score = 0;
    for_each_piece(board, side, |pos| {
        let distance =
            (i32::from(pos.row) - center_row).abs() + (i32::from(pos.col) - center_col).abs();
        score += (3 - distance).max(0);
    });
    score
}

/// Total movement options: the number of (piece, empty adjacent cell)
/// pairs, not deduplicated per piece.
#[must_use]
pub fn mobility(board: &Board, side: Piece) -> i32 {
    let mut options = 0;
    for_each_piece(board, side, |pos| {
        options += board.adjacent_empty_cells(pos).len() as i32;
    });
    options
}

/// Proximity-to-win signal: one point per line window holding exactly
/// 3 own pieces and 1 empty cell, scanned forward from every own piece
/// in each of the 4 directions, plus one point per fully-owned 2x2
/// square. Overlapping windows double-count shared cells on purpose:
/// this is a cheap proximity measure, not a move counter.
#[must_use]
pub fn near_victory(board: &Board, side: Piece) -> i32 {
    let mut count = 0;
    for_each_piece(board, side, |pos| {
        for (dr, dc) in DIRECTIONS {
            if line_window(board, pos, dr, dc, side) == (3, 1) {
                count += 1;
            }
        }
    });
    count + owned_squares(board, side)
}

/// Defensive pressure: 10 points per opponent line window with exactly
/// 3 opponent pieces and 1 empty cell (a blockable near-win), plus 15
/// points per 2x2 block where the opponent holds at least 3 cells.
#[must_use]
pub fn defense(board: &Board, side: Piece) -> i32 {
    let opponent = side.opponent();
    let mut score = 0;

    for_each_piece(board, opponent, |pos| {
        for (dr, dc) in DIRECTIONS {
            if line_window(board, pos, dr, dc, opponent) == (3, 1) {
                score += 10;
            }
        }
    });

    for row in 0..BOARD_SIZE - 1 {
        for col in 0..BOARD_SIZE - 1 {
            if square_count(board, row, col, opponent) >= 3 {
                score += 15;
            }
        }
    }
    score
}

/// Clustering reward: the sizes of 8-connected groups of own pieces,
/// summed over groups larger than one piece.
#[must_use]
pub fn connectivity(board: &Board, side: Piece) -> i32 {
    let mut visited = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut score = 0;

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if visited[row][col] || board.get(Pos::new(row as u8, col as u8)) != side {
                continue;
            }
            // Flood-fill one group with an explicit stack
            let mut stack = vec![(row, col)];
            visited[row][col] = true;
            let mut group_size = 0;
            while let Some((r, c)) = stack.pop() {
                group_size += 1;
                for (dr, dc) in KING_DIRECTIONS {
                    let nr = r as i32 + dr;
                    let nc = c as i32 + dc;
                    if Pos::is_valid(nr, nc)
                        && !visited[nr as usize][nc as usize]
                        && board.get(Pos::new(nr as u8, nc as u8)) == side
                    {
                        visited[nr as usize][nc as usize] = true;
                        stack.push((nr as usize, nc as usize));
                    }
                }
            }
            if group_size > 1 {
                score += group_size;
            }
        }
    }
    score
}

/// Consecutive-run reward: from every own piece in each direction, the
/// run of own pieces starting there scores 2 -> 1, 3 -> 5, 4 -> 10.
/// Sub-runs of a longer run score too; the weights are tuned with that
/// double-counting in place.
#[must_use]
pub fn alignment(board: &Board, side: Piece) -> i32 {
    let mut score = 0;
    for_each_piece(board, side, |pos| {
        for (dr, dc) in DIRECTIONS {
            let mut run = 1;
            for i in 1..4 {
                let r = i32::from(pos.row) + i * dr;
                let c = i32::from(pos.col) + i * dc;
                if !Pos::is_valid(r, c) || board.get(Pos::new(r as u8, c as u8)) != side {
                    break;
                }
                run += 1;
            }
            score += match run {
                2 => 1,
                3 => 5,
                4 => 10,
                _ => 0,
            };
        }
    });
    score
}

/// Visit every cell owned by `side` in row-major order
fn for_each_piece<F: FnMut(Pos)>(board: &Board, side: Piece, mut f: F) {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Pos::new(row as u8, col as u8);
            if board.get(pos) == side {
                f(pos);
            }
        }
    }
}

/// Count (own, empty) cells in the 4-window starting at `pos`,
/// stopping at the board edge. A truncated window never reaches the
/// (3, 1) near-win shape.
fn line_window(board: &Board, pos: Pos, dr: i32, dc: i32, side: Piece) -> (i32, i32) {
    let mut own = 0;
    let mut empty = 0;
    for i in 0..4 {
        let r = i32::from(pos.row) + i * dr;
        let c = i32::from(pos.col) + i * dc;
        if !Pos::is_valid(r, c) {
            break;
        }
        match board.get(Pos::new(r as u8, c as u8)) {
            piece if piece == side => own += 1,
            Piece::Empty => empty += 1,
            _ => {}
        }
    }
    (own, empty)
}

/// Number of fully-owned 2x2 squares
fn owned_squares(board: &Board, side: Piece) -> i32 {
    let mut squares = 0;
    for row in 0..BOARD_SIZE - 1 {
        for col in 0..BOARD_SIZE - 1 {
            if square_count(board, row, col, side) == 4 {
                squares += 1;
            }
        }
    }
    squares
}

/// How many cells of the 2x2 block at (row, col) the side owns
fn square_count(board: &Board, row: usize, col: usize, side: Piece) -> i32 {
    let mut count = 0;
    for (dr, dc) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        if board.get(Pos::new((row + dr) as u8, (col + dc) as u8)) == side {
            count += 1;
        }
    }
    count
}
