//! Win condition checking for Teeko
//!
//! Win conditions:
//! 1. Four pieces in a row (horizontal, vertical, or either diagonal)
//! 2. Four pieces forming a 2x2 square
//!
//! A move can only complete a shape for the side that made it, so both
//! checks take the side to test and are run for the mover only.

use crate::board::{Board, Piece, Pos, BOARD_SIZE};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Length of a winning line
const LINE_LEN: i32 = 4;

/// Check if there are 4 consecutive pieces in a row for the given side
#[must_use]
pub fn has_line_of_four(board: &Board, side: Piece) -> bool {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Pos::new(row as u8, col as u8);
            if board.get(pos) != side {
                continue;
            }
            for (dr, dc) in DIRECTIONS {
                if check_direction(board, pos, dr, dc, side) {
                    return true;
                }
            }
        }
    }
    false
}

/// Count 4 cells from `pos` along one direction, stopping at the edge
fn check_direction(board: &Board, pos: Pos, dr: i32, dc: i32, side: Piece) -> bool {
    let mut count = 0;
    for i in 0..LINE_LEN {
        let r = i32::from(pos.row) + i * dr;
        let c = i32::from(pos.col) + i * dc;
        if !Pos::is_valid(r, c) || board.get(Pos::new(r as u8, c as u8)) != side {
            break;
        }
        count += 1;
    }
    count == LINE_LEN
}

/// Check if the side owns all 4 cells of some 2x2 block
#[must_use]
pub fn has_square(board: &Board, side: Piece) -> bool {
    for row in 0..BOARD_SIZE - 1 {
        for col in 0..BOARD_SIZE - 1 {
            if board.get(Pos::new(row as u8, col as u8)) == side
                && board.get(Pos::new(row as u8, col as u8 + 1)) == side
                && board.get(Pos::new(row as u8 + 1, col as u8)) == side
                && board.get(Pos::new(row as u8 + 1, col as u8 + 1)) == side
            {
                return true;
            }
        }
    }
    false
}

/// Combined terminal check for the side that just moved
#[must_use]
pub fn is_winning_for(board: &Board, side: Piece) -> bool {
    has_line_of_four(board, side) || has_square(board, side)
}
