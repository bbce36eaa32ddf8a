use super::*;
use crate::error::GameError;

#[test]
fn test_piece_opponent() {
    assert_eq!(Piece::Black.opponent(), Piece::White);
    assert_eq!(Piece::White.opponent(), Piece::Black);
    assert_eq!(Piece::Empty.opponent(), Piece::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 2); // Center
    assert_eq!(pos.to_index(), 2 * 5 + 2);

    let pos2 = Pos::from_index(12);
    assert_eq!(pos2.row, 2);
    assert_eq!(pos2.col, 2);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(4, 4));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(5, 0));
    assert!(!Pos::is_valid(0, 5));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 5);
    assert_eq!(TOTAL_CELLS, 25);
    assert_eq!(PIECES_PER_SIDE, 4);
}

#[test]
fn test_move_accessors() {
    let place = Move::Place(Pos::new(1, 2));
    assert_eq!(place.source(), None);
    assert_eq!(place.target(), Pos::new(1, 2));

    let shift = Move::Shift {
        from: Pos::new(1, 1),
        to: Pos::new(2, 2),
    };
    assert_eq!(shift.source(), Some(Pos::new(1, 1)));
    assert_eq!(shift.target(), Pos::new(2, 2));
}

#[test]
fn test_new_board() {
    let board = Board::new();
    assert_eq!(board.turn(), Piece::Black);
    assert_eq!(board.phase(), Phase::Placement);
    assert_eq!(board.winner(), None);
    assert_eq!(board.count(Piece::Black), 0);
    assert_eq!(board.count(Piece::White), 0);
    for idx in 0..TOTAL_CELLS {
        assert!(board.is_empty(Pos::from_index(idx)));
    }
}

#[test]
fn test_placement_updates_counter_and_turn() {
    let mut board = Board::new();
    board.apply_move(Move::Place(Pos::new(2, 2))).unwrap();
    assert_eq!(board.get(Pos::new(2, 2)), Piece::Black);
    assert_eq!(board.pieces_placed(Piece::Black), 1);
    assert_eq!(board.pieces_placed(Piece::White), 0);
    assert_eq!(board.turn(), Piece::White);
}

#[test]
fn test_placement_conservation() {
    // Each placement adds exactly one piece and bumps exactly one counter.
    let mut board = Board::new();
    let spots = [(0, 0), (4, 4), (0, 4), (4, 0), (1, 1), (3, 3)];
    for (i, &(r, c)) in spots.iter().enumerate() {
        let before = board.count(Piece::Black) + board.count(Piece::White);
        board.apply_move(Move::Place(Pos::new(r, c))).unwrap();
        let after = board.count(Piece::Black) + board.count(Piece::White);
        assert_eq!(after, before + 1);
        assert_eq!(
            board.pieces_placed(Piece::Black) + board.pieces_placed(Piece::White),
            (i + 1) as u8
        );
    }
}

/// Fill both allotments without completing any winning shape
fn movement_board() -> Board {
    let mut board = Board::new();
    let black = [(0, 0), (0, 1), (0, 2), (4, 4)];
    let white = [(4, 0), (4, 1), (4, 2), (0, 4)];
    for i in 0..4 {
        board.apply_move(Move::Place(Pos::new(black[i].0, black[i].1))).unwrap();
        board.apply_move(Move::Place(Pos::new(white[i].0, white[i].1))).unwrap();
    }
    board
}

#[test]
fn test_phase_transition_at_full_allotment() {
    let mut board = Board::new();
    let black = [(0, 0), (0, 1), (0, 2), (4, 4)];
    let white = [(4, 0), (4, 1), (4, 2), (0, 4)];
    for i in 0..4 {
        assert_eq!(board.phase(), Phase::Placement);
        board.apply_move(Move::Place(Pos::new(black[i].0, black[i].1))).unwrap();
        // Never flips before both counters reach the limit
        if i < 3 {
            assert_eq!(board.phase(), Phase::Placement);
        }
        board.apply_move(Move::Place(Pos::new(white[i].0, white[i].1))).unwrap();
    }
    assert_eq!(board.phase(), Phase::Movement);
    assert_eq!(board.pieces_placed(Piece::Black), 4);
    assert_eq!(board.pieces_placed(Piece::White), 4);
}

#[test]
fn test_movement_conserves_piece_count() {
    let mut board = movement_board();
    let occupied = board.count(Piece::Black) + board.count(Piece::White);
    board
        .apply_move(Move::Shift {
            from: Pos::new(0, 0),
            to: Pos::new(1, 0),
        })
        .unwrap();
    assert_eq!(board.count(Piece::Black) + board.count(Piece::White), occupied);
    assert_eq!(board.get(Pos::new(0, 0)), Piece::Empty);
    assert_eq!(board.get(Pos::new(1, 0)), Piece::Black);
}

#[test]
fn test_occupant_out_of_bounds() {
    let board = Board::new();
    assert_eq!(
        board.occupant(5, 0),
        Err(GameError::OutOfBounds { row: 5, col: 0 })
    );
    assert_eq!(
        board.occupant(0, -1),
        Err(GameError::OutOfBounds { row: 0, col: -1 })
    );
    assert_eq!(board.occupant(2, 2), Ok(Piece::Empty));
}

#[test]
fn test_place_on_occupied_cell() {
    let mut board = Board::new();
    board.apply_move(Move::Place(Pos::new(2, 2))).unwrap();
    let err = board.apply_move(Move::Place(Pos::new(2, 2))).unwrap_err();
    assert_eq!(err, GameError::Occupied(Pos::new(2, 2)));
    // Rejected move leaves the state untouched
    assert_eq!(board.turn(), Piece::White);
    assert_eq!(board.pieces_placed(Piece::White), 0);
}

#[test]
fn test_shift_during_placement_rejected() {
    let mut board = Board::new();
    board.apply_move(Move::Place(Pos::new(2, 2))).unwrap();
    let err = board
        .apply_move(Move::Shift {
            from: Pos::new(2, 2),
            to: Pos::new(2, 3),
        })
        .unwrap_err();
    assert_eq!(err, GameError::WrongPhase(Phase::Placement));
}

#[test]
fn test_place_during_movement_rejected() {
    let mut board = movement_board();
    let err = board.apply_move(Move::Place(Pos::new(2, 2))).unwrap_err();
    assert_eq!(err, GameError::WrongPhase(Phase::Movement));
}

#[test]
fn test_shift_foreign_piece_rejected() {
    let mut board = movement_board();
    // Black to move; (4, 0) is White
    let err = board
        .apply_move(Move::Shift {
            from: Pos::new(4, 0),
            to: Pos::new(3, 0),
        })
        .unwrap_err();
    assert_eq!(err, GameError::NotOwned(Pos::new(4, 0)));
}

#[test]
fn test_shift_non_adjacent_rejected() {
    let mut board = movement_board();
    let err = board
        .apply_move(Move::Shift {
            from: Pos::new(0, 0),
            to: Pos::new(2, 0),
        })
        .unwrap_err();
    assert_eq!(
        err,
        GameError::NotAdjacent {
            from: Pos::new(0, 0),
            to: Pos::new(2, 0),
        }
    );
}

#[test]
fn test_winning_move_freezes_turn() {
    let mut board = Board::new();
    let black = [(0, 0), (0, 1), (0, 2)];
    let white = [(4, 0), (4, 1), (4, 2)];
    for i in 0..3 {
        board.apply_move(Move::Place(Pos::new(black[i].0, black[i].1))).unwrap();
        board.apply_move(Move::Place(Pos::new(white[i].0, white[i].1))).unwrap();
    }
    board.apply_move(Move::Place(Pos::new(0, 3))).unwrap();
    assert_eq!(board.winner(), Some(Piece::Black));
    // Turn never advances past a terminal move
    assert_eq!(board.turn(), Piece::Black);
    // And nothing further is legal
    assert_eq!(
        board.apply_move(Move::Place(Pos::new(3, 3))).unwrap_err(),
        GameError::GameOver
    );
}

#[test]
fn test_square_win_in_movement_phase() {
    let mut board = Board::new();
    // Black: three corners of the (1,1)-(2,2) square plus a loose piece
    let black = [(1, 1), (1, 2), (2, 1), (3, 3)];
    let white = [(4, 0), (4, 1), (0, 4), (4, 4)];
    for i in 0..4 {
        board.apply_move(Move::Place(Pos::new(black[i].0, black[i].1))).unwrap();
        board.apply_move(Move::Place(Pos::new(white[i].0, white[i].1))).unwrap();
    }
    assert_eq!(board.phase(), Phase::Movement);
    board
        .apply_move(Move::Shift {
            from: Pos::new(3, 3),
            to: Pos::new(2, 2),
        })
        .unwrap();
    assert_eq!(board.winner(), Some(Piece::Black));
    assert_eq!(board.turn(), Piece::Black);
}

#[test]
fn test_clone_is_independent() {
    let mut board = Board::new();
    board.apply_move(Move::Place(Pos::new(2, 2))).unwrap();

    let copy = board.clone();
    board.apply_move(Move::Place(Pos::new(0, 0))).unwrap();

    assert_eq!(copy.get(Pos::new(0, 0)), Piece::Empty);
    assert_eq!(copy.turn(), Piece::White);
    assert_eq!(board.get(Pos::new(0, 0)), Piece::White);
}

#[test]
fn test_adjacent_empty_cells_center() {
    let board = Board::new();
    assert_eq!(board.adjacent_empty_cells(Pos::new(2, 2)).len(), 8);
}

#[test]
fn test_adjacent_empty_cells_corner_and_occupied() {
    let mut board = Board::new();
    assert_eq!(board.adjacent_empty_cells(Pos::new(0, 0)).len(), 3);
    board.apply_move(Move::Place(Pos::new(0, 1))).unwrap();
    assert_eq!(board.adjacent_empty_cells(Pos::new(0, 0)).len(), 2);
}
