//! Teeko Engine CLI
//!
//! A command-line driver for exercising the Teeko engine.
//! Runs a few tactical scenarios, then a full self-play game.

use teeko::strategy::{self, Strategy};
use teeko::{
    Algorithm, Board, Engine, EngineConfig, Move, MoveOrdering, Phase, Piece, Pos, Weights,
    BOARD_SIZE,
};

fn main() {
    println!("===========================================");
    println!("        Teeko Engine v0.1.0");
    println!("===========================================\n");

    // Shallower than the real "balanced" opponent so the demo stays snappy
    let engine = Engine::new(EngineConfig {
        algorithm: Algorithm::AlphaBeta,
        depth: 3,
        weights: Weights::BALANCED,
        ordering: MoveOrdering::CenterFirst,
    });

    println!("--- Test 1: Opening Move ---");
    test_opening_move(&engine);

    println!("\n--- Test 2: Find Winning Move ---");
    test_winning_move(&engine);

    println!("\n--- Test 3: Block Opponent Win ---");
    test_block_opponent(&engine);

    println!("\n--- Test 4: Complete a Square ---");
    test_square_completion(&engine);

    println!("\n--- Test 5: Self-Play Game ---");
    test_self_play();

    println!("\n===========================================");
    println!("          All Tests Completed!");
    println!("===========================================");
}

fn test_opening_move(engine: &Engine) {
    let board = Board::new();
    let result = engine.get_move_with_stats(&board);

    if let Some(m) = result.best_move {
        println!("  Black opens with: {m}");
        println!("  Time: {}ms, Nodes: {}", result.time_ms, result.nodes);
        let target = m.target();
        let dist = (i32::from(target.row) - 2).abs() + (i32::from(target.col) - 2).abs();
        if dist <= 2 {
            println!("  Result: PASS - Near the center");
        } else {
            println!("  Result: QUESTIONABLE - Far from center");
        }
    } else {
        println!("  Result: FAIL - No move found");
    }
}

fn test_winning_move(engine: &Engine) {
    let mut board = Board::new();
    place_all(&mut board, &[(0, 0), (0, 1), (0, 2)], &[(4, 0), (4, 1), (2, 2)]);

    let result = engine.get_move_with_stats(&board);

    if let Some(m) = result.best_move {
        println!("  Position: Black has 3 at row 0, cols 0-2");
        println!("  Black plays: {m}");
        println!("  Expected: place (0, 3) - Immediate Win");
        if m == Move::Place(Pos::new(0, 3)) {
            println!("  Result: PASS");
        } else {
            println!("  Result: FAIL - Wrong move");
        }
    } else {
        println!("  Result: FAIL - No move found");
    }
}

fn test_block_opponent(engine: &Engine) {
    let mut board = Board::new();
    place_all(&mut board, &[(0, 0), (0, 1), (1, 3)], &[(4, 0), (4, 1), (4, 2)]);

    let result = engine.get_move_with_stats(&board);

    if let Some(m) = result.best_move {
        println!("  Position: White has 3 at row 4, cols 0-2");
        println!("  Black plays: {m}");
        println!("  Expected: place (4, 3) - Defense");
        if m == Move::Place(Pos::new(4, 3)) {
            println!("  Result: PASS");
        } else {
            println!("  Result: FAIL - Wrong move");
        }
    } else {
        println!("  Result: FAIL - No move found");
    }
}

fn test_square_completion(engine: &Engine) {
    let mut board = Board::new();
    place_all(
        &mut board,
        &[(1, 1), (1, 2), (2, 1), (3, 3)],
        &[(4, 0), (4, 1), (0, 4), (4, 4)],
    );
    assert_eq!(board.phase(), Phase::Movement);

    let result = engine.get_move_with_stats(&board);

    if let Some(m) = result.best_move {
        println!("  Position: Black holds 3 corners of the (1,1) square");
        println!("  Black plays: {m}");
        println!("  Expected: (3, 3) -> (2, 2) - Square Win");
        let expected = Move::Shift {
            from: Pos::new(3, 3),
            to: Pos::new(2, 2),
        };
        if m == expected {
            println!("  Result: PASS");
        } else {
            println!("  Result: FAIL - Wrong move");
        }
    } else {
        println!("  Result: FAIL - No move found");
    }
}

fn test_self_play() {
    let black = strategy::create("balanced").expect("registered strategy");
    let white = strategy::create("aggressive").expect("registered strategy");
    println!("  {} (Black) vs {} (White)", black.name(), white.name());

    let mut board = Board::new();
    let move_budget = 200;
    let mut moves_played = 0;

    while !board.is_over() && moves_played < move_budget {
        let mover: &dyn Strategy = if board.turn() == Piece::Black {
            black.as_ref()
        } else {
            white.as_ref()
        };
        let Some(mv) = mover.next_move(&board) else {
            println!("  {:?} has no legal move", board.turn());
            break;
        };
        board.apply_move(mv).expect("strategy move must be legal");
        moves_played += 1;
    }

    print_board(&board);
    match board.winner() {
        Some(winner) => println!("  Winner: {winner:?} after {moves_played} moves"),
        None => println!("  No winner within {moves_played} moves"),
    }
}

fn place_all(board: &mut Board, black: &[(u8, u8)], white: &[(u8, u8)]) {
    let max = black.len().max(white.len());
    for i in 0..max {
        if let Some(&(r, c)) = black.get(i) {
            board
                .apply_move(Move::Place(Pos::new(r, c)))
                .expect("setup placement");
        }
        if let Some(&(r, c)) = white.get(i) {
            board
                .apply_move(Move::Place(Pos::new(r, c)))
                .expect("setup placement");
        }
    }
}

fn print_board(board: &Board) {
    print!("    ");
    for c in 0..BOARD_SIZE {
        print!("{c:2}");
    }
    println!();

    for r in 0..BOARD_SIZE {
        print!("  {r:2} ");
        for c in 0..BOARD_SIZE {
            let ch = match board.get(Pos::new(r as u8, c as u8)) {
                Piece::Black => " X",
                Piece::White => " O",
                Piece::Empty => " .",
            };
            print!("{ch}");
        }
        println!();
    }
}
