//! Tests for the computer's move heuristic.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_noughts::{Board, Coordinates, Marker, Tier, plan_move, rules, select_move};

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

fn with(pieces: &[(i32, i32, Marker)]) -> Board {
    let mut board = Board::new();
    for &(x, y, marker) in pieces {
        board.place(Coordinates::new(x, y), marker).unwrap();
    }
    board
}

#[test]
fn test_empty_board_returns_center() {
    let coords = select_move(&Board::new(), Marker::O, Marker::X, &mut rng());
    assert_eq!(coords, Some(Coordinates::new(1, 1)));
}

#[test]
fn test_completes_own_two_in_a_row_for_every_line() {
    for line in rules::LINES {
        for gap in 0..3 {
            let mut board = Board::new();
            for (i, &(x, y)) in line.iter().enumerate() {
                if i != gap {
                    board.place(Coordinates::new(x, y), Marker::O).unwrap();
                }
            }
            let (gx, gy) = line[gap];
            let (coords, tier) = plan_move(&board, Marker::O, Marker::X, &mut rng()).unwrap();

            assert_eq!(tier, Tier::Win, "line {line:?} gap {gap}");
            let mut after = board;
            after.place(coords, Marker::O).unwrap();
            assert!(after.winning_combination(Marker::O));
            // With a single open line the only winning cell is the gap.
            assert_eq!(coords, Coordinates::new(gx, gy));
        }
    }
}

#[test]
fn test_blocks_every_opponent_two_in_a_row() {
    for line in rules::LINES {
        for gap in 0..3 {
            let mut board = Board::new();
            for (i, &(x, y)) in line.iter().enumerate() {
                if i != gap {
                    board.place(Coordinates::new(x, y), Marker::X).unwrap();
                }
            }
            let (gx, gy) = line[gap];
            let (coords, tier) = plan_move(&board, Marker::O, Marker::X, &mut rng()).unwrap();

            assert_eq!(tier, Tier::Block, "line {line:?} gap {gap}");
            assert_eq!(coords, Coordinates::new(gx, gy));
        }
    }
}

#[test]
fn test_win_now_beats_block() {
    // X threatens the top row at (2,0); O can finish the bottom row at (2,2).
    let board = with(&[
        (0, 0, Marker::X),
        (1, 0, Marker::X),
        (0, 2, Marker::O),
        (1, 2, Marker::O),
    ]);
    assert_eq!(
        plan_move(&board, Marker::O, Marker::X, &mut rng()),
        Some((Coordinates::new(2, 2), Tier::Win))
    );
}

#[test]
fn test_fallback_is_always_an_empty_cell() {
    let board = with(&[(1, 1, Marker::X), (0, 0, Marker::O)]);
    let mut rng = rng();
    for _ in 0..100 {
        let (coords, tier) = plan_move(&board, Marker::O, Marker::X, &mut rng).unwrap();
        assert_eq!(tier, Tier::Random);
        assert!(board.is_empty_at(coords));
    }
}

#[test]
fn test_caller_board_is_never_mutated() {
    let board = with(&[(0, 0, Marker::X), (1, 0, Marker::X), (1, 1, Marker::O)]);
    let before = board;
    let _ = select_move(&board, Marker::O, Marker::X, &mut rng());
    let _ = select_move(&board, Marker::X, Marker::O, &mut rng());
    assert_eq!(board, before);
}

#[test]
fn test_same_seed_same_choice() {
    let board = with(&[(1, 1, Marker::X)]);
    let a = select_move(&board, Marker::O, Marker::X, &mut StdRng::seed_from_u64(9));
    let b = select_move(&board, Marker::O, Marker::X, &mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
}
