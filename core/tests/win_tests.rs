// SPDX-License-Identifier: MIT OR Apache-2.0

//! Five-in-a-row detection through `play_move`
#![deny(clippy::all)]

use fivego_core::win::Axis;
use fivego_core::{Board, Color, RuleSet, PASS};

/// Plays `stones` in order and returns the winner seen after each move
fn play_line(board: &mut Board, stones: &[(usize, usize)], color: Color) -> Vec<Option<Color>> {
    stones
        .iter()
        .map(|&(row, col)| {
            let point = board.pt(row, col);
            assert!(board.play_move(point, color));
            board.winner()
        })
        .collect()
}

fn assert_wins_on_fifth(stones: &[(usize, usize)]) {
    let mut board = Board::new(9);
    let winners = play_line(&mut board, stones, Color::Black);
    assert!(winners[..4].iter().all(Option::is_none), "won before the fifth stone: {:?}", stones);
    assert_eq!(winners[4], Some(Color::Black), "no win after {:?}", stones);
}

#[test]
fn five_in_a_row() {
    assert_wins_on_fifth(&[(4, 1), (4, 2), (4, 3), (4, 4), (4, 5)]);
}

#[test]
fn five_in_a_column() {
    assert_wins_on_fifth(&[(2, 7), (3, 7), (4, 7), (5, 7), (6, 7)]);
}

#[test]
fn five_on_down_diagonal() {
    assert_wins_on_fifth(&[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]);
}

#[test]
fn five_on_up_diagonal() {
    assert_wins_on_fifth(&[(5, 5), (4, 6), (3, 7), (2, 8), (1, 9)]);
}

#[test]
fn five_completed_in_the_middle() {
    assert_wins_on_fifth(&[(8, 3), (8, 4), (8, 6), (8, 7), (8, 5)]);
}

#[test]
fn five_along_far_edges() {
    assert_wins_on_fifth(&[(9, 5), (9, 6), (9, 7), (9, 8), (9, 9)]);
    assert_wins_on_fifth(&[(5, 9), (6, 9), (7, 9), (8, 9), (9, 9)]);
}

#[test]
fn four_is_not_enough() {
    let mut board = Board::new(9);
    play_line(&mut board, &[(3, 2), (3, 3), (3, 4), (3, 5)], Color::White);
    assert_eq!(board.winner(), None);
    assert_eq!(board.line_length(board.pt(3, 5), Color::White, Axis::Horizontal), 4);
    assert!(!board.has_five_at(board.pt(3, 5), Color::White));
}

#[test]
fn blocked_line_does_not_win() {
    let mut board = Board::new(9);
    play_line(&mut board, &[(5, 1), (5, 2), (5, 4), (5, 5)], Color::Black);
    play_line(&mut board, &[(5, 3)], Color::White);
    play_line(&mut board, &[(5, 6), (5, 7)], Color::Black);
    assert_eq!(board.winner(), None);
}

#[test]
fn mixed_colors_do_not_combine() {
    let mut board = Board::new(9);
    play_line(&mut board, &[(2, 2), (3, 3)], Color::Black);
    play_line(&mut board, &[(4, 4)], Color::White);
    play_line(&mut board, &[(5, 5), (6, 6)], Color::Black);
    assert_eq!(board.winner(), None);
}

#[test]
fn six_in_a_row_wins() {
    let mut board = Board::new(9);
    play_line(&mut board, &[(7, 1), (7, 2), (7, 4), (7, 5), (7, 6)], Color::White);
    assert_eq!(board.winner(), None);
    play_line(&mut board, &[(7, 3)], Color::White);
    assert_eq!(board.winner(), Some(Color::White));
    assert_eq!(board.line_length(board.pt(7, 3), Color::White, Axis::Horizontal), 6);
}

#[test]
fn several_axes_at_once() {
    let mut board = Board::new(9);
    play_line(&mut board, &[(5, 1), (5, 2), (5, 4), (5, 5)], Color::Black);
    play_line(&mut board, &[(1, 3), (2, 3), (3, 3), (4, 3)], Color::Black);
    assert_eq!(board.winner(), None);
    play_line(&mut board, &[(5, 3)], Color::Black);
    assert_eq!(board.winner(), Some(Color::Black));
    assert_eq!(board.line_length(board.pt(5, 3), Color::Black, Axis::Vertical), 5);
}

#[test]
fn winner_survives_later_moves() {
    let mut board = Board::new(9);
    play_line(&mut board, &[(1, 1), (1, 2), (1, 3), (1, 4), (1, 5)], Color::Black);
    play_line(&mut board, &[(9, 9)], Color::White);
    assert!(board.play_move(PASS, Color::Black));
    assert_eq!(board.winner(), Some(Color::Black));
}

#[test]
fn is_legal_does_not_leak_winner() {
    let mut board = Board::new(9);
    play_line(&mut board, &[(2, 1), (2, 2), (2, 3), (2, 4)], Color::White);
    assert!(board.is_legal(board.pt(2, 5), Color::White));
    assert_eq!(board.winner(), None);
}

#[test]
fn end_to_end_five_by_five_middle_row() {
    let mut board = Board::new(5);
    for col in 1..=5 {
        assert_eq!(board.winner(), None);
        assert!(board.play_move(board.pt(3, col), Color::Black));
    }
    assert_eq!(board.winner(), Some(Color::Black));
}

#[test]
fn capture_rules_still_detect_five() {
    let mut board = Board::with_rules(7, RuleSet::Capture).unwrap();
    play_line(&mut board, &[(4, 2), (4, 3), (4, 4), (4, 5)], Color::White);
    assert_eq!(board.winner(), None);
    play_line(&mut board, &[(4, 6)], Color::White);
    assert_eq!(board.winner(), Some(Color::White));
}
