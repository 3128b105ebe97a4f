// SPDX-License-Identifier: MIT OR Apache-2.0

//! fivego Core - Board State and Move Logic
//!
//! This crate provides the board that a five-in-a-row player runs on:
//! - Padded one-dimensional board addressing
//! - Group, liberty and eye analysis
//! - Move legality (checked on a throwaway copy) and move execution
//! - Five-in-a-row win detection from the last played stone

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod config;
pub mod rules;
pub mod win;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

pub use board::Board;
pub use config::{BoardConfig, RuleSet};

/// Largest supported board side length
pub const MAXSIZE: usize = 25;

/// Number of aligned stones that wins the game
pub const WIN_LENGTH: usize = 5;

/// Address of a cell in the padded board array
pub type Point = usize;

/// Player color (Black or White)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Black player (moves first)
    Black,
    /// White player
    White,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Marker stored in a board cell.
///
/// Serialized as its integer code so a board's cell array keeps the
/// `EMPTY = 0, BLACK = 1, WHITE = 2, BORDER = 3` encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Cell {
    /// Playable point with no stone
    Empty = 0,
    /// Black stone
    Black = 1,
    /// White stone
    White = 2,
    /// Padding outside the playable grid
    Border = 3,
}

impl Cell {
    /// The stone color in this cell, if any
    pub fn stone(self) -> Option<Color> {
        match self {
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
            Cell::Empty | Cell::Border => None,
        }
    }

    /// True for black and white stones
    pub fn is_stone(self) -> bool {
        self.stone().is_some()
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// 1-based board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row, counted from 1
    pub row: usize,
    /// Column, counted from 1
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if coordinate is on a board of given size
    pub fn is_valid(&self, board_size: usize) -> bool {
        (1..=board_size).contains(&self.row) && (1..=board_size).contains(&self.col)
    }

    /// Padded address of this coordinate. Stride is `board_size + 1`.
    pub fn to_point(&self, board_size: usize) -> Point {
        assert!(self.is_valid(board_size), "{:?} is off a {} board", self, board_size);
        self.row * (board_size + 1) + self.col
    }

    /// Inverse of [`Coord::to_point`]; `None` for border addresses
    pub fn from_point(point: Point, board_size: usize) -> Option<Self> {
        let ns = board_size + 1;
        let coord = Coord::new(point / ns, point % ns);
        coord.is_valid(board_size).then_some(coord)
    }
}

/// A move request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a stone at the given address
    Place(Point),
    /// Pass the turn
    Pass,
}

/// The reserved pass move
pub const PASS: Move = Move::Pass;

impl From<Point> for Move {
    fn from(point: Point) -> Self {
        Move::Place(point)
    }
}

/// Errors returned by the fallible board constructors and config loading
#[derive(Debug, Error)]
pub enum BoardError {
    /// Board side length outside `2..=MAXSIZE`
    #[error("Invalid board size {size}, expected 2..={max}", max = MAXSIZE)]
    InvalidSize {
        /// The rejected size
        size: usize,
    },

    /// Flood fill requested from a point that holds no stone
    #[error("Point {point} does not hold a stone")]
    NotAStone {
        /// The rejected point
        point: Point,
    },

    /// Serialized board does not have the padded layout of its size
    #[error("Invalid board layout: {0}")]
    InvalidLayout(String),

    /// Rule set name not recognised
    #[error("Unknown rule set '{0}', expected freestyle or capture")]
    UnknownRuleSet(String),

    /// Board configuration could not be parsed
    #[error("Invalid board config: {0}")]
    Config(#[from] serde_json::Error),

    /// Board configuration file could not be read
    #[error("Failed to read board config: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_point_roundtrip_on_corners() {
        assert_eq!(Coord::new(1, 1).to_point(5), 7);
        assert_eq!(Coord::new(5, 5).to_point(5), 35);
        assert_eq!(Coord::from_point(7, 5), Some(Coord::new(1, 1)));
        assert_eq!(Coord::from_point(35, 5), Some(Coord::new(5, 5)));
    }

    #[test]
    fn test_from_point_rejects_border() {
        // column 0 and row 0 are padding
        assert_eq!(Coord::from_point(6, 5), None);
        assert_eq!(Coord::from_point(3, 5), None);
        assert_eq!(Coord::from_point(37, 5), None);
    }

    #[test]
    fn test_cell_codes() {
        assert_eq!(serde_json::to_string(&Cell::Empty).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Cell::Border).unwrap(), "3");
        assert_eq!(serde_json::from_str::<Cell>("2").unwrap(), Cell::White);
        assert_eq!(Cell::from(Color::Black).stone(), Some(Color::Black));
        assert!(!Cell::Border.is_stone());
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::White.opposite(), Color::Black);
    }
}
