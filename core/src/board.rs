// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation
//!
//! The board is a one-dimensional array with padding. Point `(row, col)`,
//! both 1-based, lives at `row * (size + 1) + col`. Column 0 of every row and
//! the rows before the first and after the last are `Border` cells, so each
//! playable point has four orthogonal and four diagonal neighbors that are
//! valid indices without any bounds check.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{BoardError, Cell, Color, Coord, Move, Point, RuleSet, MAXSIZE};

/// Five-in-a-row board state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    /// Side length of the playable grid
    size: usize,
    /// Row stride, `size + 1`
    ns: usize,
    /// Padded cell array, `size² + 3·(size + 1)` long
    pub(crate) cells: Vec<Cell>,
    /// The color to move next
    current_player: Color,
    /// Point that may not be played next (capture rules only)
    pub(crate) ko_recapture: Option<Point>,
    /// Set once a five-in-a-row is found
    pub(crate) winner: Option<Color>,
    /// Which move-execution path `play_move` takes
    rules: RuleSet,
}

impl Board {
    /// Create an empty board with freestyle rules.
    ///
    /// # Panics
    /// If `size` is not in `2..=MAXSIZE`.
    pub fn new(size: usize) -> Self {
        assert!((2..=MAXSIZE).contains(&size), "board size {} out of range", size);
        Self::build(size, RuleSet::default())
    }

    /// Create an empty board, rejecting an invalid size with an error
    pub fn try_new(size: usize) -> Result<Self, BoardError> {
        Self::with_rules(size, RuleSet::default())
    }

    /// Create an empty board that plays by the given rule set
    pub fn with_rules(size: usize, rules: RuleSet) -> Result<Self, BoardError> {
        if !(2..=MAXSIZE).contains(&size) {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Self::build(size, rules))
    }

    fn build(size: usize, rules: RuleSet) -> Self {
        let mut board = Self {
            size,
            ns: size + 1,
            cells: vec![Cell::Border; size * size + 3 * (size + 1)],
            current_player: Color::Black,
            ko_recapture: None,
            winner: None,
            rules,
        };
        board.reset();
        board
    }

    /// Put the board back into its start state. Size and rule set are kept.
    pub fn reset(&mut self) {
        self.ko_recapture = None;
        self.current_player = Color::Black;
        self.winner = None;
        for row in 1..=self.size {
            let start = self.row_start(row);
            self.cells[start..start + self.size].fill(Cell::Empty);
        }
    }

    /// Independent deep copy of this board
    pub fn copy(&self) -> Self {
        let mut board = Self::build(self.size, self.rules);
        board.cells.copy_from_slice(&self.cells);
        board.current_player = self.current_player;
        board.ko_recapture = self.ko_recapture;
        board.winner = self.winner;
        board
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length of the padded cell array
    pub fn max_point(&self) -> usize {
        self.cells.len()
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn ko_recapture(&self) -> Option<Point> {
        self.ko_recapture
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Address of `(row, col)`, both 1-based
    pub fn pt(&self, row: usize, col: usize) -> Point {
        Coord::new(row, col).to_point(self.size)
    }

    /// Address of column 1 in `row`
    pub fn row_start(&self, row: usize) -> Point {
        assert!((1..=self.size).contains(&row), "row {} out of range", row);
        row * self.ns + 1
    }

    /// Marker at `point`
    pub fn get_color(&self, point: Point) -> Cell {
        self.cells[point]
    }

    /// The four orthogonal neighbors: west, east, north, south
    pub fn neighbors(&self, point: Point) -> [Point; 4] {
        [point - 1, point + 1, point - self.ns, point + self.ns]
    }

    /// The four diagonal neighbors: NW, NE, SW, SE
    pub fn diag_neighbors(&self, point: Point) -> [Point; 4] {
        [
            point - self.ns - 1,
            point - self.ns + 1,
            point + self.ns - 1,
            point + self.ns + 1,
        ]
    }

    /// All empty points in ascending address order
    pub fn get_empty_points(&self) -> Vec<Point> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(point, _)| point)
            .collect()
    }

    /// Every empty point where `color` may legally play
    pub fn legal_moves(&self, color: Color) -> Vec<Point> {
        self.get_empty_points()
            .into_iter()
            .filter(|&point| self.is_legal(point, color))
            .collect()
    }

    /// Playable cells, one `Vec` per row starting from row 1
    pub fn to_grid(&self) -> Vec<Vec<Cell>> {
        (1..=self.size)
            .map(|row| {
                let start = self.row_start(row);
                self.cells[start..start + self.size].to_vec()
            })
            .collect()
    }

    /// Whether `color` may play `mv`.
    ///
    /// The move is played on a copy, so this board is never touched.
    pub fn is_legal(&self, mv: impl Into<Move>, color: Color) -> bool {
        let mut trial = self.copy();
        trial.play_move(mv, color)
    }

    /// Play `mv` for `color`. Returns whether the move was legal.
    ///
    /// Under freestyle rules any empty point is accepted; stones are never
    /// captured and suicide is allowed. Under capture rules see
    /// [`Board::place_with_captures`].
    pub fn play_move(&mut self, mv: impl Into<Move>, color: Color) -> bool {
        let point = match mv.into() {
            Move::Pass => {
                if self.rules == RuleSet::Capture {
                    self.ko_recapture = None;
                }
                self.current_player = color.opposite();
                return true;
            }
            Move::Place(point) => point,
        };
        if self.cells[point] != Cell::Empty {
            trace!(point, ?color, "point is not empty");
            return false;
        }

        match self.rules {
            RuleSet::Freestyle => self.cells[point] = color.into(),
            RuleSet::Capture => {
                if !self.place_with_captures(point, color) {
                    return false;
                }
            }
        }

        self.check_win(point, color);
        self.current_player = color.opposite();
        true
    }
}

/// Unchecked serialized form of [`Board`]
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    ns: usize,
    cells: Vec<Cell>,
    current_player: Color,
    ko_recapture: Option<Point>,
    winner: Option<Color>,
    #[serde(default)]
    rules: RuleSet,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let mut board = Board::with_rules(raw.size, raw.rules)?;
        if raw.ns != board.ns {
            return Err(BoardError::InvalidLayout(format!(
                "stride {} does not match size {}",
                raw.ns, raw.size
            )));
        }
        if raw.cells.len() != board.cells.len() {
            return Err(BoardError::InvalidLayout(format!(
                "{} cells, expected {}",
                raw.cells.len(),
                board.cells.len()
            )));
        }
        for (point, (&cell, &fresh)) in raw.cells.iter().zip(&board.cells).enumerate() {
            if (cell == Cell::Border) != (fresh == Cell::Border) {
                return Err(BoardError::InvalidLayout(format!(
                    "cell {} is {:?}, expected {}",
                    point,
                    cell,
                    if fresh == Cell::Border { "border" } else { "playable" }
                )));
            }
        }
        if let Some(point) = raw.ko_recapture {
            if board.cells.get(point) != Some(&Cell::Empty) {
                return Err(BoardError::InvalidLayout(format!(
                    "ko point {} is not a playable point",
                    point
                )));
            }
        }
        board.cells = raw.cells;
        board.current_player = raw.current_player;
        board.ko_recapture = raw.ko_recapture;
        board.winner = raw.winner;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_grid() {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Black => 'X',
                    Cell::White => 'O',
                    _ => '.',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
