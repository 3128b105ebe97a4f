// SPDX-License-Identifier: MIT OR Apache-2.0

//! Group, liberty and eye analysis
//!
//! Freestyle play never consults blocks or liberties; they drive the
//! capture rule set and eye detection.

use tracing::debug;

use crate::{Board, BoardError, Cell, Color, Point};

impl Board {
    /// Orthogonal neighbors of `point` holding `color`
    pub fn neighbors_of_color(&self, point: Point, color: Cell) -> Vec<Point> {
        self.neighbors(point)
            .into_iter()
            .filter(|&nb| self.cells[nb] == color)
            .collect()
    }

    /// All points of the block containing `stone`, in ascending order.
    ///
    /// # Panics
    /// If `stone` holds no black or white stone.
    pub fn block_of(&self, stone: Point) -> Vec<Point> {
        let color = self.cells[stone];
        assert!(color.is_stone(), "block_of({}) on {:?}", stone, color);

        let mut marker = vec![false; self.cells.len()];
        let mut pointstack = vec![stone];
        marker[stone] = true;
        while let Some(p) = pointstack.pop() {
            for nb in self.neighbors_of_color(p, color) {
                if !marker[nb] {
                    marker[nb] = true;
                    pointstack.push(nb);
                }
            }
        }

        marker
            .iter()
            .enumerate()
            .filter(|(_, in_block)| **in_block)
            .map(|(point, _)| point)
            .collect()
    }

    /// Like [`Board::block_of`], but reports a non-stone as an error
    pub fn try_block_of(&self, stone: Point) -> Result<Vec<Point>, BoardError> {
        if !self.cells[stone].is_stone() {
            return Err(BoardError::NotAStone { point: stone });
        }
        Ok(self.block_of(stone))
    }

    /// True iff some stone of `block` touches an empty point
    pub fn has_liberty(&self, block: &[Point]) -> bool {
        block
            .iter()
            .any(|&stone| !self.neighbors_of_color(stone, Cell::Empty).is_empty())
    }

    /// Remove the block at `point` if it has no liberty.
    ///
    /// Returns `Some(point)` iff exactly one stone was removed, which is
    /// what makes a ko possible.
    pub fn detect_and_process_capture(&mut self, point: Point) -> Option<Point> {
        let block = self.block_of(point);
        if self.has_liberty(&block) {
            return None;
        }
        for &stone in &block {
            self.cells[stone] = Cell::Empty;
        }
        debug!(point, captured = block.len(), "block captured");
        (block.len() == 1).then_some(point)
    }

    /// Every orthogonal neighbor of `point` is `color` or border
    pub fn is_surrounded(&self, point: Point, color: Color) -> bool {
        let color = Cell::from(color);
        self.neighbors(point)
            .into_iter()
            .all(|nb| matches!(self.cells[nb], Cell::Border) || self.cells[nb] == color)
    }

    /// Whether `point` is a simple single-point eye for `color`.
    ///
    /// Diagonal opponent stones make an eye false: none are tolerated at the
    /// edge or in a corner, one in the center.
    pub fn is_eye(&self, point: Point, color: Color) -> bool {
        if !self.is_surrounded(point, color) {
            return false;
        }
        let opp = Cell::from(color.opposite());
        let mut false_count = 0;
        let mut at_edge = 0;
        for d in self.diag_neighbors(point) {
            if self.cells[d] == Cell::Border {
                at_edge = 1;
            } else if self.cells[d] == opp {
                false_count += 1;
            }
        }
        false_count <= 1 - at_edge
    }

    /// Capture-rules placement on an empty `point`.
    ///
    /// Rejects the ko point, removes opponent blocks left without liberties
    /// and undoes a suicide. On success the stone stays on the board and the
    /// ko point is updated.
    pub(crate) fn place_with_captures(&mut self, point: Point, color: Color) -> bool {
        if self.ko_recapture == Some(point) {
            debug!(point, ?color, "ko recapture rejected");
            return false;
        }

        let opp = color.opposite();
        let in_enemy_eye = self.is_surrounded(point, opp);
        self.cells[point] = color.into();

        let mut single_captures = Vec::new();
        for nb in self.neighbors(point) {
            if self.cells[nb] == Cell::from(opp) {
                if let Some(captured) = self.detect_and_process_capture(nb) {
                    single_captures.push(captured);
                }
            }
        }

        let block = self.block_of(point);
        if !self.has_liberty(&block) {
            self.cells[point] = Cell::Empty;
            debug!(point, ?color, "suicide rejected");
            return false;
        }

        self.ko_recapture = None;
        if in_enemy_eye && single_captures.len() == 1 {
            self.ko_recapture = Some(single_captures[0]);
        }
        true
    }
}
