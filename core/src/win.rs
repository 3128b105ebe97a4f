// SPDX-License-Identifier: MIT OR Apache-2.0

//! Five-in-a-row detection
//!
//! Only lines through the last played stone are scanned. Each axis is walked
//! up to four steps in both directions from that stone.

use tracing::debug;

use crate::{Board, Cell, Color, Point, WIN_LENGTH};

/// The four scan axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along a row
    Horizontal,
    /// Along a column
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Top-right to bottom-left
    DiagonalUp,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// Address step along this axis on a board of `size`
    pub fn stride(self, size: usize) -> usize {
        match self {
            Axis::Horizontal => 1,
            Axis::Vertical => size + 1,
            Axis::DiagonalDown => size + 2,
            Axis::DiagonalUp => size,
        }
    }
}

/// Contiguous `color` stones through `point` along one stride.
///
/// Both direction passes start on `point` itself and the counter starts at
/// -1, so a matching origin contributes once overall. A pass takes at most
/// `WIN_LENGTH` looks and stops on the first non-matching cell or once the
/// address leaves `0 < location < cells.len()`.
fn run_length(cells: &[Cell], point: Point, stride: usize, color: Cell) -> i32 {
    let mut count = -1;
    for step in [stride as isize, -(stride as isize)] {
        let mut location = point as isize;
        for _ in 0..WIN_LENGTH {
            let in_range = location > 0 && (location as usize) < cells.len();
            if !in_range || cells[location as usize] != color {
                break;
            }
            count += 1;
            location += step;
        }
    }
    count
}

impl Board {
    /// Length of the `color` run through `point` on `axis`, capped at nine.
    /// Zero if `point` itself is not `color`.
    pub fn line_length(&self, point: Point, color: Color, axis: Axis) -> usize {
        let count = run_length(&self.cells, point, axis.stride(self.size()), color.into());
        count.max(0) as usize
    }

    /// Whether `point` is part of five or more `color` stones on any axis
    pub fn has_five_at(&self, point: Point, color: Color) -> bool {
        Axis::ALL
            .iter()
            .any(|&axis| self.line_length(point, color, axis) >= WIN_LENGTH)
    }

    /// Record `color` as winner if the stone on `point` completed a line
    pub(crate) fn check_win(&mut self, point: Point, color: Color) {
        if self.has_five_at(point, color) {
            debug!(point, ?color, "five in a row");
            self.winner = Some(color);
        }
    }
}
