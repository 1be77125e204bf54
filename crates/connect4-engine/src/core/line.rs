use std::{array, ops::Range};

use super::board::Board;

/// Number of same-player cells in a row needed to win.
pub const LINE_LENGTH: usize = 4;

/// Total number of lines on the board (21 vertical, 24 horizontal, 12 per diagonal).
pub const LINE_COUNT: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < Orientation::ALL.len() {
        total += Orientation::ALL[i].line_count();
        i += 1;
    }
    total
};

/// Direction of a line of four.
///
/// Diagonals are named by the direction they take when read left to right:
/// `DiagonalUp` climbs one row per column, `DiagonalDown` descends one row per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Vertical,
    Horizontal,
    DiagonalUp,
    DiagonalDown,
}

impl Orientation {
    pub const ALL: [Self; 4] = [
        Self::Vertical,
        Self::Horizontal,
        Self::DiagonalUp,
        Self::DiagonalDown,
    ];

    /// Column and row delta between consecutive cells of a line.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Self::Vertical => (0, 1),
            Self::Horizontal => (1, 0),
            Self::DiagonalUp => (1, 1),
            Self::DiagonalDown => (1, -1),
        }
    }

    const fn anchor_columns(self) -> Range<usize> {
        let (dc, _) = self.step();
        0..Board::WIDTH - (LINE_LENGTH - 1) * dc.unsigned_abs()
    }

    const fn anchor_rows(self) -> Range<usize> {
        let (_, dr) = self.step();
        let span = (LINE_LENGTH - 1) * dr.unsigned_abs();
        if dr < 0 {
            span..Board::HEIGHT
        } else {
            0..Board::HEIGHT - span
        }
    }

    /// Number of distinct lines with this orientation.
    #[must_use]
    pub const fn line_count(self) -> usize {
        let columns = self.anchor_columns();
        let rows = self.anchor_rows();
        (columns.end - columns.start) * (rows.end - rows.start)
    }

    /// Iterates every line of this orientation, anchor column first, then anchor row.
    pub fn lines(self) -> impl Iterator<Item = Line> {
        self.anchor_columns().flat_map(move |column| {
            self.anchor_rows().map(move |row| Line {
                orientation: self,
                column,
                row,
            })
        })
    }
}

/// A straight run of [`LINE_LENGTH`] cells, identified by orientation and anchor cell.
///
/// The anchor is the leftmost cell of the line (the bottom cell for vertical lines).
///
/// # Example
///
/// ```
/// use connect4_engine::{Line, Orientation, LINE_COUNT};
///
/// assert_eq!(Line::all().count(), LINE_COUNT);
///
/// let line = Orientation::DiagonalDown.lines().next().unwrap();
/// assert_eq!(line.cells(), [(0, 3), (1, 2), (2, 1), (3, 0)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub orientation: Orientation,
    pub column: usize,
    pub row: usize,
}

impl Line {
    /// Iterates every line on the board, grouped by orientation in [`Orientation::ALL`] order.
    pub fn all() -> impl Iterator<Item = Line> {
        Orientation::ALL.into_iter().flat_map(Orientation::lines)
    }

    /// Returns the `(column, row)` coordinates of the four cells, starting at the anchor.
    #[must_use]
    pub fn cells(self) -> [(usize, usize); LINE_LENGTH] {
        let (dc, dr) = self.orientation.step();
        array::from_fn(|i| (offset(self.column, dc, i), offset(self.row, dr, i)))
    }

    #[must_use]
    pub fn contains(self, column: usize, row: usize) -> bool {
        self.cells().contains(&(column, row))
    }
}

fn offset(base: usize, step: isize, i: usize) -> usize {
    match step {
        0 => base,
        1 => base + i,
        -1 => base - i,
        _ => unreachable!("line steps are unit steps"),
    }
}
