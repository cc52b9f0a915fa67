//! Grid storage and board rendering

pub mod layout;
pub mod paths;

pub use layout::build_layout;
pub use paths::LanePaths;

use std::fmt;

use crate::core::types::{Cell, Coord};

/// Fixed-size rectangular board of cell values, row-major storage.
///
/// Dimensions are immutable after construction. Out-of-bounds reads return
/// `None`; out-of-bounds writes are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn filled(rows: usize, cols: usize, fill: Cell) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if coord.row < self.rows && coord.col < self.cols {
            Some(self.cells[coord.row * self.cols + coord.col])
        } else {
            None
        }
    }

    #[inline]
    pub fn set(&mut self, coord: Coord, value: Cell) {
        if coord.row < self.rows && coord.col < self.cols {
            self.cells[coord.row * self.cols + coord.col] = value;
        }
    }

    /// All coordinates in row-major (top-to-bottom, left-to-right) order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord::new(row, col)))
    }

    /// Coordinates currently holding the given cell value, in row-major
    /// scan order. Entities are always found this way; the grid is the
    /// single source of truth.
    pub fn positions_of(&self, value: Cell) -> Vec<Coord> {
        self.coords().filter(|&c| self.get(c) == Some(value)).collect()
    }

    pub fn count_of(&self, value: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// In-bounds 4-connected neighbors (right, left, down, up)
    pub fn neighbors4(&self, coord: Coord) -> Vec<Coord> {
        const OFFSETS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
        let mut neighbors = Vec::with_capacity(4);
        for (dr, dc) in OFFSETS {
            let row = coord.row as isize + dr;
            let col = coord.col as isize + dc;
            if row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols {
                neighbors.push(Coord::new(row as usize, col as usize));
            }
        }
        neighbors
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(self.cols * 3 + 2);
        writeln!(f, "{border}")?;
        for row in 0..self.rows {
            write!(f, "|")?;
            for col in 0..self.cols {
                let cell = self.cells[row * self.cols + col];
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{border}")
    }
}
