use std::fmt;

use crate::board::{Coordinate, DimensionsError, OutOfBounds};

/// Offsets of the 8 cells surrounding a cell, in row-major order.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Size of a rectangular board with `rows` rows and `columns` columns.
///
/// Converts between [`Coordinate`]s and linear indexes: the cell at `(row, col)` is
/// stored at `row * columns + col`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dimensions {
    rows: usize,
    columns: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified number of rows and columns.
    /// Panics if either is 0 or if `rows * columns` exceeds `usize::max_value()`.
    pub fn new(rows: usize, columns: usize) -> Self {
        match Self::try_new(rows, columns) {
            Ok(dim) => dim,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create new [`Dimensions`] with the specified number of rows and columns.
    /// Returns an error if either is 0 or if `rows * columns` exceeds
    /// `usize::max_value()`.
    pub fn try_new(rows: usize, columns: usize) -> Result<Self, DimensionsError> {
        if rows == 0 || columns == 0 {
            Err(DimensionsError::Empty { rows, columns })
        } else {
            rows.checked_mul(columns)
                .map(|_| Self { rows, columns })
                .ok_or(DimensionsError::TooLarge { rows, columns })
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells. Used to allocate storage for the board.
    pub fn total_size(&self) -> usize {
        self.rows * self.columns
    }

    /// Returns true if the coordinate addresses a cell within these dimensions.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.rows && coord.col < self.columns
    }

    /// Convert a coordinate to its linear index.
    pub fn index_of(&self, coord: Coordinate) -> Result<usize, OutOfBounds> {
        if coord.row >= self.rows {
            Err(OutOfBounds::Row {
                row: coord.row,
                rows: self.rows,
            })
        } else if coord.col >= self.columns {
            Err(OutOfBounds::Column {
                col: coord.col,
                columns: self.columns,
            })
        } else {
            Ok(coord.row * self.columns + coord.col)
        }
    }

    /// Convert a coordinate to its linear index, or `None` if it is out of bounds.
    #[inline]
    pub fn try_index_of(&self, coord: Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.columns + coord.col)
        } else {
            None
        }
    }

    /// Get back the coordinate of a linear index.
    pub fn coordinates_of(&self, index: usize) -> Result<Coordinate, OutOfBounds> {
        if index >= self.total_size() {
            Err(OutOfBounds::Index {
                index,
                size: self.total_size(),
            })
        } else {
            Ok(Coordinate::new(index / self.columns, index % self.columns))
        }
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let columns = self.columns;
        (0..self.rows).map(move |row| (0..columns).map(move |col| Coordinate { row, col }))
    }

    /// Get an iterator over all coordinates in row-major order.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = Coordinate> {
        self.iter_rows().flatten()
    }

    /// Iterate the in-bounds cells surrounding the given coordinate, diagonals
    /// included. Empty if the coordinate itself is out of bounds.
    pub fn neighbors(&self, coord: Coordinate) -> Neighbors {
        Neighbors {
            dim: *self,
            center: coord,
            // Skip directly to the end for out of bounds coordinates so we don't have to
            // check the center every iteration.
            next: if self.contains(coord) {
                0
            } else {
                NEIGHBOR_OFFSETS.len()
            },
        }
    }

    /// Return true if the given coordinates touch, including diagonally.
    pub fn is_neighbor(&self, c1: Coordinate, c2: Coordinate) -> bool {
        self.neighbors(c1).any(|n| n == c2)
    }
}

impl Default for Dimensions {
    /// The 13x13 board of the standard game.
    fn default() -> Self {
        Self {
            rows: 13,
            columns: 13,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// Iterator over the neighbors of a coordinate.
#[derive(Debug, Clone)]
pub struct Neighbors {
    dim: Dimensions,
    center: Coordinate,
    next: usize,
}

impl Iterator for Neighbors {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        while let Some(&(dr, dc)) = NEIGHBOR_OFFSETS.get(self.next) {
            self.next += 1;
            if let (Some(row), Some(col)) = (shift(self.center.row, dr), shift(self.center.col, dc)) {
                let coord = Coordinate::new(row, col);
                if self.dim.contains(coord) {
                    return Some(coord);
                }
            }
        }
        None
    }
}

/// Move `v` by a unit offset, returning `None` below zero.
fn shift(v: usize, delta: isize) -> Option<usize> {
    match delta {
        -1 => v.checked_sub(1),
        1 => v.checked_add(1),
        _ => Some(v),
    }
}
