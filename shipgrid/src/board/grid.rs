//! Dense storage of one value per cell. Shared by the [`Board`][crate::board::Board],
//! the session's occupancy index and the placement engine.

use std::ops::{Index, IndexMut};

use crate::board::{Coordinate, Dimensions, OutOfBounds};

/// Row-major storage of one `T` per cell of the given [`Dimensions`].
#[derive(Debug, Clone)]
pub(crate) struct Grid<T> {
    /// Dimensions of this grid.
    pub(crate) dim: Dimensions,
    /// Cells that make up this grid.
    cells: Box<[T]>,
}

impl<T: Clone> Grid<T> {
    /// Build a grid with every cell set to `fill`.
    pub(crate) fn new(dim: Dimensions, fill: T) -> Self {
        Self {
            dim,
            cells: vec![fill; dim.total_size()].into_boxed_slice(),
        }
    }
}

impl<T> Grid<T> {
    /// Get a reference to the cell at the given [`Coordinate`].
    pub(crate) fn get(&self, coord: Coordinate) -> Option<&T> {
        self.dim
            .try_index_of(coord)
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(crate) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut T> {
        self.dim
            .try_index_of(coord)
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Like [`Grid::get`], but reports which bound was violated.
    pub(crate) fn try_get(&self, coord: Coordinate) -> Result<&T, OutOfBounds> {
        let i = self.dim.index_of(coord)?;
        Ok(&self.cells[i])
    }

    /// Like [`Grid::get_mut`], but reports which bound was violated.
    pub(crate) fn try_get_mut(&mut self, coord: Coordinate) -> Result<&mut T, OutOfBounds> {
        let i = self.dim.index_of(coord)?;
        Ok(&mut self.cells[i])
    }
}

impl<T> Index<Coordinate> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<T> IndexMut<Coordinate> for Grid<T> {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
