//! Types that make up the game board.

pub(crate) use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::{Dimensions, Neighbors},
    errors::{DimensionsError, OutOfBounds},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;

/// What the player knows about a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Not shot at or revealed yet.
    Unknown,
    /// Shot at, and no ship occupies it.
    Water,
    /// A ship that is still afloat occupies it.
    Ship,
    /// A sunk ship occupies it.
    SunkShip,
}

impl CellState {
    /// Returns true if anything has been discovered about this cell.
    pub fn is_known(self) -> bool {
        match self {
            CellState::Unknown => false,
            CellState::Water | CellState::Ship | CellState::SunkShip => true,
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Unknown
    }
}

/// The player's view of the ocean: one [`CellState`] per cell.
///
/// The board does not know where ships are. It only holds the display state derived
/// from shots and sinkings, which the [`Session`][crate::game::Session] keeps up to
/// date.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid<CellState>,
}

impl Board {
    /// Create a board where every cell is [`CellState::Unknown`].
    pub fn new(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim, CellState::Unknown),
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Get the state of the cell at the given coordinate. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn get(&self, coord: Coordinate) -> Option<CellState> {
        self.grid.get(coord).copied()
    }

    /// Get the state of the cell at the given coordinate.
    pub fn state_at(&self, coord: Coordinate) -> Result<CellState, OutOfBounds> {
        self.grid.try_get(coord).map(|state| *state)
    }

    /// Overwrite the state of the cell at the given coordinate.
    pub fn set_state(&mut self, coord: Coordinate, state: CellState) -> Result<(), OutOfBounds> {
        *self.grid.try_get_mut(coord)? = state;
        Ok(())
    }

    /// Overwrite a cell the caller already knows to be in bounds.
    pub(crate) fn mark(&mut self, coord: Coordinate, state: CellState) {
        self.grid[coord] = state;
    }

    /// Count the cells that are in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.grid
            .dim
            .iter_coordinates()
            .filter(|&coord| self.grid[coord] == state)
            .count()
    }

    /// Get an iterator over the rows of the board. Each row is an iterator over the
    /// coordinates and states of its cells.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = (Coordinate, CellState)>> {
        let grid = &self.grid;
        grid.dim
            .iter_rows()
            .map(move |row| row.map(move |coord| (coord, grid[coord])))
    }
}
