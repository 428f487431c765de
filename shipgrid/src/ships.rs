// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Ships: straight runs of cells that record the hits they take.
use std::{collections::HashSet, fmt, str::FromStr};

use crate::board::{Coordinate, Dimensions};

pub use self::errors::{InvalidShip, NotOccupied, ParseOrientationError};

mod errors;

/// Direction in which a ship extends from its origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Fixed row, increasing column.
    Row,
    /// Fixed column, increasing row.
    Column,
}

impl Orientation {
    /// All orientations.
    pub const ALL: &'static [Orientation] = &[Orientation::Row, Orientation::Column];

    /// Name used when parsing and printing.
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Row => "row",
            Orientation::Column => "column",
        }
    }

    /// Returns true if a ship of the given length fits along this orientation in the
    /// given dimensions.
    pub fn fits(self, length: usize, dim: &Dimensions) -> bool {
        match self {
            Orientation::Row => length <= dim.columns(),
            Orientation::Column => length <= dim.rows(),
        }
    }

    /// The cell `steps` cells away from `origin` along this orientation.
    fn advance(self, origin: Coordinate, steps: usize) -> Option<Coordinate> {
        match self {
            Orientation::Row => origin
                .col
                .checked_add(steps)
                .map(|col| Coordinate::new(origin.row, col)),
            Orientation::Column => origin
                .row
                .checked_add(steps)
                .map(|row| Coordinate::new(row, origin.col)),
        }
    }
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("row") => Ok(Orientation::Row),
            v if v.eq_ignore_ascii_case("column") => Ok(Orientation::Column),
            _ => Err(ParseOrientationError::new(s)),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A ship placed at a fixed position.
///
/// The occupied cells are computed once on construction. Bounds are not checked here;
/// use [`Ship::fits`] or let the placement engine pick the position.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    orientation: Orientation,
    /// Occupied cells, starting at the origin.
    cells: Vec<Coordinate>,
    /// Subset of `cells` that have been shot.
    hits: HashSet<Coordinate>,
}

impl Ship {
    /// Construct a ship of `length` cells extending from `origin` along `orientation`.
    pub fn new(
        length: usize,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<Self, InvalidShip> {
        if length == 0 {
            return Err(InvalidShip::ZeroLength);
        }
        let cells = (0..length)
            .map(|step| orientation.advance(origin, step))
            .collect::<Option<Vec<_>>>()
            .ok_or(InvalidShip::Overflow { origin, length })?;
        Ok(Self {
            orientation,
            cells,
            hits: HashSet::with_capacity(length),
        })
    }

    /// Number of cells this ship occupies.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// The first occupied cell.
    pub fn origin(&self) -> Coordinate {
        self.cells[0]
    }

    /// The last occupied cell.
    pub fn end(&self) -> Coordinate {
        self.cells[self.cells.len() - 1]
    }

    /// Orientation of this ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells in order from the origin.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Returns true if the ship occupies the given cell.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    /// Returns true if every cell of the ship lies inside the given dimensions.
    pub fn fits(&self, dim: &Dimensions) -> bool {
        dim.contains(self.end())
    }

    /// Cells that have been hit, in no particular order.
    pub fn hit_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.hits.iter().copied()
    }

    /// Returns true if the given cell was hit.
    pub fn is_hit(&self, coord: Coordinate) -> bool {
        self.hits.contains(&coord)
    }

    /// Record a hit on one of this ship's cells. Returns true if the cell had not been
    /// hit before; hitting a cell again changes nothing.
    pub fn register_hit(&mut self, coord: Coordinate) -> Result<bool, NotOccupied> {
        if !self.contains(coord) {
            return Err(NotOccupied::new(coord));
        }
        Ok(self.hits.insert(coord))
    }

    /// Check if this ship has been sunk: every occupied cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.cells.iter().all(|coord| self.hits.contains(coord))
    }

    /// The occupied cells plus every in-bounds cell touching them, diagonals included.
    /// No other ship may occupy any of these cells.
    pub fn buffer_zone(&self, dim: &Dimensions) -> HashSet<Coordinate> {
        let mut zone: HashSet<_> = self.cells.iter().copied().collect();
        for &coord in &self.cells {
            zone.extend(dim.neighbors(coord));
        }
        zone
    }
}
