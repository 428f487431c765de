//! Errors used by [`Ship`][crate::ships::Ship] and
//! [`Orientation`][crate::ships::Orientation].

use thiserror::Error;

use crate::board::Coordinate;

/// Error returned when parsing an [`Orientation`][crate::ships::Orientation] from text
/// that names neither rows nor columns.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown orientation {value:?}, expected \"row\" or \"column\"")]
pub struct ParseOrientationError {
    value: String,
}

impl ParseOrientationError {
    pub(super) fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// The text that failed to parse.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Reason a ship could not be constructed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidShip {
    /// Ships must occupy at least one cell.
    #[error("ship length must be positive")]
    ZeroLength,

    /// The run of cells does not fit in the coordinate space at all.
    #[error("ship of length {length} starting at {origin} runs past the addressable range")]
    Overflow { origin: Coordinate, length: usize },
}

/// Error returned when registering a hit on a cell the ship does not occupy.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("ship is not at {coord}, so it cannot get hit")]
pub struct NotOccupied {
    coord: Coordinate,
}

impl NotOccupied {
    pub(super) fn new(coord: Coordinate) -> Self {
        Self { coord }
    }

    /// The coordinate where the hit was attempted.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
