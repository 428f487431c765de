use thiserror::Error;

use crate::{
    board::{Coordinate, DimensionsError},
    placement::PlacementError,
};

/// Reason a [`Session`][crate::game::Session] could not be set up.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SessionError {
    /// The board dimensions are unusable.
    #[error(transparent)]
    Dimensions(#[from] DimensionsError),

    /// The fleet could not be placed.
    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// A game needs at least one ship to sink.
    #[error("the fleet has no ships")]
    EmptyFleet,

    /// An explicitly provided ship leaves the board.
    #[error("ship {ship} leaves the board at {coord}")]
    ShipOutOfBounds { ship: usize, coord: Coordinate },

    /// Two explicitly provided ships share a cell.
    #[error("ships {first} and {second} both occupy {coord}")]
    ShipsOverlap {
        first: usize,
        second: usize,
        coord: Coordinate,
    },
}
