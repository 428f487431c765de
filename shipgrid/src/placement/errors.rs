//! Errors used by the placement engine.

use std::num::ParseIntError;

use thiserror::Error;

use crate::{board::Dimensions, ships::InvalidShip};

/// Reason a fleet could not be placed. All of these are configuration errors: the same
/// fleet on the same board is not expected to succeed on a later call.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum PlacementError {
    /// The fleet asks for ships of length 0.
    #[error("fleet contains ships of length 0")]
    ZeroLength,

    /// A ship is longer than both the rows and the columns of the board.
    #[error("ship of length {length} does not fit on a {dim} board")]
    ShipTooLong { length: usize, dim: Dimensions },

    /// The ships together cover more cells than the board has. `cells` saturates at
    /// `usize::max_value()`.
    #[error("fleet covers {cells} cells, more than a {dim} board has")]
    NotEnoughCells { cells: usize, dim: Dimensions },

    /// Every attempt ran out of its collision budget.
    #[error("could not place the fleet on a {dim} board after {attempts} attempts")]
    FleetTooLarge { attempts: usize, dim: Dimensions },

    /// A candidate ship could not be built.
    #[error(transparent)]
    InvalidShip(#[from] InvalidShip),
}

/// Error returned when parsing a [`FleetSpec`][crate::placement::FleetSpec].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseFleetError {
    /// The entry is not of the form `LENGTH:COUNT`.
    #[error("fleet entry {0:?} is not of the form LENGTH:COUNT")]
    Malformed(String),

    /// One side of the entry is not a number.
    #[error("invalid number in fleet entry {entry:?}")]
    InvalidNumber {
        entry: String,
        #[source]
        source: ParseIntError,
    },
}
