//! Board engine for single-player Battleship.
//!
//! A [`Session`] hides a randomly placed fleet on a rectangular [`Board`]. The player
//! fires at cells with [`Session::shoot_at`]; the board shows what has been
//! discovered and [`Session::status`] summarizes what is left to sink.
//!
//! ```
//! use shipgrid::{Coordinate, FleetSpec, ShotResult};
//!
//! let mut session = shipgrid::new_session(13, 13, FleetSpec::standard(), Some(7)).unwrap();
//! match session.shoot_at(Coordinate::new(6, 6)) {
//!     ShotResult::Miss | ShotResult::Hit(_) | ShotResult::Sunk(_) => {}
//!     other => panic!("unexpected {:?}", other),
//! }
//! assert_eq!(session.shots(), 1);
//! ```
//!
//! Rendering and input are left to the caller: the engine only takes board coordinates
//! and only reports [`CellState`]s.

pub mod board;
pub mod game;
pub mod placement;
pub mod ships;
pub mod status;

pub use crate::{
    board::{Board, CellState, Coordinate, Dimensions, DimensionsError, OutOfBounds},
    game::{new_session, Session, SessionError, ShipIndex, ShotResult},
    placement::{place_fleet, FleetSpec, ParseFleetError, PlacementConfig, PlacementError},
    ships::{InvalidShip, NotOccupied, Orientation, ParseOrientationError, Ship},
    status::{FleetEntry, FleetStatus, StatusSymbols},
};
