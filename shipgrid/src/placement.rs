//! Random placement of a whole fleet with at least one free cell between ships.
//!
//! Ships are placed longest first, each at a uniformly random orientation and origin.
//! A candidate whose [buffer zone][Ship::buffer_zone] touches an already placed ship is
//! discarded and counted as a collision. When one attempt collects more than
//! [`PlacementConfig::max_collisions`] collisions the partial fleet is thrown away and
//! placement starts over, up to [`PlacementConfig::max_attempts`] times.
//!
//! This is a heuristic: nothing guarantees that a fleet which fits on the board will
//! be found within the budget, but small and moderate fleets place on the first attempt
//! in practice.
use log::{debug, warn};
use rand::Rng;

use crate::{
    board::{Coordinate, Dimensions, Grid},
    ships::{Orientation, Ship},
};

pub use self::{
    errors::{ParseFleetError, PlacementError},
    fleet::FleetSpec,
};

mod errors;
mod fleet;

/// Collision budget of a single attempt in the standard game.
pub const DEFAULT_MAX_COLLISIONS: usize = 100_000;

/// Number of attempts before placement gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 16;

/// Limits for the random placement loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PlacementConfig {
    /// Rejected candidates allowed in one attempt before starting over.
    pub max_collisions: usize,
    /// Attempts before giving up with [`PlacementError::FleetTooLarge`].
    pub max_attempts: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_collisions: DEFAULT_MAX_COLLISIONS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Place every ship of `fleet` on an empty board of the given dimensions.
///
/// The returned ships are ordered longest first and no ship occupies a cell inside the
/// buffer zone of another.
pub fn place_fleet<R: Rng + ?Sized>(
    dim: &Dimensions,
    fleet: &FleetSpec,
    config: &PlacementConfig,
    rng: &mut R,
) -> Result<Vec<Ship>, PlacementError> {
    check_fleet(dim, fleet)?;
    for attempt in 1..=config.max_attempts {
        match try_place(dim, fleet, config.max_collisions, rng)? {
            Some(ships) => {
                debug!(
                    "placed {} ships on a {} board (attempt {})",
                    ships.len(),
                    dim,
                    attempt
                );
                return Ok(ships);
            }
            None => warn!(
                "ship placement unsuccessful after {} collisions, retrying ({} of {})",
                config.max_collisions, attempt, config.max_attempts
            ),
        }
    }
    Err(PlacementError::FleetTooLarge {
        attempts: config.max_attempts,
        dim: *dim,
    })
}

/// Reject fleets that no amount of retrying can place.
fn check_fleet(dim: &Dimensions, fleet: &FleetSpec) -> Result<(), PlacementError> {
    for length in fleet.lengths() {
        if length == 0 {
            return Err(PlacementError::ZeroLength);
        }
        if !Orientation::ALL.iter().any(|o| o.fits(length, dim)) {
            return Err(PlacementError::ShipTooLong { length, dim: *dim });
        }
    }
    let cells = fleet.total_cells();
    if cells > dim.total_size() {
        return Err(PlacementError::NotEnoughCells { cells, dim: *dim });
    }
    Ok(())
}

/// One placement attempt. Returns `None` once the collision budget is exceeded.
fn try_place<R: Rng + ?Sized>(
    dim: &Dimensions,
    fleet: &FleetSpec,
    max_collisions: usize,
    rng: &mut R,
) -> Result<Option<Vec<Ship>>, PlacementError> {
    let mut occupied = Grid::new(*dim, false);
    let mut ships = Vec::new();
    let mut collisions = 0;
    for (length, count) in fleet.iter().rev() {
        let orientations: Vec<_> = Orientation::ALL
            .iter()
            .copied()
            .filter(|o| o.fits(length, dim))
            .collect();
        let mut placed = 0;
        while placed < count {
            let orientation = orientations[rng.gen_range(0, orientations.len())];
            let origin = random_origin(dim, length, orientation, rng);
            let candidate = Ship::new(length, origin, orientation)?;
            if collides(dim, &occupied, &candidate) {
                collisions += 1;
                if collisions > max_collisions {
                    return Ok(None);
                }
            } else {
                for &coord in candidate.cells() {
                    occupied[coord] = true;
                }
                ships.push(candidate);
                placed += 1;
            }
        }
    }
    Ok(Some(ships))
}

/// Pick an origin such that a ship of `length` along `orientation` stays on the board.
fn random_origin<R: Rng + ?Sized>(
    dim: &Dimensions,
    length: usize,
    orientation: Orientation,
    rng: &mut R,
) -> Coordinate {
    let (rows, columns) = match orientation {
        Orientation::Row => (dim.rows(), dim.columns() - length + 1),
        Orientation::Column => (dim.rows() - length + 1, dim.columns()),
    };
    Coordinate::new(rng.gen_range(0, rows), rng.gen_range(0, columns))
}

/// Returns true if any cell of the candidate's buffer zone is already occupied.
fn collides(dim: &Dimensions, occupied: &Grid<bool>, candidate: &Ship) -> bool {
    candidate
        .cells()
        .iter()
        .any(|&coord| occupied[coord] || dim.neighbors(coord).any(|n| occupied[n]))
}
