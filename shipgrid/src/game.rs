//! A single-player game session: the hidden fleet, the player's board, and shot
//! resolution.
use std::collections::BTreeMap;

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    board::{Board, CellState, Coordinate, Dimensions, Grid},
    placement::{place_fleet, FleetSpec, PlacementConfig},
    ships::Ship,
    status::FleetStatus,
};

pub use self::errors::SessionError;

mod errors;

/// Index of a ship in [`Session::ships`].
pub type ShipIndex = usize;

/// Result of a call to [`Session::shoot_at`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotResult {
    /// The coordinate is not on the board. Nothing changed.
    OutOfBounds,
    /// The cell was already known. Nothing changed and no shot was counted.
    AlreadyKnown,
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the ship with the given index, but did not sink it.
    Hit(ShipIndex),
    /// The shot hit the ship with the given index and sank it.
    Sunk(ShipIndex),
}

impl ShotResult {
    /// Get the index of the ship that was hit.
    pub fn ship(&self) -> Option<ShipIndex> {
        match *self {
            ShotResult::OutOfBounds | ShotResult::AlreadyKnown | ShotResult::Miss => None,
            ShotResult::Hit(ship) | ShotResult::Sunk(ship) => Some(ship),
        }
    }

    /// Returns true if the shot was fired and counted.
    pub fn fired(&self) -> bool {
        match self {
            ShotResult::OutOfBounds | ShotResult::AlreadyKnown => false,
            ShotResult::Miss | ShotResult::Hit(_) | ShotResult::Sunk(_) => true,
        }
    }
}

/// Create a session on a `rows` x `columns` board with a randomly placed fleet.
///
/// With a seed the placement is reproducible; without one the generator is seeded from
/// the operating system.
pub fn new_session(
    rows: usize,
    columns: usize,
    fleet: FleetSpec,
    seed: Option<u64>,
) -> Result<Session, SessionError> {
    let dim = Dimensions::try_new(rows, columns)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Session::new(dim, fleet, PlacementConfig::default(), &mut rng)
}

/// State of one game: the ships, what the player has discovered, and how much of the
/// fleet is left to sink.
#[derive(Debug, Clone)]
pub struct Session {
    /// Display state of every cell.
    board: Board,

    /// All ships, sunk or not.
    ships: Vec<Ship>,

    /// Which ship, if any, occupies each cell.
    occupancy: Grid<Option<ShipIndex>>,

    /// The fleet this session was set up with.
    fleet: FleetSpec,

    /// Ships of each length that are still afloat.
    to_sink: BTreeMap<usize, usize>,

    /// Limits used when placing the fleet, kept for restarts.
    config: PlacementConfig,

    /// Number of shots fired.
    shots: usize,

    /// Set once the whole fleet is sunk. Never cleared.
    won: bool,
}

impl Session {
    /// Set up a session with the fleet placed at random using the given generator.
    pub fn new<R: Rng + ?Sized>(
        dim: Dimensions,
        fleet: FleetSpec,
        config: PlacementConfig,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        if fleet.is_empty() {
            return Err(SessionError::EmptyFleet);
        }
        let ships = place_fleet(&dim, &fleet, &config, rng)?;
        Self::assemble(dim, fleet, config, ships)
    }

    /// Set up a session with explicitly positioned ships. The fleet is derived from the
    /// ship lengths. Ships may carry hits already, in which case the board shows them.
    ///
    /// Ships must lie on the board and must not share cells. The one-cell gap that
    /// random placement keeps is not required here.
    pub fn from_ships(dim: Dimensions, ships: Vec<Ship>) -> Result<Self, SessionError> {
        if ships.is_empty() {
            return Err(SessionError::EmptyFleet);
        }
        let fleet = ships.iter().map(|ship| (ship.len(), 1)).collect();
        Self::assemble(dim, fleet, PlacementConfig::default(), ships)
    }

    /// Build the occupancy index and project existing hits onto a fresh board.
    fn assemble(
        dim: Dimensions,
        fleet: FleetSpec,
        config: PlacementConfig,
        ships: Vec<Ship>,
    ) -> Result<Self, SessionError> {
        let mut occupancy = Grid::new(dim, None);
        for (idx, ship) in ships.iter().enumerate() {
            for &coord in ship.cells() {
                match occupancy.get_mut(coord) {
                    None => return Err(SessionError::ShipOutOfBounds { ship: idx, coord }),
                    Some(Some(other)) => {
                        return Err(SessionError::ShipsOverlap {
                            first: *other,
                            second: idx,
                            coord,
                        })
                    }
                    Some(cell) => *cell = Some(idx),
                }
            }
        }
        let to_sink = fleet.iter().collect();
        let mut session = Self {
            board: Board::new(dim),
            ships,
            occupancy,
            fleet,
            to_sink,
            config,
            shots: 0,
            won: false,
        };
        for idx in 0..session.ships.len() {
            let ship = &session.ships[idx];
            if ship.is_sunk() {
                session.sink(idx);
            } else {
                for coord in ship.hit_cells().collect::<Vec<_>>() {
                    session.board.mark(coord, CellState::Ship);
                }
            }
        }
        Ok(session)
    }

    /// Throw this session away and set up a new one with the same dimensions, fleet
    /// and placement limits. On error the current session is left untouched.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        *self = Session::new(*self.dimensions(), self.fleet.clone(), self.config, rng)?;
        Ok(())
    }

    /// Fire at the given cell.
    ///
    /// Shots at cells that are off the board or already known are rejected without
    /// changing anything.
    pub fn shoot_at(&mut self, coord: Coordinate) -> ShotResult {
        match self.board.get(coord) {
            None => return ShotResult::OutOfBounds,
            Some(CellState::Water) | Some(CellState::Ship) | Some(CellState::SunkShip) => {
                return ShotResult::AlreadyKnown
            }
            Some(CellState::Unknown) => {}
        }
        self.shots += 1;
        let idx = match self.occupancy[coord] {
            None => {
                self.board.mark(coord, CellState::Water);
                debug!("shot {} at {}: miss", self.shots, coord);
                return ShotResult::Miss;
            }
            Some(idx) => idx,
        };
        if let Err(err) = self.ships[idx].register_hit(coord) {
            unreachable!("occupancy index disagrees with ship {}: {}", idx, err);
        }
        if self.ships[idx].is_sunk() {
            self.sink(idx);
            debug!("shot {} at {}: sunk ship {}", self.shots, coord, idx);
            ShotResult::Sunk(idx)
        } else {
            self.board.mark(coord, CellState::Ship);
            debug!("shot {} at {}: hit ship {}", self.shots, coord, idx);
            ShotResult::Hit(idx)
        }
    }

    /// Book a sunk ship: count it off the fleet, show all of its cells as sunk and
    /// check for the win.
    fn sink(&mut self, idx: ShipIndex) {
        let ship = &self.ships[idx];
        if let Some(remaining) = self.to_sink.get_mut(&ship.len()) {
            *remaining = remaining.saturating_sub(1);
        }
        for &coord in ship.cells() {
            self.board.mark(coord, CellState::SunkShip);
        }
        if !self.won && self.to_sink.values().all(|&remaining| remaining == 0) {
            self.won = true;
            info!("whole fleet sunk after {} shots", self.shots);
        }
    }

    /// Reveal every unknown cell without firing: water, afloat ships and sunk ships
    /// all become visible. Shot count, hits and the fleet status are unaffected.
    pub fn reveal_all(&mut self) {
        let dim = *self.dimensions();
        for coord in dim.iter_coordinates() {
            if self.board.get(coord).map_or(true, CellState::is_known) {
                continue;
            }
            let state = match self.ship_at(coord) {
                None => CellState::Water,
                Some(ship) if ship.is_sunk() => CellState::SunkShip,
                Some(_) => CellState::Ship,
            };
            self.board.mark(coord, state);
        }
    }

    /// Get the [`Dimensions`] of the board.
    pub fn dimensions(&self) -> &Dimensions {
        self.board.dimensions()
    }

    /// The player's view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Display state of the given cell, or `None` if it is off the board.
    pub fn cell_display_state(&self, coord: Coordinate) -> Option<CellState> {
        self.board.get(coord)
    }

    /// All ships of this session, sunk or not.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship occupying the given cell, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.occupancy
            .get(coord)
            .copied()
            .flatten()
            .map(|idx| &self.ships[idx])
    }

    /// The fleet this session was set up with.
    pub fn fleet(&self) -> &FleetSpec {
        &self.fleet
    }

    /// Number of ships of the given length still afloat.
    pub fn remaining(&self, length: usize) -> usize {
        self.to_sink.get(&length).copied().unwrap_or(0)
    }

    /// Number of shots fired so far.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Returns true once every ship has been sunk.
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Summary of the fleet still to sink.
    pub fn status(&self) -> FleetStatus {
        FleetStatus::new(&self.fleet, &self.to_sink)
    }

    /// The fleet summary as text, with the default symbols.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }
}
