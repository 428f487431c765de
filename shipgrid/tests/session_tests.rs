use proptest::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use shipgrid::{
    new_session, CellState, Coordinate, Dimensions, FleetSpec, Orientation, PlacementConfig,
    PlacementError, Session, SessionError, Ship, ShotResult,
};

fn c(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

/// 5x5 board with a single length 3 ship on row 2, columns 0 to 2.
fn single_ship() -> Session {
    let ship = Ship::new(3, c(2, 0), Orientation::Row).unwrap();
    Session::from_ships(Dimensions::new(5, 5), vec![ship]).unwrap()
}

fn snapshot(session: &Session) -> Vec<CellState> {
    session
        .board()
        .iter_rows()
        .flat_map(|row| row.map(|(_, state)| state))
        .collect()
}

#[test]
fn hit_hit_sink() {
    let mut session = single_ship();

    assert_eq!(session.shoot_at(c(2, 0)), ShotResult::Hit(0));
    assert!(session.ship_at(c(2, 0)).map_or(false, |ship| ship.is_hit(c(2, 0))));
    assert!(!session.ships()[0].is_sunk());
    assert_eq!(session.cell_display_state(c(2, 0)), Some(CellState::Ship));
    assert!(!session.is_won());

    assert_eq!(session.shoot_at(c(2, 1)), ShotResult::Hit(0));
    assert!(!session.ships()[0].is_sunk());
    assert_eq!(session.cell_display_state(c(2, 2)), Some(CellState::Unknown));

    assert_eq!(session.shoot_at(c(2, 2)), ShotResult::Sunk(0));
    for col in 0..3 {
        assert_eq!(session.cell_display_state(c(2, col)), Some(CellState::SunkShip));
    }
    assert!(session.is_won());
    assert_eq!(session.remaining(3), 0);
    assert_eq!(session.shots(), 3);
}

#[test]
fn miss_marks_water() {
    let mut session = single_ship();
    assert_eq!(session.shoot_at(c(0, 0)), ShotResult::Miss);
    assert_eq!(session.cell_display_state(c(0, 0)), Some(CellState::Water));
    assert_eq!(session.ships()[0].hit_cells().count(), 0);
    assert_eq!(session.shots(), 1);
}

#[test]
fn second_shot_at_a_cell_is_already_known() {
    let mut session = single_ship();
    assert_eq!(session.shoot_at(c(2, 0)), ShotResult::Hit(0));
    let before = snapshot(&session);

    let result = session.shoot_at(c(2, 0));
    assert_eq!(result, ShotResult::AlreadyKnown);
    assert!(!result.fired());
    assert_eq!(session.shots(), 1);
    assert_eq!(snapshot(&session), before);
    assert_eq!(session.ships()[0].hit_cells().count(), 1);
}

#[test]
fn shot_off_the_board_changes_nothing() {
    let mut session = single_ship();
    assert_eq!(session.shoot_at(c(5, 0)), ShotResult::OutOfBounds);
    assert_eq!(session.shoot_at(c(0, 5)), ShotResult::OutOfBounds);
    assert_eq!(session.shots(), 0);
    assert_eq!(session.cell_display_state(c(5, 0)), None);
}

#[test]
fn win_needs_every_ship() {
    let ships = vec![
        Ship::new(3, c(0, 0), Orientation::Row).unwrap(),
        Ship::new(2, c(4, 3), Orientation::Row).unwrap(),
    ];
    let mut session = Session::from_ships(Dimensions::new(5, 5), ships).unwrap();
    assert_eq!(session.fleet(), &"2:1,3:1".parse::<FleetSpec>().unwrap());

    session.shoot_at(c(4, 3));
    assert_eq!(session.shoot_at(c(4, 4)), ShotResult::Sunk(1));
    assert!(!session.is_won());
    assert_eq!(session.remaining(2), 0);
    assert_eq!(session.remaining(3), 1);

    for col in 0..3 {
        session.shoot_at(c(0, col));
    }
    assert!(session.is_won());

    // Shots after the win still resolve and the game stays won.
    assert_eq!(session.shoot_at(c(2, 2)), ShotResult::Miss);
    assert!(session.is_won());
}

#[test]
fn reveal_all_shows_everything_without_firing() {
    let mut session = single_ship();
    session.shoot_at(c(2, 0));
    session.reveal_all();

    assert_eq!(session.shots(), 1);
    assert_eq!(session.ships()[0].hit_cells().count(), 1);
    assert_eq!(session.remaining(3), 1);
    assert!(!session.is_won());
    assert_eq!(session.board().count(CellState::Unknown), 0);
    assert_eq!(session.board().count(CellState::Ship), 3);
    assert_eq!(session.board().count(CellState::Water), 22);
    assert_eq!(session.shoot_at(c(2, 1)), ShotResult::AlreadyKnown);
}

#[test]
fn ship_lookup_by_cell() {
    let session = single_ship();
    assert_eq!(session.ship_at(c(2, 1)), Some(&session.ships()[0]));
    assert_eq!(session.ship_at(c(3, 1)), None);
    assert_eq!(session.ship_at(c(9, 9)), None);
}

#[test]
fn reveal_all_keeps_sunk_ships() {
    let mut session = single_ship();
    for col in 0..3 {
        session.shoot_at(c(2, col));
    }
    session.reveal_all();
    assert_eq!(session.board().count(CellState::SunkShip), 3);
}

#[test]
fn explicit_ships_are_validated() {
    let dim = Dimensions::new(5, 5);
    let long = Ship::new(3, c(4, 3), Orientation::Row).unwrap();
    assert_eq!(
        Session::from_ships(dim, vec![long]).unwrap_err(),
        SessionError::ShipOutOfBounds {
            ship: 0,
            coord: c(4, 5)
        }
    );

    let a = Ship::new(3, c(1, 0), Orientation::Row).unwrap();
    let b = Ship::new(3, c(0, 1), Orientation::Column).unwrap();
    assert_eq!(
        Session::from_ships(dim, vec![a, b]).unwrap_err(),
        SessionError::ShipsOverlap {
            first: 0,
            second: 1,
            coord: c(1, 1)
        }
    );

    assert_eq!(
        Session::from_ships(dim, Vec::new()).unwrap_err(),
        SessionError::EmptyFleet
    );
}

#[test]
fn existing_hits_are_projected() {
    let mut ship = Ship::new(2, c(0, 0), Orientation::Column).unwrap();
    ship.register_hit(c(1, 0)).unwrap();
    let session = Session::from_ships(Dimensions::new(3, 3), vec![ship]).unwrap();
    assert_eq!(session.cell_display_state(c(1, 0)), Some(CellState::Ship));
    assert_eq!(session.cell_display_state(c(0, 0)), Some(CellState::Unknown));
    assert_eq!(session.shots(), 0);
}

#[test]
fn seeded_sessions_match() {
    let a = new_session(13, 13, FleetSpec::standard(), Some(99)).unwrap();
    let b = new_session(13, 13, FleetSpec::standard(), Some(99)).unwrap();
    assert_eq!(a.ships(), b.ships());
    assert_eq!(a.board().count(CellState::Unknown), 169);
}

#[test]
fn setup_errors_surface() {
    assert!(matches!(
        new_session(0, 13, FleetSpec::standard(), Some(1)),
        Err(SessionError::Dimensions(_))
    ));
    assert!(matches!(
        new_session(4, 4, FleetSpec::standard(), Some(1)),
        Err(SessionError::Placement(_))
    ));
    assert_eq!(
        new_session(4, 4, FleetSpec::new(), Some(1)).unwrap_err(),
        SessionError::EmptyFleet
    );
    let huge: FleetSpec = format!("3:{},4:1", usize::max_value()).parse().unwrap();
    assert!(matches!(
        new_session(13, 13, huge, Some(1)),
        Err(SessionError::Placement(PlacementError::NotEnoughCells { .. }))
    ));
}

#[test]
fn restart_rebuilds_the_session() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut session = Session::new(
        Dimensions::default(),
        FleetSpec::standard(),
        PlacementConfig::default(),
        &mut rng,
    )
    .unwrap();
    session.shoot_at(c(0, 0));
    session.reveal_all();

    session.restart(&mut rng).unwrap();
    assert_eq!(session.shots(), 0);
    assert_eq!(session.board().count(CellState::Unknown), 169);
    assert_eq!(session.fleet(), &FleetSpec::standard());
    assert_eq!(session.status().remaining_ships(), 11);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn clearing_the_board_wins_exactly_once(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let dim = Dimensions::new(10, 10);
        let fleet: FleetSpec = "2:2,3:2,4:1".parse().unwrap();
        let mut session = Session::new(dim, fleet, PlacementConfig::default(), &mut rng).unwrap();

        let mut coords: Vec<_> = dim.iter_coordinates().collect();
        coords.shuffle(&mut rng);

        let mut sunk = 0;
        for (i, &coord) in coords.iter().enumerate() {
            let was_won = session.is_won();
            let result = session.shoot_at(coord);
            prop_assert!(result.fired());
            if let ShotResult::Sunk(_) = result {
                sunk += 1;
            }
            prop_assert_eq!(session.shots(), i + 1);
            // The win is monotonic and agrees with the fleet status.
            prop_assert!(!was_won || session.is_won());
            prop_assert_eq!(session.is_won(), session.status().won());
            prop_assert_eq!(session.shoot_at(coord), ShotResult::AlreadyKnown);
        }

        prop_assert_eq!(sunk, 5);
        prop_assert!(session.is_won());
        prop_assert_eq!(session.board().count(CellState::Unknown), 0);
        prop_assert_eq!(session.board().count(CellState::SunkShip), 2 * 2 + 3 * 2 + 4);
        prop_assert_eq!(session.board().count(CellState::Ship), 0);
    }
}
