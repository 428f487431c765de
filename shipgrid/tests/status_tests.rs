use std::collections::BTreeMap;

use shipgrid::{
    Coordinate, Dimensions, FleetEntry, FleetSpec, FleetStatus, Orientation, Session, Ship,
    StatusSymbols,
};

fn two_ships() -> Session {
    let ships = vec![
        Ship::new(3, Coordinate::new(0, 0), Orientation::Row).unwrap(),
        Ship::new(2, Coordinate::new(4, 3), Orientation::Row).unwrap(),
    ];
    Session::from_ships(Dimensions::new(5, 5), ships).unwrap()
}

#[test]
fn lists_every_length_shortest_first() {
    let session = two_ships();
    assert_eq!(session.status_text(), "To sink: 1 x ☐☐   1 x ☐☐☐   ");
    assert_eq!(
        session.status().entries(),
        &[
            FleetEntry {
                length: 2,
                total: 1,
                remaining: 1
            },
            FleetEntry {
                length: 3,
                total: 1,
                remaining: 1
            },
        ]
    );
}

#[test]
fn sunk_lengths_switch_markers() {
    let mut session = two_ships();
    session.shoot_at(Coordinate::new(4, 3));
    session.shoot_at(Coordinate::new(4, 4));
    assert_eq!(session.status_text(), "To sink: 0 x ☒☒   1 x ☐☐☐   ");
    assert_eq!(session.status().remaining_ships(), 1);

    let custom = StatusSymbols {
        remaining: 'o',
        sunk: '.',
    };
    assert_eq!(
        session.status().display_with(custom).to_string(),
        "To sink: 0 x ..   1 x ooo   "
    );
}

#[test]
fn won_status() {
    let mut session = two_ships();
    for coord in Dimensions::new(5, 5).iter_coordinates() {
        session.shoot_at(coord);
    }
    assert!(session.status().won());
    assert_eq!(session.status_text(), "Nothing to sink -- YOU WON");
}

#[test]
fn status_is_a_pure_view() {
    let fleet = FleetSpec::standard();
    let mut to_sink: BTreeMap<usize, usize> = fleet.iter().collect();
    to_sink.insert(6, 0);
    let status = FleetStatus::new(&fleet, &to_sink);
    assert_eq!(status, FleetStatus::new(&fleet, &to_sink));
    assert_eq!(status.remaining_ships(), 9);
    assert!(!status.won());
    assert_eq!(
        status.to_string(),
        "To sink: 4 x ☐☐☐   3 x ☐☐☐☐   2 x ☐☐☐☐☐   0 x ☒☒☒☒☒☒   "
    );
}
