use proptest::prelude::*;
use shipgrid::{Board, CellState, Coordinate, Dimensions, DimensionsError, OutOfBounds};

#[test]
fn index_layout_is_row_major() {
    let dim = Dimensions::new(3, 4);
    assert_eq!(dim.index_of(Coordinate::new(0, 0)), Ok(0));
    assert_eq!(dim.index_of(Coordinate::new(0, 3)), Ok(3));
    assert_eq!(dim.index_of(Coordinate::new(1, 0)), Ok(4));
    assert_eq!(dim.index_of(Coordinate::new(2, 3)), Ok(11));
    assert_eq!(dim.coordinates_of(6), Ok(Coordinate::new(1, 2)));
}

#[test]
fn out_of_range_is_an_error() {
    let dim = Dimensions::new(3, 4);
    assert_eq!(
        dim.index_of(Coordinate::new(3, 0)),
        Err(OutOfBounds::Row { row: 3, rows: 3 })
    );
    assert_eq!(
        dim.index_of(Coordinate::new(0, 4)),
        Err(OutOfBounds::Column { col: 4, columns: 4 })
    );
    assert_eq!(
        dim.coordinates_of(12),
        Err(OutOfBounds::Index { index: 12, size: 12 })
    );
}

#[test]
fn unusable_dimensions() {
    assert_eq!(
        Dimensions::try_new(0, 5),
        Err(DimensionsError::Empty { rows: 0, columns: 5 })
    );
    assert_eq!(
        Dimensions::try_new(usize::max_value(), 2),
        Err(DimensionsError::TooLarge {
            rows: usize::max_value(),
            columns: 2
        })
    );
    assert_eq!(Dimensions::default(), Dimensions::new(13, 13));
}

#[test]
fn board_starts_unknown_and_stores_states() {
    let mut board = Board::new(Dimensions::new(2, 3));
    assert_eq!(board.count(CellState::Unknown), 6);

    let coord = Coordinate::new(1, 2);
    board.set_state(coord, CellState::Water).unwrap();
    assert_eq!(board.state_at(coord), Ok(CellState::Water));
    assert_eq!(board.get(coord), Some(CellState::Water));
    assert_eq!(board.count(CellState::Unknown), 5);

    assert!(board.set_state(Coordinate::new(2, 0), CellState::Ship).is_err());
    assert_eq!(board.get(Coordinate::new(2, 0)), None);
}

#[test]
fn rows_iterate_in_order() {
    let board = Board::new(Dimensions::new(2, 3));
    let rows: Vec<Vec<Coordinate>> = board
        .iter_rows()
        .map(|row| row.map(|(coord, _)| coord).collect())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[1],
        vec![
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
            Coordinate::new(1, 2)
        ]
    );
}

proptest! {
    #[test]
    fn index_conversion_is_a_bijection(rows in 1..40usize, columns in 1..40usize, seed in any::<usize>()) {
        let dim = Dimensions::new(rows, columns);
        let index = seed % dim.total_size();
        let coord = dim.coordinates_of(index).unwrap();
        prop_assert!(dim.contains(coord));
        prop_assert_eq!(dim.index_of(coord), Ok(index));

        let coord = Coordinate::new(seed % rows, (seed / rows) % columns);
        let index = dim.index_of(coord).unwrap();
        prop_assert_eq!(dim.coordinates_of(index), Ok(coord));
    }
}
