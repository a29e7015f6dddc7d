use battleship_duel::{ConfigError, Coordinate, Direction, Ship};

#[test]
fn test_cells_follow_direction_in_order() -> Result<(), ConfigError> {
    let ship = Ship::new(3, Coordinate::new(4, 4), Direction::Up)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(4, 4), Coordinate::new(3, 4), Coordinate::new(2, 4)]
    );
    Ok(())
}

#[test]
fn test_single_cell_ship_ignores_direction() -> Result<(), ConfigError> {
    for dir in Direction::ALL {
        let ship = Ship::new(1, Coordinate::new(2, 5), dir)?;
        assert_eq!(ship.cells().collect::<Vec<_>>(), vec![Coordinate::new(2, 5)]);
    }
    Ok(())
}

#[test]
fn test_zero_size_rejected() {
    assert_eq!(
        Ship::new(0, Coordinate::new(0, 0), Direction::Right).unwrap_err(),
        ConfigError::ZeroShipSize
    );
}
