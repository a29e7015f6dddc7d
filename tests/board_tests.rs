use battleship_duel::{
    Board, Coordinate, Direction, PlacementError, Ship, ShotError, ShotOutcome, TileState,
};

fn ship(size: usize, row: i32, col: i32, dir: Direction) -> Ship {
    Ship::new(size, Coordinate::new(row, col), dir).unwrap()
}

/// 6x6 board with a 3-ship on row 0 and a 1-ship at (2, 2).
fn scenario_board() -> Board {
    let mut board = Board::new(6);
    board.place_ship(&ship(3, 0, 0, Direction::Right)).unwrap();
    board.place_ship(&ship(1, 2, 2, Direction::Up)).unwrap();
    board
}

#[test]
fn test_new_board_is_all_water() {
    let board = Board::new(6);
    assert_eq!(board.size(), 6);
    assert!(!board.has_remaining_ships());
    for row in 0..6 {
        assert_eq!(board.view_row(row, false), vec![TileState::Water; 6]);
    }
}

#[test]
fn test_place_marks_exactly_the_ship_cells() {
    let board = scenario_board();
    for col in 0..3 {
        assert_eq!(board.tile(Coordinate::new(0, col)), Some(TileState::ShipPresent));
    }
    assert_eq!(board.tile(Coordinate::new(0, 3)), Some(TileState::Water));
    assert_eq!(board.tile(Coordinate::new(2, 2)), Some(TileState::ShipPresent));
    assert_eq!(board.remaining_ship_cells(), 4);
}

#[test]
fn test_orthogonal_neighbour_is_an_intersection() {
    let mut board = Board::new(6);
    board.place_ship(&ship(3, 0, 0, Direction::Right)).unwrap();
    assert_eq!(
        board.place_ship(&ship(1, 1, 1, Direction::Right)),
        Err(PlacementError::Intersection {
            cell: Coordinate::new(1, 1)
        })
    );
    assert!(board.place_ship(&ship(1, 2, 2, Direction::Right)).is_ok());
}

#[test]
fn test_overlap_is_an_intersection() {
    let mut board = scenario_board();
    assert!(matches!(
        board.place_ship(&ship(2, 0, 2, Direction::Down)),
        Err(PlacementError::Intersection { .. })
    ));
}

#[test]
fn test_diagonal_contact_is_allowed() {
    let mut board = Board::new(6);
    board.place_ship(&ship(1, 0, 0, Direction::Right)).unwrap();
    assert!(board.place_ship(&ship(1, 1, 1, Direction::Right)).is_ok());
}

#[test]
fn test_partially_outside_ship_leaves_board_untouched() {
    let mut board = scenario_board();
    let before = board.clone();
    assert_eq!(
        board.place_ship(&ship(3, 5, 4, Direction::Right)),
        Err(PlacementError::OutOfBounds {
            cell: Coordinate::new(5, 6)
        })
    );
    assert_eq!(board, before);

    // Only the last cell touches the ship at (2, 2).
    assert_eq!(
        board.place_ship(&ship(3, 4, 1, Direction::Up)),
        Err(PlacementError::Intersection {
            cell: Coordinate::new(2, 1)
        })
    );
    assert_eq!(board, before);
}

#[test]
fn test_negative_anchor_is_out_of_bounds() {
    let mut board = Board::new(6);
    assert!(matches!(
        board.place_ship(&ship(2, 0, 0, Direction::Left)),
        Err(PlacementError::OutOfBounds { .. })
    ));
    assert!(!board.has_remaining_ships());
}

#[test]
fn test_shot_state_machine() {
    let mut board = scenario_board();
    let water = Coordinate::new(5, 5);
    let ship_cell = Coordinate::new(0, 0);

    assert_eq!(board.place_shot(water), Ok(ShotOutcome::Miss));
    assert_eq!(board.tile(water), Some(TileState::Miss));
    assert_eq!(board.place_shot(ship_cell), Ok(ShotOutcome::Hit));
    assert_eq!(board.tile(ship_cell), Some(TileState::Hit));

    assert_eq!(
        board.place_shot(water),
        Err(ShotError::AlreadyShot { target: water })
    );
    assert_eq!(
        board.place_shot(ship_cell),
        Err(ShotError::AlreadyShot { target: ship_cell })
    );
    assert_eq!(board.tile(water), Some(TileState::Miss));
    assert_eq!(board.tile(ship_cell), Some(TileState::Hit));
}

#[test]
fn test_shot_outside_field() {
    let mut board = scenario_board();
    for target in [Coordinate::new(6, 0), Coordinate::new(0, -1)] {
        assert_eq!(board.place_shot(target), Err(ShotError::OutOfBounds { target }));
    }
}

#[test]
fn test_remaining_ships_until_last_cell_hit() {
    let mut board = scenario_board();
    assert_eq!(board.place_shot(Coordinate::new(0, 0)), Ok(ShotOutcome::Hit));
    assert!(board.has_remaining_ships());
    board.place_shot(Coordinate::new(0, 1)).unwrap();
    board.place_shot(Coordinate::new(0, 2)).unwrap();
    assert!(board.has_remaining_ships());
    board.place_shot(Coordinate::new(2, 2)).unwrap();
    assert!(!board.has_remaining_ships());
}

#[test]
fn test_remaining_ship_on_first_row_only() {
    let mut board = Board::new(4);
    board.place_ship(&ship(1, 0, 3, Direction::Down)).unwrap();
    board.place_shot(Coordinate::new(3, 3)).unwrap();
    assert!(board.has_remaining_ships());
}

#[test]
fn test_view_row_conceals_only_unhit_ships() {
    let mut board = scenario_board();
    board.place_shot(Coordinate::new(0, 1)).unwrap();
    board.place_shot(Coordinate::new(0, 4)).unwrap();

    use TileState::*;
    assert_eq!(
        board.view_row(0, false),
        vec![ShipPresent, Hit, ShipPresent, Water, Miss, Water]
    );
    assert_eq!(board.view_row(0, true), vec![Water, Hit, Water, Water, Miss, Water]);
    assert!(board.view_row(6, true).is_empty());
}
