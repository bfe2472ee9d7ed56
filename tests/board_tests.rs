use seabattle::{Board, Cell, Coordinate, GameError, Orientation, Ship, ShotOutcome};

fn ship(size: usize, x: usize, y: usize, orientation: Orientation) -> Ship {
    Ship::new(size, Coordinate::new(x, y), orientation)
}

#[test]
fn test_spacing_buffer_rejects_adjacent_ship() {
    let mut board = Board::new(6);
    board.add_ship(ship(3, 0, 0, Orientation::Horizontal)).unwrap();

    assert_eq!(
        board.add_ship(ship(1, 3, 0, Orientation::Horizontal)),
        Err(GameError::InvalidPlacement)
    );
    // diagonal neighbours are also off limits
    assert_eq!(
        board.add_ship(ship(1, 3, 1, Orientation::Horizontal)),
        Err(GameError::InvalidPlacement)
    );
    board.add_ship(ship(1, 4, 0, Orientation::Horizontal)).unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_add_ship_out_of_bounds_leaves_board_untouched() {
    let mut board = Board::new(6);
    let before = board.clone();
    assert_eq!(
        board.add_ship(ship(3, 4, 2, Orientation::Horizontal)),
        Err(GameError::InvalidPlacement)
    );
    assert_eq!(
        board.add_ship(ship(2, 6, 6, Orientation::Vertical)),
        Err(GameError::InvalidPlacement)
    );
    assert_eq!(board, before);
}

#[test]
fn test_finish_placement_clears_reserved_cells() {
    let mut board = Board::new(6);
    board.add_ship(ship(2, 2, 2, Orientation::Vertical)).unwrap();
    assert_eq!(board.cell(Coordinate::new(1, 1)), Some(Cell::Reserved));
    assert!(!board.is_empty(Coordinate::new(1, 1)));

    board.finish_placement();
    for c in board.coordinates() {
        let cell = board.cell(c).unwrap();
        assert!(matches!(cell, Cell::Empty | Cell::Ship), "{:?} at {:?}", cell, c);
    }
    assert!(board.is_empty(Coordinate::new(1, 1)));
}

#[test]
fn test_shoot_hit_destroy_and_seal() {
    let mut board = Board::new(6);
    board.add_ship(ship(2, 1, 1, Orientation::Horizontal)).unwrap();
    board.add_ship(ship(1, 5, 5, Orientation::Horizontal)).unwrap();
    board.finish_placement();

    assert_eq!(board.shoot(Coordinate::new(1, 1)), Ok(ShotOutcome::Hit));
    assert_eq!(board.ships()[0].hit_points(), 1);
    assert_eq!(board.shoot(Coordinate::new(2, 1)), Ok(ShotOutcome::Destroyed));
    assert_eq!(board.ships().len(), 1);

    // the wreck's border is sealed
    for c in [(0, 0), (3, 0), (0, 2), (3, 2), (0, 1), (3, 1)] {
        assert_eq!(board.cell(Coordinate::new(c.0, c.1)), Some(Cell::Miss));
    }
    assert_eq!(board.cell(Coordinate::new(4, 4)), Some(Cell::Empty));
    assert_eq!(
        board.shoot(Coordinate::new(3, 1)),
        Err(GameError::CellAlreadyShot)
    );
}

#[test]
fn test_shoot_miss_and_rejections() {
    let mut board = Board::new(6);
    board.add_ship(ship(1, 0, 0, Orientation::Vertical)).unwrap();
    board.finish_placement();

    assert_eq!(board.shoot(Coordinate::new(6, 0)), Err(GameError::OutOfBounds));
    assert_eq!(board.shoot(Coordinate::new(3, 3)), Ok(ShotOutcome::Miss));
    assert_eq!(board.cell(Coordinate::new(3, 3)), Some(Cell::Miss));
    assert_eq!(
        board.shoot(Coordinate::new(3, 3)),
        Err(GameError::CellAlreadyShot)
    );
    assert_eq!(
        board.shoot(Coordinate::new(3, 3)),
        Err(GameError::CellAlreadyShot)
    );

    assert_eq!(board.shoot(Coordinate::new(0, 0)), Ok(ShotOutcome::Destroyed));
    assert!(board.all_destroyed());
    assert_eq!(
        board.shoot(Coordinate::new(0, 0)),
        Err(GameError::CellAlreadyShot)
    );
}

#[test]
fn test_render_hides_ships() {
    let mut board = Board::new(3);
    board.add_ship(ship(1, 0, 0, Orientation::Horizontal)).unwrap();
    board.finish_placement();
    board.shoot(Coordinate::new(2, 2)).unwrap();

    assert_eq!(
        board.to_string(),
        "  | 1 | 2 | 3 |\n1 | ■ | - | - |\n2 | - | - | - |\n3 | - | - | • |"
    );
    board.set_hidden(true);
    assert_eq!(
        board.to_string(),
        "  | 1 | 2 | 3 |\n1 | - | - | - |\n2 | - | - | - |\n3 | - | - | • |"
    );
}
