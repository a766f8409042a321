use broadside::{Board, BoardError, CellState, Coordinate, Direction, ShipKind};

#[test]
fn test_highlight_then_place() {
    let mut board = Board::new(CellState::Ocean);
    let origin = Coordinate::new(2, 2);
    assert!(board.highlight_span(origin, Direction::East, ShipKind::Cruiser).unwrap());
    assert!(board.highlight_span(origin, Direction::South, ShipKind::Cruiser).unwrap());
    assert_eq!(board.count_state(CellState::AvailableForPlacement), 5);

    board.place_ship(ShipKind::Cruiser, origin, Direction::East).unwrap();
    assert_eq!(board.count_state(CellState::AvailableForPlacement), 0);
    assert!(board.all_of_state(
        &[Coordinate::new(2, 2), Coordinate::new(3, 2), Coordinate::new(4, 2)],
        CellState::ShipPart(ShipKind::Cruiser),
    ));
}

#[test]
fn test_highlight_rejects_blocked_or_offboard_spans() {
    let mut board = Board::new(CellState::Ocean);
    board
        .place_ship(ShipKind::Destroyer, Coordinate::new(5, 5), Direction::North)
        .unwrap();
    assert!(!board.highlight_span(Coordinate::new(5, 7), Direction::North, ShipKind::Cruiser).unwrap());
    assert!(!board.highlight_span(Coordinate::new(9, 0), Direction::East, ShipKind::Destroyer).unwrap());
    assert_eq!(board.count_state(CellState::AvailableForPlacement), 0);
}

#[test]
fn test_place_ship_errors() {
    let mut board = Board::new(CellState::Ocean);
    board
        .place_ship(ShipKind::Battleship, Coordinate::new(0, 0), Direction::East)
        .unwrap();
    assert_eq!(
        board.place_ship(ShipKind::Battleship, Coordinate::new(5, 5), Direction::East),
        Err(BoardError::ShipAlreadyPlaced(ShipKind::Battleship))
    );
    assert_eq!(
        board.place_ship(ShipKind::Cruiser, Coordinate::new(1, 1), Direction::North),
        Err(BoardError::ShipOverlaps(ShipKind::Cruiser))
    );
    assert_eq!(
        board.place_ship(ShipKind::Carrier, Coordinate::new(8, 8), Direction::South),
        Err(BoardError::OutOfBounds(Coordinate::new(8, 8)))
    );
    assert!(!board.is_fleet_placed());
}

#[test]
fn test_erase_ship_restores_default() {
    let mut board = Board::new(CellState::Ocean);
    board
        .place_ship(ShipKind::Carrier, Coordinate::new(4, 0), Direction::South)
        .unwrap();
    assert!(board.highlight_span(Coordinate::new(9, 9), Direction::North, ShipKind::Destroyer).unwrap());
    board.erase_ship(ShipKind::Carrier);
    assert_eq!(board.count_state(CellState::Ocean), 100);
    board
        .place_ship(ShipKind::Carrier, Coordinate::new(4, 0), Direction::East)
        .unwrap();
}

#[test]
fn test_manual_fleet() {
    let mut board = Board::new(CellState::Ocean);
    let layout = [
        (ShipKind::Carrier, Coordinate::new(0, 0)),
        (ShipKind::Battleship, Coordinate::new(0, 2)),
        (ShipKind::Cruiser, Coordinate::new(0, 4)),
        (ShipKind::Destroyer, Coordinate::new(0, 6)),
        (ShipKind::Submarine, Coordinate::new(0, 8)),
    ];
    for (kind, origin) in layout {
        assert!(!board.is_fleet_placed());
        board.place_ship(kind, origin, Direction::East).unwrap();
    }
    assert!(board.is_fleet_placed());
    assert_eq!(board.count_state(CellState::Ocean), 85);
}
