use broadside::{Board, BoardError, CellState, Coordinate, Direction, Fleet, ShipKind, FLEET};

#[test]
fn test_fleet_composition() {
    let fleet = Fleet::new();
    assert_eq!(fleet.number_of_ships(), 5);
    assert_eq!(fleet.remaining_ships(), 5);
    let sizes: Vec<_> = fleet.ships().iter().map(|s| s.size()).collect();
    assert_eq!(sizes, vec![5, 4, 3, 2, 1]);
    for kind in FLEET {
        let ship = fleet.find_ship(kind).unwrap();
        assert_eq!(ship.remaining_segments(), kind.size());
        assert!(!ship.is_destroyed());
    }
    assert!(!fleet.is_destroyed());
    assert!(!fleet.last_hit_destroyed());
}

#[test]
fn test_ship_names() {
    assert_eq!(ShipKind::from_name("carrier"), Some(ShipKind::Carrier));
    assert_eq!(ShipKind::from_name("Submarine"), Some(ShipKind::Submarine));
    assert_eq!(ShipKind::from_name("Frigate"), None);
    assert_eq!(ShipKind::Cruiser.to_string(), "Cruiser (3)");
}

#[test]
fn test_carrier_sunk_one_hit_at_a_time() {
    let mut board = Board::new(CellState::Ocean);
    board
        .place_ship(ShipKind::Carrier, Coordinate::new(0, 0), Direction::South)
        .unwrap();
    for column in 0..5 {
        assert_eq!(
            board.state(Coordinate::new(0, column)),
            Some(CellState::ShipPart(ShipKind::Carrier))
        );
    }

    for (column, expected) in (0..4).zip([4, 3, 2, 1]) {
        board.receive_missile(Coordinate::new(0, column)).unwrap();
        let carrier = board.fleet().find_ship(ShipKind::Carrier).unwrap();
        assert_eq!(carrier.remaining_segments(), expected);
        assert!(!board.fleet().last_hit_destroyed());
    }
    board.receive_missile(Coordinate::new(0, 4)).unwrap();
    let carrier = board.fleet().find_ship(ShipKind::Carrier).unwrap();
    assert_eq!(carrier.remaining_segments(), 0);
    assert!(carrier.is_destroyed());
    assert!(board.fleet().last_hit_destroyed());
    assert_eq!(board.fleet().remaining_ships(), 4);
    assert!(!board.fleet().is_destroyed());
}

#[test]
fn test_last_ship_destroys_the_fleet() {
    let mut fleet = Fleet::new();
    for kind in FLEET {
        for _ in 0..kind.size() {
            assert!(!fleet.is_destroyed());
            fleet.update_hit(kind).unwrap();
        }
        assert!(fleet.last_hit_destroyed());
    }
    assert_eq!(fleet.remaining_ships(), 0);
    assert!(fleet.is_destroyed());
}

#[test]
fn test_destroyed_ship_cannot_be_hit_again() {
    let mut fleet = Fleet::new();
    assert_eq!(fleet.update_hit(ShipKind::Submarine), Ok(true));
    assert_eq!(
        fleet.update_hit(ShipKind::Submarine),
        Err(BoardError::ShipAlreadyDestroyed(ShipKind::Submarine))
    );
    assert_eq!(fleet.remaining_ships(), 4);

    assert_eq!(fleet.update_hit(ShipKind::Destroyer), Ok(false));
    assert!(!fleet.last_hit_destroyed());
}
