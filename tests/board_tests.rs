//! Board tests - bounds checking, placement, and growth

use gridmerge::{Board, GridError, Position, TileKind};

#[test]
fn test_new_board_is_4x4_and_empty() {
    let board = Board::new();
    assert_eq!(board.size(), 4);
    assert_eq!(board.occupied_count(), 0);
    assert!(!board.is_full());
    assert_eq!(board.empty_positions().len(), 16);

    for row in 0..4 {
        for col in 0..4 {
            assert_eq!(board.get(Position::new(row, col)), Ok(None));
        }
    }
}

#[test]
fn test_place_get_remove() {
    let mut board = Board::new();
    let pos = Position::new(1, 3);

    board.place(TileKind::Knight, pos).unwrap();
    assert_eq!(board.get(pos), Ok(Some(TileKind::Knight)));
    assert_eq!(board.is_empty(pos), Ok(false));
    assert_eq!(board.occupied_count(), 1);

    board.remove(pos).unwrap();
    assert_eq!(board.get(pos), Ok(None));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_place_overwrites_existing_tile() {
    let mut board = Board::new();
    let pos = Position::new(0, 0);

    board.place(TileKind::Pawn, pos).unwrap();
    board.place(TileKind::King, pos).unwrap();
    assert_eq!(board.get(pos), Ok(Some(TileKind::King)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_every_positional_op_reports_out_of_bounds() {
    let mut board = Board::new();

    for bad in [
        Position::new(-1, 0),
        Position::new(0, -1),
        Position::new(4, 0),
        Position::new(0, 4),
        Position::new(127, 127),
    ] {
        let expected = GridError::OutOfBounds {
            row: bad.row,
            col: bad.col,
            size: 4,
        };
        assert!(!board.is_valid_position(bad));
        assert_eq!(board.get(bad), Err(expected));
        assert_eq!(board.is_empty(bad), Err(expected));
        assert_eq!(board.place(TileKind::Pawn, bad), Err(expected));
        assert_eq!(board.remove(bad), Err(expected));
    }
}

#[test]
fn test_bounds_move_with_size() {
    let mut board = Board::new();
    let pos = Position::new(4, 4);
    assert!(board.get(pos).is_err());

    board.expand();
    assert_eq!(board.get(pos), Ok(None));
    board.place(TileKind::Pawn, pos).unwrap();
    assert_eq!(board.get(pos), Ok(Some(TileKind::Pawn)));
}

#[test]
fn test_expand_keeps_every_tile_coordinate() {
    let mut board = Board::new();
    let placed = [
        (TileKind::Pawn, Position::new(0, 0)),
        (TileKind::Knight, Position::new(1, 2)),
        (TileKind::Queen, Position::new(3, 3)),
    ];
    for (kind, pos) in placed {
        board.place(kind, pos).unwrap();
    }

    assert!(board.expand());
    assert_eq!(board.size(), 5);
    for (kind, pos) in placed {
        assert_eq!(board.get(pos), Ok(Some(kind)));
    }
    assert_eq!(board.occupied_count(), 3);
}

#[test]
fn test_expand_returns_false_at_max_size() {
    let mut board = Board::new();
    let mut grown = 0;
    while board.expand() {
        grown += 1;
    }
    assert_eq!(grown, 5);
    assert_eq!(board.size(), 9);

    board.place(TileKind::Rook, Position::new(8, 8)).unwrap();
    assert!(!board.expand());
    assert_eq!(board.size(), 9);
    assert_eq!(board.get(Position::new(8, 8)), Ok(Some(TileKind::Rook)));
}

#[test]
fn test_position_listings_are_recomputed() {
    let mut board = Board::new();
    board.place(TileKind::Pawn, Position::new(2, 2)).unwrap();

    assert_eq!(board.occupied_positions(), vec![Position::new(2, 2)]);
    board.remove(Position::new(2, 2)).unwrap();
    assert!(board.occupied_positions().is_empty());
    assert_eq!(board.empty_positions().len(), 16);
}
