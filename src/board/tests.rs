use super::*;
use crate::error::BoardError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_codes() {
    for stone in [Stone::Empty, Stone::Black, Stone::White] {
        assert_eq!(Stone::from_code(i32::from(stone.code())), Some(stone));
    }
    assert_eq!(Stone::from_code(3), None);
    assert_eq!(Stone::from_code(-1), None);
    assert_eq!(Stone::player(0), None);
    assert_eq!(Stone::player(1), Some(Stone::Black));
    assert_eq!(Stone::player(2), Some(Stone::White));
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center of 15x15
    assert_eq!(pos.to_index(15), 7 * 15 + 7);
    assert_eq!(pos.to_index(15), 112);

    let pos2 = Pos::from_index(112, 15);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 15));
    assert!(Pos::is_valid(14, 14, 15));
    assert!(!Pos::is_valid(-1, 0, 15));
    assert!(!Pos::is_valid(0, -1, 15));
    assert!(!Pos::is_valid(15, 0, 15));
    assert!(!Pos::is_valid(0, 15, 15));
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 4);
    assert_eq!(pos.offset(1, -1, 4, 5), Some(Pos::new(4, 0)));
    assert_eq!(pos.offset(1, -1, 5, 5), None);
    assert_eq!(pos.offset(-1, 0, 1, 5), None);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new(9);
    let pos = Pos::new(4, 4);
    assert!(board.is_board_empty());

    board.place_stone(pos, Stone::Black);
    assert_eq!(board.get(pos), Stone::Black);
    assert_eq!(board.stone_count(), 1);

    // Overwriting replaces rather than stacking colors
    board.place_stone(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert_eq!(board.count(Stone::Black), 0);

    board.remove_stone(pos);
    assert!(board.is_empty(pos));
    assert!(board.is_board_empty());
}

#[test]
fn test_with_stone_leaves_original() {
    let board = Board::new(15);
    let next = board.with_stone(Pos::new(3, 9), Stone::White);
    assert!(board.is_board_empty());
    assert_eq!(next.get(Pos::new(3, 9)), Stone::White);
    assert_eq!(next.stone_count(), 1);
}

#[test]
fn test_empty_positions_row_major() {
    let board = Board::from_rows(&[[1, 0], [0, 2]]).unwrap();
    let empties: Vec<Pos> = board.empty_positions().collect();
    assert_eq!(empties, vec![Pos::new(0, 1), Pos::new(1, 0)]);
    assert_eq!(board.stones(Stone::White).collect::<Vec<_>>(), vec![Pos::new(1, 1)]);
    assert_eq!(board.count(Stone::Empty), 2);
}

#[test]
fn test_is_full() {
    let mut board = Board::new(3);
    for pos in board.positions().collect::<Vec<_>>() {
        assert!(!board.is_full());
        board.place_stone(pos, Stone::Black);
    }
    assert!(board.is_full());
}

#[test]
fn test_from_rows_round_trip() {
    let rows = vec![vec![0, 1, 2], vec![2, 1, 0], vec![0, 0, 1]];
    let board = Board::from_rows(&rows).unwrap();
    assert_eq!(board.size(), 3);
    assert_eq!(board.get(Pos::new(0, 2)), Stone::White);
    assert_eq!(board.to_rows(), vec![vec![0, 1, 2], vec![2, 1, 0], vec![0, 0, 1]]);
}

#[test]
fn test_from_rows_rejects_malformed() {
    let empty: Vec<Vec<i32>> = Vec::new();
    assert_eq!(Board::from_rows(&empty), Err(BoardError::Empty));

    let ragged = vec![vec![0, 0], vec![0]];
    assert_eq!(
        Board::from_rows(&ragged),
        Err(BoardError::NotSquare { row: 1, len: 1, expected: 2 })
    );

    let bad_cell = vec![vec![0, 3], vec![0, 0]];
    assert_eq!(
        Board::from_rows(&bad_cell),
        Err(BoardError::InvalidCell { row: 0, col: 1, value: 3 })
    );
}

#[test]
fn test_board_json_snapshot() {
    let board = Board::new(5).with_stone(Pos::new(2, 2), Stone::Black);
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(
        json,
        "[[0,0,0,0,0],[0,0,0,0,0],[0,0,1,0,0],[0,0,0,0,0],[0,0,0,0,0]]"
    );
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);

    assert!(serde_json::from_str::<Board>("[[0,1],[5,0]]").is_err());
}

#[test]
fn test_display() {
    let board = Board::from_rows(&[[1, 0], [0, 2]]).unwrap();
    assert_eq!(board.to_string(), "X .\n. O\n");
}

#[test]
fn test_center() {
    assert_eq!(Board::new(15).center(), Pos::new(7, 7));
    assert_eq!(Board::default().size(), DEFAULT_BOARD_SIZE);
}
