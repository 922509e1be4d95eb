use pretty_assertions::assert_eq;
use rookery::board::Board;
use rookery::piece::{Piece, PieceKind};
use rookery::square::{Color, Square};

#[test]
fn standard_setup_places_32_pieces() {
    let board = Board::standard();
    assert_eq!(board.piece_count(), 32);

    let back = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    for (col, &kind) in back.iter().enumerate() {
        let black = board.piece_at(Square::new(0, col)).unwrap();
        assert_eq!((black.kind, black.color), (kind, Color::Black));
        let white = board.piece_at(Square::new(7, col)).unwrap();
        assert_eq!((white.kind, white.color), (kind, Color::White));
    }
    for col in 0..8 {
        assert_eq!(board.piece_at(Square::new(1, col)).unwrap().kind, PieceKind::Pawn);
        assert_eq!(board.piece_at(Square::new(6, col)).unwrap().kind, PieceKind::Pawn);
    }
    // Middle ranks start empty.
    for row in 2..6 {
        for col in 0..8 {
            assert!(!board.is_occupied(Square::new(row, col)));
        }
    }
}

#[test]
fn place_and_query() {
    let mut board = Board::empty();
    let sq = Square::new(3, 5);
    assert!(!board.is_occupied(sq));
    board.place(Piece::new(PieceKind::Pawn, Color::Black), sq);
    assert!(board.is_occupied(sq));
    assert_eq!(board.piece_at(sq).unwrap().kind, PieceKind::Pawn);
    assert!(!board.is_occupied(Square::new(3, 6)));
}

#[test]
fn place_overwrites_unconditionally() {
    let mut board = Board::empty();
    let sq = Square::new(4, 4);
    board.place(Piece::new(PieceKind::Pawn, Color::Black), sq);
    board.place(Piece::new(PieceKind::Queen, Color::White), sq);
    let piece = board.piece_at(sq).unwrap();
    assert_eq!((piece.kind, piece.color), (PieceKind::Queen, Color::White));
}

#[test]
fn relocate_moves_and_clears_origin() {
    let mut board = Board::empty();
    let from = Square::new(7, 0);
    let to = Square::new(6, 0);
    board.place(Piece::new(PieceKind::Pawn, Color::Black), from);
    board.relocate(from, to);
    assert!(!board.is_occupied(from));
    assert_eq!(board.piece_at(to).unwrap().kind, PieceKind::Pawn);
}

#[test]
fn flip_perspective_rotates_180_degrees() {
    let mut board = Board::empty();
    let mut rook = Piece::new(PieceKind::Rook, Color::White);
    rook.has_moved = true;
    board.place(rook.clone(), Square::new(7, 0));
    assert_eq!(board.near_color(), Color::White);

    board.flip_perspective();
    assert_eq!(board.near_color(), Color::Black);
    assert!(!board.is_occupied(Square::new(7, 0)));
    // Piece state survives the rotation untouched.
    assert_eq!(board.piece_at(Square::new(0, 7)), Some(&rook));
}

#[test]
fn double_flip_restores_the_board() {
    let mut board = Board::standard();
    let before = board.clone();
    board.flip_perspective();
    board.flip_perspective();
    assert_eq!(board, before);
}

#[test]
fn promotable_square_scans_the_far_rank() {
    let board = Board::standard();
    assert_eq!(board.promotable_square(), None);

    let mut board = Board::empty();
    board.place(Piece::new(PieceKind::Rook, Color::White), Square::new(0, 2));
    assert_eq!(board.promotable_square(), None);
    board.place(Piece::new(PieceKind::Pawn, Color::White), Square::new(0, 4));
    assert_eq!(board.promotable_square(), Some(Square::new(0, 4)));
}

#[test]
fn rendering_shows_files_and_ranks() {
    let text = Board::standard().to_string();
    assert!(text.starts_with("   a b c d e f g h"));
    assert!(text.contains("8 |♜|♞|♝|♛|♚|♝|♞|♜| 8"));
    assert!(text.contains("2 |♙|♙|♙|♙|♙|♙|♙|♙| 2"));
    assert!(text.ends_with("   a b c d e f g h"));
}
