use rookery::board::Board;
use rookery::check::{in_check, king_square};
use rookery::piece::{Piece, PieceKind};
use rookery::square::{Color, Square};

fn placed(board: &mut Board, kind: PieceKind, color: Color, row: usize, col: usize) {
    board.place(Piece::new(kind, color), Square::new(row, col));
}

#[test]
fn finds_the_king() {
    let mut board = Board::empty();
    placed(&mut board, PieceKind::King, Color::White, 3, 6);
    placed(&mut board, PieceKind::Queen, Color::White, 0, 0);
    assert_eq!(king_square(&board, Color::White), Some(Square::new(3, 6)));
    assert_eq!(king_square(&board, Color::Black), None);
}

#[test]
fn adjacent_enemy_queen_gives_check() {
    let mut board = Board::empty();
    placed(&mut board, PieceKind::King, Color::White, 0, 0);
    placed(&mut board, PieceKind::Queen, Color::Black, 0, 1);
    assert!(in_check(&board, Color::White));
}

#[test]
fn distant_unaligned_queen_does_not() {
    let mut board = Board::empty();
    placed(&mut board, PieceKind::King, Color::White, 0, 0);
    placed(&mut board, PieceKind::Queen, Color::Black, 7, 6);
    assert!(!in_check(&board, Color::White));
}

#[test]
fn pawn_does_not_threaten_the_square_behind_its_diagonal() {
    let mut board = Board::empty();
    placed(&mut board, PieceKind::King, Color::White, 0, 0);
    placed(&mut board, PieceKind::Pawn, Color::Black, 1, 1);
    // The black pawn advances toward row 7 and threatens (2,0) and (2,2).
    assert!(!in_check(&board, Color::White));
}

#[test]
fn pawn_threatens_its_forward_diagonals() {
    let mut board = Board::empty();
    placed(&mut board, PieceKind::Pawn, Color::Black, 1, 1);
    placed(&mut board, PieceKind::King, Color::White, 2, 0);
    assert!(in_check(&board, Color::White));

    let mut board = Board::empty();
    placed(&mut board, PieceKind::Pawn, Color::Black, 1, 1);
    placed(&mut board, PieceKind::King, Color::White, 2, 2);
    assert!(in_check(&board, Color::White));
}

#[test]
fn an_interposed_piece_blocks_the_attack() {
    let mut board = Board::empty();
    placed(&mut board, PieceKind::King, Color::White, 0, 0);
    placed(&mut board, PieceKind::Rook, Color::Black, 0, 7);
    assert!(in_check(&board, Color::White));
    placed(&mut board, PieceKind::Knight, Color::Black, 0, 3);
    assert!(!in_check(&board, Color::White));
}

#[test]
fn knights_check_over_blockers() {
    let mut board = Board::standard();
    // Drop a black knight right outside white's pawn wall.
    placed(&mut board, PieceKind::Knight, Color::Black, 5, 3);
    assert!(in_check(&board, Color::White));
}

#[test]
fn own_pieces_never_check_their_king() {
    let mut board = Board::empty();
    placed(&mut board, PieceKind::King, Color::White, 0, 0);
    placed(&mut board, PieceKind::Queen, Color::White, 0, 1);
    placed(&mut board, PieceKind::Rook, Color::White, 1, 0);
    assert!(!in_check(&board, Color::White));
}

#[test]
fn no_king_means_no_check() {
    let mut board = Board::empty();
    placed(&mut board, PieceKind::Queen, Color::Black, 4, 4);
    assert!(!in_check(&board, Color::White));
}
