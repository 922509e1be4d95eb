use crate::board::Board;
use crate::piece::PieceKind;
use crate::square::{Color, Square};

/// Where `color`'s king currently stands. `None` only when the king has
/// been captured, which is itself a terminal condition.
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    Square::all().find(|&sq| {
        matches!(board.piece_at(sq),
                 Some(p) if p.color == color && p.kind == PieceKind::King)
    })
}

/// Whether any enemy piece's legal-move set reaches `color`'s king square.
/// A plain scan of all 64 squares; at this board size nothing fancier is
/// warranted.
pub fn in_check(board: &Board, color: Color) -> bool {
    let Some(king) = king_square(board, color) else {
        return false;
    };
    Square::all().any(|sq| match board.piece_at(sq) {
        Some(p) if p.color != color => p.path_valid(board, sq, king),
        _ => false,
    })
}
