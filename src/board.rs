use crate::piece::{Piece, PieceKind};
use crate::square::{Color, Square};
use std::fmt;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid. Each square holds at most one piece; a piece's position is
/// its grid index and nothing else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Vec<Vec<Option<Piece>>>,
    /// The color whose home ranks are rows 6-7 in the current orientation.
    /// Toggled by `flip_perspective`; pawn direction is derived from it.
    near: Color,
}

impl Board {
    pub fn empty() -> Board {
        Board { grid: vec![vec![None; 8]; 8], near: Color::White }
    }

    /// Standard initial layout: black back rank on row 0, black pawns on
    /// row 1, white pawns on row 6, white back rank on row 7.
    pub fn standard() -> Board {
        let mut board = Board::empty();
        board.place_pieces_at_begin();
        board
    }

    pub fn place_pieces_at_begin(&mut self) {
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            self.place(Piece::new(kind, Color::Black), Square::new(0, col));
            self.place(Piece::new(kind, Color::White), Square::new(7, col));
        }
        for col in 0..8 {
            self.place(Piece::new(PieceKind::Pawn, Color::Black), Square::new(1, col));
            self.place(Piece::new(PieceKind::Pawn, Color::White), Square::new(6, col));
        }
    }

    /// Unconditional write; overwrites whatever was on `sq`.
    pub fn place(&mut self, piece: Piece, sq: Square) {
        self.grid[sq.row][sq.col] = Some(piece);
    }

    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.grid[sq.row][sq.col].as_ref()
    }

    pub fn piece_at_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        self.grid[sq.row][sq.col].as_mut()
    }

    /// Removes and returns the occupant of `sq`.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.grid[sq.row][sq.col].take()
    }

    pub fn is_occupied(&self, sq: Square) -> bool {
        self.grid[sq.row][sq.col].is_some()
    }

    /// Raw relocation: moves the occupant of `from` onto `to`, clearing
    /// `from`. No legality check; whatever sat on `to` is discarded, so any
    /// capture bookkeeping must happen before this call.
    pub fn relocate(&mut self, from: Square, to: Square) {
        let piece = self.grid[from.row][from.col].take();
        self.grid[to.row][to.col] = piece;
    }

    /// 180-degree rotation in place, so the side about to move is rendered
    /// nearest. Piece state is untouched; only geometry changes.
    pub fn flip_perspective(&mut self) {
        self.grid.reverse();
        for row in &mut self.grid {
            row.reverse();
        }
        self.near = self.near.opponent();
    }

    pub fn near_color(&self) -> Color {
        self.near
    }

    pub(crate) fn set_near_color(&mut self, near: Color) {
        self.near = near;
    }

    /// Signed row direction of "forward" for a pawn of `color` under the
    /// current orientation: toward row 0 for the near side, toward row 7
    /// for the far side.
    pub fn forward(&self, color: Color) -> i8 {
        if color == self.near {
            -1
        } else {
            1
        }
    }

    /// A pawn standing on the far back rank is eligible for promotion.
    pub fn promotable_square(&self) -> Option<Square> {
        (0..8)
            .map(|col| Square::new(0, col))
            .find(|&sq| matches!(self.piece_at(sq), Some(p) if p.kind == PieceKind::Pawn))
    }

    pub fn piece_count(&self) -> usize {
        Square::all().filter(|&sq| self.is_occupied(sq)).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let files = "a b c d e f g h";
        writeln!(f, "   {files}")?;
        for (r, row) in self.grid.iter().enumerate() {
            let rank = 8 - r;
            write!(f, "{rank} |")?;
            for cell in row {
                let c = cell.as_ref().map_or(' ', |p| p.symbol());
                write!(f, "{c}|")?;
            }
            writeln!(f, " {rank}")?;
        }
        writeln!(f, "  -----------------")?;
        write!(f, "   {files}")
    }
}
