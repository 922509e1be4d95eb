use crate::board::Board;
use crate::square::{Color, Square};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed set of piece kinds. Movement is dispatched by matching on this,
/// never by an open hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl FromStr for PieceKind {
    type Err = ();

    fn from_str(s: &str) -> Result<PieceKind, ()> {
        match s.to_ascii_lowercase().as_str() {
            "pawn" => Ok(PieceKind::Pawn),
            "rook" => Ok(PieceKind::Rook),
            "knight" => Ok(PieceKind::Knight),
            "bishop" => Ok(PieceKind::Bishop),
            "queen" => Ok(PieceKind::Queen),
            "king" => Ok(PieceKind::King),
            _ => Err(()),
        }
    }
}

/// One chess piece. Position lives on the board grid only; a piece value
/// never stores its own coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// Flips to true permanently after the first committed move. Gates the
    /// pawn double-step.
    pub has_moved: bool,
    /// Set when this piece is the casualty of an opposing move.
    pub captured: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color, has_moved: false, captured: false }
    }

    pub fn symbol(&self) -> char {
        match (self.kind, self.color) {
            (PieceKind::Pawn, Color::White) => '♙',
            (PieceKind::Pawn, Color::Black) => '♟',
            (PieceKind::Rook, Color::White) => '♖',
            (PieceKind::Rook, Color::Black) => '♜',
            (PieceKind::Knight, Color::White) => '♘',
            (PieceKind::Knight, Color::Black) => '♞',
            (PieceKind::Bishop, Color::White) => '♗',
            (PieceKind::Bishop, Color::Black) => '♝',
            (PieceKind::Queen, Color::White) => '♕',
            (PieceKind::Queen, Color::Black) => '♛',
            (PieceKind::King, Color::White) => '♔',
            (PieceKind::King, Color::Black) => '♚',
        }
    }

    /// Full move legality: geometry, obstruction, and capture semantics.
    /// The same predicate answers both "may I play this" and "does this
    /// piece attack that square" during check detection.
    pub fn path_valid(&self, board: &Board, from: Square, to: Square) -> bool {
        if from == to {
            return false;
        }
        // Never onto an ally, whatever the geometry says.
        if let Some(dest) = board.piece_at(to) {
            if dest.color == self.color {
                return false;
            }
        }
        match self.kind {
            PieceKind::Rook => slide(board, from, to, &ROOK_DIRS),
            PieceKind::Bishop => slide(board, from, to, &BISHOP_DIRS),
            PieceKind::Queen => slide(board, from, to, &QUEEN_DIRS),
            PieceKind::Knight => knight_jump(from, to),
            PieceKind::King => king_step(from, to),
            PieceKind::Pawn => self.pawn_move(board, from, to),
        }
    }

    /// Every square this piece could legally move to right now.
    pub fn destinations(&self, board: &Board, from: Square) -> Vec<Square> {
        Square::all()
            .filter(|&to| self.path_valid(board, from, to))
            .collect()
    }

    /// Pawns are the one asymmetric piece: forward inverts per color. The
    /// direction comes from the board's current orientation so the rule is
    /// identical whether the pawn is the mover or the threat under scan.
    fn pawn_move(&self, board: &Board, from: Square, to: Square) -> bool {
        let dir = board.forward(self.color);
        let dr = to.row as i8 - from.row as i8;
        let dc = to.col as i8 - from.col as i8;
        if dc == 0 {
            // Straight ahead never captures.
            if board.is_occupied(to) {
                return false;
            }
            if dr == dir {
                return true;
            }
            if dr == 2 * dir && !self.has_moved {
                return matches!(from.offset(dir, 0), Some(mid) if !board.is_occupied(mid));
            }
            false
        } else if dc.abs() == 1 && dr == dir {
            // Diagonal steps are capture-only.
            matches!(board.piece_at(to), Some(p) if p.color != self.color)
        } else {
            false
        }
    }
}

const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, 0), (1, 0), (0, -1), (0, 1),
    (-1, -1), (-1, 1), (1, -1), (1, 1),
];

/// Sliding movement: origin and destination must lie on one of `dirs`, and
/// every square strictly between them must be empty.
fn slide(board: &Board, from: Square, to: Square, dirs: &[(i8, i8)]) -> bool {
    let dr = to.row as i8 - from.row as i8;
    let dc = to.col as i8 - from.col as i8;
    if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
        return false;
    }
    let step = (dr.signum(), dc.signum());
    if !dirs.contains(&step) {
        return false;
    }
    let mut next = from.offset(step.0, step.1);
    while let Some(sq) = next {
        if sq == to {
            return true;
        }
        if board.is_occupied(sq) {
            return false;
        }
        next = sq.offset(step.0, step.1);
    }
    false
}

fn knight_jump(from: Square, to: Square) -> bool {
    let dr = (to.row as i8 - from.row as i8).abs();
    let dc = (to.col as i8 - from.col as i8).abs();
    (dr, dc) == (1, 2) || (dr, dc) == (2, 1)
}

fn king_step(from: Square, to: Square) -> bool {
    let dr = (to.row as i8 - from.row as i8).abs();
    let dc = (to.col as i8 - from.col as i8).abs();
    dr.max(dc) == 1
}
