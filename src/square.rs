use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of the board. Exactly two values, no neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// One cell of the 8x8 grid. Row 0 is the far back rank, row 7 the near one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    /// Both coordinates must be in 0..8.
    pub fn new(row: usize, col: usize) -> Square {
        debug_assert!(row < 8 && col < 8, "square ({row},{col}) out of bounds");
        Square { row, col }
    }

    /// Step by a signed offset, `None` when it would leave the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// The square this one maps to under a 180-degree board rotation.
    pub fn rotated(self) -> Square {
        Square::new(7 - self.row, 7 - self.col)
    }

    /// All 64 squares, row-major.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::new(row, col)))
    }
}

impl FromStr for Square {
    type Err = MoveError;

    /// Coordinate notation: file then rank, `[a-h][1-8]`. 'a1' is (7,0).
    fn from_str(s: &str) -> Result<Square, MoveError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => {
                let col = file as usize - 'a' as usize;
                let row = 8 - (rank as usize - '0' as usize);
                Ok(Square::new(row, col))
            }
            _ => Err(MoveError::MalformedCoordinate(s.to_string())),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col as u8) as char;
        write!(f, "{}{}", file, 8 - self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_maps_file_and_rank() {
        assert_eq!("a1".parse::<Square>().unwrap(), Square::new(7, 0));
        assert_eq!("h8".parse::<Square>().unwrap(), Square::new(0, 7));
        assert_eq!("e2".parse::<Square>().unwrap(), Square::new(6, 4));
    }

    #[test]
    fn notation_round_trips() {
        for sq in Square::all() {
            assert_eq!(sq.to_string().parse::<Square>().unwrap(), sq);
        }
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        for bad in ["", "a", "a9", "i1", "a12", "1a", "resign", "e2 "] {
            assert_eq!(
                bad.parse::<Square>(),
                Err(MoveError::MalformedCoordinate(bad.to_string()))
            );
        }
    }

    #[test]
    fn offsets_stay_on_the_board() {
        assert_eq!(Square::new(0, 0).offset(-1, 0), None);
        assert_eq!(Square::new(7, 7).offset(0, 1), None);
        assert_eq!(Square::new(3, 3).offset(2, -1), Some(Square::new(5, 2)));
    }
}
