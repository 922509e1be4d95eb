use crate::square::Square;
use thiserror::Error;

/// Everything a turn can be rejected for. All of these are recoverable: the
/// board and game state are untouched and the caller may retry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("`{0}` is not a coordinate of the form a1..h8")]
    MalformedCoordinate(String),
    #[error("there is no piece on {0}")]
    EmptySquareSelected(Square),
    #[error("the piece on {0} belongs to the opponent")]
    WrongColorSelected(Square),
    #[error("destination is the same as the origin")]
    IdenticalSquare,
    #[error("the piece on {from} cannot move to {to}")]
    IllegalPath { from: Square, to: Square },
    #[error("that move would leave your own king in check")]
    SelfCheckExposure,
    #[error("that action is not available right now")]
    WrongPhase,
}
