use crate::board::Board;
use crate::engine::{GameState, TurnEngine};
use crate::piece::{Piece, PieceKind};
use crate::square::{Color, Square};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One occupied cell in the saved layout. `captured` is not stored: a piece
/// on the grid is by definition not captured.
#[derive(Serialize, Deserialize)]
struct PieceRecord {
    kind: PieceKind,
    color: Color,
    has_moved: bool,
}

/// `false` while nobody has resigned, otherwise the resigning color.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ResignedField {
    Color(Color),
    Flag(bool),
}

/// The on-disk shape: an order-significant 4-tuple of side to move, turn
/// counter, resignation, and the 8x8 layout (null for empty squares).
#[derive(Serialize, Deserialize)]
struct SavedGame(Color, u32, ResignedField, Vec<Vec<Option<PieceRecord>>>);

pub fn to_json(engine: &TurnEngine) -> Result<String> {
    let state = engine.state();
    let layout: Vec<Vec<Option<PieceRecord>>> = (0..8)
        .map(|row| {
            (0..8)
                .map(|col| {
                    engine.board().piece_at(Square::new(row, col)).map(|p| PieceRecord {
                        kind: p.kind,
                        color: p.color,
                        has_moved: p.has_moved,
                    })
                })
                .collect()
        })
        .collect();
    let resigned = match state.resigned {
        Some(color) => ResignedField::Color(color),
        None => ResignedField::Flag(false),
    };
    let saved = SavedGame(state.side_to_move, state.turn_counter, resigned, layout);
    serde_json::to_string(&saved).context("serializing saved game")
}

pub fn from_json(text: &str) -> Result<TurnEngine> {
    let SavedGame(side_to_move, turn_counter, resigned, layout) =
        serde_json::from_str(text).context("parsing saved game")?;
    if turn_counter < 1 {
        bail!("turn counter must be at least 1, got {turn_counter}");
    }
    let resigned = match resigned {
        ResignedField::Color(color) => Some(color),
        ResignedField::Flag(false) => None,
        ResignedField::Flag(true) => bail!("resignation flag is true but names no color"),
    };
    if layout.len() != 8 {
        bail!("layout has {} rows, expected 8", layout.len());
    }
    let mut board = Board::empty();
    for (row, cells) in layout.iter().enumerate() {
        if cells.len() != 8 {
            bail!("layout row {row} has {} columns, expected 8", cells.len());
        }
        for (col, cell) in cells.iter().enumerate() {
            if let Some(rec) = cell {
                let mut piece = Piece::new(rec.kind, rec.color);
                piece.has_moved = rec.has_moved;
                board.place(piece, Square::new(row, col));
            }
        }
    }
    let state = GameState { side_to_move, turn_counter, resigned };
    Ok(TurnEngine::from_parts(board, state))
}

pub fn save_to_file(engine: &TurnEngine, path: &Path) -> Result<()> {
    let text = to_json(engine)?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn load_from_file(path: &Path) -> Result<TurnEngine> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    from_json(&text)
}
