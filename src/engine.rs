use crate::board::Board;
use crate::check;
use crate::error::MoveError;
use crate::piece::{Piece, PieceKind};
use crate::square::{Color, Square};
use log::{debug, info};

/// Per-game bookkeeping outside the board itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub side_to_move: Color,
    /// Starts at 1 and increments by exactly one at every side switch.
    pub turn_counter: u32,
    pub resigned: Option<Color>,
}

impl GameState {
    pub fn new() -> GameState {
        GameState { side_to_move: Color::White, turn_counter: 1, resigned: None }
    }
}

impl Default for GameState {
    fn default() -> GameState {
        GameState::new()
    }
}

/// Where the engine is inside one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the mover to pick one of their own pieces.
    Selecting,
    /// A piece is selected; waiting for a destination.
    Moving { from: Square },
    /// A pawn reached the far rank; waiting for a replacement kind.
    Promoting { square: Square },
    Over,
}

/// What a committed move produced, for the caller to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The displaced enemy piece, flagged `captured`, if any.
    pub captured: Option<Piece>,
    /// Square of a pawn now awaiting promotion. When set, the side switch
    /// is deferred until the promotion is resolved.
    pub promotion: Option<Square>,
    /// Whether the opponent's king is attacked after this move.
    pub gives_check: bool,
    /// Set when this move captured the enemy king and ended the game.
    pub winner: Option<Color>,
}

/// Outcome of resolving a pending promotion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Promotion {
    Applied(PieceKind),
    /// The input named no usable kind (or named Pawn); the pawn stays.
    Declined,
}

/// Drives the turn protocol: select, validate, provisionally apply, roll
/// back on self-check, commit, promote, detect terminal conditions, switch
/// sides. Owns the board and game state for the life of one game.
pub struct TurnEngine {
    board: Board,
    state: GameState,
    phase: Phase,
    winner: Option<Color>,
}

impl TurnEngine {
    pub fn new() -> TurnEngine {
        TurnEngine::from_parts(Board::standard(), GameState::new())
    }

    /// Rebuilds an engine around existing state, e.g. a loaded game. The
    /// board orientation is forced to match the side to move, which is
    /// always the near side while a game is in progress.
    pub fn from_parts(mut board: Board, state: GameState) -> TurnEngine {
        board.set_near_color(state.side_to_move);
        let mut engine = TurnEngine { board, state, phase: Phase::Selecting, winner: None };
        if let Some(loser) = engine.state.resigned {
            engine.winner = Some(loser.opponent());
            engine.phase = Phase::Over;
        } else if check::king_square(&engine.board, Color::White).is_none() {
            engine.winner = Some(Color::Black);
            engine.phase = Phase::Over;
        } else if check::king_square(&engine.board, Color::Black).is_none() {
            engine.winner = Some(Color::White);
            engine.phase = Phase::Over;
        }
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Picks the piece to move this turn. Rejects empty squares and enemy
    /// pieces; on success the engine waits for a destination.
    pub fn select(&mut self, from: Square) -> Result<(), MoveError> {
        match self.phase {
            Phase::Selecting | Phase::Moving { .. } => {}
            _ => return Err(MoveError::WrongPhase),
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquareSelected(from))?;
        if piece.color != self.state.side_to_move {
            return Err(MoveError::WrongColorSelected(from));
        }
        self.phase = Phase::Moving { from };
        Ok(())
    }

    /// Drops a pending selection without touching the board.
    pub fn reselect(&mut self) {
        if let Phase::Moving { .. } = self.phase {
            self.phase = Phase::Selecting;
        }
    }

    /// Attempts the selected piece's move to `to`. On success the move is
    /// committed atomically; on any rejection the board and state are
    /// exactly as they were before the call.
    pub fn play(&mut self, to: Square) -> Result<MoveOutcome, MoveError> {
        let Phase::Moving { from } = self.phase else {
            return Err(MoveError::WrongPhase);
        };
        if to == from {
            return Err(MoveError::IdenticalSquare);
        }
        let Some(piece) = self.board.piece_at(from).cloned() else {
            return Err(MoveError::EmptySquareSelected(from));
        };
        if !piece.path_valid(&self.board, from, to) {
            return Err(MoveError::IllegalPath { from, to });
        }

        // Provisional apply with a snapshot for rollback.
        let snapshot = self.board.clone();
        let mover = self.state.side_to_move;
        let captured = self.board.piece_at(to).cloned().map(|mut victim| {
            victim.captured = true;
            victim
        });
        self.board.relocate(from, to);
        if let Some(moved) = self.board.piece_at_mut(to) {
            moved.has_moved = true;
        }

        if check::in_check(&self.board, mover) {
            self.board = snapshot;
            self.phase = Phase::Selecting;
            debug!("{mover} move {from}->{to} rolled back: self-check");
            return Err(MoveError::SelfCheckExposure);
        }

        debug!("{mover} committed {from}->{to}");
        let mut outcome = MoveOutcome {
            captured,
            promotion: None,
            gives_check: check::in_check(&self.board, mover.opponent()),
            winner: None,
        };

        if let Some(square) = self.board.promotable_square() {
            // Terminal check and side switch wait for the promotion choice.
            self.phase = Phase::Promoting { square };
            outcome.promotion = Some(square);
        } else {
            outcome.winner = self.finish_turn();
        }
        Ok(outcome)
    }

    /// Resolves a pending promotion. Rook, Knight, Bishop and Queen replace
    /// the pawn; picking Pawn (or nothing) leaves it unpromoted. Either way
    /// the turn then completes normally.
    pub fn promote(&mut self, kind: Option<PieceKind>) -> Result<Promotion, MoveError> {
        let Phase::Promoting { square } = self.phase else {
            return Err(MoveError::WrongPhase);
        };
        let result = match kind {
            Some(kind) if kind != PieceKind::Pawn && kind != PieceKind::King => {
                let color = match self.board.piece_at(square) {
                    Some(pawn) => pawn.color,
                    None => self.state.side_to_move,
                };
                let mut replacement = Piece::new(kind, color);
                replacement.has_moved = true;
                self.board.place(replacement, square);
                info!("{color} pawn on {square} promoted to {kind:?}");
                Promotion::Applied(kind)
            }
            _ => Promotion::Declined,
        };
        self.finish_turn();
        Ok(result)
    }

    /// Resigning forfeits immediately: no validation, no side switch. Only
    /// offered while a piece is being selected.
    pub fn resign(&mut self) -> Result<(), MoveError> {
        if self.phase != Phase::Selecting {
            return Err(MoveError::WrongPhase);
        }
        let loser = self.state.side_to_move;
        self.state.resigned = Some(loser);
        self.winner = Some(loser.opponent());
        self.phase = Phase::Over;
        info!("{loser} resigned");
        Ok(())
    }

    /// Terminal check, then side switch. A missing king ends the game
    /// before any switch; the side that just moved wins.
    fn finish_turn(&mut self) -> Option<Color> {
        let mover = self.state.side_to_move;
        if check::king_square(&self.board, mover.opponent()).is_none() {
            self.winner = Some(mover);
            self.phase = Phase::Over;
            info!("{} king captured; {mover} wins", mover.opponent());
            return self.winner;
        }
        self.state.side_to_move = mover.opponent();
        self.state.turn_counter += 1;
        self.board.flip_perspective();
        self.phase = Phase::Selecting;
        None
    }
}

impl Default for TurnEngine {
    fn default() -> TurnEngine {
        TurnEngine::new()
    }
}
