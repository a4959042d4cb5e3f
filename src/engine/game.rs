//! Stateful game controller wrapping Board.
//!
//! `Game` owns the board, the side to move, the move history, and the
//! derived status. All rule questions are delegated to the stateless
//! engine modules; this layer adds sequencing, validation errors, and
//! undo.

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::ai::MoveSelector;
use crate::engine::board::Board;
use crate::engine::types::{ChessError, Color, GameStatus, Move, Square};
use crate::engine::{attacks, movegen, notation};

/// A complete chess game with history, undo, and status tracking.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<Move>,
    status: GameStatus,

    pub id: String,
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// Create a new game from the standard starting position, white to move.
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            side_to_move: Color::White,
            history: Vec::new(),
            status: GameStatus::Playing,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        }
    }

    /// Reset to the starting position, keeping the game's identity.
    pub fn reset(&mut self) {
        self.board = Board::initial();
        self.side_to_move = Color::White;
        self.history.clear();
        self.status = GameStatus::Playing;
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Current game status, always describing the side to move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Completed move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Whether the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Legal destinations for the piece on `from`. Empty when the square is
    /// empty or holds the opponent's piece.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Square> {
        match self.board.piece_at(from) {
            Some(p) if p.color == self.side_to_move => movegen::legal_moves(&self.board, from),
            _ => Vec::new(),
        }
    }

    // -----------------------------------------------------------------
    // Make move
    // -----------------------------------------------------------------

    /// Play `from -> to` for the side to move.
    ///
    /// Returns the completed move record with its notation filled in.
    /// Fails if the game is over, the origin does not hold the mover's
    /// piece, or the move is not legal.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<Move, ChessError> {
        if self.status.is_game_over() {
            return Err(ChessError::GameOver(self.status.as_str().to_string()));
        }

        let illegal = || ChessError::IllegalMove {
            from: from.to_algebraic(),
            to: to.to_algebraic(),
        };

        match self.board.piece_at(from) {
            Some(p) if p.color == self.side_to_move => {}
            _ => return Err(illegal()),
        }

        let (new_board, mut record) = movegen::apply_move(&self.board, from, to).ok_or_else(illegal)?;
        record.notation = notation::notation(&record);

        self.board = new_board;
        self.history.push(record.clone());
        self.side_to_move = !self.side_to_move;
        self.status = Self::compute_status(&self.board, self.side_to_move);

        debug!(
            game_id = %self.id,
            mv = %record.notation,
            status = self.status.as_str(),
            "move played"
        );

        Ok(record)
    }

    /// Let a selector pick and play a move for the side to move.
    pub fn make_ai_move(&mut self, selector: &dyn MoveSelector) -> Result<Move, ChessError> {
        if self.status.is_game_over() {
            return Err(ChessError::GameOver(self.status.as_str().to_string()));
        }

        let choice = selector
            .select_move(&self.board, self.side_to_move)
            .ok_or(ChessError::NoLegalMoves(self.side_to_move))?;

        debug!(
            game_id = %self.id,
            selector = selector.name(),
            from = %choice.from,
            to = %choice.to,
            "selector chose"
        );

        self.make_move(choice.from, choice.to)
    }

    // -----------------------------------------------------------------
    // Undo move
    // -----------------------------------------------------------------

    /// Undo the last move by replaying the rest of the history from the
    /// starting position. Returns the move that was undone.
    pub fn undo_move(&mut self) -> Result<Move, ChessError> {
        let undone = self.history.pop().ok_or(ChessError::NothingToUndo)?;

        let replay = std::mem::take(&mut self.history);
        self.board = Board::initial();
        self.side_to_move = Color::White;
        self.status = GameStatus::Playing;
        for mv in &replay {
            // History moves were legal when played; replaying from the
            // start cannot fail.
            debug_assert!(movegen::is_valid_move(&self.board, mv.from, mv.to));
            if let Some((board, _)) = movegen::apply_move(&self.board, mv.from, mv.to) {
                self.board = board;
                self.side_to_move = !self.side_to_move;
            }
        }
        self.history = replay;
        self.status = Self::compute_status(&self.board, self.side_to_move);

        debug!(game_id = %self.id, mv = %undone.notation, "move undone");

        Ok(undone)
    }

    // -----------------------------------------------------------------
    // Status
    // -----------------------------------------------------------------

    /// Status of the position from the point of view of `side`, the player
    /// about to move.
    fn compute_status(board: &Board, side: Color) -> GameStatus {
        if attacks::is_in_check(board, side) {
            if attacks::is_checkmate(board, side) {
                GameStatus::Checkmate
            } else {
                GameStatus::Check
            }
        } else if attacks::is_stalemate(board, side) {
            GameStatus::Stalemate
        } else {
            GameStatus::Playing
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
