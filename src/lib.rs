//! A compact chess rules engine with a one-ply AI opponent.
//!
//! The crate splits into two halves:
//!   - [`engine`] — board representation, move generation, check and mate
//!     detection, simplified move notation, and the stateful [`engine::Game`]
//!     controller.
//!   - [`ai`] — static evaluation and move selectors behind the
//!     [`ai::MoveSelector`] trait.
//!
//! The supported rule set is standard chess without castling, en passant,
//! or pawn promotion.

pub mod ai;
pub mod config;
pub mod engine;

pub use ai::{GreedySelector, MoveChoice, MoveSelector, RandomSelector};
pub use engine::{Board, ChessError, Color, Game, GameStatus, Move, Piece, PieceType, Square};
