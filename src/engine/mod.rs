pub mod attacks;
pub mod board;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod types;

pub use board::Board;
pub use game::Game;
pub use movegen::{apply_move, is_valid_move, legal_moves, pseudo_legal_moves};
pub use types::*;
