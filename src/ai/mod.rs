pub mod engine;
pub mod evaluation;

pub use engine::{GreedySelector, MoveChoice, MoveSelector, RandomSelector};
pub use evaluation::evaluate;
