pub mod board;
pub mod error;
pub mod rules;
pub mod state;

pub use board::{Board, Stack, DEFAULT_STACK_COUNT};
pub use error::GameError;
pub use rules::{is_valid, Predicate};
pub use state::{Choice, GameState, GameStatus, TurnResult};
