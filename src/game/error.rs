use thiserror::Error;

/// Contract violations in the game loop. None of these occur in a correctly
/// driven game; any of them aborts the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot draw: the deck is empty")]
    EmptyDeck,
    #[error("Cannot read a top card: the board has no stacks")]
    EmptyStack,
    #[error("Stack index {index} out of range for board of {len} stacks")]
    StackOutOfRange { index: usize, len: usize },
    #[error("Invalid predicate code: {0}")]
    InvalidPredicate(u8),
    #[error("Game is already over")]
    GameOver,
}
