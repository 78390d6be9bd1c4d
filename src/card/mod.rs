pub mod deck;
pub mod types;

pub use deck::{Deck, STANDARD_DECK_SIZE};
pub use types::{Card, Suit};
