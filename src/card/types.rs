use serde::Serialize;
use std::fmt;

pub const MIN_RANK: u8 = 1;
pub const MAX_RANK: u8 = 13;

/// Display names indexed by rank - 1
const RANK_NAMES: [&str; 13] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen",
    "King",
];

/// Card suits, in deck generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }
}

/// A playing card. Only the rank matters for play; suit and name are for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    suit: Suit,
    rank: u8,
    name: &'static str,
}

impl Card {
    /// Build a card, returning None for ranks outside 1..=13
    pub fn new(suit: Suit, rank: u8) -> Option<Self> {
        if !(MIN_RANK..=MAX_RANK).contains(&rank) {
            return None;
        }
        Some(Card {
            suit,
            rank,
            name: RANK_NAMES[(rank - 1) as usize],
        })
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.name, self.suit.name())
    }
}
