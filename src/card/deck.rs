use crate::card::types::{Card, Suit, MAX_RANK, MIN_RANK};
use crate::game::error::GameError;
use crate::rng::GameRng;
use std::collections::VecDeque;

pub const STANDARD_DECK_SIZE: usize = 52;

/// Draw pile - cards are drawn from the front
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// All 52 suit/rank combinations, suit-major then rank-minor
    pub fn standard() -> Self {
        let mut cards = VecDeque::with_capacity(STANDARD_DECK_SIZE);
        for suit in Suit::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                if let Some(card) = Card::new(suit, rank) {
                    cards.push_back(card);
                }
            }
        }
        Deck { cards }
    }

    /// Deck with a fixed order, front of the vec drawn first
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck {
            cards: cards.into(),
        }
    }

    /// Shuffle the remaining cards in place
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop_front().ok_or(GameError::EmptyDeck)
    }

    pub fn cards_left(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
