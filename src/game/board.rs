use crate::card::{Card, Deck};
use crate::game::error::GameError;
use std::fmt;

pub const DEFAULT_STACK_COUNT: usize = 9;

/// A pile on the board. The top card lives at the back of the vec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    cards: Vec<Card>,
}

impl Stack {
    /// Stacks are never empty: one starts with the card dealt onto it
    pub fn new(card: Card) -> Self {
        Stack { cards: vec![card] }
    }

    pub fn top(&self) -> &Card {
        // Non-empty by construction
        &self.cards[self.cards.len() - 1]
    }

    pub fn place_on_top(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a stack built with `Stack::new`
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from top to bottom
    pub fn cards_top_down(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards_top_down().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
        }
        write!(f, "]")
    }
}

/// The active stacks, in order. Stacks only ever disappear after the deal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    stacks: Vec<Stack>,
}

impl Board {
    pub fn new() -> Self {
        Board { stacks: Vec::new() }
    }

    /// Draw `stack_count` cards from the deck, one per new stack
    pub fn deal(deck: &mut Deck, stack_count: usize) -> Result<Self, GameError> {
        let mut stacks = Vec::with_capacity(stack_count);
        for _ in 0..stack_count {
            stacks.push(Stack::new(deck.draw()?));
        }
        Ok(Board { stacks })
    }

    pub fn from_stacks(stacks: Vec<Stack>) -> Self {
        Board { stacks }
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    pub fn stack(&self, index: usize) -> Result<&Stack, GameError> {
        if self.stacks.is_empty() {
            return Err(GameError::EmptyStack);
        }
        self.stacks.get(index).ok_or(GameError::StackOutOfRange {
            index,
            len: self.stacks.len(),
        })
    }

    pub fn top_card(&self, index: usize) -> Result<&Card, GameError> {
        self.stack(index).map(Stack::top)
    }

    pub fn place_on_top(&mut self, index: usize, card: Card) -> Result<(), GameError> {
        let len = self.stacks.len();
        let stack = self
            .stacks
            .get_mut(index)
            .ok_or(GameError::StackOutOfRange { index, len })?;
        stack.place_on_top(card);
        Ok(())
    }

    /// Remove a whole stack; later stacks shift down by one
    pub fn remove_stack(&mut self, index: usize) -> Result<Stack, GameError> {
        if index >= self.stacks.len() {
            return Err(GameError::StackOutOfRange {
                index,
                len: self.stacks.len(),
            });
        }
        Ok(self.stacks.remove(index))
    }

    /// Ranks of every visible top card, in stack order
    pub fn top_ranks(&self) -> Vec<u8> {
        self.stacks.iter().map(|s| s.top().rank()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn card(rank: u8) -> Card {
        Card::new(Suit::Hearts, rank).unwrap()
    }

    #[test]
    fn test_deal_conserves_cards() {
        let mut deck = Deck::standard();
        let board = Board::deal(&mut deck, DEFAULT_STACK_COUNT).unwrap();

        assert_eq!(deck.cards_left(), 52 - 9);
        assert_eq!(board.len(), 9);
        assert!(board.stacks().iter().all(|s| s.len() == 1));
    }

    #[test]
    fn test_deal_from_short_deck_fails() {
        let mut deck = Deck::from_cards(vec![card(3), card(4)]);
        assert_eq!(Board::deal(&mut deck, 3), Err(GameError::EmptyDeck));
    }

    #[test]
    fn test_place_on_top_changes_top_card() {
        let mut board = Board::from_stacks(vec![Stack::new(card(4))]);
        board.place_on_top(0, card(9)).unwrap();

        assert_eq!(board.top_card(0).unwrap().rank(), 9);
        assert_eq!(board.stack(0).unwrap().len(), 2);
        assert!(!board.stack(0).unwrap().is_empty());
        let ranks: Vec<u8> = board.stack(0).unwrap().cards_top_down().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![9, 4]);
    }

    #[test]
    fn test_remove_stack_shifts_indices() {
        let mut board = Board::from_stacks(vec![
            Stack::new(card(1)),
            Stack::new(card(2)),
            Stack::new(card(3)),
        ]);
        let removed = board.remove_stack(1).unwrap();

        assert_eq!(removed.top().rank(), 2);
        assert_eq!(board.top_ranks(), vec![1, 3]);
    }

    #[test]
    fn test_top_card_on_empty_board() {
        let board = Board::new();
        assert_eq!(board.top_card(0), Err(GameError::EmptyStack));
    }

    #[test]
    fn test_out_of_range_index() {
        let mut board = Board::from_stacks(vec![Stack::new(card(5))]);
        assert_eq!(
            board.top_card(2),
            Err(GameError::StackOutOfRange { index: 2, len: 1 })
        );
        assert!(board.remove_stack(1).is_err());
        assert!(board.place_on_top(1, card(6)).is_err());
    }

    #[test]
    fn test_stack_display_is_top_first() {
        let mut stack = Stack::new(card(1));
        stack.place_on_top(card(13));
        assert_eq!(stack.to_string(), "[King of Hearts, Ace of Hearts]");
    }
}
