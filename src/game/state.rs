use crate::card::{Card, Deck};
use crate::game::board::Board;
use crate::game::error::GameError;
use crate::game::rules::{is_valid, Predicate};

/// Where a game stands after the latest turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A stack and the predicate the next card is played against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub stack: usize,
    pub predicate: Predicate,
}

impl Choice {
    pub fn new(stack: usize, predicate: Predicate) -> Self {
        Choice { stack, predicate }
    }
}

/// What happened to the drawn card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResult {
    /// The card beat the stack and now sits on top of it
    Placed { stack: usize, card: Card },
    /// The card lost and the whole stack left the board
    Removed { stack: usize, card: Card, top: Card },
}

/// Complete game state: the draw pile and the board
#[derive(Debug, Clone)]
pub struct GameState {
    pub deck: Deck,
    pub board: Board,
    pub turn: u32,
    status: GameStatus,
}

impl GameState {
    /// Start from an already shuffled deck and dealt board
    pub fn new(deck: Deck, board: Board) -> Self {
        let mut state = GameState {
            deck,
            board,
            turn: 0,
            status: GameStatus::InProgress,
        };
        state.check_terminal();
        state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Resolve one turn against the chosen stack, then re-check terminal conditions
    pub fn play_turn(&mut self, choice: Choice, verbose: bool) -> Result<TurnResult, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let top = *self.board.top_card(choice.stack)?;
        let card = self.deck.draw()?;
        self.turn += 1;

        let result = if is_valid(&card, &top, choice.predicate) {
            self.board.place_on_top(choice.stack, card)?;
            if verbose {
                let stack = self.board.stack(choice.stack)?;
                println!("Placed {} on stack {}: {}", card, choice.stack, stack);
            }
            TurnResult::Placed { stack: choice.stack, card }
        } else {
            let removed = self.board.remove_stack(choice.stack)?;
            if verbose {
                println!(
                    "Unlucky. Card: {} Choice: {} Stack: {}",
                    card, choice.predicate, removed
                );
            }
            TurnResult::Removed { stack: choice.stack, card, top }
        };

        if verbose {
            for (index, stack) in self.board.stacks().iter().enumerate() {
                println!("  {}: {}", index, stack.top());
            }
            println!("Cards left: {}", self.deck.cards_left());
        }

        self.check_terminal();
        Ok(result)
    }

    /// An exhausted deck wins even if the last stack fell on the same turn
    fn check_terminal(&mut self) {
        self.status = if self.deck.is_empty() {
            GameStatus::Won
        } else if self.board.is_empty() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
    }
}
