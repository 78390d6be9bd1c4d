use crate::card::Deck;
use crate::game::{Board, GameError, GameState, GameStatus, DEFAULT_STACK_COUNT};
use crate::rng::GameRng;
use crate::simulation::decisions::Policy;
use serde::Serialize;

/// A game can never take more turns than there are cards in a deck
pub const MAX_TURNS: u32 = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameResultKind {
    Win,
    Loss,
}

/// Result of a single game simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOutcome {
    pub result: GameResultKind,
    /// Zero on a win
    pub cards_left_in_deck: usize,
    pub turns: u32,
}

/// Set up a fresh game: build, shuffle and deal
pub fn new_game(rng: &mut GameRng, verbose: bool) -> Result<GameState, GameError> {
    let mut deck = Deck::standard();
    if verbose {
        println!("Created a game.");
        println!("Shuffling...");
    }
    deck.shuffle(rng);

    let board = Board::deal(&mut deck, DEFAULT_STACK_COUNT)?;
    if verbose {
        println!("Dealing...");
        for (index, stack) in board.stacks().iter().enumerate() {
            println!("  {}: {}", index, stack);
        }
    }
    Ok(GameState::new(deck, board))
}

/// Run a game to completion with a fresh shuffled deck
pub fn play_game(policy: Policy, seed: u64, verbose: bool) -> Result<GameOutcome, GameError> {
    let mut rng = GameRng::new(Some(seed));
    if verbose {
        println!("=== Game Start (seed: {}, policy: {}) ===", seed, policy);
    }
    let state = new_game(&mut rng, verbose)?;
    play_out(state, policy, &mut rng, verbose)
}

/// Keep playing turns on `state` until the deck runs out or the board empties
pub fn play_out(
    mut state: GameState,
    policy: Policy,
    rng: &mut GameRng,
    verbose: bool,
) -> Result<GameOutcome, GameError> {
    while !state.is_over() {
        let choice = policy.choose(&state.board, rng)?;
        if verbose {
            println!("Turn {}: stack {} {}", state.turn + 1, choice.stack, choice.predicate);
        }
        state.play_turn(choice, verbose)?;
    }

    let outcome = match state.status() {
        GameStatus::Won => GameOutcome {
            result: GameResultKind::Win,
            cards_left_in_deck: 0,
            turns: state.turn,
        },
        _ => GameOutcome {
            result: GameResultKind::Loss,
            cards_left_in_deck: state.deck.cards_left(),
            turns: state.turn,
        },
    };

    if verbose {
        match outcome.result {
            GameResultKind::Win => println!("You win!"),
            GameResultKind::Loss => {
                println!("You lose... ({} cards left)", outcome.cards_left_in_deck)
            }
        }
    }
    Ok(outcome)
}
