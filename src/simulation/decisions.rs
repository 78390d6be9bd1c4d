use crate::game::{Board, Choice, GameError, Predicate};
use crate::rng::GameRng;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Strategy used to pick a stack and predicate each turn.
///
/// Every policy bets over/under relative to the middle of the rank range and
/// never bets `Equal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Play the stack with the most extreme top card (best odds)
    Naive,
    /// Play the stack whose top card is nearest the middle (worst odds)
    HardFirst,
    /// Play a uniformly random stack
    Random,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Naive, Policy::HardFirst, Policy::Random];

    pub fn choose(&self, board: &Board, rng: &mut GameRng) -> Result<Choice, GameError> {
        match self {
            Policy::Naive => naive(board),
            Policy::HardFirst => hard_first(board),
            Policy::Random => random(board, rng),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Policy::Naive => "naive",
            Policy::HardFirst => "hard-first",
            Policy::Random => "random",
        };
        write!(f, "{}", s)
    }
}

/// Twice the distance of a rank from the midpoint 7.5, kept integral
fn distance_from_middle(rank: u8) -> u8 {
    (2 * rank as i16 - 15).unsigned_abs() as u8
}

/// Bet lower on high cards (8 and up), higher on everything else
fn over_under(rank: u8) -> Predicate {
    if 2 * rank > 15 {
        Predicate::Lower
    } else {
        Predicate::Higher
    }
}

/// Index of the first stack whose score beats all earlier ones under `better`
fn pick_stack<F>(board: &Board, better: F) -> Result<Choice, GameError>
where
    F: Fn(u8, u8) -> bool,
{
    let ranks = board.top_ranks();
    let mut best: Option<(usize, u8)> = None;
    for (index, rank) in ranks.iter().enumerate() {
        let score = distance_from_middle(*rank);
        match best {
            Some((_, best_score)) if !better(score, best_score) => {}
            _ => best = Some((index, score)),
        }
    }

    let (index, _) = best.ok_or(GameError::EmptyStack)?;
    Ok(Choice::new(index, over_under(ranks[index])))
}

/// Best odds: the top card furthest from the middle, ties to the lowest index
pub fn naive(board: &Board) -> Result<Choice, GameError> {
    pick_stack(board, |score, best| score > best)
}

/// Worst odds: the top card nearest the middle, ties to the lowest index
pub fn hard_first(board: &Board) -> Result<Choice, GameError> {
    pick_stack(board, |score, best| score < best)
}

pub fn random(board: &Board, rng: &mut GameRng) -> Result<Choice, GameError> {
    if board.is_empty() {
        return Err(GameError::EmptyStack);
    }
    let index = rng.random_range(board.len());
    let rank = board.top_card(index)?.rank();
    Ok(Choice::new(index, over_under(rank)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};
    use crate::game::Stack;

    fn board(tops: &[u8]) -> Board {
        Board::from_stacks(
            tops.iter()
                .map(|r| Stack::new(Card::new(Suit::Spades, *r).unwrap()))
                .collect(),
        )
    }

    #[test]
    fn test_naive_picks_most_extreme_card() {
        let choice = naive(&board(&[7, 3, 13, 7])).unwrap();
        assert_eq!(choice, Choice::new(2, Predicate::Lower));
    }

    #[test]
    fn test_naive_equal_distance_goes_to_first_stack() {
        // Two and King are both 5.5 from the middle
        let choice = naive(&board(&[7, 2, 13, 7])).unwrap();
        assert_eq!(choice, Choice::new(1, Predicate::Higher));
    }

    #[test]
    fn test_hard_first_picks_first_middle_card() {
        let choice = hard_first(&board(&[7, 2, 13, 7])).unwrap();
        assert_eq!(choice, Choice::new(0, Predicate::Higher));
    }

    #[test]
    fn test_naive_tie_goes_to_lowest_index() {
        // Ace and King are both 6.5 from the middle
        let choice = naive(&board(&[5, 1, 13])).unwrap();
        assert_eq!(choice, Choice::new(1, Predicate::Higher));
    }

    #[test]
    fn test_hard_first_eight_bets_lower() {
        let choice = hard_first(&board(&[12, 8, 7])).unwrap();
        assert_eq!(choice, Choice::new(1, Predicate::Lower));
    }

    #[test]
    fn test_random_stays_in_bounds_and_never_bets_equal() {
        let b = board(&[1, 4, 7, 8, 10, 13]);
        let mut rng = GameRng::new(Some(5));
        for _ in 0..500 {
            let choice = random(&b, &mut rng).unwrap();
            assert!(choice.stack < b.len());
            assert_ne!(choice.predicate, Predicate::Equal);
            let rank = b.top_card(choice.stack).unwrap().rank();
            assert_eq!(choice.predicate, over_under(rank));
        }
    }

    #[test]
    fn test_random_reaches_every_stack() {
        let b = board(&[2, 3, 4]);
        let mut rng = GameRng::new(Some(11));
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[random(&b, &mut rng).unwrap().stack] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_policies_reject_empty_board() {
        let empty = Board::new();
        let mut rng = GameRng::new(Some(1));
        for policy in Policy::ALL {
            assert_eq!(policy.choose(&empty, &mut rng), Err(GameError::EmptyStack));
        }
    }

    #[test]
    fn test_no_policy_bets_equal() {
        let mut rng = GameRng::new(Some(3));
        for rank in 1..=13 {
            for policy in Policy::ALL {
                let choice = policy.choose(&board(&[rank]), &mut rng).unwrap();
                assert_ne!(choice.predicate, Predicate::Equal);
            }
        }
    }
}
