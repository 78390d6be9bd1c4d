use crate::simulation::engine::{GameOutcome, GameResultKind};
use serde::Serialize;

/// Win/loss totals across independent games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub total_games: u64,
    pub wins: u64,
    pub total_cards_left_on_losses: u64,
}

impl AggregateStats {
    pub fn record(&mut self, outcome: &GameOutcome) {
        self.total_games += 1;
        match outcome.result {
            GameResultKind::Win => self.wins += 1,
            GameResultKind::Loss => {
                self.total_cards_left_on_losses += outcome.cards_left_in_deck as u64
            }
        }
    }

    /// Combine two partial tallies; order does not matter
    pub fn merge(self, other: AggregateStats) -> AggregateStats {
        AggregateStats {
            total_games: self.total_games + other.total_games,
            wins: self.wins + other.wins,
            total_cards_left_on_losses: self.total_cards_left_on_losses
                + other.total_cards_left_on_losses,
        }
    }

    pub fn losses(&self) -> u64 {
        self.total_games - self.wins
    }

    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64
        }
    }

    /// None when no game was lost
    pub fn average_cards_left_on_loss(&self) -> Option<f64> {
        match self.losses() {
            0 => None,
            losses => Some(self.total_cards_left_on_losses as f64 / losses as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win() -> GameOutcome {
        GameOutcome { result: GameResultKind::Win, cards_left_in_deck: 0, turns: 43 }
    }

    fn loss(cards_left: usize) -> GameOutcome {
        GameOutcome {
            result: GameResultKind::Loss,
            cards_left_in_deck: cards_left,
            turns: 43 - cards_left as u32,
        }
    }

    #[test]
    fn test_empty_stats() {
        let stats = AggregateStats::default();
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.wins, 0);
        assert_eq!(stats.total_cards_left_on_losses, 0);
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.average_cards_left_on_loss(), None);
    }

    #[test]
    fn test_record_counts_cards_only_on_losses() {
        let mut stats = AggregateStats::default();
        stats.record(&win());
        stats.record(&loss(10));
        stats.record(&loss(20));

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses(), 2);
        assert_eq!(stats.total_cards_left_on_losses, 30);
        assert_eq!(stats.average_cards_left_on_loss(), Some(15.0));
    }

    #[test]
    fn test_all_wins_has_no_loss_average() {
        let mut stats = AggregateStats::default();
        stats.record(&win());
        assert_eq!(stats.win_rate(), 1.0);
        assert_eq!(stats.average_cards_left_on_loss(), None);
    }

    #[test]
    fn test_merge_matches_sequential_record() {
        let outcomes = [win(), loss(4), loss(30), win(), loss(1)];

        let mut all = AggregateStats::default();
        outcomes.iter().for_each(|o| all.record(o));

        let mut left = AggregateStats::default();
        let mut right = AggregateStats::default();
        outcomes[..2].iter().for_each(|o| left.record(o));
        outcomes[2..].iter().for_each(|o| right.record(o));

        assert_eq!(left.merge(right), all);
        assert_eq!(right.merge(left), all);
    }
}
