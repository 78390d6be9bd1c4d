use crate::game::GameError;
use crate::rng::GameRng;
use crate::simulation::decisions::Policy;
use crate::simulation::engine::{play_game, GameOutcome};
use crate::simulation::stats::AggregateStats;
use indicatif::ProgressBar;
use rayon::prelude::*;

pub const DEFAULT_NUM_GAMES: usize = 10_000;

/// Settings for a batch of independent games
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub games: usize,
    pub policy: Policy,
    /// Game `i` is played with seed `seed + i`; None picks a random base seed
    pub seed: Option<u64>,
    pub parallel: bool,
    /// Narrate every game (forces sequential play)
    pub verbose: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            games: DEFAULT_NUM_GAMES,
            policy: Policy::Naive,
            seed: None,
            parallel: true,
            verbose: false,
        }
    }
}

impl BatchConfig {
    /// The base seed actually used for this batch
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| GameRng::new(None).seed())
    }
}

/// Play `games` games one after another
pub fn run_batch(
    games: usize,
    policy: Policy,
    base_seed: u64,
    verbose: bool,
    progress: Option<&ProgressBar>,
) -> Result<AggregateStats, GameError> {
    let mut stats = AggregateStats::default();
    for i in 0..games {
        let outcome = play_game(policy, GameRng::game_seed(base_seed, i), verbose)?;
        stats.record(&outcome);
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }
    Ok(stats)
}

/// Play `games` games across the rayon pool. Seeds match `run_batch`, so the
/// totals are identical to a sequential run.
pub fn run_batch_parallel(
    games: usize,
    policy: Policy,
    base_seed: u64,
    progress: Option<&ProgressBar>,
) -> Result<AggregateStats, GameError> {
    (0..games)
        .into_par_iter()
        .map(|i| {
            let outcome = play_game(policy, GameRng::game_seed(base_seed, i), false);
            if let Some(pb) = progress {
                pb.inc(1);
            }
            outcome
        })
        .try_fold(AggregateStats::default, record_outcome)
        .try_reduce(AggregateStats::default, |a, b| Ok(a.merge(b)))
}

fn record_outcome(
    mut stats: AggregateStats,
    outcome: Result<GameOutcome, GameError>,
) -> Result<AggregateStats, GameError> {
    stats.record(&outcome?);
    Ok(stats)
}

/// Run a batch as configured, returning the base seed alongside the totals
pub fn run(
    config: &BatchConfig,
    progress: Option<&ProgressBar>,
) -> Result<(u64, AggregateStats), GameError> {
    let seed = config.resolve_seed();
    let stats = if config.parallel && !config.verbose {
        run_batch_parallel(config.games, config.policy, seed, progress)?
    } else {
        run_batch(config.games, config.policy, seed, config.verbose, progress)?
    };
    Ok((seed, stats))
}
