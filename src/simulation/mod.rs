pub mod batch;
pub mod decisions;
pub mod engine;
pub mod stats;

pub use batch::{run, run_batch, run_batch_parallel, BatchConfig};
pub use decisions::Policy;
pub use engine::{play_game, play_out, GameOutcome, GameResultKind};
pub use stats::AggregateStats;
